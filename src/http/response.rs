//! JSON response envelopes.
//!
//! Every body starts with the channel metadata (`kanal`, `kurucu`, `api`),
//! flattened into the top level.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::config::ChannelInfo;
use crate::query::SearchQuery;
use crate::records::Record;

pub const NO_DATA_MESSAGE: &str = "Veri bulunamadı";
pub const UNREADABLE_MESSAGE: &str = "Veri okunamadı";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Error,
}

/// Body of a successful search.
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    #[serde(flatten)]
    pub channel: &'a ChannelInfo,
    pub status: Outcome,
    pub query: &'a SearchQuery,
    pub total_results: usize,
    pub results: Vec<&'a Record>,
}

impl<'a> SearchResponse<'a> {
    pub fn new(channel: &'a ChannelInfo, query: &'a SearchQuery, results: Vec<&'a Record>) -> Self {
        Self {
            channel,
            status: Outcome::Success,
            query,
            total_results: results.len(),
            results,
        }
    }
}

/// Body of a failed search.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    #[serde(flatten)]
    pub channel: &'a ChannelInfo,
    pub status: Outcome,
    pub message: &'static str,
}

/// Failures the search endpoint reports to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// No record files, or files without any rows.
    NoData,
    /// Record files exist but could not be read.
    Unreadable,
}

impl ApiError {
    pub fn status_code(self) -> StatusCode {
        match self {
            ApiError::NoData => StatusCode::NOT_FOUND,
            ApiError::Unreadable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ApiError::NoData => NO_DATA_MESSAGE,
            ApiError::Unreadable => UNREADABLE_MESSAGE,
        }
    }

    pub fn to_response(self, channel: &ChannelInfo) -> Response {
        let body = ErrorResponse {
            channel,
            status: Outcome::Error,
            message: self.message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
