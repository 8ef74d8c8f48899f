//! Request handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::config::ChannelInfo;
use crate::http::request::request_id;
use crate::http::response::{ApiError, SearchResponse};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::query::SearchQuery;

/// `GET /`: channel metadata only.
pub async fn channel_info(State(state): State<AppState>) -> Json<ChannelInfo> {
    metrics::record_request("root", StatusCode::OK.as_u16(), Instant::now());
    Json(ChannelInfo::clone(&state.channel))
}

/// `GET <query_path>`: load the table, filter it, report matches.
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let start = Instant::now();
    let query = SearchQuery::from_pairs(params);
    let request_id = request_id(&headers).to_string();

    tracing::debug!(request_id = %request_id, query = ?query, "Search request");

    let source = Arc::clone(&state.source);
    let loaded = match tokio::task::spawn_blocking(move || source.load()).await {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Record load task failed");
            metrics::record_load_error("task");
            return respond_error(&state, ApiError::Unreadable, start);
        }
    };

    let table = match loaded {
        Ok(table) => table,
        Err(e) if e.is_no_data() => {
            tracing::warn!(request_id = %request_id, error = %e, "No record files");
            metrics::record_load_error(e.kind());
            return respond_error(&state, ApiError::NoData, start);
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Failed to load records");
            metrics::record_load_error(e.kind());
            return respond_error(&state, ApiError::Unreadable, start);
        }
    };

    if table.is_empty() {
        tracing::warn!(request_id = %request_id, "Record files contain no rows");
        metrics::record_load_error("empty");
        return respond_error(&state, ApiError::NoData, start);
    }

    let results = query.filter(&table);
    tracing::info!(
        request_id = %request_id,
        rows = table.len(),
        matches = results.len(),
        "Search completed"
    );
    metrics::record_results(results.len());

    let body = SearchResponse::new(&state.channel, &query, results);
    let response = (StatusCode::OK, Json(body)).into_response();
    metrics::record_request("search", StatusCode::OK.as_u16(), start);
    response
}

fn respond_error(state: &AppState, error: ApiError, start: Instant) -> Response {
    metrics::record_request("search", error.status_code().as_u16(), start);
    error.to_response(&state.channel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;

    use ::metrics::{
        Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
    };

    use crate::config::ServiceConfig;

    /// Remembers every counter touched, as `name{label=value,...}`.
    #[derive(Default)]
    struct CountingRecorder {
        counters: Mutex<Vec<String>>,
    }

    impl CountingRecorder {
        fn counters(&self) -> Vec<String> {
            self.counters.lock().unwrap().clone()
        }
    }

    impl Recorder for CountingRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            let labels: Vec<String> = key
                .labels()
                .map(|l| format!("{}={}", l.key(), l.value()))
                .collect();
            self.counters
                .lock()
                .unwrap()
                .push(format!("{}{{{}}}", key.name(), labels.join(",")));
            Counter::noop()
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }

    fn state_for(dir: &std::path::Path) -> AppState {
        let mut config = ServiceConfig::default();
        config.data.directory = dir.to_string_lossy().into_owned();
        AppState::from_config(&config)
    }

    #[tokio::test]
    async fn test_root_request_is_counted() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = CountingRecorder::default();
        let _guard = ::metrics::set_default_local_recorder(&recorder);

        let Json(info) = channel_info(State(state_for(dir.path()))).await;
        assert_eq!(info, ChannelInfo::default());
        assert_eq!(
            recorder.counters(),
            vec!["okulno_requests_total{endpoint=root,status=200}".to_string()]
        );
    }

    #[tokio::test]
    async fn test_rowless_files_count_as_load_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("okulno.csv"), "").unwrap();
        let recorder = CountingRecorder::default();
        let _guard = ::metrics::set_default_local_recorder(&recorder);

        let response = search(
            State(state_for(dir.path())),
            HeaderMap::new(),
            Query(Vec::new()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            recorder.counters(),
            vec![
                "okulno_load_errors_total{kind=empty}".to_string(),
                "okulno_requests_total{endpoint=search,status=404}".to_string(),
            ]
        );
    }
}
