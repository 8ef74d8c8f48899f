//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Reject file name patterns that would escape the data directory
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("query path '{0}' must be a static path like '/f3/api/okulno'")]
    QueryPath(String),

    #[error("file prefix must not be empty or contain path separators")]
    FilePrefix,

    #[error("file extension '{0}' must be non-empty without a leading dot")]
    FileExtension(String),

    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

/// Absolute, non-root path with no empty segments and no router capture or
/// wildcard syntax.
fn is_static_path(path: &str) -> bool {
    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };
    !rest.is_empty()
        && rest
            .split('/')
            .all(|segment| !segment.is_empty() && !segment.contains(['{', '}', ':', '*']))
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let path = &config.api.query_path;
    if !is_static_path(path) {
        errors.push(ValidationError::QueryPath(path.clone()));
    }

    let prefix = &config.data.file_prefix;
    if prefix.is_empty() || prefix.contains(['/', '\\']) {
        errors.push(ValidationError::FilePrefix);
    }

    let ext = &config.data.file_extension;
    if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
        errors.push(ValidationError::FileExtension(ext.clone()));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
