//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the query service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Public API surface (query path, CORS).
    pub api: ApiConfig,

    /// Static channel metadata attached to every response.
    pub channel: ChannelInfo,

    /// Where the record files live and how they are named.
    pub data: DataConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// HTTP API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Path of the search endpoint.
    pub query_path: String,

    /// Allow cross-origin requests from any origin.
    pub cors_enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            query_path: "/f3/api/okulno".to_string(),
            cors_enabled: true,
        }
    }
}

/// Channel metadata echoed at the top level of every JSON body.
///
/// The config file uses English keys; responses use the published
/// `kanal` / `kurucu` / `api` names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChannelInfo {
    #[serde(rename(serialize = "kanal"))]
    pub channel: String,

    #[serde(rename(serialize = "kurucu"))]
    pub founder: String,

    pub api: String,
}

impl Default for ChannelInfo {
    fn default() -> Self {
        Self {
            channel: "@f3system".to_string(),
            founder: "@sukazatkinis".to_string(),
            api: "okulno".to_string(),
        }
    }
}

/// Record source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory scanned for record files.
    pub directory: String,

    /// File name prefix (`okulno` matches `okulno1.csv`, `okulno_2024.csv`, ...).
    pub file_prefix: String,

    /// File extension without the leading dot.
    pub file_extension: String,

    /// Reuse the parsed table while no source file changes.
    pub cache_enabled: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            file_prefix: "okulno".to_string(),
            file_extension: "csv".to_string(),
            cache_enabled: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
