//! Read-only student record query API.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod query;
pub mod records;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
