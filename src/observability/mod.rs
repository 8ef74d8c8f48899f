//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the record source produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID is attached to every HTTP span
//! - Metrics are cheap and disabled by default

pub mod logging;
pub mod metrics;
