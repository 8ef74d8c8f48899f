//! Metrics collection and exposition.
//!
//! # Metrics
//! - `okulno_requests_total` (counter): requests by endpoint and status
//! - `okulno_request_duration_seconds` (histogram): handler latency
//! - `okulno_query_results` (histogram): records returned per search
//! - `okulno_load_errors_total` (counter): failed table loads by kind
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

pub fn record_request(endpoint: &'static str, status: u16, start: Instant) {
    counter!(
        "okulno_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("okulno_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_results(count: usize) {
    histogram!("okulno_query_results").record(count as f64);
}

pub fn record_load_error(kind: &'static str) {
    counter!("okulno_load_errors_total", "kind" => kind).increment(1);
}
