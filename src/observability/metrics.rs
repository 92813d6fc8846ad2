//! Metrics collection and exposition.
//!
//! # Metrics
//! - `beer_proxy_requests_total` (counter): inbound requests by route, status
//! - `beer_proxy_request_duration_seconds` (histogram): inbound latency
//! - `beer_proxy_upstream_requests_total` (counter): upstream calls by category, outcome
//! - `beer_proxy_upstream_duration_seconds` (histogram): upstream latency

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter")
        }
    }
}

/// Record a completed inbound request.
pub fn record_request(route: &'static str, status: u16, start: Instant) {
    let labels = [("route", route.to_string()), ("status", status.to_string())];
    counter!("beer_proxy_requests_total", &labels).increment(1);
    histogram!("beer_proxy_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Record one upstream call; `outcome` is the HTTP status or `"error"`.
pub fn record_upstream(category: &'static str, outcome: &str, start: Instant) {
    let labels = [("category", category.to_string()), ("outcome", outcome.to_string())];
    counter!("beer_proxy_upstream_requests_total", &labels).increment(1);
    histogram!("beer_proxy_upstream_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}
