//! Metrics collection and exposition.
//!
//! # Metrics
//! - `matchday_page_views_total` (counter): page renders by view
//! - `matchday_requests_total` (counter): HTTP requests by view, status
//! - `matchday_request_duration_seconds` (histogram): page latency
//! - `matchday_table_refresh_total` (counter): feed refreshes by outcome
//! - `matchday_table_rows` (gauge): teams in the current snapshot

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::views::ViewDescriptor;

/// Install the Prometheus recorder and its HTTP scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a mounted page.
pub fn record_page_view(view: ViewDescriptor) {
    counter!("matchday_page_views_total", "view" => view.as_str()).increment(1);
}

/// Record a completed HTTP request.
pub fn record_request(label: &'static str, status: u16, start: Instant) {
    counter!(
        "matchday_requests_total",
        "view" => label,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("matchday_request_duration_seconds", "view" => label)
        .record(start.elapsed().as_secs_f64());
}

/// Record a table refresh outcome (`success`, `retry`, `failure`).
pub fn record_refresh(outcome: &'static str) {
    counter!("matchday_table_refresh_total", "outcome" => outcome).increment(1);
}

/// Record the size of the published table.
pub fn record_table_rows(rows: usize) {
    gauge!("matchday_table_rows").set(rows as f64);
}
