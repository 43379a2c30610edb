//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_address_resolutions_total` (counter): resolutions by outcome
//! - `gateway_requests_total` (counter): requests by method, status
//! - `gateway_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Without an installed recorder every call is a no-op
//! - The Prometheus exporter is opt-in via config

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::routing::AddressError;

/// Outcome label for a successful resolution.
pub const OUTCOME_RESOLVED: &str = "resolved";

/// Install the Prometheus recorder and its HTTP scrape listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Count one resolution attempt.
pub fn record_resolution(result: Result<(), &AddressError>) {
    let outcome = match result {
        Ok(()) => OUTCOME_RESOLVED,
        Err(e) => e.kind(),
    };
    counter!("gateway_address_resolutions_total", "outcome" => outcome).increment(1);
}

/// Count one finished request and its latency.
pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("gateway_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}
