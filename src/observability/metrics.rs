//! Metrics collection.
//!
//! # Metrics
//! - `natiq_endpoint_up` (gauge): 1=up, 0=down, per endpoint
//! - `natiq_probe_latency_ms` (histogram): probe round-trip time, per endpoint
//! - `natiq_endpoint_switches_total` (counter): active endpoint changes
//! - `natiq_requests_total` (counter): API requests by method and status
//!
//! # Design Decisions
//! - Only the `metrics` facade is used; the embedding application picks
//!   a recorder. Without one every call here is a no-op.

use crate::connection::{Endpoint, Health};

/// Record the reading of a freshly probed endpoint.
pub fn record_probe(endpoint: &Endpoint) {
    let address = endpoint.address().to_string();
    let up = if endpoint.health() == Health::Up { 1.0 } else { 0.0 };
    metrics::gauge!("natiq_endpoint_up", "endpoint" => address.clone()).set(up);

    if let Some(latency) = endpoint.latency() {
        metrics::histogram!("natiq_probe_latency_ms", "endpoint" => address)
            .record(latency.as_secs_f64() * 1000.0);
    }
}

/// Record a change of active endpoint.
pub fn record_switch() {
    metrics::counter!("natiq_endpoint_switches_total").increment(1);
}

/// Record the outcome of an API request.
pub fn record_request(method: &str, status: u16) {
    metrics::counter!(
        "natiq_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
