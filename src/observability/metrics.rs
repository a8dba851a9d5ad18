//! Metrics collection and exposition.
//!
//! # Metrics
//! - `cookie_parser_requests_total` (counter): requests whose cookies were parsed
//! - `cookie_parser_signed_total` (counter): signed cookies by `outcome`
//!   (`verified`, `rejected`)

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::cookie::SignedValue;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a request whose cookies were parsed.
pub fn record_request() {
    ::metrics::counter!("cookie_parser_requests_total").increment(1);
}

/// Record the verification outcome of a signed cookie.
pub fn record_signed_cookie(value: &SignedValue) {
    let outcome = if value.is_rejected() { "rejected" } else { "verified" };
    ::metrics::counter!("cookie_parser_signed_total", "outcome" => outcome).increment(1);
}
