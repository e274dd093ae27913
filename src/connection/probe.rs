//! Endpoint probing.
//!
//! # Responsibilities
//! - Issue one GET against a candidate's probe path
//! - Time the round trip from just before send to response headers
//! - Classify the outcome as up (status 200) or down (anything else)
//!
//! # Design Decisions
//! - No retries: one failed attempt marks the candidate down for the round
//! - Every probe is bounded by an explicit timeout so one unreachable host
//!   cannot stall a whole round

use std::fmt;
use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use tokio::time;
use url::Url;

use crate::config::ProbeConfig;
use crate::connection::endpoint::join_path;

/// Why a probe marked its endpoint down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// The endpoint answered with something other than 200.
    Status(u16),
    /// Connection refused, DNS failure, TLS error, and similar.
    Connection(String),
    /// No response within the probe timeout.
    Timeout,
    /// The probe URL could not be built from the endpoint address.
    InvalidUrl(String),
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::Status(code) => write!(f, "status {code}"),
            ProbeFailure::Connection(e) => write!(f, "connection error: {e}"),
            ProbeFailure::Timeout => f.write_str("timed out"),
            ProbeFailure::InvalidUrl(e) => write!(f, "invalid probe URL: {e}"),
        }
    }
}

/// Result of probing one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Up(Duration),
    Down(ProbeFailure),
}

/// Issues probe requests with a shared HTTP client.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    config: ProbeConfig,
}

impl Prober {
    pub fn new(client: Client, config: ProbeConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Probe a single endpoint address.
    pub async fn probe(&self, address: &Url) -> ProbeOutcome {
        let target = match join_path(address, &self.config.path) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(endpoint = %address, error = %e, "Failed to build probe URL");
                return ProbeOutcome::Down(ProbeFailure::InvalidUrl(e.to_string()));
            }
        };

        let request = self
            .client
            .get(target)
            .header(reqwest::header::USER_AGENT, "natiq-client-probe");

        let begin = Instant::now();
        let outcome = time::timeout(self.config.timeout(), request.send()).await;
        let elapsed = begin.elapsed();

        match outcome {
            Ok(Ok(response)) if response.status() == StatusCode::OK => {
                tracing::debug!(
                    endpoint = %address,
                    latency_ms = elapsed.as_millis() as u64,
                    "Probe succeeded"
                );
                ProbeOutcome::Up(elapsed)
            }
            Ok(Ok(response)) => {
                tracing::warn!(endpoint = %address, status = %response.status(), "Probe failed: non-200 status");
                ProbeOutcome::Down(ProbeFailure::Status(response.status().as_u16()))
            }
            Ok(Err(e)) => {
                tracing::warn!(endpoint = %address, error = %e, "Probe failed: connection error");
                ProbeOutcome::Down(ProbeFailure::Connection(e.to_string()))
            }
            Err(_) => {
                tracing::warn!(
                    endpoint = %address,
                    timeout_ms = self.config.timeout_ms,
                    "Probe failed: timeout"
                );
                ProbeOutcome::Down(ProbeFailure::Timeout)
            }
        }
    }
}
