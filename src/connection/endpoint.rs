//! Endpoint abstraction.
//!
//! # Responsibilities
//! - Represent a single candidate API host
//! - Carry the health and latency observed by the last probe
//!
//! An `Endpoint` is a plain value. The selector publishes whole rounds of
//! them at once, so a reader never sees health from one probe paired with
//! latency from another.

use std::fmt;
use std::time::Duration;
use url::Url;

use crate::connection::probe::ProbeFailure;

/// Health state of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Health {
    /// Never probed.
    #[default]
    Unknown,
    /// Last probe answered 200.
    Up,
    /// Last probe failed (non-200, connection error, or timeout).
    Down,
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Health::Unknown => "unknown",
            Health::Up => "up",
            Health::Down => "down",
        };
        f.write_str(s)
    }
}

/// One candidate backend host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    address: Url,
    health: Health,
    latency: Option<Duration>,
    last_failure: Option<ProbeFailure>,
}

impl Endpoint {
    /// Create an unprobed endpoint.
    pub fn new(address: Url) -> Self {
        Self {
            address,
            health: Health::Unknown,
            latency: None,
            last_failure: None,
        }
    }

    /// Absolute base URL of this endpoint.
    pub fn address(&self) -> &Url {
        &self.address
    }

    pub fn health(&self) -> Health {
        self.health
    }

    /// Round-trip time of the last successful probe.
    pub fn latency(&self) -> Option<Duration> {
        self.latency
    }

    pub fn latency_ms(&self) -> Option<u64> {
        self.latency.map(|d| d.as_millis() as u64)
    }

    /// Why the last probe failed. `None` unless the endpoint is down.
    pub fn last_failure(&self) -> Option<&ProbeFailure> {
        self.last_failure.as_ref()
    }

    /// Record a successful probe. Overwrites any earlier reading.
    pub fn mark_up(&mut self, latency: Duration) {
        self.health = Health::Up;
        self.latency = Some(latency);
        self.last_failure = None;
    }

    /// Record a failed probe. A stale latency is discarded so a down
    /// endpoint can never win a latency comparison.
    pub fn mark_down(&mut self, failure: ProbeFailure) {
        self.health = Health::Down;
        self.latency = None;
        self.last_failure = Some(failure);
    }

    /// Eligible for selection: probed up with a measured latency.
    pub fn is_eligible(&self) -> bool {
        self.health == Health::Up && self.latency.is_some()
    }
}

/// Resolve `path` beneath `base`, keeping any path prefix on the base.
///
/// `https://host/v1` joined with `/surahs/` yields `https://host/v1/surahs/`.
pub fn join_path(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path.trim_start_matches('/'))
}
