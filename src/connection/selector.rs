//! Best-endpoint selection.
//!
//! # Responsibilities
//! - Own the fixed pool of candidate endpoints
//! - Probe every candidate and publish the round's readings
//! - Choose the lowest-latency healthy candidate as the active endpoint
//!
//! # State
//! ```text
//! per endpoint:   Unknown → Up | Down,  Up ↔ Down on every re-probe
//! active:         first candidate at construction,
//!                 replaced only by select_best() with an Up candidate
//! ```
//!
//! # Design Decisions
//! - Probes run concurrently; each one fills only its own copy of its
//!   endpoint record, and the joined round is published with one atomic
//!   store. `select_best()` therefore always reads a complete round.
//! - The active endpoint lives behind an `ArcSwap` so requests in flight
//!   read either the old or the new address, never a mix.
//! - An all-down pool is reported as `Selection::NoEligible` and leaves the
//!   active endpoint untouched.

use std::sync::Arc;

use arc_swap::ArcSwap;
use futures_util::future::join_all;
use thiserror::Error;
use url::Url;

use crate::connection::endpoint::Endpoint;
use crate::connection::probe::{ProbeOutcome, Prober};
use crate::observability::metrics;

/// Errors raised while building a selector.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("endpoint pool is empty")]
    EmptyPool,

    #[error("invalid endpoint address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: url::ParseError,
    },

    #[error("endpoint '{0}' must use http or https")]
    UnsupportedScheme(String),
}

/// What a call to [`EndpointSelector::select_best`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A different candidate became active.
    Switched { from: Url, to: Url },
    /// The best candidate was already active.
    Unchanged(Url),
    /// No candidate is up; the active endpoint was kept.
    NoEligible,
}

impl Selection {
    pub fn changed(&self) -> bool {
        matches!(self, Selection::Switched { .. })
    }
}

#[derive(Debug)]
struct Active {
    index: usize,
    address: Url,
}

/// Keeps a pool of candidate hosts and the one currently serving requests.
#[derive(Debug)]
pub struct EndpointSelector {
    pool: ArcSwap<Vec<Endpoint>>,
    active: ArcSwap<Active>,
    prober: Prober,
}

impl EndpointSelector {
    /// Build a selector over `addresses`, in configuration order.
    ///
    /// The first address is active until a selection round says otherwise.
    pub fn new<I, S>(addresses: I, prober: Prober) -> Result<Self, ConnectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool = Vec::new();
        for address in addresses {
            let address = address.as_ref();
            let url = Url::parse(address).map_err(|source| ConnectionError::InvalidAddress {
                address: address.to_string(),
                source,
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConnectionError::UnsupportedScheme(address.to_string()));
            }
            pool.push(Endpoint::new(url));
        }

        let first = pool.first().ok_or(ConnectionError::EmptyPool)?;
        let active = Active {
            index: 0,
            address: first.address().clone(),
        };

        tracing::debug!(
            candidates = pool.len(),
            active = %active.address,
            "Endpoint selector created"
        );

        Ok(Self {
            pool: ArcSwap::from_pointee(pool),
            active: ArcSwap::from_pointee(active),
            prober,
        })
    }

    /// Probe every candidate once and record health and latency.
    ///
    /// Individual failures mark that candidate down and never abort the
    /// round.
    pub async fn probe_all(&self) {
        let snapshot = self.pool.load_full();
        let outcomes = join_all(
            snapshot
                .iter()
                .map(|endpoint| self.prober.probe(endpoint.address())),
        )
        .await;

        self.record_round(outcomes);
    }

    /// Publish one round of probe outcomes, index-aligned with the pool.
    pub(crate) fn record_round(&self, outcomes: Vec<ProbeOutcome>) {
        let snapshot = self.pool.load_full();
        let round: Vec<Endpoint> = snapshot
            .iter()
            .zip(outcomes)
            .map(|(endpoint, outcome)| {
                let mut endpoint = endpoint.clone();
                match outcome {
                    ProbeOutcome::Up(latency) => endpoint.mark_up(latency),
                    ProbeOutcome::Down(failure) => endpoint.mark_down(failure),
                }
                metrics::record_probe(&endpoint);
                endpoint
            })
            .collect();

        let up = round.iter().filter(|e| e.is_eligible()).count();
        tracing::info!(up, down = round.len() - up, "Probe round complete");

        self.pool.store(Arc::new(round));
    }

    /// Make the lowest-latency healthy candidate active.
    ///
    /// Ties go to the candidate configured first. With no healthy
    /// candidate this is a no-op that returns [`Selection::NoEligible`].
    pub fn select_best(&self) -> Selection {
        let pool = self.pool.load();
        let best = pool
            .iter()
            .enumerate()
            .filter(|(_, endpoint)| endpoint.is_eligible())
            .min_by_key(|(_, endpoint)| endpoint.latency());

        let Some((index, endpoint)) = best else {
            tracing::warn!(
                active = %self.active.load().address,
                "No healthy endpoint available, keeping current selection"
            );
            return Selection::NoEligible;
        };

        let current = self.active.load();
        if current.index == index {
            return Selection::Unchanged(current.address.clone());
        }

        let next = Active {
            index,
            address: endpoint.address().clone(),
        };
        let selection = Selection::Switched {
            from: current.address.clone(),
            to: next.address.clone(),
        };
        self.active.store(Arc::new(next));

        tracing::info!(
            from = %current.address,
            to = %endpoint.address(),
            latency_ms = endpoint.latency_ms(),
            "Switched active endpoint"
        );
        metrics::record_switch();

        selection
    }

    /// Run one selection round: probe everything, then select.
    pub async fn refresh(&self) -> Selection {
        self.probe_all().await;
        self.select_best()
    }

    /// Base address of the active endpoint.
    pub fn active_endpoint(&self) -> Url {
        self.active.load().address.clone()
    }

    /// The active endpoint with its latest reading.
    pub fn active(&self) -> Endpoint {
        let index = self.active.load().index;
        self.pool.load()[index].clone()
    }

    /// Snapshot of every candidate, in configuration order.
    pub fn endpoints(&self) -> Vec<Endpoint> {
        Vec::clone(&self.pool.load())
    }

    pub fn prober(&self) -> &Prober {
        &self.prober
    }
}
