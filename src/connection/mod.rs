//! Connection subsystem: candidate endpoints and best-endpoint selection.
//!
//! # Data Flow
//! ```text
//! ClientConfig.endpoints
//!     → selector.rs (fixed pool, first entry active)
//!
//! Selection round (caller driven):
//!     probe_all()
//!         → probe.rs (GET probe path on every candidate, concurrently)
//!         → endpoint.rs (Up + latency | Down, one record per candidate)
//!         → whole round published atomically
//!     select_best()
//!         → lowest latency among Up candidates
//!         → atomic swap of the active endpoint
//!
//! Every API request:
//!     client reads active_endpoint() → resolves its path against it
//! ```
//!
//! # Design Decisions
//! - No background timer; callers decide when to run a round
//! - A failed probe is local to its endpoint and never surfaces as an error
//! - Selection never moves to a down endpoint

pub mod endpoint;
pub mod probe;
pub mod selector;

pub use endpoint::{join_path, Endpoint, Health};
pub use probe::{ProbeFailure, ProbeOutcome, Prober};
pub use selector::{ConnectionError, EndpointSelector, Selection};
