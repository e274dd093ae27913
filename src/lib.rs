//! Client library for the Natiq Quran API.
//!
//! ```text
//!   resources (auth, surahs, ayahs, ...)
//!        │
//!        ▼
//!   client::ApiClient ──reads──▶ connection::EndpointSelector
//!        │                           │ probe_all / select_best
//!        ▼                           ▼
//!   reqwest (HTTP)              candidate endpoints
//! ```

pub mod client;
pub mod config;
pub mod connection;
pub mod observability;
pub mod resources;

pub use client::{ApiClient, ClientError};
pub use config::ClientConfig;
pub use connection::{Endpoint, EndpointSelector, Health, Selection};
