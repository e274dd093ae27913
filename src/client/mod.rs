//! HTTP transport for the API.
//!
//! # Data Flow
//! ```text
//! resource method (resources/*)
//!     → ApiClient::request(method, path)
//!         → active endpoint from EndpointSelector
//!         → Authorization + x-request-id headers
//!     → ApiClient::execute
//!         → 2xx: JSON decode into the caller's type
//!         → otherwise: ClientError::Api with the parsed error envelope
//! ```

pub mod api;
pub mod error;

pub use api::ApiClient;
pub use error::{ApiErrorBody, ClientError};
