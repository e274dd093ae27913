//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or CLI flags
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → consumed once by ApiClient / EndpointSelector construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the candidate pool is fixed for the
//!   lifetime of a client
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AuthConfig, ClientConfig, ObservabilityConfig, ProbeConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
