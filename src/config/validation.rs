//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every endpoint is an absolute http(s) URL
//! - Validate value ranges (timeouts > 0, probe path shape)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the client

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least one endpoint must be configured")]
    NoEndpoints,

    #[error("endpoint '{address}' is not a valid URL: {reason}")]
    InvalidEndpoint { address: String, reason: String },

    #[error("endpoint '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("probe path '{0}' must start with '/'")]
    RelativeProbePath(String),

    #[error("auth scheme must not be empty when a token is set")]
    EmptyAuthScheme,
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.endpoints.is_empty() {
        errors.push(ValidationError::NoEndpoints);
    }

    for address in &config.endpoints {
        match Url::parse(address) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(_) => errors.push(ValidationError::UnsupportedScheme(address.clone())),
            Err(e) => errors.push(ValidationError::InvalidEndpoint {
                address: address.clone(),
                reason: e.to_string(),
            }),
        }
    }

    if config.probe.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("probe.timeout_ms"));
    }
    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    if !config.probe.path.starts_with('/') {
        errors.push(ValidationError::RelativeProbePath(config.probe.path.clone()));
    }

    if config.auth.token.is_some() && config.auth.scheme.trim().is_empty() {
        errors.push(ValidationError::EmptyAuthScheme);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
