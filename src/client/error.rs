//! Client error types.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::connection::ConnectionError;

/// Error envelope the API returns on failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub error_name: String,
    pub error: String,
    pub detail: String,
}

/// Errors surfaced by [`crate::client::ApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("connection setup failed: {0}")]
    Connection(#[from] ConnectionError),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API returned {status}: {}", describe(.body.as_ref(), .raw))]
    Api {
        status: StatusCode,
        body: Option<ApiErrorBody>,
        raw: String,
    },

    #[error("failed to encode form field '{field}': {source}")]
    Encode {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode response ({status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

fn describe<'a>(body: Option<&'a ApiErrorBody>, raw: &'a str) -> &'a str {
    match body {
        Some(body) if !body.detail.is_empty() => &body.detail,
        Some(body) if !body.error.is_empty() => &body.error,
        _ => raw,
    }
}

impl ClientError {
    /// Build an API error from a non-success status and raw response text.
    pub fn from_status(status: StatusCode, raw: String) -> Self {
        let body = serde_json::from_str::<ApiErrorBody>(&raw)
            .ok()
            .filter(|b| !(b.error_name.is_empty() && b.error.is_empty() && b.detail.is_empty()));
        ClientError::Api { status, body, raw }
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } | ClientError::Decode { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }
}
