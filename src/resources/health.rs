//! `/health/` endpoint.

use crate::client::{ApiClient, ClientError};
use crate::resources::Record;

/// API-level health report. Distinct from endpoint probing, which only
/// checks reachability of each candidate's root path.
pub struct HealthCheck<'a> {
    client: &'a ApiClient,
}

impl<'a> HealthCheck<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /health/`
    pub async fn check(&self) -> Result<Record, ClientError> {
        self.client.get("/health/").await
    }
}
