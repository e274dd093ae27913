//! `/profile/` endpoints.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ClientError};

/// Public profile of an account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileData {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

pub struct Profile<'a> {
    client: &'a ApiClient,
}

impl<'a> Profile<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /profile/me/`
    pub async fn me(&self) -> Result<ProfileData, ClientError> {
        self.client.get("/profile/me/").await
    }

    /// `POST /profile/me/`
    pub async fn update_me(&self, profile: &ProfileData) -> Result<ProfileData, ClientError> {
        self.client.post("/profile/me/", profile).await
    }

    /// `GET /profile/{uuid}/`
    pub async fn retrieve(&self, uuid: &str) -> Result<ProfileData, ClientError> {
        self.client.get(&format!("/profile/{uuid}/")).await
    }
}
