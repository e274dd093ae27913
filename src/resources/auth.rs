//! `/auth/` endpoints.
//!
//! Login hands back a token; attaching it to later requests is up to the
//! caller via [`ApiClient::with_token`].

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ClientError};
use crate::resources::Record;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expiry: String,
    #[serde(default)]
    pub user: Record,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    #[serde(default)]
    pub user: Record,
}

pub struct Auth<'a> {
    client: &'a ApiClient,
}

impl<'a> Auth<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login/`
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.client.post("/auth/login/", request).await
    }

    /// `POST /auth/logout/` (invalidates the current token)
    pub async fn logout(&self) -> Result<(), ClientError> {
        let _: Record = self.client.post_empty("/auth/logout/").await?;
        Ok(())
    }

    /// `POST /auth/logoutall/` (invalidates every token of the account)
    pub async fn logout_all(&self) -> Result<(), ClientError> {
        let _: Record = self.client.post_empty("/auth/logoutall/").await?;
        Ok(())
    }

    /// `POST /auth/register/`
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ClientError> {
        self.client.post("/auth/register/", request).await
    }
}
