//! API client bound to the active endpoint.
//!
//! # Responsibilities
//! - Resolve every request path against the currently active endpoint
//! - Attach the `Authorization` header when a token is configured
//! - Tag each request with an `x-request-id` for server-side correlation
//! - Decode JSON responses and map failures to [`ClientError`]
//! - Send file uploads as `multipart/form-data`
//!
//! # Design Decisions
//! - No retries: a failed request is returned unchanged to the caller
//! - The base URL is read at send time, so a selection round takes effect
//!   for the very next request

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::client::error::ClientError;
use crate::config::{validate_config, AuthConfig, ClientConfig, ConfigError};
use crate::connection::{join_path, EndpointSelector, Prober, Selection};
use crate::observability::metrics;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Typed access to the REST API.
///
/// Cloning is cheap; clones share the HTTP connection pool and the
/// endpoint selector.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    selector: Arc<EndpointSelector>,
    auth_scheme: String,
    auth: Option<HeaderValue>,
}

impl ApiClient {
    /// Build a client and its endpoint selector from configuration.
    ///
    /// The configuration is validated first, so a config built in code gets
    /// the same checks as one loaded from a file.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        validate_config(config).map_err(ConfigError::Validation)?;

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .user_agent(concat!("natiq-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let prober = Prober::new(http.clone(), config.probe.clone());
        let selector = EndpointSelector::new(&config.endpoints, prober)?;

        Self::with_selector(http, Arc::new(selector), &config.auth)
    }

    /// Build a client around an existing selector.
    pub fn with_selector(
        http: Client,
        selector: Arc<EndpointSelector>,
        auth: &AuthConfig,
    ) -> Result<Self, ClientError> {
        let client = Self {
            http,
            selector,
            auth_scheme: auth.scheme.clone(),
            auth: None,
        };
        match &auth.token {
            Some(token) => client.with_token(token),
            None => Ok(client),
        }
    }

    /// A copy of this client that authenticates with `token`.
    pub fn with_token(&self, token: &str) -> Result<Self, ClientError> {
        let mut value = HeaderValue::from_str(&format!("{} {}", self.auth_scheme, token))?;
        value.set_sensitive(true);
        Ok(Self {
            auth: Some(value),
            ..self.clone()
        })
    }

    /// A copy of this client that sends no `Authorization` header.
    pub fn without_token(&self) -> Self {
        Self {
            auth: None,
            ..self.clone()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    pub fn selector(&self) -> &Arc<EndpointSelector> {
        &self.selector
    }

    /// Run one selection round on the shared selector.
    pub async fn refresh_endpoint(&self) -> Selection {
        self.selector.refresh().await
    }

    /// Absolute URL for `path` on the active endpoint.
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(join_path(&self.selector.active_endpoint(), path)?)
    }

    /// Start a request against the active endpoint with auth attached.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.url(path)?;
        let mut builder = self
            .http
            .request(method, url)
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());
        if let Some(auth) = &self.auth {
            builder = builder.header(AUTHORIZATION, auth.clone());
        }
        Ok(builder)
    }

    /// Send a prepared request. Non-2xx responses become [`ClientError::Api`].
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http.execute(request).await?;
        let status = response.status();
        metrics::record_request(method.as_str(), status.as_u16());
        tracing::debug!(%method, %url, %status, "API request completed");

        if !status.is_success() {
            let raw = response.text().await?;
            return Err(ClientError::from_status(status, raw));
        }
        Ok(response)
    }

    /// Send a prepared request and decode its JSON body.
    ///
    /// An empty body decodes as JSON `null`, so `()` and
    /// `serde_json::Value` both accept 204 responses.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(builder).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        serde_json::from_slice(body).map_err(|source| ClientError::Decode { status, source })
    }

    /// Send a prepared request and check only its status.
    ///
    /// For endpoints whose success body is plain text or otherwise
    /// irrelevant.
    pub async fn execute_unit(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        self.send(builder).await?;
        Ok(())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(self.request(Method::GET, path)?).await
    }

    pub async fn get_with<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(self.request(Method::GET, path)?.query(query)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, path)?.json(body)).await
    }

    /// POST with no request body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(self.request(Method::POST, path)?).await
    }

    /// POST a `multipart/form-data` body.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ClientError> {
        self.execute(self.request(Method::POST, path)?.multipart(form)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::PUT, path)?.json(body)).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::PATCH, path)?.json(body)).await
    }

    /// DELETE `path`. The body of a successful response is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.execute_unit(self.request(Method::DELETE, path)?).await
    }
}
