//! `/upload/` endpoints.

use reqwest::multipart::Form;
use serde::Serialize;

use crate::client::{ApiClient, ClientError};
use crate::resources::{Record, UploadFile};

pub struct Upload<'a> {
    client: &'a ApiClient,
}

impl<'a> Upload<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /upload/` with the file and its descriptive query parameters.
    pub async fn create<Q>(&self, params: &Q, file: UploadFile) -> Result<Record, ClientError>
    where
        Q: Serialize + ?Sized,
    {
        let request = self
            .client
            .request(reqwest::Method::POST, "/upload/")?
            .query(params)
            .multipart(Form::new().part("file", file.into_part()));
        self.client.execute(request).await
    }

    /// `GET /upload/subjects/`
    pub async fn subjects(&self) -> Result<Vec<Record>, ClientError> {
        self.client.get("/upload/subjects/").await
    }
}
