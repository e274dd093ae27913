//! `/phrases/` resource.

use serde::Serialize;

use crate::client::ClientError;
use crate::resources::{ListParams, Record, Resource, ResourceKind};

/// Marker for the `/phrases/` collection.
pub enum Phrases {}

impl ResourceKind for Phrases {
    const PATH: &'static str = "/phrases/";
    type ListParams = ListParams;
    type List = Vec<Record>;
    type Record = Record;
}

impl Resource<'_, Phrases> {
    /// `POST /phrases/modify/?language=...`
    ///
    /// Sets the translated text of existing phrases for one language.
    /// The server acknowledges with a plain-text body, which is ignored.
    pub async fn modify<B>(&self, language: &str, data: &B) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let client = self.client();
        let request = client
            .request(reqwest::Method::POST, "/phrases/modify/")?
            .query(&[("language", language)])
            .json(data);
        client.execute_unit(request).await
    }
}
