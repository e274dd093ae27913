//! `/words/` resource.

use serde::Serialize;

use crate::client::ClientError;
use crate::resources::{ListParams, Paginated, Record, Resource, ResourceKind};

/// Marker for the `/words/` collection.
pub enum Words {}

impl ResourceKind for Words {
    const PATH: &'static str = "/words/";
    type ListParams = WordListParams;
    type List = Paginated<Record>;
    type Record = Record;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WordListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ayah_uuid: Option<String>,
    #[serde(flatten)]
    pub page: ListParams,
}

impl Resource<'_, Words> {
    /// `POST /words/?ayah_uuid=...`
    pub async fn create_in_ayah<B>(&self, ayah_uuid: &str, data: &B) -> Result<Record, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let client = self.client();
        let request = client
            .request(reqwest::Method::POST, self.path())?
            .query(&[("ayah_uuid", ayah_uuid)])
            .json(data);
        client.execute(request).await
    }
}
