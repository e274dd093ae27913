//! `/mushafs/` resource.

use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use crate::client::ClientError;
use crate::resources::{ListParams, Record, Resource, ResourceKind, Status, UploadFile};

/// Marker for the `/mushafs/` collection.
pub enum Mushafs {}

impl ResourceKind for Mushafs {
    const PATH: &'static str = "/mushafs/";
    type ListParams = ListParams;
    type List = Vec<Mushaf>;
    type Record = Mushaf;
}

/// A mushaf (an edition of the Quran text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mushaf {
    pub uuid: String,
    pub name: String,
    pub short_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl Resource<'_, Mushafs> {
    /// `POST /mushafs/import/` with a JSON mushaf file.
    ///
    /// The import runs in the background; the response only acknowledges it.
    pub async fn import(&self, file: UploadFile) -> Result<Record, ClientError> {
        let form = Form::new().part("file", file.into_part());
        self.client().post_multipart("/mushafs/import/", form).await
    }
}
