//! `/recitations/` resource.

use reqwest::multipart::Form;
use serde::Serialize;

use crate::client::ClientError;
use crate::resources::{ListParams, Paginated, Record, Resource, ResourceKind, UploadFile};

/// Marker for the `/recitations/` collection.
pub enum Recitations {}

impl ResourceKind for Recitations {
    const PATH: &'static str = "/recitations/";
    type ListParams = RecitationListParams;
    type List = Paginated<Record>;
    type Record = Record;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RecitationListParams {
    pub mushaf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reciter_uuid: Option<String>,
    #[serde(flatten)]
    pub page: ListParams,
}

impl RecitationListParams {
    pub fn new(mushaf: impl Into<String>) -> Self {
        Self {
            mushaf: mushaf.into(),
            ..Self::default()
        }
    }
}

impl Resource<'_, Recitations> {
    /// `POST /recitations/{uuid}/upload/{surah_uuid}/` with the surah's audio.
    ///
    /// `word_timestamps`, when given, is sent as a JSON list in the
    /// `word_timestamps` form field.
    pub async fn upload(
        &self,
        uuid: &str,
        surah_uuid: &str,
        file: UploadFile,
        word_timestamps: Option<&[Record]>,
    ) -> Result<Record, ClientError> {
        let path = format!("{}upload/{}/", self.item_path(uuid), surah_uuid);
        let mut form = Form::new().part("file", file.into_part());
        if let Some(timestamps) = word_timestamps {
            let encoded = serde_json::to_string(timestamps).map_err(|source| {
                ClientError::Encode {
                    field: "word_timestamps",
                    source,
                }
            })?;
            form = form.text("word_timestamps", encoded);
        }
        self.client().post_multipart(&path, form).await
    }
}
