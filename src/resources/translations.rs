//! `/translations/` resource.

use reqwest::multipart::Form;
use serde::Serialize;

use crate::client::ClientError;
use crate::resources::{ListParams, Paginated, Record, Resource, ResourceKind, UploadFile};

/// Marker for the `/translations/` collection.
pub enum Translations {}

impl ResourceKind for Translations {
    const PATH: &'static str = "/translations/";
    type ListParams = TranslationListParams;
    type List = Vec<Record>;
    type Record = Record;
}

/// Filters for listing translations of one mushaf.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TranslationListParams {
    pub mushaf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(flatten)]
    pub page: ListParams,
}

impl TranslationListParams {
    pub fn new(mushaf: impl Into<String>) -> Self {
        Self {
            mushaf: mushaf.into(),
            ..Self::default()
        }
    }
}

/// Filters for listing the ayahs of one translation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TranslationAyahParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surah_uuid: Option<String>,
    #[serde(flatten)]
    pub page: ListParams,
}

impl Resource<'_, Translations> {
    fn ayah_path(&self, uuid: &str, ayah_uuid: &str) -> String {
        format!("{}ayahs/{}/", self.item_path(uuid), ayah_uuid)
    }

    /// `POST /translations/import/` with a JSON translation file.
    pub async fn import(&self, file: UploadFile) -> Result<Record, ClientError> {
        let form = Form::new().part("file", file.into_part());
        self.client().post_multipart("/translations/import/", form).await
    }

    /// `GET /translations/{uuid}/ayahs/`
    pub async fn ayahs(
        &self,
        uuid: &str,
        params: &TranslationAyahParams,
    ) -> Result<Paginated<Record>, ClientError> {
        let path = format!("{}ayahs/", self.item_path(uuid));
        self.client().get_with(&path, params).await
    }

    /// `GET /translations/{uuid}/ayahs/{ayah_uuid}/`
    pub async fn ayah(&self, uuid: &str, ayah_uuid: &str) -> Result<Record, ClientError> {
        self.client().get(&self.ayah_path(uuid, ayah_uuid)).await
    }

    /// `POST /translations/{uuid}/ayahs/{ayah_uuid}/`
    pub async fn create_ayah<B>(
        &self,
        uuid: &str,
        ayah_uuid: &str,
        data: &B,
    ) -> Result<Record, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.client().post(&self.ayah_path(uuid, ayah_uuid), data).await
    }

    /// `PUT /translations/{uuid}/ayahs/{ayah_uuid}/`
    pub async fn update_ayah<B>(
        &self,
        uuid: &str,
        ayah_uuid: &str,
        data: &B,
    ) -> Result<Record, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.client().put(&self.ayah_path(uuid, ayah_uuid), data).await
    }
}
