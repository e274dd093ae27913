//! `/takhtits/` resource.
//!
//! A takhtit is a layout of a mushaf: where pages, juz, hizb and similar
//! divisions break, recorded as ayah and word breakers.

use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use crate::client::ClientError;
use crate::resources::{Record, Resource, ResourceKind, UploadFile};

/// Marker for the `/takhtits/` collection.
pub enum Takhtits {}

impl ResourceKind for Takhtits {
    const PATH: &'static str = "/takhtits/";
    type ListParams = TakhtitListParams;
    type List = Vec<Record>;
    type Record = Record;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TakhtitListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mushaf: Option<String>,
}

/// Division a breaker marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakerKind {
    Page,
    Juz,
    Hizb,
    Rub,
    Manzil,
    Ruku,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAyahBreaker {
    pub ayah_uuid: String,
    #[serde(rename = "type")]
    pub kind: BreakerKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewWordBreaker {
    pub word_uuid: String,
    #[serde(rename = "type")]
    pub kind: BreakerKind,
}

impl Resource<'_, Takhtits> {
    fn sub_path(&self, uuid: &str, sub: &str) -> String {
        format!("{}{}/", self.item_path(uuid), sub)
    }

    /// `GET /takhtits/{uuid}/ayahs_breakers/`
    pub async fn ayahs_breakers(&self, uuid: &str) -> Result<Vec<Record>, ClientError> {
        self.client().get(&self.sub_path(uuid, "ayahs_breakers")).await
    }

    /// `POST /takhtits/{uuid}/ayahs_breakers/`
    pub async fn create_ayahs_breaker(
        &self,
        uuid: &str,
        breaker: &NewAyahBreaker,
    ) -> Result<Record, ClientError> {
        self.client().post(&self.sub_path(uuid, "ayahs_breakers"), breaker).await
    }

    /// `GET /takhtits/{uuid}/ayahs_breakers/{breaker_uuid}/`
    pub async fn ayahs_breaker(&self, uuid: &str, breaker_uuid: &str) -> Result<Record, ClientError> {
        let path = format!("{}{}/", self.sub_path(uuid, "ayahs_breakers"), breaker_uuid);
        self.client().get(&path).await
    }

    /// `GET /takhtits/{uuid}/words_breakers/`
    pub async fn words_breakers(&self, uuid: &str) -> Result<Vec<Record>, ClientError> {
        self.client().get(&self.sub_path(uuid, "words_breakers")).await
    }

    /// `POST /takhtits/{uuid}/words_breakers/`
    pub async fn create_words_breaker(
        &self,
        uuid: &str,
        breaker: &NewWordBreaker,
    ) -> Result<Record, ClientError> {
        self.client().post(&self.sub_path(uuid, "words_breakers"), breaker).await
    }

    /// `GET /takhtits/{uuid}/words_breakers/{breaker_uuid}/`
    pub async fn words_breaker(&self, uuid: &str, breaker_uuid: &str) -> Result<Record, ClientError> {
        let path = format!("{}{}/", self.sub_path(uuid, "words_breakers"), breaker_uuid);
        self.client().get(&path).await
    }

    /// `POST /takhtits/{uuid}/import/` with a JSON list of breakers.
    ///
    /// Existing breakers of the imported `kind` are replaced; the server
    /// assumes `page` when no kind is given.
    pub async fn import(
        &self,
        uuid: &str,
        file: UploadFile,
        kind: Option<BreakerKind>,
    ) -> Result<Record, ClientError> {
        #[derive(Serialize)]
        struct ImportParams {
            #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
            kind: Option<BreakerKind>,
        }
        let client = self.client();
        let request = client
            .request(reqwest::Method::POST, &self.sub_path(uuid, "import"))?
            .query(&ImportParams { kind })
            .multipart(Form::new().part("file", file.into_part()));
        client.execute(request).await
    }
}
