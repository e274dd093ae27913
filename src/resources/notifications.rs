//! `/notifications/` resource.

use crate::client::ClientError;
use crate::resources::{ListParams, Paginated, Record, Resource, ResourceKind};

/// Marker for the `/notifications/` collection.
pub enum Notifications {}

impl ResourceKind for Notifications {
    const PATH: &'static str = "/notifications/";
    type ListParams = ListParams;
    type List = Paginated<Record>;
    type Record = Record;
}

impl Resource<'_, Notifications> {
    /// `GET /notifications/me/`
    pub async fn me(&self, params: &ListParams) -> Result<Paginated<Record>, ClientError> {
        self.client().get_with("/notifications/me/", params).await
    }

    /// `GET /notifications/opened/?uuid=...`
    pub async fn opened(&self, uuid: &str) -> Result<Record, ClientError> {
        self.client()
            .get_with("/notifications/opened/", &[("uuid", uuid)])
            .await
    }

    /// `GET /notifications/viewed/`
    pub async fn viewed(&self) -> Result<Record, ClientError> {
        self.client().get("/notifications/viewed/").await
    }
}
