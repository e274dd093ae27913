//! `/ayahs/` resource.

use serde::Serialize;

use crate::resources::{ListParams, Paginated, Record, ResourceKind};

/// Marker for the `/ayahs/` collection.
pub enum Ayahs {}

impl ResourceKind for Ayahs {
    const PATH: &'static str = "/ayahs/";
    type ListParams = AyahListParams;
    type List = Paginated<Record>;
    type Record = Record;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AyahListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surah_uuid: Option<String>,
    #[serde(flatten)]
    pub page: ListParams,
}
