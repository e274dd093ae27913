//! `/surahs/` resource.

use serde::Serialize;

use crate::resources::{ListParams, Paginated, Record, ResourceKind};

/// Marker for the `/surahs/` collection.
pub enum Surahs {}

impl ResourceKind for Surahs {
    const PATH: &'static str = "/surahs/";
    type ListParams = SurahListParams;
    type List = Paginated<Record>;
    type Record = Record;
}

/// Filters for listing surahs. `mushaf` is the mushaf short name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SurahListParams {
    pub mushaf: String,
    #[serde(flatten)]
    pub page: ListParams,
}

impl SurahListParams {
    pub fn new(mushaf: impl Into<String>) -> Self {
        Self {
            mushaf: mushaf.into(),
            page: ListParams::default(),
        }
    }
}
