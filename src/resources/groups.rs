//! `/groups/` resource.

use crate::resources::{ListParams, Record, ResourceKind};

/// Marker for the `/groups/` collection.
pub enum Groups {}

impl ResourceKind for Groups {
    const PATH: &'static str = "/groups/";
    type ListParams = ListParams;
    type List = Vec<Record>;
    type Record = Record;
}
