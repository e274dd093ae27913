//! `/users/` resource.

use crate::resources::{ListParams, Record, ResourceKind};

/// Marker for the `/users/` collection.
pub enum Users {}

impl ResourceKind for Users {
    const PATH: &'static str = "/users/";
    type ListParams = ListParams;
    type List = Vec<Record>;
    type Record = Record;
}
