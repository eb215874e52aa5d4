use std::collections::BTreeMap;

use crate::id::Id;

/// Reserved identifier of the sentinel plant that garden photos fall
/// back to when the submitted plant reference cannot be resolved.
/// The row is provisioned by the initial database migration.
pub const UNKNOWN_PLANT_ID: &str = "unknown";

/// Structured care attributes (light, water, temperature, soil, ...).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlantHint(BTreeMap<String, String>);

impl PlantHint {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl From<BTreeMap<String, String>> for PlantHint {
    fn from(from: BTreeMap<String, String>) -> Self {
        Self(from)
    }
}

impl From<PlantHint> for BTreeMap<String, String> {
    fn from(from: PlantHint) -> Self {
        from.0
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    pub id          : Id,
    pub name        : String,
    pub description : String,
    pub hint        : PlantHint,
    pub fullname    : String,
    pub picture_url : Option<String>,
}

impl Plant {
    pub fn is_unknown_sentinel(&self) -> bool {
        self.id.as_str() == UNKNOWN_PLANT_ID
    }
}
