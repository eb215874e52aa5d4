use crate::id::Id;

/// A short label attached to plants.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tag {
    pub id: Id,
    pub name: String,
}
