use crate::id::Id;

/// A stored image reference.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Photo {
    pub id: Id,
    pub url: String,
}
