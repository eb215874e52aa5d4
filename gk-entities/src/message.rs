use crate::{id::Id, time::Timestamp};

/// Free-text note a user leaves inside a garden.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id         : Id,
    pub user_id    : Id,
    pub garden_id  : Id,
    pub body       : String,
    pub created_at : Timestamp,
}
