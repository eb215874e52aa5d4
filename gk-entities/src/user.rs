use crate::{email::EmailAddress, id::Id, password::Password};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id          : Id,
    pub firstname   : String,
    pub lastname    : String,
    pub email       : EmailAddress,
    pub password    : Password,
    pub picture_url : Option<String>,
    pub publishable : bool,
}
