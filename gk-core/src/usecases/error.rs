use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("Invalid SIRET number")]
    Siret,
    #[error("Invalid garden status")]
    GardenStatus,
    #[error("Invalid URL")]
    Url,
    #[error("Empty message")]
    EmptyMessage,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Token invalid")]
    TokenInvalid,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<gk_entities::password::ParseError> for Error {
    fn from(_: gk_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<gk_entities::email::EmailAddressParseError> for Error {
    fn from(_: gk_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<gk_entities::botanist::SiretParseError> for Error {
    fn from(_: gk_entities::botanist::SiretParseError) -> Self {
        Self::Siret
    }
}

impl From<gk_entities::garden::GardenStatusParseError> for Error {
    fn from(_: gk_entities::garden::GardenStatusParseError) -> Self {
        Self::GardenStatus
    }
}
