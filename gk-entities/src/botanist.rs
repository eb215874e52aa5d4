use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::id::Id;

/// French business registration number, exactly 14 digits.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Siret(String);

impl Siret {
    pub const LEN: usize = 14;

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid SIRET number")]
pub struct SiretParseError;

impl FromStr for Siret {
    type Err = SiretParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SiretParseError);
        }
        Ok(Self(s.to_owned()))
    }
}

impl From<Siret> for String {
    fn from(from: Siret) -> Self {
        from.0
    }
}

impl fmt::Display for Siret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A professional role record referencing exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Botanist {
    pub id: Id,
    pub user_id: Id,
    pub siret: Siret,
}
