use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

/// A one-way salted password hash.
///
/// Parsing a plaintext string hashes it with bcrypt (default cost).
/// The plaintext is never stored.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Password(String);

impl Password {
    pub const fn min_len() -> usize {
        6
    }

    /// Wrap an already hashed credential, e.g. loaded from the database.
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, plaintext: &str) -> bool {
        bcrypt::verify(plaintext, &self.0)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid password")]
pub struct ParseError;

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(plaintext: &str) -> Result<Self, Self::Err> {
        if plaintext.trim().len() < Self::min_len() {
            return Err(ParseError);
        }
        let hash = bcrypt::hash(plaintext).map_err(|_| ParseError)?;
        Ok(Self(hash))
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let password = "secret123".parse::<Password>().unwrap();
        assert_ne!(password.as_str(), "secret123");
        assert!(password.verify("secret123"));
        assert!(!password.verify("Secret123"));
    }

    #[test]
    fn reject_too_short_plaintext() {
        assert!("hello".parse::<Password>().is_err());
        assert!("    a    ".parse::<Password>().is_err());
        assert!("secret".parse::<Password>().is_ok());
    }
}
