use std::collections::HashSet;

use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The account email
    sub: String,
    /// Expiry time as unix timestamp
    exp: usize,
}

/// 256-bit base64 encoded secret
fn generate_secret() -> String {
    BASE64.encode(rand::random::<[u8; 32]>())
}

struct Key {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

pub struct JwtState {
    key: Key,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new() -> Self {
        Self::with_secret(&generate_secret())
    }

    pub fn with_secret(secret: &str) -> Self {
        let key = Key {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        };
        Self {
            key,
            time_valid: Duration::days(1),
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, email: &str) -> Result<String> {
        let exp = usize::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: email.to_string(),
            exp,
        };
        let token = encode(&Header::default(), &claims, &self.key.encoding)?;
        Ok(token)
    }

    pub fn validate_token_and_get_email(&self, token: &str) -> Result<String> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        let claims = self.decode(token)?;
        Ok(claims.sub)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens(); // do housekeeping
        self.lock().insert(token);
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.key.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    fn remove_invalid_tokens(&self) {
        let invalid_tokens = self
            .lock()
            .iter()
            .filter(|token| self.decode(token).is_err())
            .cloned()
            .collect::<Vec<_>>();
        for token in invalid_tokens {
            self.lock().remove(&token);
        }
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}

impl Default for JwtState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_works() {
        let jwt_state = JwtState::new();
        let token = jwt_state.generate_token("foo@bar.org").unwrap();
        let email = jwt_state.validate_token_and_get_email(&token).unwrap();
        assert_eq!(email, "foo@bar.org");
    }

    #[test]
    fn blacklisting_works() {
        let jwt_state = JwtState::new();
        let token = jwt_state.generate_token("foo@bar.org").unwrap();
        jwt_state.blacklist_token(token.clone());
        assert!(jwt_state.validate_token_and_get_email(&token).is_err());
    }

    #[test]
    fn tokens_of_a_foreign_key_are_rejected() {
        let token = JwtState::with_secret("one secret")
            .generate_token("foo@bar.org")
            .unwrap();
        let jwt_state = JwtState::with_secret("another secret");
        assert!(jwt_state.validate_token_and_get_email(&token).is_err());
    }

    #[test]
    fn invalid_tokens_are_removed() {
        let jwt_state = JwtState::new();
        let token = jwt_state.generate_token("foo@bar.org").unwrap();
        let invalid_token = "dubidubidu".to_string();
        jwt_state.blacklist_token(token.clone());
        jwt_state.blacklist_token(invalid_token.clone());
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(jwt_state.is_on_blacklist(&invalid_token));
        jwt_state.remove_invalid_tokens();
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(!jwt_state.is_on_blacklist(&invalid_token));
    }
}
