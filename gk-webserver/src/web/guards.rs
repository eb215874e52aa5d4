use rocket::{
    self,
    http::Status,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::web::jwt;
use gk_core::gateways::images::ImageStore;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// The authenticated account, extracted from a validated bearer token.
///
/// Requests without any bearer token are rejected with 403, requests
/// with an invalid or expired token with 401. Clients rely on the
/// distinction.
#[derive(Debug)]
pub struct Account {
    email: String,
    token: String,
}

impl Account {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let token = request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .next();
        let Some(token) = token else {
            return Outcome::Error((Status::Forbidden, ()));
        };
        let jwt_state = match request.guard::<&State<jwt::JwtState>>().await {
            Outcome::Success(jwt_state) => jwt_state,
            _ => return Outcome::Error((Status::InternalServerError, ())),
        };
        match jwt_state.validate_token_and_get_email(token) {
            Ok(email) => Outcome::Success(Account {
                email,
                token: token.to_owned(),
            }),
            Err(_) => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// Scheme and authority of the current request, used to turn the
/// stored relative upload paths into absolute URLs.
#[derive(Debug)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for BaseUrl {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let scheme = if request.rocket().config().tls_enabled() {
            "https"
        } else {
            "http"
        };
        let host = request
            .host()
            .map(ToString::to_string)
            .unwrap_or_else(|| "localhost".to_string());
        Outcome::Success(BaseUrl(format!("{scheme}://{host}")))
    }
}

pub struct Images(pub Box<dyn ImageStore + Send + Sync>);

impl Images {
    pub fn store(&self) -> &dyn ImageStore {
        &*self.0
    }
}
