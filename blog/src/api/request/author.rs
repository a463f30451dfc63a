use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest};
use base64::engine::general_purpose;
use base64::Engine;
use openssl::memcmp;
use openssl::sha::sha256;

use crate::api::request::app_data;
use crate::app::AuthorCfg;
use crate::errors::BlogError;
use crate::utils::logger::log_warning;

const INVALID_CREDENTIALS: &str = "Incorrect username or password";

/// The authenticated author. Extracting it from a request performs the basic auth check.
pub struct Author {
    pub username: String,
}

impl FromRequest for Author {
    type Error = BlogError;
    type Future = Ready<Result<Author, BlogError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Author, BlogError> {
    let app = app_data(req)?;

    let credentials = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(BasicCredentials::from_header)
        .ok_or(BlogError::Unauthorized(INVALID_CREDENTIALS))?;

    if !credentials.matches(&app.config.author) {
        log_warning(format!("Rejected credentials for {} {}", req.method(), req.path()));

        return Err(BlogError::Unauthorized(INVALID_CREDENTIALS));
    }

    Ok(Author {
        username: credentials.username,
    })
}

#[derive(Debug, PartialEq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Parses an `Authorization: Basic <base64(username:password)>` header value.
    pub fn from_header(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;

        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Both fields are always compared, each in constant time.
    pub fn matches(&self, author: &AuthorCfg) -> bool {
        let username_matches = constant_time_eq(self.username.as_bytes(), author.username.as_bytes());
        let password_matches = constant_time_eq(self.password.as_bytes(), author.password.as_bytes());

        username_matches & password_matches
    }
}

// Digests have a fixed length, so the comparison time does not depend on either input.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    memcmp::eq(&sha256(a), &sha256(b))
}
