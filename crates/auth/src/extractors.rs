//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthConfig: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt::{decode_token, extract_bearer_token};

/// Authenticated caller extractor.
///
/// Pulls the token from the Authorization header and yields its
/// verified claims. Rejects with 401 when the header is absent,
/// malformed, or the token fails verification.
#[derive(Debug)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        let claims = decode_token(&token, &config)?;

        Ok(AuthUser(claims))
    }
}
