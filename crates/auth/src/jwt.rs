//! JWT issuance, verification, and token extraction helpers

use axum::http::HeaderValue;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Sign claims into a bearer token (HMAC-SHA-512).
pub fn issue_token(claims: &Claims, config: &AuthConfig) -> Result<String, AuthError> {
    let header = Header::new(Algorithm::HS512);
    let encoding_key = EncodingKey::from_secret(config.jwt_key.as_ref());

    encode(&header, claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign token");
        AuthError::TokenCreation
    })
}

/// Decode a bearer token, verifying signature and expiry.
///
/// Any failure (bad signature, expired, malformed) collapses into
/// `InvalidToken`; callers must treat it as unauthenticated.
pub fn decode_token(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS512);
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(config.jwt_key.as_ref());

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract the token from an Authorization header.
///
/// The header format is `<scheme> <token>`; only the second
/// whitespace-delimited segment is used.
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    let mut segments = header_str.split_whitespace();
    let _scheme = segments
        .next()
        .ok_or(AuthError::InvalidAuthorizationFormat)?;

    match segments.next() {
        Some(token) => Ok(token.to_string()),
        None => Err(AuthError::InvalidAuthorizationFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_key: "test-signing-key".to_string(),
        }
    }

    #[test]
    fn test_extract_bearer_token() {
        // Standard bearer format
        let header = HeaderValue::from_static("Bearer abc123");
        let result = extract_bearer_token(&header);
        assert_eq!(result.unwrap(), "abc123");

        // Any scheme works; only the second segment matters
        let header = HeaderValue::from_static("Token abc123");
        let result = extract_bearer_token(&header);
        assert_eq!(result.unwrap(), "abc123");

        // Bare token without a scheme
        let header = HeaderValue::from_static("abc123");
        let result = extract_bearer_token(&header);
        assert!(result.is_err());

        // Empty header
        let header = HeaderValue::from_static("");
        let result = extract_bearer_token(&header);
        assert!(result.is_err());
    }

    #[test]
    fn test_token_roundtrip() {
        let config = test_config();
        let claims = Claims::new(Uuid::new_v4(), "user", "Alice", "alice@example.com");

        let token = issue_token(&claims, &config).expect("Failed to issue token");
        let decoded = decode_token(&token, &config).expect("Failed to decode token");

        assert_eq!(decoded.id, claims.id);
        assert_eq!(decoded.role, claims.role);
        assert_eq!(decoded.name, claims.name);
        assert_eq!(decoded.email, claims.email);
        assert_eq!(decoded.iat, claims.iat);
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn test_decode_rejects_wrong_key() {
        let config = test_config();
        let claims = Claims::new(Uuid::new_v4(), "user", "Alice", "alice@example.com");
        let token = issue_token(&claims, &config).expect("Failed to issue token");

        let other = AuthConfig {
            jwt_key: "another-key".to_string(),
        };
        let result = decode_token(&token, &other);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_decode_rejects_expired_token() {
        let config = test_config();
        let mut claims = Claims::new(Uuid::new_v4(), "user", "Alice", "alice@example.com");
        claims.iat -= 30 * 24 * 60 * 60;
        claims.exp = claims.iat + 60;

        let token = issue_token(&claims, &config).expect("Failed to issue token");
        let result = decode_token(&token, &config);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let config = test_config();
        let result = decode_token("not-a-token", &config);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
