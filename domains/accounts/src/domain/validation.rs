//! Payload validation for the Accounts domain
//!
//! Schemas are checked in collect-all-errors mode: every offending
//! field is reported, in schema declaration order. Serde cannot do
//! this (a single missing field aborts deserialization), so payload
//! fields are optional and checked by hand.

use serde::Deserialize;
use vagas_common::de::lenient_string;
use validator::ValidateEmail;

/// Minimum length for a user's display name
const NAME_MIN_LEN: usize = 4;

/// Payload for `POST /criar-conta`
///
/// Fields deserialize leniently: a wrong-typed value ends up in the
/// validation field list instead of rejecting the whole payload.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// A fully validated account payload
#[derive(Debug)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub role: String,
    pub name: String,
}

impl CreateAccountRequest {
    /// Validate against the account schema.
    ///
    /// Returns the offending field names in schema order:
    /// email, password, role, name.
    pub fn validate(self) -> Result<NewAccount, Vec<String>> {
        let mut invalid = Vec::new();

        // email: required, valid format (no TLD requirement)
        let email = match self.email {
            Some(e) if !e.is_empty() && e.validate_email() => Some(e),
            _ => {
                invalid.push("email".to_string());
                None
            }
        };

        // password: required non-empty
        let password = match self.password {
            Some(p) if !p.is_empty() => Some(p),
            _ => {
                invalid.push("password".to_string());
                None
            }
        };

        // role: required non-empty
        let role = match self.role {
            Some(r) if !r.is_empty() => Some(r),
            _ => {
                invalid.push("role".to_string());
                None
            }
        };

        // name: required, minimum length
        let name = match self.name {
            Some(n) if n.chars().count() >= NAME_MIN_LEN => Some(n),
            _ => {
                invalid.push("name".to_string());
                None
            }
        };

        match (email, password, role, name) {
            (Some(email), Some(password), Some(role), Some(name)) => Ok(NewAccount {
                email,
                password,
                role,
                name,
            }),
            _ => Err(invalid),
        }
    }
}

/// Payload for `POST /login`
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: Option<String>,
}
