//! Credential service for the Vagas API
//!
//! Provides password hashing, JWT issuance/verification, and axum
//! extractors that work with any domain state implementing
//! `FromRef<S>` for `AuthConfig`.

mod claims;
mod config;
mod error;
mod extractors;
mod jwt;
mod password;

pub use claims::Claims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use jwt::{decode_token, issue_token};
pub use password::{hash_password, verify_password};
