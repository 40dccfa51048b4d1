//! User domain entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// User entity as persisted.
///
/// The password hash never leaves the server; response payloads go
/// through [`UserView`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Public projection of a user (password excluded)
#[derive(Debug, Serialize)]
pub struct UserView {
    pub email: String,
    pub name: String,
    pub role: String,
    pub id: Uuid,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            name: user.name,
            role: user.role,
            id: user.id,
        }
    }
}
