//! JWT claims types

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token lifetime: 7 days
const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Identity claims embedded in a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: Uuid,
    /// Role (free-text)
    pub role: String,
    /// Display name
    pub name: String,
    /// Email
    pub email: String,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}

impl Claims {
    /// Build claims for a user, stamped with issued-at and a 7-day expiry.
    pub fn new(id: Uuid, role: &str, name: &str, email: &str) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id,
            role: role.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            iat: now as u64,
            exp: (now + TOKEN_TTL_SECS) as u64,
        }
    }
}
