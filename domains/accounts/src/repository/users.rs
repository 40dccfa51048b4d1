//! User repository

use crate::domain::entities::User;
use sqlx::PgPool;
use uuid::Uuid;
use vagas_common::Result;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, role, name, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Create a new user with a freshly generated id
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        role: &str,
        name: &str,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, role, name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, role, name, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
