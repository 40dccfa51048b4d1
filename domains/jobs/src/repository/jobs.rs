//! Job repository

use crate::domain::entities::Job;
use crate::domain::validation::JobFields;
use sqlx::PgPool;
use uuid::Uuid;
use vagas_common::Result;

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all jobs, newest first
    pub async fn list(&self) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, "type", content, enterprise, salary, location, created_at, user_id
            FROM jobs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    /// Find job by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, "type", content, enterprise, salary, location, created_at, user_id
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(job)
    }

    /// Create a new job owned by `user_id`
    pub async fn create(&self, user_id: Uuid, fields: &JobFields) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (id, title, "type", content, enterprise, salary, location, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, "type", content, enterprise, salary, location, created_at, user_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&fields.title)
        .bind(&fields.kind)
        .bind(&fields.content)
        .bind(&fields.enterprise)
        .bind(fields.salary)
        .bind(&fields.location)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    /// Update an existing job in place (`created_at` and owner are immutable)
    pub async fn update(&self, id: Uuid, fields: &JobFields) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs SET
                title = $2,
                "type" = $3,
                content = $4,
                enterprise = $5,
                salary = $6,
                location = $7
            WHERE id = $1
            RETURNING id, title, "type", content, enterprise, salary, location, created_at, user_id
            "#,
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.kind)
        .bind(&fields.content)
        .bind(&fields.enterprise)
        .bind(fields.salary)
        .bind(&fields.location)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }
}
