//! Job domain entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Job entity as persisted.
///
/// `kind` is serialized as `type` on the wire; `type` is reserved in
/// Rust. Listings go through [`JobView`], which drops the owner id.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub content: String,
    pub enterprise: String,
    pub salary: f64,
    pub location: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

/// Public projection of a job (owner id excluded)
#[derive(Debug, Serialize)]
pub struct JobView {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub enterprise: String,
    pub salary: f64,
    pub location: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Job> for JobView {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            kind: job.kind,
            content: job.content,
            enterprise: job.enterprise,
            salary: job.salary,
            location: job.location,
            created_at: job.created_at,
        }
    }
}
