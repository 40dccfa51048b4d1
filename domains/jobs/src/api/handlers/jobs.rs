//! Job management API handlers
//!
//! Implements:
//! - GET /vagas - List all job postings
//! - GET /vaga/{id} - Fetch a single posting
//! - POST /criar-vaga - Create a posting (authenticated)
//! - PUT /editar-vaga/{id} - Update an owned posting (authenticated)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use vagas_auth::AuthUser;
use vagas_common::{Error, Result};

use crate::api::middleware::JobsState;
use crate::domain::entities::{Job, JobView};
use crate::domain::validation::JobRequest;

/// Response for job creation and editing.
///
/// The full record is flattened beside the message, owner id included.
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub message: String,
    #[serde(flatten)]
    pub job: Job,
}

/// GET /vagas - List all job postings, newest first
pub async fn list_jobs(State(state): State<JobsState>) -> Result<Json<Vec<JobView>>> {
    let jobs = state.jobs.list().await?;
    Ok(Json(jobs.into_iter().map(JobView::from).collect()))
}

/// GET /vaga/{id} - Fetch a single posting
pub async fn get_job(
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobView>> {
    let job = state
        .jobs
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Vaga não encontrada".to_string()))?;

    Ok(Json(JobView::from(job)))
}

/// POST /criar-vaga - Create a posting owned by the caller
pub async fn create_job(
    AuthUser(claims): AuthUser,
    State(state): State<JobsState>,
    Json(request): Json<JobRequest>,
) -> Result<(StatusCode, Json<JobResponse>)> {
    let fields = request.validate().map_err(Error::Validation)?;

    let job = state.jobs.create(claims.id, &fields).await?;

    tracing::info!(job_id = %job.id, user_id = %claims.id, "Job created");

    let response = JobResponse {
        message: "Vaga criada com sucesso".to_string(),
        job,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /editar-vaga/{id} - Update a posting owned by the caller
pub async fn update_job(
    AuthUser(claims): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
    Json(request): Json<JobRequest>,
) -> Result<Json<JobResponse>> {
    let fields = request.validate().map_err(Error::Validation)?;

    let existing = state
        .jobs
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Vaga não encontrada".to_string()))?;

    if existing.user_id != claims.id {
        return Err(Error::Forbidden("Vaga pertence a outro usuário".to_string()));
    }

    let job = state.jobs.update(id, &fields).await?;

    tracing::info!(job_id = %job.id, user_id = %claims.id, "Job updated");

    let response = JobResponse {
        message: "Vaga atualizada com sucesso".to_string(),
        job,
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_job_response_flattens_record_beside_message() {
        let job = Job {
            id: Uuid::new_v4(),
            title: "Dev Backend".to_string(),
            kind: "CLT".to_string(),
            content: "Rust no backend".to_string(),
            enterprise: "Acme".to_string(),
            salary: 9000.0,
            location: "Remoto".to_string(),
            created_at: Utc::now(),
            user_id: Uuid::new_v4(),
        };
        let id = job.id;

        let response = JobResponse {
            message: "Vaga criada com sucesso".to_string(),
            job,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Vaga criada com sucesso");
        // Record fields sit at the top level, not nested
        assert_eq!(json["title"], "Dev Backend");
        assert_eq!(json["salary"], 9000.0);
        assert_eq!(json["id"], id.to_string());
        // Full record includes the owner id, under its wire name
        assert!(json.get("userId").is_some());
        assert!(json.get("user_id").is_none());
    }
}
