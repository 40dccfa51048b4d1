//! Route definitions for Jobs domain API

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::jobs;
use super::middleware::JobsState;

/// Create all Jobs domain API routes
pub fn routes() -> Router<JobsState> {
    Router::new()
        .route("/vagas", get(jobs::list_jobs))
        .route("/vaga/{id}", get(jobs::get_job))
        .route("/criar-vaga", post(jobs::create_job))
        .route("/editar-vaga/{id}", put(jobs::update_job))
}
