//! Vagas application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use sqlx::PgPool;
use vagas_accounts::{AccountsState, UserRepository};
use vagas_auth::AuthConfig;
use vagas_common::Config;
use vagas_jobs::{JobRepository, JobsState};

/// Create the main application router with all routes
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let auth_config = AuthConfig {
        jwt_key: config.jwt_key.clone(),
    };

    let accounts_state = AccountsState {
        users: UserRepository::new(pool.clone()),
        auth: auth_config.clone(),
    };

    let jobs_state = JobsState {
        jobs: JobRepository::new(pool),
        auth: auth_config,
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(vagas_accounts::routes().with_state(accounts_state))
        .merge(vagas_jobs::routes().with_state(jobs_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
