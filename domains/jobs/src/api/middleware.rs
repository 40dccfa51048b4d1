//! Jobs domain state

use crate::repository::JobRepository;
use axum::extract::FromRef;
use vagas_auth::AuthConfig;

/// Application state for the Jobs domain
#[derive(Clone)]
pub struct JobsState {
    pub jobs: JobRepository,
    pub auth: AuthConfig,
}

impl FromRef<JobsState> for AuthConfig {
    fn from_ref(state: &JobsState) -> Self {
        state.auth.clone()
    }
}
