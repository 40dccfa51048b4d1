//! Accounts domain state

use crate::repository::UserRepository;
use axum::extract::FromRef;
use vagas_auth::AuthConfig;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub users: UserRepository,
    pub auth: AuthConfig,
}

impl FromRef<AccountsState> for AuthConfig {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
