//! Account management API handlers
//!
//! Implements:
//! - POST /criar-conta - Register a new user account
//! - POST /login - Authenticate and obtain a bearer token

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use vagas_auth::{hash_password, issue_token, verify_password, Claims};
use vagas_common::{Error, Result};

use crate::api::middleware::AccountsState;
use crate::domain::entities::{User, UserView};
use crate::domain::validation::{CreateAccountRequest, LoginRequest, NewAccount};

/// Response for a successful registration or login
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub message: String,
    pub user: UserView,
    pub token: String,
}

/// Admission sequence for registration.
///
/// An email already in use wins over any validation problem in the
/// rest of the payload, so the duplicate check runs first.
fn admit_registration(
    existing: Option<&User>,
    request: CreateAccountRequest,
) -> Result<NewAccount> {
    if existing.is_some() {
        return Err(Error::DuplicateEmail);
    }

    request.validate().map_err(Error::Validation)
}

/// POST /criar-conta - Register a new user account
pub async fn create_account(
    State(state): State<AccountsState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>)> {
    let existing = match request.email.as_deref() {
        Some(email) => state.users.find_by_email(email).await?,
        None => None,
    };

    let account = admit_registration(existing.as_ref(), request)?;

    let password_hash = hash_password(&account.password)?;
    let user = state
        .users
        .create(&account.email, &password_hash, &account.role, &account.name)
        .await?;

    let claims = Claims::new(user.id, &user.role, &user.name, &user.email);
    let token = issue_token(&claims, &state.auth)
        .map_err(|_| Error::Internal("Token issuance failed".to_string()))?;

    tracing::info!(user_id = %user.id, "User account created");

    let response = AccountResponse {
        message: "Usuário criado com sucesso".to_string(),
        user: UserView::from(user),
        token,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /login - Authenticate and obtain a bearer token
///
/// Unknown email and wrong password return identical responses so
/// callers cannot enumerate registered accounts.
pub async fn login(
    State(state): State<AccountsState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AccountResponse>> {
    let (email, password) = match (request.email, request.password) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(Error::InvalidCredentials),
    };

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or(Error::InvalidCredentials)?;

    if !verify_password(&password, &user.password_hash)? {
        return Err(Error::InvalidCredentials);
    }

    let claims = Claims::new(user.id, &user.role, &user.name, &user.email);
    let token = issue_token(&claims, &state.auth)
        .map_err(|_| Error::Internal("Token issuance failed".to_string()))?;

    let response = AccountResponse {
        message: "Login realizado com sucesso".to_string(),
        user: UserView::from(user),
        token,
    };

    Ok(Json(response))
}
