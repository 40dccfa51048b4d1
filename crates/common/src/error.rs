//! Common error types and handling for Vagas
//!
//! Every failure is converted to an HTTP response at the handler boundary.
//! Response bodies are a flat `{"message": ...}` object; the Portuguese
//! messages are a user-facing contract and must not be reworded.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Vagas application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation failed for fields: {}", .0.join(","))]
    Validation(Vec<String>),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::DuplicateEmail | Error::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::Unexpected(_) | Error::Database(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// User-facing message for API responses.
    ///
    /// Internal failures get a generic message; detail stays in the logs.
    pub fn message(&self) -> String {
        match self {
            Error::Validation(fields) => {
                format!("Os seguintes campos estão faltando: {}", fields.join(","))
            }
            Error::DuplicateEmail => "Email já cadastrado".to_string(),
            Error::InvalidCredentials => "Email ou senha incorretos".to_string(),
            Error::NotFound(msg) | Error::Forbidden(msg) => msg.clone(),
            Error::Unexpected(_) | Error::Database(_) | Error::Internal(_) => {
                "Erro interno do servidor".to_string()
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors with full context
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Internal server error");
        }

        let body = Json(json!({ "message": self.message() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            Error::Validation(vec!["email".to_string()]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::DuplicateEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            Error::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::NotFound("test".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Forbidden("test".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            Error::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_joins_fields_in_order() {
        let err = Error::Validation(vec![
            "email".to_string(),
            "name".to_string(),
            "role".to_string(),
        ]);
        assert_eq!(
            err.message(),
            "Os seguintes campos estão faltando: email,name,role"
        );
    }

    #[test]
    fn test_contract_messages() {
        assert_eq!(Error::DuplicateEmail.message(), "Email já cadastrado");
        assert_eq!(
            Error::InvalidCredentials.message(),
            "Email ou senha incorretos"
        );
    }

    #[test]
    fn test_internal_errors_do_not_leak_detail() {
        let err = Error::Internal("connection pool exhausted".to_string());
        assert_eq!(err.message(), "Erro interno do servidor");

        let err = Error::Unexpected(anyhow::anyhow!("secret detail"));
        assert_eq!(err.message(), "Erro interno do servidor");
    }

    #[test]
    fn test_into_response_status() {
        let response = Error::DuplicateEmail.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = Error::NotFound("Vaga não encontrada".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
