//! Registry Error Types
//!
//! Registry-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::EmailError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::json_rejection_message;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use thiserror::Error;

/// Registry-specific result type alias
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry-specific error variants
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Participant not found")]
    ParticipantNotFound,

    #[error("Registration not found")]
    RegistrationNotFound,

    /// Malformed query or body value
    #[error("{0}")]
    InvalidInput(String),

    #[error("{}", json_rejection_message(.0))]
    MalformedBody(#[from] JsonRejection),

    #[error("Invalid id in request path")]
    MalformedPath(#[from] PathRejection),

    #[error(transparent)]
    PasswordPolicy(#[from] PasswordPolicyError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::EventNotFound
            | RegistryError::ParticipantNotFound
            | RegistryError::RegistrationNotFound => ErrorKind::NotFound,
            RegistryError::InvalidInput(_)
            | RegistryError::MalformedBody(_)
            | RegistryError::MalformedPath(_)
            | RegistryError::PasswordPolicy(_)
            | RegistryError::InvalidEmail(_) => ErrorKind::BadRequest,
            RegistryError::PasswordHash(_)
            | RegistryError::Database(_)
            | RegistryError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        match self {
            _ if kind.is_server_error() => AppError::internal("Internal server error"),
            RegistryError::PasswordPolicy(_) => AppError::bad_request(self.to_string())
                .with_action("Choose a password of at least 6 characters"),
            _ => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RegistryError::Database(e) => {
                tracing::error!(error = %e, "Registry database error");
            }
            RegistryError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing failed");
            }
            RegistryError::Internal(msg) => {
                tracing::error!(message = %msg, "Registry internal error");
            }
            RegistryError::MalformedBody(r) => {
                tracing::debug!(rejection = %r.body_text(), "Rejected request body");
            }
            RegistryError::MalformedPath(r) => {
                tracing::debug!(rejection = %r.body_text(), "Rejected request path");
            }
            _ => {
                tracing::debug!(error = %self, "Registry error");
            }
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
