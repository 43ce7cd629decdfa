//! Application Error
//!
//! [`AppError`] is what every crate-local error enum turns into at the
//! HTTP boundary, and [`ProblemDetails`] is how it is rendered.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

use super::kind::ErrorKind;

type Text = Cow<'static, str>;

/// Unified application error.
///
/// `message` is shown to the client verbatim, so server-side failures
/// should be built with a fixed text and their detail logged elsewhere.
///
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// let err = AppError::bad_request("Password must be at least 6 characters")
///     .with_action("Choose a longer password");
/// assert_eq!(err.status_code(), 400);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    kind: ErrorKind,
    message: Text,
    action: Option<Text>,
}

/// Shorthand for `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;

/// RFC 7807 problem document
#[derive(Debug, Clone, Serialize)]
pub struct ProblemDetails<'a> {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: &'static str,
    pub status: u16,
    pub detail: &'a str,
    pub action: Option<&'a str>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Text>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
        }
    }

    pub fn bad_request(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn internal(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// Hint telling the client what to do next
    pub fn with_action(self, action: impl Into<Text>) -> Self {
        Self {
            action: Some(action.into()),
            ..self
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn problem(&self) -> ProblemDetails<'_> {
        ProblemDetails {
            type_uri: format!("https://httpstatuses.io/{}", self.status_code()),
            title: self.kind.as_str(),
            status: self.status_code(),
            detail: &self.message,
            action: self.action(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        match &self.action {
            Some(action) => write!(f, " ({})", action),
            None => Ok(()),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(AppError::bad_request("x").kind(), ErrorKind::BadRequest);
        assert_eq!(AppError::unauthorized("x").status_code(), 401);
        assert_eq!(AppError::forbidden("x").status_code(), 403);
        assert_eq!(AppError::not_found("Event not found").message(), "Event not found");
        assert!(AppError::internal("x").kind().is_server_error());
    }

    #[test]
    fn test_display() {
        let err = AppError::bad_request("Password too short").with_action("Use 6 or more");
        assert_eq!(err.to_string(), "Bad Request: Password too short (Use 6 or more)");
        assert_eq!(
            AppError::not_found("Event not found").to_string(),
            "Not Found: Event not found"
        );
    }

    #[test]
    fn test_problem_document() {
        let err = AppError::forbidden("Invalid or expired token");
        let json = serde_json::to_value(err.problem()).unwrap();

        assert_eq!(json["type"], "https://httpstatuses.io/403");
        assert_eq!(json["title"], "Forbidden");
        assert_eq!(json["status"], 403);
        assert_eq!(json["detail"], "Invalid or expired token");
        assert!(json["action"].is_null());
    }
}
