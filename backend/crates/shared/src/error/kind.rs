//! Error Kind
//!
//! The five outcomes the API distinguishes, with their HTTP status.

use std::fmt;

/// Error classification.
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.status_code(), 404);
/// assert_eq!(ErrorKind::NotFound.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed input or a password policy violation
    BadRequest,
    /// No credentials, or wrong ones
    Unauthorized,
    /// A token was presented and rejected
    Forbidden,
    /// Requested row does not exist
    NotFound,
    InternalServerError,
}

impl ErrorKind {
    const fn parts(self) -> (u16, &'static str) {
        match self {
            ErrorKind::BadRequest => (400, "Bad Request"),
            ErrorKind::Unauthorized => (401, "Unauthorized"),
            ErrorKind::Forbidden => (403, "Forbidden"),
            ErrorKind::NotFound => (404, "Not Found"),
            ErrorKind::InternalServerError => (500, "Internal Server Error"),
        }
    }

    pub const fn status_code(self) -> u16 {
        self.parts().0
    }

    /// Reason phrase, used as the problem `title`
    pub const fn as_str(self) -> &'static str {
        self.parts().1
    }

    pub const fn is_server_error(self) -> bool {
        self.status_code() >= 500
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
