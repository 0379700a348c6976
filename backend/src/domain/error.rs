//! Domain-level error types.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them
//! onto the `{success: false, error}` envelope and a status code.

use crate::domain::ports::RepositoryError;

/// Failure category; fixes the HTTP status the inbound adapter uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A request value is malformed (bad email or phone syntax, missing
    /// body field).
    Validation,
    /// A precondition on existing data failed (missing id, duplicate
    /// email).
    Precondition,
    /// The backing store failed (query error, connection or pool failure).
    Store,
}

/// Domain error payload carried into the response envelope.
///
/// The message is the externally visible error text, so constructors take
/// the exact wording the API contract documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Convenience constructor for [`ErrorKind::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`ErrorKind::Precondition`].
    pub fn precondition(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Precondition,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`ErrorKind::Store`].
    pub fn store(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Store,
            message: message.into(),
        }
    }

    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

// The envelope carries the raw store detail; see DESIGN.md for the
// compatibility decision.
impl From<RepositoryError> for Error {
    fn from(value: RepositoryError) -> Self {
        Self::store(value.to_string())
    }
}
