//! Shared request-parsing helpers for inbound HTTP adapters.

use crate::domain::Error;

/// Reject an absent body field with a message naming it.
pub(crate) fn missing_field_error(field: &str) -> Error {
    Error::validation(format!("missing required field: {field}"))
}

/// Unwrap a required body field or produce the missing-field error.
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Coerce a path id to an integer.
///
/// Mirrors the legacy behaviour where a non-numeric id becomes a sentinel
/// matching no row: callers turn `None` into an empty result set (reads)
/// or the does-not-exist precondition error (writes).
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
