//! Shared mapping from driver failures to port errors.
//!
//! Both store adapters funnel `bb8` pool errors and Diesel errors through
//! these helpers so the classification into connection-versus-query
//! failures stays in one place.

use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::RepositoryError;

/// Map pool errors to port errors.
pub(super) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Build { message } | PoolError::Checkout { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to port errors.
pub(super) fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            RepositoryError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => RepositoryError::query(info.message().to_owned()),
        other => RepositoryError::query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("pool timed out"));

        assert!(matches!(mapped, RepositoryError::Connection { .. }));
        assert!(mapped.to_string().contains("pool timed out"));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let mapped = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(mapped, RepositoryError::Query { .. }));
    }
}
