//! Data-access ports for the hotel store.
//!
//! The persistence adapters implement these traits against PostgreSQL;
//! [`InMemoryHotelStore`] implements them over plain state for tests.
//! Every operation is a parameterized statement on the adapter side —
//! callers never hand SQL text across this boundary.

mod memory;

pub use memory::InMemoryHotelStore;

use async_trait::async_trait;

use crate::domain::{Customer, CustomerSummary, NewCustomer};

/// Errors raised by store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// A connection could not be established or drawn from the pool.
    #[error("store connection failed: {message}")]
    Connection { message: String },

    /// A query or mutation failed during execution.
    #[error("store query failed: {message}")]
    Query { message: String },
}

impl RepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port over the customers table and its dependent rows.
///
/// Existence and uniqueness checks here are best-effort reads; the store's
/// UNIQUE and foreign-key constraints remain the backstop under concurrent
/// writers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// List every customer ordered by id ascending, index projection only.
    async fn list(&self) -> Result<Vec<CustomerSummary>, RepositoryError>;

    /// Fetch the full row for one customer; empty when nothing matches.
    async fn find_by_id(&self, id: i32) -> Result<Vec<Customer>, RepositoryError>;

    /// Case-insensitive prefix search on the city column.
    async fn find_by_city_prefix(&self, city: &str) -> Result<Vec<Customer>, RepositoryError>;

    /// Case-insensitive substring search on the name column.
    async fn find_by_name_substring(&self, name: &str) -> Result<Vec<Customer>, RepositoryError>;

    /// Whether any customer already holds this email.
    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError>;

    /// Insert a customer, returning the store-assigned id.
    async fn insert(&self, customer: NewCustomer) -> Result<i32, RepositoryError>;

    /// Whether a customer with this id exists.
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;

    /// Replace the contact columns, returning the updated id.
    async fn update_contact(
        &self,
        id: i32,
        email: &str,
        phone: &str,
    ) -> Result<i32, RepositoryError>;

    /// Delete the customer after removing its reservations and their
    /// invoices, atomically within one transaction.
    async fn delete_cascade(&self, id: i32) -> Result<(), RepositoryError>;
}

/// Port over the reservations table and its invoices.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Whether a reservation with this id exists.
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;

    /// Reallocate the room, returning the updated id.
    async fn update_room(&self, id: i32, room_no: i32) -> Result<i32, RepositoryError>;

    /// Delete the reservation after removing its invoices, atomically
    /// within one transaction.
    async fn delete_cascade(&self, id: i32) -> Result<(), RepositoryError>;
}
