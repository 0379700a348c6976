//! PostgreSQL persistence adapters using Diesel.
//!
//! Concrete implementations of the domain store ports, backed by
//! PostgreSQL via the Diesel ORM with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! The adapters stay thin: they translate between Diesel rows and domain
//! types, map driver failures onto [`crate::domain::ports::RepositoryError`],
//! and keep each cascading delete inside one transaction. Row structs
//! (`models`) and table definitions (`schema`) are internal to this
//! module.

mod diesel_customer_store;
mod diesel_reservation_store;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_customer_store::DieselCustomerStore;
pub use diesel_reservation_store::DieselReservationStore;
pub use pool::{DbPool, PoolConfig, PoolError};
