//! Outbound adapters: PostgreSQL persistence.

pub mod persistence;
