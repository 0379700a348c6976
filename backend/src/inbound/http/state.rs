//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data`, so they depend
//! only on the domain ports and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{CustomerStore, ReservationStore};
use crate::domain::validation::PhoneValidation;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Customer data access.
    pub customers: Arc<dyn CustomerStore>,
    /// Reservation data access.
    pub reservations: Arc<dyn ReservationStore>,
    /// Phone validator behaviour selected at startup.
    pub phone_validation: PhoneValidation,
}

impl HttpState {
    /// Bundle the port implementations and validator mode.
    pub fn new(
        customers: Arc<dyn CustomerStore>,
        reservations: Arc<dyn ReservationStore>,
        phone_validation: PhoneValidation,
    ) -> Self {
        Self {
            customers,
            reservations,
            phone_validation,
        }
    }
}
