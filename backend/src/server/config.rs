//! HTTP server configuration object.

use std::net::SocketAddr;

use hotels_backend::domain::validation::PhoneValidation;
use hotels_backend::outbound::persistence::DbPool;

/// Settings assembled in `main` and consumed by `create_server`.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) phone_validation: PhoneValidation,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, phone_validation: PhoneValidation) -> Self {
        Self {
            bind_addr,
            db_pool,
            phone_validation,
        }
    }
}
