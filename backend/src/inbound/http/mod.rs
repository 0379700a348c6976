//! HTTP inbound adapter exposing the REST endpoints.

pub mod customers;
pub mod error;
pub mod health;
pub mod reservations;
pub mod responses;
pub mod state;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register every API route on a service config.
///
/// Shared by the server factory and the test harnesses so both mount the
/// same route table.
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(customers::list_customers)
        .service(customers::search_customers_by_city)
        .service(customers::search_customers_by_name)
        .service(customers::get_customer)
        .service(customers::create_customer)
        .service(customers::update_customer_contact)
        .service(customers::delete_customer)
        .service(reservations::update_reservation_room)
        .service(reservations::delete_reservation);
}
