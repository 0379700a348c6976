//! OpenAPI document assembled from the handler annotations.

use utoipa::OpenApi;

use crate::domain::{Customer, CustomerSummary};
use crate::inbound::http::customers::{CreateCustomerRequest, UpdateContactRequest};
use crate::inbound::http::reservations::UpdateRoomRequest;
use crate::inbound::http::responses::{
    CustomerListResponse, CustomerRowsResponse, ErrorResponse, MutationResponse,
};

/// Public OpenAPI surface used by Swagger UI and tooling.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::customers::list_customers,
        crate::inbound::http::customers::get_customer,
        crate::inbound::http::customers::search_customers_by_city,
        crate::inbound::http::customers::search_customers_by_name,
        crate::inbound::http::customers::create_customer,
        crate::inbound::http::customers::update_customer_contact,
        crate::inbound::http::customers::delete_customer,
        crate::inbound::http::reservations::update_reservation_room,
        crate::inbound::http::reservations::delete_reservation,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Customer,
        CustomerSummary,
        CreateCustomerRequest,
        UpdateContactRequest,
        UpdateRoomRequest,
        CustomerListResponse,
        CustomerRowsResponse,
        MutationResponse,
        ErrorResponse,
    )),
    tags(
        (name = "customers", description = "Customer records"),
        (name = "reservations", description = "Room reservations"),
        (name = "health", description = "Probe endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/customers",
            "/customers/{id}",
            "/customers/by_city/{city}",
            "/customers/by_name/{name}",
            "/reservations/{id}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(path), "missing path: {path}");
        }
    }
}
