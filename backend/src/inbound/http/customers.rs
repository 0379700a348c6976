//! Customer HTTP handlers.
//!
//! ```text
//! GET    /customers
//! GET    /customers/{id}
//! GET    /customers/by_city/{city}
//! GET    /customers/by_name/{name}
//! POST   /customers
//! PUT    /customers/{id}
//! DELETE /customers/{id}
//! ```
//!
//! Write handlers walk the same ladder: validate formats, check
//! preconditions against the store, mutate, respond. The first failing
//! rung short-circuits into the error envelope.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::validation::{validate_email, validate_phone_number};
use crate::domain::{Error, NewCustomer};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{
    CustomerListResponse, CustomerRowsResponse, ErrorResponse, MutationResponse,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_id, require};

/// Request body for `POST /customers`.
///
/// Fields arrive optional so an absent one is reported by name instead of
/// falling through to the store.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}

/// Request body for `PUT /customers/{id}`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateContactRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
}

fn invalid_phone_error(phone: &str) -> Error {
    Error::validation(format!("The phone number {phone} is an invalid format"))
}

fn invalid_email_error(email: &str) -> Error {
    Error::validation(format!("The email {email} is an invalid format"))
}

fn missing_customer_error(id: &str) -> Error {
    Error::precondition(format!("Customer id:{id} does not exist"))
}

fn check_contact_formats(phone: &str, email: &str, state: &HttpState) -> Result<(), Error> {
    // Phone first, matching the documented precedence of the messages.
    if !validate_phone_number(phone, state.phone_validation) {
        return Err(invalid_phone_error(phone));
    }
    if !validate_email(email) {
        return Err(invalid_email_error(email));
    }
    Ok(())
}

/// List customers with the index projection, ordered by id.
#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "All customers", body = CustomerListResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["customers"],
    operation_id = "listCustomers"
)]
#[get("/customers")]
pub async fn list_customers(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CustomerListResponse>> {
    let data = state.customers.list().await?;
    Ok(web::Json(CustomerListResponse::new(data)))
}

/// Fetch one customer's full row by id.
///
/// The data array holds zero or one rows; a non-numeric id matches
/// nothing rather than failing.
#[utoipa::path(
    get,
    path = "/customers/{id}",
    responses(
        (status = 200, description = "Matching rows, possibly empty", body = CustomerRowsResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["customers"],
    operation_id = "getCustomer"
)]
#[get("/customers/{id}")]
pub async fn get_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CustomerRowsResponse>> {
    let data = match parse_id(&path) {
        Some(id) => state.customers.find_by_id(id).await?,
        None => Vec::new(),
    };
    Ok(web::Json(CustomerRowsResponse::new(data)))
}

/// Search customers whose city starts with the given text.
#[utoipa::path(
    get,
    path = "/customers/by_city/{city}",
    responses(
        (status = 200, description = "Prefix matches", body = CustomerRowsResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["customers"],
    operation_id = "searchCustomersByCity"
)]
#[get("/customers/by_city/{city}")]
pub async fn search_customers_by_city(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CustomerRowsResponse>> {
    let city = path.into_inner().to_lowercase();
    let data = state.customers.find_by_city_prefix(&city).await?;
    Ok(web::Json(CustomerRowsResponse::new(data)))
}

/// Search customers whose name contains the given text.
#[utoipa::path(
    get,
    path = "/customers/by_name/{name}",
    responses(
        (status = 200, description = "Substring matches", body = CustomerRowsResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["customers"],
    operation_id = "searchCustomersByName"
)]
#[get("/customers/by_name/{name}")]
pub async fn search_customers_by_name(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CustomerRowsResponse>> {
    let name = path.into_inner().to_lowercase();
    let data = state.customers.find_by_name_substring(&name).await?;
    Ok(web::Json(CustomerRowsResponse::new(data)))
}

/// Create a customer.
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Customer created", body = MutationResponse),
        (status = 400, description = "Invalid phone or email, or duplicate email", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["customers"],
    operation_id = "createCustomer"
)]
#[post("/customers")]
pub async fn create_customer(
    state: web::Data<HttpState>,
    payload: web::Json<CreateCustomerRequest>,
) -> ApiResult<web::Json<MutationResponse>> {
    let body = payload.into_inner();
    let phone = require(body.phone, "phone")?;
    let email = require(body.email, "email")?;
    check_contact_formats(&phone, &email, &state)?;

    if state.customers.email_exists(&email).await? {
        return Err(Error::precondition(format!(
            "Customer with email {email} already exists"
        )));
    }

    let customer = NewCustomer {
        name: require(body.name, "name")?,
        email,
        phone,
        address: require(body.address, "address")?,
        city: require(body.city, "city")?,
        postcode: require(body.postcode, "postcode")?,
        country: require(body.country, "country")?,
    };
    let id = state.customers.insert(customer).await?;

    Ok(web::Json(MutationResponse::new(format!(
        "Customer id {id} created"
    ))))
}

/// Update a customer's contact fields (email and phone only).
#[utoipa::path(
    put,
    path = "/customers/{id}",
    request_body = UpdateContactRequest,
    responses(
        (status = 200, description = "Customer updated", body = MutationResponse),
        (status = 400, description = "Invalid phone or email, or unknown id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["customers"],
    operation_id = "updateCustomerContact"
)]
#[put("/customers/{id}")]
pub async fn update_customer_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateContactRequest>,
) -> ApiResult<web::Json<MutationResponse>> {
    let raw_id = path.into_inner();
    let body = payload.into_inner();
    let phone = require(body.phone, "phone")?;
    let email = require(body.email, "email")?;
    check_contact_formats(&phone, &email, &state)?;

    let id = parse_id(&raw_id).ok_or_else(|| missing_customer_error(&raw_id))?;
    if !state.customers.exists(id).await? {
        return Err(missing_customer_error(&raw_id));
    }

    let updated = state.customers.update_contact(id, &email, &phone).await?;
    Ok(web::Json(MutationResponse::new(format!(
        "Customer id:{updated} updated"
    ))))
}

/// Delete a customer together with its reservations and their invoices.
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    responses(
        (status = 200, description = "Customer deleted", body = MutationResponse),
        (status = 400, description = "Unknown id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["customers"],
    operation_id = "deleteCustomer"
)]
#[delete("/customers/{id}")]
pub async fn delete_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MutationResponse>> {
    let raw_id = path.into_inner();
    let id = parse_id(&raw_id).ok_or_else(|| missing_customer_error(&raw_id))?;
    if !state.customers.exists(id).await? {
        return Err(missing_customer_error(&raw_id));
    }

    state.customers.delete_cascade(id).await?;
    Ok(web::Json(MutationResponse::new(format!(
        "Customer {id} deleted!"
    ))))
}
