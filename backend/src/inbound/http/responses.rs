//! JSON envelope types shared by every endpoint.
//!
//! Every response carries the `{success, data|message|error}` wrapper.
//! Success envelopes are constructed here; the failure envelope is
//! rendered by the error mapping in [`super::error`] and declared here
//! only so the OpenAPI document can reference its shape.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Customer, CustomerSummary};

/// Envelope for the customer index listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerListResponse {
    pub success: bool,
    pub data: Vec<CustomerSummary>,
}

impl CustomerListResponse {
    /// Wrap listing rows in a success envelope.
    pub fn new(data: Vec<CustomerSummary>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Envelope for full customer rows; the array may be empty.
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerRowsResponse {
    pub success: bool,
    pub data: Vec<Customer>,
}

impl CustomerRowsResponse {
    /// Wrap full rows in a success envelope.
    pub fn new(data: Vec<Customer>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Envelope for successful mutations.
#[derive(Debug, Serialize, ToSchema)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
}

impl MutationResponse {
    /// Wrap a mutation outcome message in a success envelope.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Failure envelope shape, for OpenAPI only.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
