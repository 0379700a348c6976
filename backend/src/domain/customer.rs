//! Customer record shapes.
//!
//! The wire field names match the store's column names, so these types
//! serialize directly into the `data` member of the response envelope.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full customer row as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    /// Store-generated primary key.
    pub id: i32,
    pub name: String,
    /// Unique across customers.
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
}

/// Projection returned by the customer index listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerSummary {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub phone: String,
}

/// Field set for creating a customer; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_only_index_columns() {
        let summary = CustomerSummary {
            id: 7,
            name: "Alice".to_owned(),
            city: "London".to_owned(),
            phone: "+44 20 1234".to_owned(),
        };

        let value = serde_json::to_value(&summary).expect("summary serializes");
        let object = value.as_object().expect("object");
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["city", "id", "name", "phone"]);
    }
}
