//! End-to-end behaviour of the HTTP API over the in-memory store.
//!
//! Exercises the full route table through Actix's test service: the
//! validate → precondition → mutate ladder for writes, the envelope shape
//! for reads, and the cascade ordering for deletes.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use hotels_backend::domain::Customer;
use hotels_backend::domain::ports::InMemoryHotelStore;
use hotels_backend::domain::validation::PhoneValidation;
use hotels_backend::inbound::http::register_routes;
use hotels_backend::inbound::http::state::HttpState;

fn customer(id: i32, name: &str, email: &str, city: &str) -> Customer {
    Customer {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        phone: "+44 20 1234".to_owned(),
        address: "1 Test Street".to_owned(),
        city: city.to_owned(),
        postcode: "AB1 2CD".to_owned(),
        country: "UK".to_owned(),
    }
}

/// Seed the dataset the scenarios below reference: customer 5 holds two
/// reservations with one invoice each.
async fn seeded_store() -> InMemoryHotelStore {
    let store = InMemoryHotelStore::new();
    store
        .seed_customer(customer(1, "Ada Lovelace", "ada@example.com", "London"))
        .await;
    store
        .seed_customer(customer(5, "Grace Hopper", "grace@example.com", "New York"))
        .await;
    store.seed_reservation(11, 5, 101).await;
    store.seed_reservation(12, 5, 102).await;
    store.seed_invoice(21, 11).await;
    store.seed_invoice(22, 12).await;
    store
}

fn state_for(store: &InMemoryHotelStore) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        PhoneValidation::Permissive,
    ))
}

async fn body_json(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON body")
}

macro_rules! test_app {
    ($store:expr) => {
        actix_test::init_service(
            App::new()
                .app_data(state_for($store))
                .configure(register_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn listing_returns_every_customer_in_id_order() {
    let store = seeded_store().await;
    let app = test_app!(&store);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/customers").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let value = body_json(response).await;
    assert_eq!(value.get("success"), Some(&Value::Bool(true)));
    let rows = value
        .get("data")
        .and_then(Value::as_array)
        .expect("data array");
    let ids: Vec<i64> = rows
        .iter()
        .filter_map(|row| row.get("id").and_then(Value::as_i64))
        .collect();
    assert_eq!(ids, [1, 5]);
}

#[actix_web::test]
async fn city_prefix_search_matches_london_for_lon() {
    let store = seeded_store().await;
    let app = test_app!(&store);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/customers/by_city/lon")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let value = body_json(response).await;
    let rows = value
        .get("data")
        .and_then(Value::as_array)
        .expect("data array");
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows.first()
            .and_then(|row| row.get("email"))
            .and_then(Value::as_str),
        Some("ada@example.com")
    );
}

#[actix_web::test]
async fn name_substring_search_is_case_insensitive() {
    let store = seeded_store().await;
    let app = test_app!(&store);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/customers/by_name/HOPP")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let value = body_json(response).await;
    let rows = value
        .get("data")
        .and_then(Value::as_array)
        .expect("data array");
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows.first()
            .and_then(|row| row.get("name"))
            .and_then(Value::as_str),
        Some("Grace Hopper")
    );
}

#[actix_web::test]
async fn creating_with_duplicate_email_leaves_row_count_unchanged() {
    let store = seeded_store().await;
    let app = test_app!(&store);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/customers")
            .set_json(json!({
                "name": "Another Ada",
                "email": "ada@example.com",
                "phone": "+44 20 9999",
                "address": "2 Test Street",
                "city": "London",
                "postcode": "N1 7AA",
                "country": "UK",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let value = body_json(response).await;
    assert_eq!(value.get("success"), Some(&Value::Bool(false)));
    assert_eq!(
        value.get("error").and_then(Value::as_str),
        Some("Customer with email ada@example.com already exists")
    );
    assert_eq!(store.customer_count().await, 2);
}

#[actix_web::test]
async fn phone_without_accepted_characters_is_rejected() {
    let store = seeded_store().await;
    let app = test_app!(&store);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/customers")
            .set_json(json!({
                "name": "No Phone",
                "email": "nophone@example.com",
                "phone": "abc",
                "address": "3 Test Street",
                "city": "Leeds",
                "postcode": "LS1 1AA",
                "country": "UK",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let value = body_json(response).await;
    assert_eq!(
        value.get("error").and_then(Value::as_str),
        Some("The phone number abc is an invalid format")
    );
    assert_eq!(store.customer_count().await, 2);
}

#[actix_web::test]
async fn accepted_phone_and_fresh_email_create_a_row() {
    let store = seeded_store().await;
    let app = test_app!(&store);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/customers")
            .set_json(json!({
                "name": "Joan Clarke",
                "email": "joan@example.com",
                "phone": "+44 20 1234",
                "address": "4 Test Street",
                "city": "Hull",
                "postcode": "HU1 1AA",
                "country": "UK",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let value = body_json(response).await;
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("Customer id 6 created")
    );
    assert_eq!(store.customer_count().await, 3);
}

#[actix_web::test]
async fn deleting_customer_five_cascades_through_reservations_and_invoices() {
    let store = seeded_store().await;
    let app = test_app!(&store);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/customers/5")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let value = body_json(response).await;
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("Customer 5 deleted!")
    );
    assert_eq!(store.invoice_count().await, 0);
    assert_eq!(store.reservation_count().await, 0);
    assert_eq!(store.customer_count().await, 1);

    // A follow-up read sees an empty data array, not an error.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/customers/5")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value.get("success"), Some(&Value::Bool(true)));
    assert_eq!(
        value.get("data").and_then(Value::as_array).map(Vec::len),
        Some(0)
    );
}

#[actix_web::test]
async fn updating_an_absent_reservation_modifies_nothing() {
    let store = seeded_store().await;
    let app = test_app!(&store);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/reservations/9999")
            .set_json(json!({ "roomnumber": 500 }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let value = body_json(response).await;
    assert_eq!(
        value.get("error").and_then(Value::as_str),
        Some("Reservation id:9999 does not exist")
    );
    assert_eq!(store.room_for(11).await, Some(101));
    assert_eq!(store.room_for(12).await, Some(102));
}

#[actix_web::test]
async fn deleting_a_reservation_spares_its_sibling() {
    let store = seeded_store().await;
    let app = test_app!(&store);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/reservations/11")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let value = body_json(response).await;
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("Reservation id:11 deleted")
    );
    assert_eq!(store.reservation_count().await, 1);
    assert_eq!(store.invoice_count().await, 1);
    assert_eq!(store.room_for(12).await, Some(102));
}

#[actix_web::test]
async fn deleting_with_a_non_numeric_id_is_a_client_error() {
    let store = seeded_store().await;
    let app = test_app!(&store);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/customers/nope")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let value = body_json(response).await;
    assert_eq!(
        value.get("error").and_then(Value::as_str),
        Some("Customer id:nope does not exist")
    );
    assert_eq!(store.customer_count().await, 2);
}
