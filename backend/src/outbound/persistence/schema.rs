//! Diesel table definitions for the hotels schema.
//!
//! Kept in lockstep with the migrations in `migrations/`; regenerate with
//! `diesel print-schema` after a schema change.

diesel::table! {
    /// Hotel guests. `email` carries a UNIQUE constraint.
    customers (id) {
        id -> Int4,
        name -> Varchar,
        email -> Varchar,
        phone -> Varchar,
        address -> Varchar,
        city -> Varchar,
        postcode -> Varchar,
        country -> Varchar,
    }
}

diesel::table! {
    /// Room bookings, one per customer stay.
    reservations (id) {
        id -> Int4,
        cust_id -> Int4,
        room_no -> Int4,
    }
}

diesel::table! {
    /// Billing records raised against reservations.
    invoices (id) {
        id -> Int4,
        res_id -> Int4,
    }
}

diesel::joinable!(reservations -> customers (cust_id));
diesel::joinable!(invoices -> reservations (res_id));

diesel::allow_tables_to_appear_in_same_query!(customers, reservations, invoices);
