//! In-memory implementation of the store ports.
//!
//! Backs handler and integration tests without PostgreSQL. A single async
//! mutex guards the whole dataset, so the two-step cascades are atomic
//! here just as the transactional adapters make them against the real
//! store. Seed helpers accept fixed ids so tests can reference rows
//! directly.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{CustomerStore, RepositoryError, ReservationStore};
use crate::domain::{Customer, CustomerSummary, NewCustomer};

#[derive(Debug, Clone)]
struct ReservationRecord {
    id: i32,
    cust_id: i32,
    room_no: i32,
}

#[derive(Debug, Clone)]
struct InvoiceRecord {
    id: i32,
    res_id: i32,
}

#[derive(Debug, Default)]
struct HotelState {
    customers: Vec<Customer>,
    reservations: Vec<ReservationRecord>,
    invoices: Vec<InvoiceRecord>,
}

impl HotelState {
    fn next_customer_id(&self) -> i32 {
        self.customers.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }
}

/// Shared in-memory hotel dataset implementing both store ports.
///
/// Clones share the same underlying state, so one instance can serve as
/// both the customer and reservation port of a test application.
#[derive(Clone, Default)]
pub struct InMemoryHotelStore {
    state: Arc<Mutex<HotelState>>,
}

impl InMemoryHotelStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a customer row with a fixed id.
    pub async fn seed_customer(&self, customer: Customer) {
        self.state.lock().await.customers.push(customer);
    }

    /// Seed a reservation row with a fixed id.
    pub async fn seed_reservation(&self, id: i32, cust_id: i32, room_no: i32) {
        self.state.lock().await.reservations.push(ReservationRecord {
            id,
            cust_id,
            room_no,
        });
    }

    /// Seed an invoice row with a fixed id.
    pub async fn seed_invoice(&self, id: i32, res_id: i32) {
        self.state
            .lock()
            .await
            .invoices
            .push(InvoiceRecord { id, res_id });
    }

    /// Number of customer rows currently held.
    pub async fn customer_count(&self) -> usize {
        self.state.lock().await.customers.len()
    }

    /// Number of reservation rows currently held.
    pub async fn reservation_count(&self) -> usize {
        self.state.lock().await.reservations.len()
    }

    /// Number of invoice rows currently held.
    pub async fn invoice_count(&self) -> usize {
        self.state.lock().await.invoices.len()
    }

    /// Room currently allocated to a reservation, if it exists.
    pub async fn room_for(&self, reservation_id: i32) -> Option<i32> {
        self.state
            .lock()
            .await
            .reservations
            .iter()
            .find(|r| r.id == reservation_id)
            .map(|r| r.room_no)
    }
}

#[async_trait]
impl CustomerStore for InMemoryHotelStore {
    async fn list(&self) -> Result<Vec<CustomerSummary>, RepositoryError> {
        let state = self.state.lock().await;
        let mut summaries: Vec<CustomerSummary> = state
            .customers
            .iter()
            .map(|c| CustomerSummary {
                id: c.id,
                name: c.name.clone(),
                city: c.city.clone(),
                phone: c.phone.clone(),
            })
            .collect();
        summaries.sort_by_key(|c| c.id);
        Ok(summaries)
    }

    async fn find_by_id(&self, id: i32) -> Result<Vec<Customer>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .customers
            .iter()
            .filter(|c| c.id == id)
            .cloned()
            .collect())
    }

    async fn find_by_city_prefix(&self, city: &str) -> Result<Vec<Customer>, RepositoryError> {
        let needle = city.to_lowercase();
        let state = self.state.lock().await;
        Ok(state
            .customers
            .iter()
            .filter(|c| c.city.to_lowercase().starts_with(&needle))
            .cloned()
            .collect())
    }

    async fn find_by_name_substring(&self, name: &str) -> Result<Vec<Customer>, RepositoryError> {
        let needle = name.to_lowercase();
        let state = self.state.lock().await;
        Ok(state
            .customers
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.customers.iter().any(|c| c.email == email))
    }

    async fn insert(&self, customer: NewCustomer) -> Result<i32, RepositoryError> {
        let mut state = self.state.lock().await;
        let id = state.next_customer_id();
        state.customers.push(Customer {
            id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
            city: customer.city,
            postcode: customer.postcode,
            country: customer.country,
        });
        Ok(id)
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.customers.iter().any(|c| c.id == id))
    }

    async fn update_contact(
        &self,
        id: i32,
        email: &str,
        phone: &str,
    ) -> Result<i32, RepositoryError> {
        let mut state = self.state.lock().await;
        let customer = state
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::query("record not found"))?;
        customer.email = email.to_owned();
        customer.phone = phone.to_owned();
        Ok(id)
    }

    async fn delete_cascade(&self, id: i32) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        let reservation_ids: Vec<i32> = state
            .reservations
            .iter()
            .filter(|r| r.cust_id == id)
            .map(|r| r.id)
            .collect();
        state
            .invoices
            .retain(|i| !reservation_ids.contains(&i.res_id));
        state.reservations.retain(|r| r.cust_id != id);
        state.customers.retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl ReservationStore for InMemoryHotelStore {
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.reservations.iter().any(|r| r.id == id))
    }

    async fn update_room(&self, id: i32, room_no: i32) -> Result<i32, RepositoryError> {
        let mut state = self.state.lock().await;
        let reservation = state
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RepositoryError::query("record not found"))?;
        reservation.room_no = room_no;
        Ok(id)
    }

    async fn delete_cascade(&self, id: i32) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        state.invoices.retain(|i| i.res_id != id);
        state.reservations.retain(|r| r.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[tokio::test]
    async fn insert_assigns_ids_above_seeded_rows() {
        let store = InMemoryHotelStore::new();
        store
            .seed_customer(customer(5, "Eve", "eve@example.com", "Paris"))
            .await;

        let id = store
            .insert(NewCustomer {
                name: "Frank".to_owned(),
                email: "frank@example.com".to_owned(),
                phone: "123".to_owned(),
                address: "2 Test Street".to_owned(),
                city: "Berlin".to_owned(),
                postcode: "10115".to_owned(),
                country: "DE".to_owned(),
            })
            .await
            .expect("insert succeeds");

        assert_eq!(id, 6);
        assert_eq!(store.customer_count().await, 2);
    }

    #[tokio::test]
    async fn customer_cascade_removes_dependent_rows() {
        let store = InMemoryHotelStore::new();
        store
            .seed_customer(customer(5, "Eve", "eve@example.com", "Paris"))
            .await;
        store.seed_reservation(11, 5, 101).await;
        store.seed_reservation(12, 5, 102).await;
        store.seed_invoice(21, 11).await;
        store.seed_invoice(22, 12).await;

        CustomerStore::delete_cascade(&store, 5)
            .await
            .expect("cascade succeeds");

        assert_eq!(store.customer_count().await, 0);
        assert_eq!(store.reservation_count().await, 0);
        assert_eq!(store.invoice_count().await, 0);
    }

    #[tokio::test]
    async fn reservation_cascade_leaves_other_reservations_alone() {
        let store = InMemoryHotelStore::new();
        store
            .seed_customer(customer(1, "Ada", "ada@example.com", "London"))
            .await;
        store.seed_reservation(11, 1, 101).await;
        store.seed_reservation(12, 1, 102).await;
        store.seed_invoice(21, 11).await;

        ReservationStore::delete_cascade(&store, 11)
            .await
            .expect("cascade succeeds");

        assert_eq!(store.reservation_count().await, 1);
        assert_eq!(store.invoice_count().await, 0);
        assert_eq!(store.room_for(12).await, Some(102));
    }

    #[tokio::test]
    async fn city_search_matches_prefix_case_insensitively() {
        let store = InMemoryHotelStore::new();
        store
            .seed_customer(customer(1, "Ada", "ada@example.com", "London"))
            .await;
        store
            .seed_customer(customer(2, "Bob", "bob@example.com", "Londonderry"))
            .await;
        store
            .seed_customer(customer(3, "Cai", "cai@example.com", "Paris"))
            .await;

        let matches = store
            .find_by_city_prefix("lon")
            .await
            .expect("search succeeds");

        assert_eq!(matches.len(), 2);
    }
}
