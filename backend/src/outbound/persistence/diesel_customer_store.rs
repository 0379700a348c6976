//! PostgreSQL-backed [`CustomerStore`] implementation using Diesel.
//!
//! Every operation is a parameterized Diesel query; user input never
//! reaches the SQL text. The cascading delete runs inside one transaction
//! so a failure part-way cannot leave orphaned reservations or invoices.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{CustomerStore, RepositoryError};
use crate::domain::{Customer, CustomerSummary, NewCustomer};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ContactUpdateRow, CustomerRow, CustomerSummaryRow, NewCustomerRow};
use super::pool::DbPool;
use super::schema::{customers, invoices, reservations};

/// Diesel-backed customer store.
#[derive(Clone)]
pub struct DieselCustomerStore {
    pool: DbPool,
}

impl DieselCustomerStore {
    /// Create a new store adapter over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for DieselCustomerStore {
    async fn list(&self) -> Result<Vec<CustomerSummary>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CustomerSummaryRow> = customers::table
            .order(customers::id.asc())
            .select(CustomerSummaryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(CustomerSummary::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Vec<Customer>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CustomerRow> = customers::table
            .filter(customers::id.eq(id))
            .select(CustomerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_city_prefix(&self, city: &str) -> Result<Vec<Customer>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CustomerRow> = customers::table
            .filter(customers::city.ilike(format!("{city}%")))
            .select(CustomerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_name_substring(&self, name: &str) -> Result<Vec<Customer>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CustomerRow> = customers::table
            .filter(customers::name.ilike(format!("%{name}%")))
            .select(CustomerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let matches: i64 = customers::table
            .filter(customers::email.eq(email))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(matches > 0)
    }

    async fn insert(&self, customer: NewCustomer) -> Result<i32, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewCustomerRow {
            name: &customer.name,
            email: &customer.email,
            phone: &customer.phone,
            address: &customer.address,
            city: &customer.city,
            postcode: &customer.postcode,
            country: &customer.country,
        };

        diesel::insert_into(customers::table)
            .values(&row)
            .returning(customers::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let matches: i64 = customers::table
            .filter(customers::id.eq(id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(matches > 0)
    }

    async fn update_contact(
        &self,
        id: i32,
        email: &str,
        phone: &str,
    ) -> Result<i32, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(customers::table.filter(customers::id.eq(id)))
            .set(&ContactUpdateRow { email, phone })
            .returning(customers::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete_cascade(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                let reservation_ids = reservations::table
                    .filter(reservations::cust_id.eq(id))
                    .select(reservations::id);

                diesel::delete(invoices::table.filter(invoices::res_id.eq_any(reservation_ids)))
                    .execute(conn)
                    .await?;
                diesel::delete(reservations::table.filter(reservations::cust_id.eq(id)))
                    .execute(conn)
                    .await?;
                diesel::delete(customers::table.filter(customers::id.eq(id)))
                    .execute(conn)
                    .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
