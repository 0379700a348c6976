//! PostgreSQL-backed [`ReservationStore`] implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{RepositoryError, ReservationStore};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::{invoices, reservations};

/// Diesel-backed reservation store.
#[derive(Clone)]
pub struct DieselReservationStore {
    pool: DbPool,
}

impl DieselReservationStore {
    /// Create a new store adapter over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for DieselReservationStore {
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let matches: i64 = reservations::table
            .filter(reservations::id.eq(id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(matches > 0)
    }

    async fn update_room(&self, id: i32, room_no: i32) -> Result<i32, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(reservations::table.filter(reservations::id.eq(id)))
            .set(reservations::room_no.eq(room_no))
            .returning(reservations::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete_cascade(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                diesel::delete(invoices::table.filter(invoices::res_id.eq(id)))
                    .execute(conn)
                    .await?;
                diesel::delete(reservations::table.filter(reservations::id.eq(id)))
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
