//! PostgreSQL-backed `OrderRepository` implementation using Diesel ORM.
//!
//! The database assigns `id` (identity column) and `created_at` (default
//! `now()`); the inserted row is read back with `RETURNING`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{Order, OrderDraft, OrderId, OrderMode, ProductId, UserId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewOrderRow, OrderRow};
use super::pool::DbPool;
use super::schema::orders;

/// Diesel-backed implementation of the order repository port.
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn new_row(draft: &OrderDraft) -> NewOrderRow<'static> {
    NewOrderRow {
        user_id: draft.user_id.get(),
        product_id: draft.product_id.map(ProductId::get),
        mode: draft.mode.as_str(),
    }
}

/// Convert a database row into a domain order, revalidating every column.
fn row_to_order(row: OrderRow) -> Result<Order, OrderRepositoryError> {
    let OrderRow {
        id,
        user_id,
        product_id,
        mode,
        created_at,
    } = row;

    let user_id = UserId::new(user_id)
        .map_err(|err| OrderRepositoryError::query(format!("stored order {id}: {err}")))?;
    let product_id = product_id
        .map(|raw| {
            ProductId::new(raw).ok_or_else(|| {
                OrderRepositoryError::query(format!("stored order {id}: invalid product id {raw}"))
            })
        })
        .transpose()?;
    let mode = mode
        .parse::<OrderMode>()
        .map_err(|err| OrderRepositoryError::query(format!("stored order {id}: {err}")))?;

    Ok(Order {
        id: OrderId::new(id),
        user_id,
        product_id,
        mode,
        created_at,
    })
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn add_order(&self, draft: &OrderDraft) -> Result<Order, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(orders::table)
            .values(&new_row(draft))
            .returning(OrderRow::as_returning())
            .get_result::<OrderRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_order(row)
    }
}
