//! Volatile `OrderRepository` backed by a mutex-guarded vector.
//!
//! Identifiers are assigned sequentially from 1 and timestamps come from the
//! injected clock. Contents are lost on restart.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{Order, OrderDraft, OrderId};

/// In-memory order store.
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryOrderRepository {
    /// Create an empty repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use order_backend::outbound::memory::InMemoryOrderRepository;
    ///
    /// let repo = InMemoryOrderRepository::new(Arc::new(DefaultClock));
    /// assert!(repo.snapshot().is_empty());
    /// ```
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            clock,
        }
    }

    /// Copy of every stored order in insertion order. Empty if the store is
    /// poisoned.
    pub fn snapshot(&self) -> Vec<Order> {
        self.lock().map(|orders| orders.clone()).unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Order>>, OrderRepositoryError> {
        self.orders
            .lock()
            .map_err(|_| OrderRepositoryError::query("in-memory order store poisoned"))
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn add_order(&self, draft: &OrderDraft) -> Result<Order, OrderRepositoryError> {
        let mut orders = self.lock()?;
        let next_id = i64::try_from(orders.len())
            .ok()
            .and_then(|len| len.checked_add(1))
            .ok_or_else(|| OrderRepositoryError::query("order identifiers exhausted"))?;
        let order = Order::from_draft(OrderId::new(next_id), *draft, self.clock.utc());
        orders.push(order.clone());
        Ok(order)
    }
}
