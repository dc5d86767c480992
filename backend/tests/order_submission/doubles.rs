//! Repository double that can be switched into a failing mode.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockable::DefaultClock;
use order_backend::domain::ports::{OrderRepository, OrderRepositoryError};
use order_backend::domain::{Order, OrderDraft};
use order_backend::outbound::memory::InMemoryOrderRepository;

#[derive(Clone)]
pub(crate) struct SwitchableOrderRepository {
    inner: Arc<InMemoryOrderRepository>,
    failure: Arc<Mutex<Option<OrderRepositoryError>>>,
    attempts: Arc<Mutex<usize>>,
}

impl SwitchableOrderRepository {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(InMemoryOrderRepository::new(Arc::new(DefaultClock))),
            failure: Arc::new(Mutex::new(None)),
            attempts: Arc::new(Mutex::new(0)),
        }
    }

    pub(crate) fn fail_with(&self, error: OrderRepositoryError) {
        *self.failure.lock().expect("failure lock") = Some(error);
    }

    pub(crate) fn stored(&self) -> Vec<Order> {
        self.inner.snapshot()
    }

    pub(crate) fn attempts(&self) -> usize {
        *self.attempts.lock().expect("attempts lock")
    }
}

#[async_trait]
impl OrderRepository for SwitchableOrderRepository {
    async fn add_order(&self, draft: &OrderDraft) -> Result<Order, OrderRepositoryError> {
        *self.attempts.lock().expect("attempts lock") += 1;
        let failure = self.failure.lock().expect("failure lock").clone();
        match failure {
            Some(error) => Err(error),
            None => self.inner.add_order(draft).await,
        }
    }
}
