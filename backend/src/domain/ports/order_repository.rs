//! Driven port for order persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Order, OrderDraft};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by order repository adapters.
    pub enum OrderRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "order repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "order repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a validated order, assigning its identifier and timestamp.
    ///
    /// Every successful call creates a new order, even for identical drafts.
    async fn add_order(&self, draft: &OrderDraft) -> Result<Order, OrderRepositoryError>;
}
