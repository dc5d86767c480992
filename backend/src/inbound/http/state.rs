//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::OrderSubmissionCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub orders: Arc<dyn OrderSubmissionCommand>,
}

impl HttpState {
    /// Construct state from the order submission port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use order_backend::domain::ports::FixtureOrderSubmissionCommand;
    /// use order_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureOrderSubmissionCommand));
    /// let _orders = state.orders.clone();
    /// ```
    pub fn new(orders: Arc<dyn OrderSubmissionCommand>) -> Self {
        Self { orders }
    }
}
