//! Driving port for submitting orders.
//!
//! Inbound adapters call [`OrderSubmissionCommand`] without knowing which
//! user service, store, or mail service backs it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Error, Order, OrderId, OrderRequest};

/// Driving port for the order submission workflow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderSubmissionCommand: Send + Sync {
    /// Validate, verify, and persist one order.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with:
    /// - `InvalidRequest` when the request fails validation.
    /// - `NotFound` when the referenced user does not exist.
    /// - `BadGateway` when the user could not be verified.
    /// - `ServiceUnavailable` or `InternalError` when persistence failed.
    async fn submit(&self, request: OrderRequest) -> Result<Order, Error>;
}

/// Fixture command that validates and echoes the request as order `1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureOrderSubmissionCommand;

#[async_trait]
impl OrderSubmissionCommand for FixtureOrderSubmissionCommand {
    async fn submit(&self, request: OrderRequest) -> Result<Order, Error> {
        let draft = request.validate()?;
        Ok(Order::from_draft(OrderId::new(1), draft, DateTime::<Utc>::UNIX_EPOCH))
    }
}
