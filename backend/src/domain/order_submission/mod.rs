//! Order submission workflow.
//!
//! [`OrderSubmissionService`] implements the [`OrderSubmissionCommand`]
//! driving port. Each submission runs one sequential pipeline:
//!
//! ```text
//! Received -> Validated -> UserVerified -> Persisted
//!                                       -> PersistFailed -> Notified
//! ```
//!
//! Every external call is awaited before the caller sees a result, including
//! the administrator alert on the failure path.

use std::num::NonZeroU32;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::ports::{
    AdminNotifier, OrderRepository, OrderRepositoryError, OrderSubmissionCommand, UserDirectory,
    UserDirectoryError,
};
use crate::domain::{
    AdminAlert, EmailAddress, Error, Order, OrderDraft, OrderRequest, TraceId, User, UserId,
};

/// Subject line of the alert sent when an order cannot be saved.
pub const PERSISTENCE_FAILURE_SUBJECT: &str = "Order could not be saved";

/// Whether and how administrators hear about persistence failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationSettings {
    /// Persistence failures are only logged.
    Disabled,
    /// Persistence failures are mailed to `recipient`.
    Enabled {
        recipient: EmailAddress,
        /// Delivery attempts per failure; `1` means no retry.
        max_attempts: NonZeroU32,
    },
}

impl NotificationSettings {
    /// Enable notifications with a single delivery attempt.
    pub fn enabled(recipient: EmailAddress) -> Self {
        Self::Enabled {
            recipient,
            max_attempts: NonZeroU32::MIN,
        }
    }

    /// Override the attempt budget. Has no effect when disabled.
    #[must_use]
    pub fn with_max_attempts(self, attempts: NonZeroU32) -> Self {
        match self {
            Self::Enabled { recipient, .. } => Self::Enabled {
                recipient,
                max_attempts: attempts,
            },
            Self::Disabled => Self::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }
}

/// Order submission service implementing the driving port.
pub struct OrderSubmissionService<U: ?Sized, R: ?Sized, N: ?Sized> {
    users: Arc<U>,
    orders: Arc<R>,
    notifier: Arc<N>,
    notifications: NotificationSettings,
}

impl<U: ?Sized, R: ?Sized, N: ?Sized> OrderSubmissionService<U, R, N> {
    /// Create a service over the given adapters.
    pub fn new(
        users: Arc<U>,
        orders: Arc<R>,
        notifier: Arc<N>,
        notifications: NotificationSettings,
    ) -> Self {
        Self {
            users,
            orders,
            notifier,
            notifications,
        }
    }
}

impl<U, R, N> OrderSubmissionService<U, R, N>
where
    U: UserDirectory + ?Sized,
    R: OrderRepository + ?Sized,
    N: AdminNotifier + ?Sized,
{
    fn map_directory_error(user_id: UserId, error: UserDirectoryError) -> Error {
        match error {
            UserDirectoryError::NotFound { message, code } => Error::not_found(message)
                .with_details(json!({
                    "userId": user_id.get(),
                    "code": code,
                })),
            other => Error::bad_gateway(format!("user verification failed: {other}"))
                .with_details(json!({
                    "userId": user_id.get(),
                    "code": "user_service_failure",
                })),
        }
    }

    fn map_repository_error(error: OrderRepositoryError) -> Error {
        match error {
            OrderRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("order storage unavailable: {message}"))
            }
            OrderRepositoryError::Query { message } => {
                Error::internal(format!("order storage error: {message}"))
            }
        }
    }

    fn failure_alert_body(draft: &OrderDraft, user: &User, error: &OrderRepositoryError) -> String {
        let product = draft
            .product_id
            .map_or_else(|| "none".to_owned(), |id| id.get().to_string());
        let trace = TraceId::current().map_or_else(|| "unavailable".to_owned(), |id| id.to_string());
        format!(
            "An order could not be saved.\n\n\
             Error: {error}\n\
             User: {} ({})\n\
             Product: {product}\n\
             Mode: {}\n\
             Trace ID: {trace}\n",
            user.id, user.name, draft.mode,
        )
    }

    async fn notify_persistence_failure(
        &self,
        draft: &OrderDraft,
        user: &User,
        failure: &OrderRepositoryError,
    ) {
        let NotificationSettings::Enabled {
            recipient,
            max_attempts,
        } = &self.notifications
        else {
            debug!(stage = "persist_failed", "admin notifications disabled; skipping alert");
            return;
        };

        let alert = match AdminAlert::new(
            PERSISTENCE_FAILURE_SUBJECT,
            Self::failure_alert_body(draft, user, failure),
            recipient.clone(),
        ) {
            Ok(alert) => alert,
            Err(err) => {
                error!(error = %err, "failed to build admin alert");
                return;
            }
        };

        let attempts = max_attempts.get();
        for attempt in 1..=attempts {
            match self.notifier.notify_admin(&alert).await {
                Ok(()) => {
                    info!(
                        stage = "notified",
                        attempt,
                        recipient = %recipient,
                        "admin notified of persistence failure"
                    );
                    return;
                }
                Err(err) => {
                    warn!(
                        attempt,
                        max_attempts = attempts,
                        error = %err,
                        "admin notification attempt failed"
                    );
                }
            }
        }
        error!(attempts, recipient = %recipient, "admin notification abandoned");
    }
}

#[async_trait]
impl<U, R, N> OrderSubmissionCommand for OrderSubmissionService<U, R, N>
where
    U: UserDirectory + ?Sized,
    R: OrderRepository + ?Sized,
    N: AdminNotifier + ?Sized,
{
    #[instrument(skip_all, fields(user_id = ?request.user_id, mode = ?request.mode))]
    async fn submit(&self, request: OrderRequest) -> Result<Order, Error> {
        debug!(stage = "received", "order submission received");

        let draft = request.validate().map_err(|err| {
            info!(
                stage = "rejected",
                field = err.field(),
                code = err.code(),
                "order request invalid"
            );
            Error::from(err)
        })?;
        debug!(stage = "validated", "order request validated");

        let user = self.users.get_user(draft.user_id).await.map_err(|err| {
            warn!(stage = "verification_failed", error = %err, "user verification failed");
            Self::map_directory_error(draft.user_id, err)
        })?;
        debug!(stage = "user_verified", user_id = %user.id, "user verified");

        match self.orders.add_order(&draft).await {
            Ok(order) => {
                info!(stage = "persisted", order_id = %order.id, "order persisted");
                Ok(order)
            }
            Err(err) => {
                warn!(stage = "persist_failed", error = %err, "order persistence failed");
                self.notify_persistence_failure(&draft, &user, &err).await;
                Err(Self::map_repository_error(err))
            }
        }
    }
}
