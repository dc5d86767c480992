//! Driven port for delivering administrator alerts through the mail service.

use async_trait::async_trait;

use crate::domain::AdminAlert;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while dispatching an alert.
    pub enum AdminNotifierError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "mail service transport failed: {message}",
        /// The dispatch exceeded the configured timeout.
        Timeout { message: String } =>
            "mail service timeout: {message}",
        /// The mail service refused the alert.
        Rejected { status: u16, message: String } =>
            "mail service rejected alert with status {status}: {message}",
    }
}

/// Port for sending one alert to an administrator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminNotifier: Send + Sync {
    /// Deliver `alert`. Success means the mail service accepted it.
    async fn notify_admin(&self, alert: &AdminAlert) -> Result<(), AdminNotifierError>;
}

/// Fixture notifier that accepts and discards every alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAdminNotifier;

#[async_trait]
impl AdminNotifier for FixtureAdminNotifier {
    async fn notify_admin(&self, _alert: &AdminAlert) -> Result<(), AdminNotifierError> {
        Ok(())
    }
}
