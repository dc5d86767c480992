//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`UserDirectory`], [`OrderRepository`], [`AdminNotifier`])
//! describe what the workflow needs from the outside world; each exposes a
//! typed error so adapters map their failures predictably. The driving port
//! ([`OrderSubmissionCommand`]) is what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod admin_notifier;
mod order_repository;
mod order_submission;
mod user_directory;

#[cfg(test)]
pub use admin_notifier::MockAdminNotifier;
pub use admin_notifier::{AdminNotifier, AdminNotifierError, FixtureAdminNotifier};
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{OrderRepository, OrderRepositoryError};
#[cfg(test)]
pub use order_submission::MockOrderSubmissionCommand;
pub use order_submission::{FixtureOrderSubmissionCommand, OrderSubmissionCommand};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{DEFAULT_NOT_FOUND_CODE, UserDirectory, UserDirectoryError};
