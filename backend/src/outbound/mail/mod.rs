//! Mail service outbound adapter.
//!
//! A thin HTTP implementation of the `AdminNotifier` port.

mod dto;
mod http_notifier;

pub use http_notifier::HttpAdminNotifier;
