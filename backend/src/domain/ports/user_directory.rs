//! Driven port for verifying users against the external user service.
//!
//! The domain only needs to know whether a user exists; adapters translate
//! transport details into [`UserDirectoryError`].

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

/// Upstream code reported when a not-found response carries no body.
pub const DEFAULT_NOT_FOUND_CODE: &str = "user_not_found";

define_port_error! {
    /// Errors surfaced while looking up a user.
    pub enum UserDirectoryError {
        /// The user service reported that the user does not exist.
        NotFound { message: String, code: String } =>
            "user not found: {message} ({code})",
        /// The user service answered with an unexpected status.
        Status { status: u16, message: String } =>
            "user service returned status {status}: {message}",
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "user service transport failed: {message}",
        /// The lookup exceeded the configured timeout.
        Timeout { message: String } =>
            "user service timeout: {message}",
        /// A success response could not be decoded.
        Decode { message: String } =>
            "user service response decode failed: {message}",
    }
}

impl UserDirectoryError {
    /// Whether the error means the user is absent rather than unverifiable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Port for resolving a user by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the user with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] when the user does not exist
    /// and another variant when the lookup itself failed.
    async fn get_user(&self, id: UserId) -> Result<User, UserDirectoryError>;
}
