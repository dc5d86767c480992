//! Administrative alerts dispatched when an order cannot be persisted.
//!
//! Alerts are ephemeral: they are constructed, handed to the notifier port,
//! and dropped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors for [`EmailAddress`] and [`AdminAlert`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminAlertValidationError {
    #[error("alert subject must not be empty")]
    EmptySubject,
    #[error("alert body must not be empty")]
    EmptyBody,
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Syntactically valid email address.
///
/// ## Invariants
/// - Exactly one `@` separating a non-empty local part from the domain.
/// - The domain holds at least two dot-separated labels, none empty.
/// - No whitespace anywhere.
///
/// # Examples
/// ```
/// use order_backend::domain::EmailAddress;
///
/// assert!(EmailAddress::new("ops@example.com").is_ok());
/// assert!(EmailAddress::new("ops@localhost").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an address.
    pub fn new(raw: impl Into<String>) -> Result<Self, AdminAlertValidationError> {
        let raw = raw.into();
        if is_valid_email(&raw) {
            Ok(Self(raw))
        } else {
            Err(AdminAlertValidationError::InvalidEmail(raw))
        }
    }

    /// Borrow the address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

impl TryFrom<String> for EmailAddress {
    type Error = AdminAlertValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl FromStr for EmailAddress {
    type Err = AdminAlertValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Alert addressed to an administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAlert {
    subject: String,
    body: String,
    recipient: EmailAddress,
}

impl AdminAlert {
    /// Build an alert, rejecting blank subjects and bodies.
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        recipient: EmailAddress,
    ) -> Result<Self, AdminAlertValidationError> {
        let subject = subject.into();
        let body = body.into();
        if subject.trim().is_empty() {
            return Err(AdminAlertValidationError::EmptySubject);
        }
        if body.trim().is_empty() {
            return Err(AdminAlertValidationError::EmptyBody);
        }
        Ok(Self {
            subject,
            body,
            recipient,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn recipient(&self) -> &EmailAddress {
        &self.recipient
    }
}
