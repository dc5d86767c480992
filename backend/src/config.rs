//! Service configuration loaded via OrthoConfig.
//!
//! [`OrderServiceSettings`] is the raw layer merged from CLI flags and
//! `ORDERS_*` environment variables. [`OrderServiceSettings::validate`] turns
//! it into a typed [`ServiceConfig`]; startup aborts when that fails.

use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::{EmailAddress, NotificationSettings};
use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_NOTIFICATION_MAX_ATTEMPTS: u32 = 1;

/// Raw configuration values for the order service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ORDERS")]
pub struct OrderServiceSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; orders are kept in memory when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Idle connections the pool keeps open.
    pub db_min_idle: Option<u32>,
    /// How long a request waits for a pooled connection.
    pub db_connection_timeout_ms: Option<u64>,
    /// Base URL of the user service.
    pub user_service_url: Option<String>,
    /// Full URL of the mail-dispatch endpoint.
    pub mail_service_url: Option<String>,
    /// Mail an administrator when an order cannot be saved.
    #[ortho_config(default = false)]
    pub notifications_enabled: bool,
    /// Administrator address for failure alerts.
    pub admin_email: Option<String>,
    /// Timeout applied to every user and mail service request.
    pub upstream_timeout_ms: Option<u64>,
    /// Delivery attempts per alert.
    pub notification_max_attempts: Option<u32>,
}

/// Reasons configuration fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} is invalid: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    fn missing(field: &'static str) -> Self {
        Self::Missing { field }
    }

    fn invalid(field: &'static str, message: impl ToString) -> Self {
        Self::Invalid {
            field,
            message: message.to_string(),
        }
    }
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    /// Absent when orders are kept in memory.
    pub database: Option<PoolConfig>,
    pub user_service_url: Url,
    /// Present whenever notifications are enabled.
    pub mail_service_url: Option<Url>,
    pub notifications: NotificationSettings,
    pub upstream_timeout: Duration,
}

fn parse_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|err| ConfigError::invalid(field, err))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::invalid(
            field,
            format!("unsupported scheme {other}"),
        )),
    }
}

impl OrderServiceSettings {
    /// Validate raw settings into a [`ServiceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first missing or malformed field.
    pub fn validate(&self) -> Result<ServiceConfig, ConfigError> {
        let bind_addr = self
            .bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::invalid("bind_addr", err))?;

        let user_service_url = self
            .user_service_url
            .as_deref()
            .ok_or(ConfigError::missing("user_service_url"))
            .and_then(|raw| parse_url("user_service_url", raw))?;

        let mail_service_url = self
            .mail_service_url
            .as_deref()
            .map(|raw| parse_url("mail_service_url", raw))
            .transpose()?;

        let timeout_ms = self
            .upstream_timeout_ms
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_MS);
        if timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "upstream_timeout_ms",
                "must be greater than zero",
            ));
        }

        let notifications = self.notification_settings(mail_service_url.is_some())?;
        let database = self.pool_config()?;

        Ok(ServiceConfig {
            bind_addr,
            database,
            user_service_url,
            mail_service_url,
            notifications,
            upstream_timeout: Duration::from_millis(timeout_ms),
        })
    }

    fn pool_config(&self) -> Result<Option<PoolConfig>, ConfigError> {
        let Some(url) = self
            .database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
        else {
            return Ok(None);
        };
        let mut config = PoolConfig::new(url);

        if let Some(max_size) = self.db_max_connections {
            if max_size == 0 {
                return Err(ConfigError::invalid(
                    "db_max_connections",
                    "must be at least 1",
                ));
            }
            config = config.with_max_size(max_size);
        }

        match self.db_min_idle {
            Some(min_idle) if min_idle > config.max_size() => {
                return Err(ConfigError::invalid(
                    "db_min_idle",
                    format!("must not exceed {} connections", config.max_size()),
                ));
            }
            Some(min_idle) => config = config.with_min_idle(Some(min_idle)),
            None => {
                let clamped = config.min_idle().map(|idle| idle.min(config.max_size()));
                config = config.with_min_idle(clamped);
            }
        }

        if let Some(timeout_ms) = self.db_connection_timeout_ms {
            if timeout_ms == 0 {
                return Err(ConfigError::invalid(
                    "db_connection_timeout_ms",
                    "must be greater than zero",
                ));
            }
            config = config.with_connection_timeout(Duration::from_millis(timeout_ms));
        }

        Ok(Some(config))
    }

    fn notification_settings(
        &self,
        has_mail_service: bool,
    ) -> Result<NotificationSettings, ConfigError> {
        if !self.notifications_enabled {
            return Ok(NotificationSettings::Disabled);
        }
        if !has_mail_service {
            return Err(ConfigError::missing("mail_service_url"));
        }
        let recipient = self
            .admin_email
            .as_deref()
            .ok_or(ConfigError::missing("admin_email"))
            .and_then(|raw| {
                EmailAddress::new(raw).map_err(|err| ConfigError::invalid("admin_email", err))
            })?;
        let attempts = self
            .notification_max_attempts
            .unwrap_or(DEFAULT_NOTIFICATION_MAX_ATTEMPTS);
        let max_attempts = NonZeroU32::new(attempts).ok_or_else(|| {
            ConfigError::invalid("notification_max_attempts", "must be at least 1")
        })?;
        Ok(NotificationSettings::enabled(recipient).with_max_attempts(max_attempts))
    }
}

#[cfg(test)]
mod tests;
