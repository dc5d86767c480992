//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use order_backend::config::ServiceConfig;
use order_backend::outbound::persistence::{DbPool, PoolConfig};

/// Validated settings plus the resources built from them at startup.
pub struct ServerConfig {
    pub(crate) service: ServiceConfig,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(service: ServiceConfig) -> Self {
        Self {
            service,
            db_pool: None,
        }
    }

    /// Attach a database connection pool; orders are persisted to PostgreSQL
    /// instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.service.bind_addr
    }

    pub fn database(&self) -> Option<&PoolConfig> {
        self.service.database.as_ref()
    }
}
