//! Backend entry-point: loads configuration, wires adapters, and serves the
//! order submission API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use order_backend::config::OrderServiceSettings;
use ortho_config::OrthoConfig;
use order_backend::inbound::http::health::HealthState;
use order_backend::outbound::persistence::DbPool;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = OrderServiceSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load configuration: {err}")))?;
    let service = settings
        .validate()
        .map_err(|err| std::io::Error::other(format!("invalid configuration: {err}")))?;

    let mut config = ServerConfig::new(service);
    if let Some(pool_config) = config.database().cloned() {
        info!(
            max_connections = pool_config.max_size(),
            "connecting to PostgreSQL"
        );
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|err| std::io::Error::other(format!("database pool: {err}")))?;
        config = config.with_db_pool(pool);
    } else {
        warn!("ORDERS_DATABASE_URL not set; orders are kept in memory");
    }

    let health_state = web::Data::new(HealthState::new());
    let bind_addr = config.bind_addr();
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "order service listening");
    let result = server.await;
    health_state.mark_unhealthy();
    info!("order service stopped");
    result
}
