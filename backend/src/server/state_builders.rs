//! Builders wiring outbound adapters into the order submission service.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use order_backend::domain::OrderSubmissionService;
use order_backend::domain::ports::{
    AdminNotifier, FixtureAdminNotifier, OrderRepository, OrderSubmissionCommand, UserDirectory,
};
use order_backend::inbound::http::state::HttpState;
use order_backend::outbound::mail::HttpAdminNotifier;
use order_backend::outbound::memory::InMemoryOrderRepository;
use order_backend::outbound::persistence::DieselOrderRepository;
use order_backend::outbound::user_service::HttpUserDirectory;

use super::ServerConfig;

fn client_error(adapter: &str, err: reqwest::Error) -> std::io::Error {
    std::io::Error::other(format!("failed to build {adapter} client: {err}"))
}

fn build_order_repository(config: &ServerConfig) -> Arc<dyn OrderRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselOrderRepository::new(pool.clone())),
        None => Arc::new(InMemoryOrderRepository::new(Arc::new(DefaultClock))),
    }
}

fn build_notifier(config: &ServerConfig) -> std::io::Result<Arc<dyn AdminNotifier>> {
    let service = &config.service;
    match &service.mail_service_url {
        Some(url) => Ok(Arc::new(
            HttpAdminNotifier::new(url.clone(), service.upstream_timeout)
                .map_err(|err| client_error("mail service", err))?,
        )),
        None => Ok(Arc::new(FixtureAdminNotifier)),
    }
}

/// Build the order submission port from configured adapters.
///
/// # Errors
/// Returns [`std::io::Error`] when an HTTP client cannot be constructed.
pub(super) fn build_order_submission(
    config: &ServerConfig,
) -> std::io::Result<Arc<dyn OrderSubmissionCommand>> {
    let service = &config.service;
    let users: Arc<dyn UserDirectory> = Arc::new(
        HttpUserDirectory::new(service.user_service_url.clone(), service.upstream_timeout)
            .map_err(|err| client_error("user service", err))?,
    );
    let orders = build_order_repository(config);
    let notifier = build_notifier(config)?;

    info!(
        persistent = config.db_pool.is_some(),
        notifications = service.notifications.is_enabled(),
        "order submission service wired"
    );
    Ok(Arc::new(OrderSubmissionService::new(
        users,
        orders,
        notifier,
        service.notifications.clone(),
    )))
}

/// Build the shared HTTP state.
pub(super) fn build_http_state(
    config: &ServerConfig,
) -> std::io::Result<web::Data<HttpState>> {
    Ok(web::Data::new(HttpState::new(build_order_submission(
        config,
    )?)))
}
