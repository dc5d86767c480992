//! Reqwest-backed administrator notifier.
//!
//! Alerts are POSTed as JSON to a single dispatch endpoint. Any 2xx status,
//! typically `202 Accepted`, counts as delivery.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::MailRequestDto;
use crate::domain::AdminAlert;
use crate::domain::ports::{AdminNotifier, AdminNotifierError};
use crate::outbound::http_body::{read_error_body, status_message};

/// Notifier that POSTs alerts to the mail service.
pub struct HttpAdminNotifier {
    client: Client,
    endpoint: Url,
}

impl HttpAdminNotifier {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl AdminNotifier for HttpAdminNotifier {
    async fn notify_admin(&self, alert: &AdminAlert) -> Result<(), AdminNotifierError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&MailRequestDto::from(alert))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = read_error_body(response).await;
        Err(map_status_error(status, &body))
    }
}

fn map_transport_error(error: reqwest::Error) -> AdminNotifierError {
    if error.is_timeout() {
        AdminNotifierError::timeout(error.to_string())
    } else {
        AdminNotifierError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AdminNotifierError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            AdminNotifierError::timeout(status_message(status, body))
        }
        _ => AdminNotifierError::rejected(status.as_u16(), status_message(status, body)),
    }
}
