//! Reqwest-backed user directory adapter.
//!
//! This adapter owns transport details only: URL construction, timeout and
//! HTTP error mapping, and JSON decoding into domain users.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{UpstreamErrorDto, UserDto};
use crate::domain::ports::{DEFAULT_NOT_FOUND_CODE, UserDirectory, UserDirectoryError};
use crate::domain::{User, UserId};
use crate::outbound::http_body::{
    MAX_UPSTREAM_BODY_BYTES, read_capped, read_error_body, status_message,
};

/// User directory that performs `GET {base}/users/{id}` lookups.
pub struct HttpUserDirectory {
    client: Client,
    base_url: Url,
}

impl HttpUserDirectory {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn get_user(&self, id: UserId) -> Result<User, UserDirectoryError> {
        let url = user_url(&self.base_url, id)?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = read_error_body(response).await;
            return Err(map_status_error(id, status, &body));
        }

        let body = read_capped(response, MAX_UPSTREAM_BODY_BYTES)
            .await
            .map_err(map_transport_error)?;
        if body.truncated {
            return Err(UserDirectoryError::decode(format!(
                "user payload exceeds {MAX_UPSTREAM_BODY_BYTES} bytes"
            )));
        }
        parse_user(&body.bytes)
    }
}

fn user_url(base: &Url, id: UserId) -> Result<Url, UserDirectoryError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| UserDirectoryError::transport(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .push("users")
        .push(&id.to_string());
    Ok(url)
}

fn parse_user(body: &[u8]) -> Result<User, UserDirectoryError> {
    let decoded: UserDto = serde_json::from_slice(body).map_err(|error| {
        UserDirectoryError::decode(format!("invalid user JSON payload: {error}"))
    })?;
    decoded.into_domain().map_err(UserDirectoryError::decode)
}

fn map_transport_error(error: reqwest::Error) -> UserDirectoryError {
    if error.is_timeout() {
        UserDirectoryError::timeout(error.to_string())
    } else {
        UserDirectoryError::transport(error.to_string())
    }
}

fn map_status_error(id: UserId, status: StatusCode, body: &[u8]) -> UserDirectoryError {
    match status {
        StatusCode::NOT_FOUND => {
            let upstream: UpstreamErrorDto = serde_json::from_slice(body).unwrap_or_default();
            UserDirectoryError::not_found(
                upstream
                    .message
                    .unwrap_or_else(|| format!("user {id} not found")),
                upstream
                    .code
                    .unwrap_or_else(|| DEFAULT_NOT_FOUND_CODE.to_owned()),
            )
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserDirectoryError::timeout(status_message(status, body))
        }
        _ => UserDirectoryError::status(status.as_u16(), status_message(status, body)),
    }
}
