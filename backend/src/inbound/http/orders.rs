//! Order submission handlers.
//!
//! ```text
//! POST /order  Validate, verify, and persist a new order
//! ```

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, post, web};
use serde_json::json;

use crate::domain::{Error, OrderRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Maximum accepted request body size in bytes.
pub const MAX_ORDER_PAYLOAD_BYTES: usize = 16 * 1024;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let code = match &err {
        JsonPayloadError::ContentType => "unsupported_content_type",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "payload_too_large"
        }
        _ => "malformed_json",
    };
    Error::invalid_request(format!("invalid order payload: {err}"))
        .with_details(json!({ "code": code }))
        .into()
}

/// JSON extractor configuration reporting payload errors as `invalid_request`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use order_backend::inbound::http::orders::{json_config, submit_order};
///
/// let _app = App::new().app_data(json_config()).service(submit_order);
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_ORDER_PAYLOAD_BYTES)
        .error_handler(json_error)
}

/// Submit a new order.
///
/// # Errors
///
/// - `400 Bad Request`: malformed JSON or a request failing validation.
/// - `404 Not Found`: the referenced user does not exist.
/// - `502 Bad Gateway`: the user service could not verify the user.
/// - `500`/`503`: the order could not be persisted.
#[utoipa::path(
    post,
    path = "/order",
    request_body = crate::inbound::http::schemas::OrderRequestSchema,
    responses(
        (status = 200, description = "Order persisted", body = crate::inbound::http::schemas::OrderSchema),
        (status = 400, description = "Invalid request", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Unknown user", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Order could not be persisted", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 502, description = "User service failure", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Order storage unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "submitOrder"
)]
#[post("/order")]
pub async fn submit_order(
    state: web::Data<HttpState>,
    payload: web::Json<OrderRequest>,
) -> ApiResult<HttpResponse> {
    let order = state.orders.submit(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(order))
}

#[cfg(test)]
#[path = "orders_tests.rs"]
mod tests;
