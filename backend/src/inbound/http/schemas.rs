//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter layer
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The referenced user does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The user service could not verify the user.
    #[schema(rename = "bad_gateway")]
    BadGateway,
    /// Order storage is temporarily unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "productId is required when mode is approved")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(rename = "traceId", example = "6f9619ff-8b86-d011-b42d-00c04fc964ff")]
    trace_id: Option<String>,
    /// Supplementary error details, such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::OrderMode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::OrderMode)]
pub enum OrderModeSchema {
    #[schema(rename = "draft")]
    Draft,
    #[schema(rename = "pending")]
    Pending,
    #[schema(rename = "approved")]
    Approved,
    #[schema(rename = "canceled")]
    Canceled,
}

/// OpenAPI schema for [`crate::domain::OrderRequest`].
#[derive(ToSchema)]
#[schema(as = crate::domain::OrderRequest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OrderRequestSchema {
    /// Positive identifier of the ordering user.
    #[schema(rename = "userId", example = 1, minimum = 1)]
    user_id: i64,
    /// Positive product identifier; required unless `mode` is `draft`.
    #[schema(rename = "productId", example = 2, minimum = 1)]
    product_id: Option<i64>,
    /// Requested order mode.
    mode: OrderModeSchema,
}

/// OpenAPI schema for [`crate::domain::Order`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Order)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OrderSchema {
    /// Identifier assigned at creation.
    #[schema(example = 42)]
    id: i64,
    #[schema(rename = "userId", example = 1)]
    user_id: i64,
    /// Omitted for drafts without a product.
    #[schema(rename = "productId", example = 2)]
    product_id: Option<i64>,
    mode: OrderModeSchema,
    /// RFC 3339 creation timestamp.
    #[schema(rename = "createdAt", value_type = String, format = DateTime)]
    created_at: String,
}
