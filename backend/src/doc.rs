//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the order submission endpoint, the health probes, and
//! the schema wrappers from [`crate::inbound::http::schemas`]. The document is
//! served through Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, OrderModeSchema, OrderRequestSchema, OrderSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order submission API",
        description = "Submit orders for verified users; administrators are alerted when an order cannot be saved."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::orders::submit_order,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        OrderRequestSchema,
        OrderSchema,
        OrderModeSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "orders", description = "Order submission"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
