//! Domain primitives, ports, and the order submission workflow.
//!
//! Purpose: define strongly typed entities shared by the HTTP and adapter
//! layers, and the service that coordinates them. Types document their
//! invariants and serialisation contracts in their own Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifiers.
//! - OrderRequest / OrderDraft / Order: submission, validated payload, and
//!   persisted order.
//! - User / UserId: identity returned by the user service.
//! - AdminAlert / EmailAddress: administrator notifications.
//! - OrderSubmissionService: implementation of the submission driving port.

pub mod admin_alert;
pub mod error;
pub mod order;
pub mod order_submission;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::admin_alert::{AdminAlert, AdminAlertValidationError, EmailAddress};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::order::{
    Order, OrderDraft, OrderId, OrderMode, OrderRequest, OrderValidationError, ProductId,
    UnknownOrderMode,
};
pub use self::order_submission::{
    NotificationSettings, OrderSubmissionService, PERSISTENCE_FAILURE_SUBJECT,
};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use order_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such order"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
