//! Order aggregate, its submission request, and request validation.
//!
//! An [`OrderRequest`] is the raw, transport-neutral submission. Validation
//! turns it into an [`OrderDraft`], the normalized payload handed to the
//! repository, which in turn assigns the identity and creation time that make
//! up a persisted [`Order`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{Error, UserId};

/// Lifecycle mode requested for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderMode {
    /// Work in progress; the only mode that may omit a product.
    Draft,
    /// Submitted and awaiting approval.
    Pending,
    /// Approved for fulfilment.
    Approved,
    /// Withdrawn before fulfilment.
    Canceled,
}

impl OrderMode {
    /// Wire representation of the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Canceled => "canceled",
        }
    }

    /// Whether orders in this mode must reference a product.
    pub const fn requires_product(self) -> bool {
        !matches!(self, Self::Draft)
    }
}

impl fmt::Display for OrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order mode: {0}")]
pub struct UnknownOrderMode(pub String);

impl FromStr for OrderMode {
    type Err = UnknownOrderMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "canceled" => Ok(Self::Canceled),
            other => Err(UnknownOrderMode(other.to_owned())),
        }
    }
}

/// Positive product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Construct a product identifier, rejecting non-positive values.
    pub fn new(id: i64) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    /// Raw numeric value.
    pub fn get(self) -> i64 {
        self.0
    }
}

/// Identifier assigned to an order by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Wrap a repository-assigned identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw numeric value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons an [`OrderRequest`] fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
    #[error("{field} must be a positive integer")]
    NonPositiveId { field: &'static str, value: i64 },
    #[error("mode must be one of draft, pending, approved, canceled")]
    UnknownMode { value: String },
    #[error("productId is required when mode is {mode}")]
    ProductRequired { mode: OrderMode },
}

impl OrderValidationError {
    /// Name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::NonPositiveId { field, .. } => *field,
            Self::UnknownMode { .. } => FIELD_MODE,
            Self::ProductRequired { .. } => FIELD_PRODUCT_ID,
        }
    }

    /// Machine-readable validation code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } | Self::ProductRequired { .. } => "missing_field",
            Self::NonPositiveId { .. } => "invalid_id",
            Self::UnknownMode { .. } => "unknown_mode",
        }
    }
}

impl From<OrderValidationError> for Error {
    fn from(err: OrderValidationError) -> Self {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": err.field(),
            "code": err.code(),
        }))
    }
}

const FIELD_USER_ID: &str = "userId";
const FIELD_PRODUCT_ID: &str = "productId";
const FIELD_MODE: &str = "mode";

/// Raw order submission as received from a client.
///
/// Every field is optional here so validation, not deserialisation, decides
/// what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Referenced user.
    pub user_id: Option<i64>,
    /// Referenced product; optional for drafts.
    pub product_id: Option<i64>,
    /// Requested mode, in wire form.
    pub mode: Option<String>,
}

impl OrderRequest {
    /// Validate the request and normalise it into an [`OrderDraft`].
    ///
    /// Checks run in field order: `userId`, `mode`, then `productId`.
    ///
    /// # Examples
    /// ```
    /// use order_backend::domain::{OrderMode, OrderRequest};
    ///
    /// let draft = OrderRequest {
    ///     user_id: Some(1),
    ///     product_id: None,
    ///     mode: Some("draft".to_owned()),
    /// }
    /// .validate()
    /// .expect("drafts may omit the product");
    /// assert_eq!(draft.mode, OrderMode::Draft);
    /// ```
    pub fn validate(&self) -> Result<OrderDraft, OrderValidationError> {
        let raw_user_id = self.user_id.ok_or(OrderValidationError::MissingField {
            field: FIELD_USER_ID,
        })?;
        let user_id = UserId::new(raw_user_id).map_err(|_| OrderValidationError::NonPositiveId {
            field: FIELD_USER_ID,
            value: raw_user_id,
        })?;

        let raw_mode = self
            .mode
            .as_deref()
            .ok_or(OrderValidationError::MissingField { field: FIELD_MODE })?;
        let mode = raw_mode
            .parse::<OrderMode>()
            .map_err(|UnknownOrderMode(value)| OrderValidationError::UnknownMode { value })?;

        let product_id = match self.product_id {
            Some(raw) => Some(ProductId::new(raw).ok_or(OrderValidationError::NonPositiveId {
                field: FIELD_PRODUCT_ID,
                value: raw,
            })?),
            None if mode.requires_product() => {
                return Err(OrderValidationError::ProductRequired { mode });
            }
            None => None,
        };

        Ok(OrderDraft {
            user_id,
            product_id,
            mode,
        })
    }
}

/// Validated order payload awaiting persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Verified-to-be-well-formed user reference.
    pub user_id: UserId,
    /// Product reference; absent only for drafts.
    pub product_id: Option<ProductId>,
    /// Requested mode.
    pub mode: OrderMode,
}

/// Persisted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Repository-assigned identifier.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Ordered product, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    /// Mode recorded at creation.
    pub mode: OrderMode,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Materialise a persisted order from its draft.
    pub fn from_draft(id: OrderId, draft: OrderDraft, created_at: DateTime<Utc>) -> Self {
        let OrderDraft {
            user_id,
            product_id,
            mode,
        } = draft;
        Self {
            id,
            user_id,
            product_id,
            mode,
            created_at,
        }
    }
}
