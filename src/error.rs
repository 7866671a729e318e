//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//!
//! Per-booking data problems (negative amounts, unknown staff references)
//! are deliberately *not* represented here: they are collected as
//! [`crate::engine::aggregate::BookingIssue`] values and returned beside a
//! best-effort result, so one bad row never blanks a whole dashboard.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ids::StaffId;
use crate::domain::money::Money;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1002,
///     "message": "invalid payout policy: percentage must be between 0 and 100",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (stable across releases; see code ranges below).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                |
/// |-----------|-----------------|----------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request            |
/// | 2000–2999 | Not Found       | 404 Not Found              |
/// | 4000–4999 | Payout-Specific | 422 Unprocessable Entity   |
///
/// An unknown business plan string is *not* an error anywhere in the
/// engine: it falls back to the `free` fee rate so a missing plan can
/// never crash a summary.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request validation failed (shape or semantics).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A payout policy value is out of range: percentage outside [0, 100]
    /// or a negative fixed amount. Raised at the settings-edit boundary,
    /// before any computation is attempted; values are never clamped.
    #[error("invalid payout policy: {0}")]
    InvalidPolicyValue(String),

    /// The staff snapshot is malformed: no owner, more than one owner, or
    /// a staff member belonging to a different business.
    #[error("invalid staff snapshot: {0}")]
    InvalidSnapshot(String),

    /// No staff member with the given ID exists in the snapshot.
    #[error("staff member not found: {0}")]
    StaffNotFound(StaffId),

    /// A payout was requested for more than the settled balance.
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Amount the caller asked to pay out.
        requested: Money,
        /// Settled funds available for payout.
        available: Money,
    },

    /// No bank or payment destination is configured for the business.
    #[error("no payout destination configured")]
    NoPayoutDestination,
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidPolicyValue(_) => 1002,
            Self::InvalidSnapshot(_) => 1003,
            Self::StaffNotFound(_) => 2001,
            Self::InsufficientBalance { .. } => 4001,
            Self::NoPayoutDestination => 4002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidPolicyValue(_) | Self::InvalidSnapshot(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::StaffNotFound(_) => StatusCode::NOT_FOUND,
            Self::InsufficientBalance { .. } | Self::NoPayoutDestination => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
