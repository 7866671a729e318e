//! Payout-request validation handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::PayoutValidationRequest;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /payouts/validate` — Gate a payout request against the ledger.
///
/// # Errors
///
/// Returns [`GatewayError::InsufficientBalance`] when the amount exceeds
/// the settled balance and [`GatewayError::NoPayoutDestination`] when no
/// destination is configured.
#[utoipa::path(
    post,
    path = "/api/v1/payouts/validate",
    tag = "Payouts",
    summary = "Validate a payout request",
    description = "Checks the requested amount against the settled balance and that a payment destination exists. The transfer itself, and settlement timing, belong to the external payment processor.",
    request_body = PayoutValidationRequest,
    responses(
        (status = 204, description = "Payout request is valid"),
        (status = 400, description = "Non-positive amount", body = ErrorResponse),
        (status = 422, description = "Insufficient balance or no destination", body = ErrorResponse),
    )
)]
pub async fn validate_payout(
    State(state): State<AppState>,
    Json(req): Json<PayoutValidationRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    state.earnings_service.request_payout(
        req.amount,
        req.ledger.into(),
        req.destination_configured,
    )?;
    tracing::info!(amount = %req.amount, "payout request validated");
    Ok(StatusCode::NO_CONTENT)
}

/// Payout routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/payouts/validate", post(validate_payout))
}
