//! Payout-policy handlers: validate an update, preview a candidate.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{PolicyUpdateRequest, PreviewRequest, PreviewResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /policies/validate` — Gate a settings update before the caller
/// persists it via the platform API.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidPolicyValue`] for out-of-range values.
#[utoipa::path(
    post,
    path = "/api/v1/policies/validate",
    tag = "Policies",
    summary = "Validate a payout-settings update",
    description = "Checks numeric ranges (percentages in [0, 100], fixed amounts non-negative). Values are rejected, never clamped. Persistence itself is the platform API's job.",
    request_body = PolicyUpdateRequest,
    responses(
        (status = 204, description = "Update is valid"),
        (status = 400, description = "Out-of-range policy value", body = ErrorResponse),
    )
)]
pub async fn validate_policy(
    State(state): State<AppState>,
    Json(req): Json<PolicyUpdateRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    state
        .earnings_service
        .validate_policy_update(&req.payout_settings)?;
    tracing::info!(staff_id = %req.staff_id, "payout settings validated");
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /policies/preview` — Projected earnings for a candidate policy,
/// nothing persisted.
///
/// # Errors
///
/// Returns [`GatewayError`] for out-of-range values, an unknown staff
/// member, the owner (whose share is not configurable), or a malformed
/// snapshot.
#[utoipa::path(
    post,
    path = "/api/v1/policies/preview",
    tag = "Policies",
    summary = "Preview earnings under a candidate policy",
    description = "Evaluates the candidate with the exact function the team view uses, so the preview always matches what saving would produce.",
    request_body = PreviewRequest,
    responses(
        (status = 200, description = "Projected earnings", body = PreviewResponse),
        (status = 400, description = "Invalid policy value or snapshot", body = ErrorResponse),
        (status = 404, description = "Staff member not in snapshot", body = ErrorResponse),
    )
)]
pub async fn preview_policy(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let staff_id = req.staff_id;
    let snapshot = req.snapshot.into_snapshot();
    let (projected, issues) =
        state
            .earnings_service
            .preview_policy(&snapshot, staff_id, &req.payout_settings)?;

    Ok(Json(PreviewResponse {
        staff_id,
        projected,
        issues,
    }))
}

/// Policy routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/policies/validate", post(validate_policy))
        .route("/policies/preview", post(preview_policy))
}
