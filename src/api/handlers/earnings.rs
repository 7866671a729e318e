//! Earnings handlers: team view and business summary.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{
    EarningsSnapshotDto, StaffEarningsDto, SummaryRequest, SummaryResponse, TeamEarningsResponse,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /earnings/team` — Per-staff earnings for the team view.
///
/// # Errors
///
/// Returns [`GatewayError`] when the snapshot's staff set is malformed.
#[utoipa::path(
    post,
    path = "/api/v1/earnings/team",
    tag = "Earnings",
    summary = "Compute per-staff earnings",
    description = "Aggregates the snapshot's completed bookings and evaluates each staff member's payout policy (and the owner's fixed share). Bad booking rows are skipped and reported in `issues`, never fatal.",
    request_body = EarningsSnapshotDto,
    responses(
        (status = 200, description = "Per-staff earnings rows", body = TeamEarningsResponse),
        (status = 400, description = "Malformed staff snapshot", body = ErrorResponse),
    )
)]
pub async fn team_earnings(
    State(state): State<AppState>,
    Json(req): Json<EarningsSnapshotDto>,
) -> Result<impl IntoResponse, GatewayError> {
    let snapshot = req.into_snapshot();
    let (rows, issues) = state.earnings_service.team_earnings(&snapshot)?;

    tracing::info!(
        business_id = %snapshot.business_id,
        staff = rows.len(),
        skipped = issues.len(),
        "team earnings computed"
    );

    Ok(Json(TeamEarningsResponse {
        staff: rows.into_iter().map(StaffEarningsDto::from).collect(),
        issues,
    }))
}

/// `POST /earnings/summary` — Business-level allocation summary.
///
/// # Errors
///
/// Returns [`GatewayError`] when the snapshot's staff set is malformed.
#[utoipa::path(
    post,
    path = "/api/v1/earnings/summary",
    tag = "Earnings",
    summary = "Compute the business allocation summary",
    description = "Splits gross revenue between platform fees, staff earnings, and the owner's residual, and passes the external ledger balances through. `overAllocated` flags fixed payouts exceeding revenue.",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Allocation summary", body = SummaryResponse),
        (status = 400, description = "Malformed staff snapshot", body = ErrorResponse),
    )
)]
pub async fn business_summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let ledger = req.ledger.into();
    let snapshot = req.snapshot.into_snapshot();
    let (summary, issues) = state
        .earnings_service
        .business_summary(&snapshot, ledger)?;

    Ok(Json(SummaryResponse::from_summary(summary, issues)))
}

/// Earnings routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/earnings/team", post(team_earnings))
        .route("/earnings/summary", post(business_summary))
}
