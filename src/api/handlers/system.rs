//! System endpoints: health check and the plan catalog.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::BusinessPlan;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Subscription plan info for the catalog endpoint.
#[derive(Debug, Serialize, ToSchema)]
struct PlanInfo {
    plan: &'static str,
    fee_percent: f64,
    description: &'static str,
}

/// `GET /config/plans` — List subscription plans and their fee rates.
#[utoipa::path(
    get,
    path = "/config/plans",
    tag = "System",
    summary = "List subscription plans",
    description = "Returns every plan tier with the platform fee percentage it carries. Unknown plan strings are treated as `free`.",
    responses(
        (status = 200, description = "Plan catalog", body = Vec<PlanInfo>),
    )
)]
pub async fn plans_handler() -> impl IntoResponse {
    let plans: Vec<PlanInfo> = BusinessPlan::ALL
        .iter()
        .map(|plan| PlanInfo {
            plan: plan.as_str(),
            fee_percent: fee_as_f64(*plan),
            description: describe(*plan),
        })
        .collect();
    (StatusCode::OK, Json(plans))
}

fn fee_as_f64(plan: BusinessPlan) -> f64 {
    use rust_decimal::prelude::ToPrimitive;
    plan.fee_percent().to_f64().unwrap_or_default()
}

const fn describe(plan: BusinessPlan) -> &'static str {
    match plan {
        BusinessPlan::Free => "Free tier, and the fallback for unknown plans",
        BusinessPlan::Starter => "Entry paid tier",
        BusinessPlan::Professional => "Mid tier with a reduced platform fee",
        BusinessPlan::Enterprise => "Top tier with the lowest platform fee",
    }
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/plans", get(plans_handler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_plan() {
        assert_eq!(BusinessPlan::ALL.len(), 4);
        for plan in BusinessPlan::ALL {
            assert!(!describe(plan).is_empty());
            assert!(fee_as_f64(plan) > 0.0);
        }
    }
}
