//! REST endpoint handlers organized by resource.

pub mod earnings;
pub mod payout;
pub mod policy;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(earnings::routes())
        .merge(policy::routes())
        .merge(payout::routes())
}
