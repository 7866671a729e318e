//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::EarningsService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Earnings service for all allocation computations.
    pub earnings_service: Arc<EarningsService>,
}
