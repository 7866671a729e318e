//! Subscription plans and their platform fee rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A business's subscription plan.
///
/// Exactly one plan is active per business at a time, and the platform
/// fee percentage is a pure function of the plan. An unknown or missing
/// plan string deserializes to [`BusinessPlan::Free`] — the engine is
/// deliberately lenient here so a bad plan value can never blank a
/// dashboard; it just pays the highest fee rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BusinessPlan {
    /// Entry paid tier. 5% platform fee.
    Starter,
    /// Mid tier. 3% platform fee.
    Professional,
    /// Top tier. 2% platform fee.
    Enterprise,
    /// Free tier and the fallback for unknown plan strings. 5% platform fee.
    #[default]
    #[serde(other)]
    Free,
}

impl BusinessPlan {
    /// All plans, in ascending-tier order. Used by the plan catalog
    /// endpoint.
    pub const ALL: [Self; 4] = [
        Self::Free,
        Self::Starter,
        Self::Professional,
        Self::Enterprise,
    ];

    /// Platform fee percentage retained per transaction on this plan.
    #[must_use]
    pub fn fee_percent(self) -> Decimal {
        match self {
            Self::Free | Self::Starter => Decimal::from(5),
            Self::Professional => Decimal::from(3),
            Self::Enterprise => Decimal::from(2),
        }
    }

    /// Wire name of the plan (`"free"`, `"starter"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Starter => "starter",
            Self::Professional => "professional",
            Self::Enterprise => "enterprise",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn fee_rates_by_plan() {
        assert_eq!(BusinessPlan::Free.fee_percent(), Decimal::from(5));
        assert_eq!(BusinessPlan::Starter.fee_percent(), Decimal::from(5));
        assert_eq!(BusinessPlan::Professional.fee_percent(), Decimal::from(3));
        assert_eq!(BusinessPlan::Enterprise.fee_percent(), Decimal::from(2));
    }

    #[test]
    fn unknown_plan_falls_back_to_free() {
        let parsed: Result<BusinessPlan, _> = serde_json::from_str("\"platinum\"");
        assert_eq!(parsed.ok(), Some(BusinessPlan::Free));
    }

    #[test]
    fn known_plans_parse_exactly() {
        let parsed: Result<BusinessPlan, _> = serde_json::from_str("\"enterprise\"");
        assert_eq!(parsed.ok(), Some(BusinessPlan::Enterprise));
        let json = serde_json::to_string(&BusinessPlan::Professional).ok();
        assert_eq!(json.as_deref(), Some("\"professional\""));
    }
}
