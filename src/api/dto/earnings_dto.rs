//! Team-earnings and business-summary DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ids::StaffId;
use crate::domain::money::Money;
use crate::engine::aggregate::BookingIssue;
use crate::engine::summary::AllocationSummary;
use crate::service::StaffEarnings;

use super::common_dto::{EarningsSnapshotDto, LedgerBalancesDto};

/// One row of the team-earnings view.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffEarningsDto {
    /// The staff member the row describes.
    pub staff_id: StaffId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whether this row is the owner's.
    pub is_owner: bool,
    /// Earnings over the full period.
    #[schema(value_type = f64)]
    pub total_earnings: Money,
    /// Earnings within the current ISO week.
    #[schema(value_type = f64)]
    pub this_week_earnings: Money,
    /// Completed bookings attributed to the member.
    pub bookings_count: u64,
    /// Business-wide gross revenue.
    #[schema(value_type = f64)]
    pub total_business_revenue: Money,
    /// Gross revenue of the member's own bookings.
    #[schema(value_type = f64)]
    pub own_bookings_revenue: Money,
}

impl From<StaffEarnings> for StaffEarningsDto {
    fn from(row: StaffEarnings) -> Self {
        Self {
            staff_id: row.staff_id,
            first_name: row.first_name,
            last_name: row.last_name,
            is_owner: row.is_owner,
            total_earnings: row.earnings.all_time,
            this_week_earnings: row.earnings.this_week,
            bookings_count: row.bookings_count,
            total_business_revenue: row.total_business_revenue,
            own_bookings_revenue: row.own_bookings_revenue,
        }
    }
}

/// Response body for `POST /earnings/team`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamEarningsResponse {
    /// One row per staff member, owner included, in snapshot order.
    pub staff: Vec<StaffEarningsDto>,
    /// Bookings skipped as bad data; the figures above are best-effort.
    pub issues: Vec<BookingIssue>,
}

/// Request body for `POST /earnings/summary`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    /// The earnings snapshot.
    #[serde(flatten)]
    pub snapshot: EarningsSnapshotDto,
    /// External payout-ledger balances to pass through.
    #[serde(default)]
    pub ledger: LedgerBalancesDto,
}

/// Response body for `POST /earnings/summary`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    /// Settled balance from the external ledger.
    #[schema(value_type = f64)]
    pub available_balance: Money,
    /// In-transit balance from the external ledger.
    #[schema(value_type = f64)]
    pub pending_balance: Money,
    /// Business-wide gross revenue.
    #[schema(value_type = f64)]
    pub total_revenue: Money,
    /// What the business keeps: staff earnings plus owner earnings.
    #[schema(value_type = f64)]
    pub total_earnings: Money,
    /// The owner's share: 100% of their own net-of-fee revenue.
    #[schema(value_type = f64)]
    pub total_revenue_less_fees_owner_earnings: Money,
    /// The platform's cut.
    #[schema(value_type = f64)]
    pub platform_fees: Money,
    /// Sum of policy-paid staff earnings.
    #[schema(value_type = f64)]
    pub staff_earnings: Money,
    /// Set when fixed payouts promise more than revenue covers.
    pub over_allocated: bool,
    /// Bookings skipped as bad data.
    pub issues: Vec<BookingIssue>,
}

impl SummaryResponse {
    /// Builds the response from an engine summary and collected issues.
    #[must_use]
    pub fn from_summary(summary: AllocationSummary, issues: Vec<BookingIssue>) -> Self {
        Self {
            available_balance: summary.available_balance,
            pending_balance: summary.pending_balance,
            total_revenue: summary.total_revenue,
            total_earnings: summary.staff_earnings_total + summary.owner_earnings,
            total_revenue_less_fees_owner_earnings: summary.owner_earnings,
            platform_fees: summary.platform_fees,
            staff_earnings: summary.staff_earnings_total,
            over_allocated: summary.over_allocated,
            issues,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn summary_response_serializes_camel_case() {
        let summary = AllocationSummary {
            total_revenue: Money::from_major(700),
            platform_fees: Money::from_major(35),
            staff_earnings_total: Money::from_major(114),
            owner_earnings: Money::from_major(475),
            available_balance: Money::from_major(300),
            pending_balance: Money::from_major(40),
            over_allocated: false,
        };
        let body = SummaryResponse::from_summary(summary, Vec::new());
        let json = serde_json::to_value(&body).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json["totalRevenueLessFeesOwnerEarnings"], 475.0);
        assert_eq!(json["staffEarnings"], 114.0);
        assert_eq!(json["totalEarnings"], 589.0);
        assert_eq!(json["platformFees"], 35.0);
    }

    #[test]
    fn summary_request_flattens_snapshot() {
        let json = r#"{
            "businessId": "27d9c8a0-0f1e-4a2b-8c3d-415161718191",
            "plan": "professional",
            "ledger": { "availableBalance": 10, "pendingBalance": 0 }
        }"#;
        let req: SummaryRequest = match serde_json::from_str(json) {
            Ok(r) => r,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert_eq!(
            req.snapshot.plan,
            crate::domain::BusinessPlan::Professional
        );
        assert_eq!(req.ledger.available_balance, Money::from_major(10));
    }
}
