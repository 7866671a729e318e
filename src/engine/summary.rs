//! Business-level allocation summary and payout-request validation.

use std::collections::HashMap;

use crate::domain::ids::StaffId;
use crate::domain::money::Money;
use crate::domain::BusinessPlan;
use crate::error::GatewayError;

use super::aggregate::RevenueAggregate;
use super::fees::platform_fee;
use super::payout::EarnedAmount;

/// Rounding tolerance for the conservation check: one penny.
const CONSERVATION_TOLERANCE: Money = Money::new(rust_decimal::Decimal::from_parts(
    1, 0, 0, false, 2,
));

/// Settled and in-transit funds, as reported by the external payout
/// ledger. The engine never computes settlement timing itself; it only
/// copies these figures through and validates payout requests against
/// them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LedgerBalances {
    /// Settled funds available for payout.
    pub available: Money,
    /// Funds still in transit with the payment processor.
    pub pending: Money,
}

/// The per-business allocation summary: how gross revenue splits between
/// the platform, the staff, and the owner. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationSummary {
    /// Business-wide gross revenue.
    pub total_revenue: Money,
    /// The platform's cut of the gross revenue.
    pub platform_fees: Money,
    /// Sum of all policy-paid staff earnings (owner excluded).
    pub staff_earnings_total: Money,
    /// The owner's residual: 100% of their own net-of-fee revenue.
    pub owner_earnings: Money,
    /// Settled balance, copied from the external ledger.
    pub available_balance: Money,
    /// In-transit balance, copied from the external ledger.
    pub pending_balance: Money,
    /// Set when fixed staff payouts promise more than the business's
    /// revenue covers. The engine allows this and flags it rather than
    /// capping anyone's pay.
    pub over_allocated: bool,
}

/// Composes the allocation summary for one business.
///
/// With only percentage policies in play (and sensible percentages),
/// `platform_fees + staff_earnings_total + owner_earnings` equals
/// gross revenue to within a penny per rounding step. Fixed payout
/// policies can break that conservation; when they do, the summary is
/// still produced with `over_allocated` set.
#[must_use]
pub fn summarize(
    business: &RevenueAggregate,
    per_staff: &HashMap<StaffId, EarnedAmount>,
    owner: EarnedAmount,
    plan: BusinessPlan,
    ledger: LedgerBalances,
) -> AllocationSummary {
    let total_revenue = business.total_revenue_all_time;
    let platform_fees = platform_fee(total_revenue, plan);
    let staff_earnings_total: Money = per_staff.values().map(|e| e.all_time).sum();

    let allocated = platform_fees + staff_earnings_total + owner.all_time;
    let over_allocated = allocated > total_revenue + CONSERVATION_TOLERANCE;

    if over_allocated {
        tracing::warn!(
            business_id = %business.business_id,
            %allocated,
            %total_revenue,
            "staff payouts exceed net revenue for the period"
        );
    }

    AllocationSummary {
        total_revenue,
        platform_fees,
        staff_earnings_total,
        owner_earnings: owner.all_time,
        available_balance: ledger.available,
        pending_balance: ledger.pending,
        over_allocated,
    }
}

/// Validates a payout request against the settled balance.
///
/// # Errors
///
/// - [`GatewayError::InvalidRequest`] when the requested amount is not
///   strictly positive.
/// - [`GatewayError::NoPayoutDestination`] when no bank or payment
///   destination is configured.
/// - [`GatewayError::InsufficientBalance`] when the requested amount
///   exceeds the available balance.
pub fn validate_payout_request(
    amount: Money,
    available: Money,
    destination_configured: bool,
) -> Result<(), GatewayError> {
    if amount <= Money::ZERO {
        return Err(GatewayError::InvalidRequest(
            "payout amount must be positive".to_string(),
        ));
    }
    if !destination_configured {
        return Err(GatewayError::NoPayoutDestination);
    }
    if amount > available {
        return Err(GatewayError::InsufficientBalance {
            requested: amount,
            available,
        });
    }
    Ok(())
}

/// Re-exported conservation tolerance for tests and callers that assert
/// the invariant themselves.
#[must_use]
pub const fn conservation_tolerance() -> Money {
    CONSERVATION_TOLERANCE
}
