//! Platform fee deduction.
//!
//! This is the single point where the plan fee rate is applied. Both the
//! owner residual and every percentage-based staff payout route through
//! [`net_of_platform_fee`] before any policy math, so the fee is baked
//! in exactly once and never re-applied per staff member.

use rust_decimal::Decimal;

use crate::domain::money::Money;
use crate::domain::BusinessPlan;

/// Deducts the plan's platform fee from a gross amount.
///
/// Returns `gross * (1 - fee% / 100)` rounded to currency precision
/// (2 dp, half-up). Pure and idempotent over its inputs.
#[must_use]
pub fn net_of_platform_fee(gross: Money, plan: BusinessPlan) -> Money {
    gross.percent(Decimal::ONE_HUNDRED - plan.fee_percent())
}

/// The platform's cut of a gross amount.
///
/// Defined as the exact complement of [`net_of_platform_fee`] so that
/// `fee + net == gross` holds to the penny.
#[must_use]
pub fn platform_fee(gross: Money, plan: BusinessPlan) -> Money {
    gross - net_of_platform_fee(gross, plan)
}
