//! Payout policy evaluation and the owner residual.
//!
//! [`evaluate`] is the *only* place a policy turns into money. Both the
//! persisted "current earnings" display and the live settings-edit
//! preview call it with the same inputs, so what an admin sees while
//! editing is exactly what the team page shows after saving.

use rust_decimal::Decimal;

use crate::domain::money::Money;
use crate::domain::{BusinessPlan, PayoutPolicy};

use super::aggregate::{RevenueAggregate, StaffRevenue};
use super::fees::net_of_platform_fee;

/// Days per week, for prorating weekly fixed amounts.
const DAYS_PER_WEEK: u32 = 7;

/// A staff member's computed earnings over two windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EarnedAmount {
    /// Earnings over the full period under consideration.
    #[schema(value_type = f64)]
    pub all_time: Money,
    /// Earnings within the current ISO week.
    #[schema(value_type = f64)]
    pub this_week: Money,
}

/// Computes a staff member's earned amount under their payout policy.
///
/// Percentage policies operate on net-of-fee revenue — the staff
/// member's own bucket for `percentage_own`, the business total for
/// `percentage_total`. Fixed policies ignore bookings entirely:
/// `weekly_fixed` prorates over `period_days / 7`, `daily_fixed` counts
/// every calendar day (the platform has no working-day calendar).
///
/// A zero `value` yields zero earnings for every variant; out-of-range
/// values are rejected at the settings-edit boundary and never reach
/// this function.
#[must_use]
pub fn evaluate(
    policy: &PayoutPolicy,
    staff: &StaffRevenue,
    business: &RevenueAggregate,
    plan: BusinessPlan,
    period_days: u32,
) -> EarnedAmount {
    match *policy {
        PayoutPolicy::PercentageOwn { value } => EarnedAmount {
            all_time: net_of_platform_fee(staff.own_revenue_all_time, plan).percent(value),
            this_week: net_of_platform_fee(staff.own_revenue_this_week, plan).percent(value),
        },
        PayoutPolicy::PercentageTotal { value } => EarnedAmount {
            all_time: net_of_platform_fee(business.total_revenue_all_time, plan).percent(value),
            this_week: net_of_platform_fee(business.total_revenue_this_week, plan).percent(value),
        },
        PayoutPolicy::WeeklyFixed { value } => EarnedAmount {
            all_time: value.times(Decimal::from(period_days) / Decimal::from(DAYS_PER_WEEK)),
            this_week: value,
        },
        PayoutPolicy::DailyFixed { value } => EarnedAmount {
            all_time: value.times(Decimal::from(period_days)),
            this_week: value.times(Decimal::from(DAYS_PER_WEEK)),
        },
    }
}

/// Computes the owner's earnings: always 100% of their own revenue, net
/// of the platform fee. The owner has no configurable policy, so there
/// is no variant dispatch here.
#[must_use]
pub fn owner_earnings(owner: &StaffRevenue, plan: BusinessPlan) -> EarnedAmount {
    EarnedAmount {
        all_time: net_of_platform_fee(owner.own_revenue_all_time, plan),
        this_week: net_of_platform_fee(owner.own_revenue_this_week, plan),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::ids::BusinessId;
    use std::collections::HashMap;

    fn business_with_total(all_time: i64, this_week: i64) -> RevenueAggregate {
        RevenueAggregate {
            business_id: BusinessId::new(),
            per_staff: HashMap::new(),
            unattributed_revenue: Money::ZERO,
            total_revenue_all_time: Money::from_major(all_time),
            total_revenue_this_week: Money::from_major(this_week),
        }
    }

    fn revenue(all_time: i64, this_week: i64) -> StaffRevenue {
        StaffRevenue {
            own_revenue_all_time: Money::from_major(all_time),
            own_revenue_this_week: Money::from_major(this_week),
            bookings_count: 1,
        }
    }

    #[test]
    fn percentage_own_on_starter_plan() {
        // £200 own revenue, 5% fee -> £190 net, 60% -> £114.00.
        let earned = evaluate(
            &PayoutPolicy::PercentageOwn {
                value: Decimal::from(60),
            },
            &revenue(200, 200),
            &business_with_total(200, 200),
            BusinessPlan::Starter,
            7,
        );
        assert_eq!(earned.this_week, Money::from_major(114));
        assert_eq!(earned.all_time, Money::from_major(114));
    }

    #[test]
    fn percentage_total_uses_business_figures() {
        let earned = evaluate(
            &PayoutPolicy::PercentageTotal {
                value: Decimal::from(10),
            },
            &revenue(0, 0),
            &business_with_total(1000, 100),
            BusinessPlan::Starter,
            7,
        );
        // net(1000) = 950, 10% = 95; net(100) = 95, 10% = 9.50.
        assert_eq!(earned.all_time, Money::from_major(95));
        assert_eq!(earned.this_week, Money::from_minor(950));
    }

    #[test]
    fn weekly_fixed_prorates_over_period() {
        let earned = evaluate(
            &PayoutPolicy::WeeklyFixed {
                value: Money::from_major(400),
            },
            &revenue(5000, 500),
            &business_with_total(9000, 900),
            BusinessPlan::Enterprise,
            14,
        );
        // Independent of actual bookings.
        assert_eq!(earned.all_time, Money::from_major(800));
        assert_eq!(earned.this_week, Money::from_major(400));
    }

    #[test]
    fn daily_fixed_counts_every_calendar_day() {
        let earned = evaluate(
            &PayoutPolicy::DailyFixed {
                value: Money::from_major(50),
            },
            &revenue(0, 0),
            &business_with_total(0, 0),
            BusinessPlan::Free,
            10,
        );
        assert_eq!(earned.all_time, Money::from_major(500));
        assert_eq!(earned.this_week, Money::from_major(350));
    }

    #[test]
    fn zero_value_earns_zero_without_error() {
        for policy in [
            PayoutPolicy::PercentageOwn {
                value: Decimal::ZERO,
            },
            PayoutPolicy::PercentageTotal {
                value: Decimal::ZERO,
            },
            PayoutPolicy::WeeklyFixed { value: Money::ZERO },
            PayoutPolicy::DailyFixed { value: Money::ZERO },
        ] {
            let earned = evaluate(
                &policy,
                &revenue(300, 100),
                &business_with_total(900, 200),
                BusinessPlan::Starter,
                7,
            );
            assert_eq!(earned, EarnedAmount::default());
        }
    }

    #[test]
    fn percentage_own_is_monotonic_in_value() {
        let staff = revenue(500, 100);
        let business = business_with_total(500, 100);
        let mut previous = Money::ZERO;
        for pct in 1..=100 {
            let earned = evaluate(
                &PayoutPolicy::PercentageOwn {
                    value: Decimal::from(pct),
                },
                &staff,
                &business,
                BusinessPlan::Professional,
                7,
            );
            assert!(earned.all_time > previous, "not increasing at {pct}%");
            previous = earned.all_time;
        }
    }

    #[test]
    fn owner_takes_all_own_net_revenue() {
        // £500 all-time own revenue on starter (5%) -> £475.00.
        let earned = owner_earnings(&revenue(500, 0), BusinessPlan::Starter);
        assert_eq!(earned.all_time, Money::from_major(475));
        assert_eq!(earned.this_week, Money::ZERO);
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        // The settings-edit preview and the post-save display call this
        // same function; same inputs must give byte-identical output.
        let policy = PayoutPolicy::PercentageTotal {
            value: Decimal::new(125, 1),
        };
        let staff = revenue(321, 45);
        let business = business_with_total(4321, 456);
        let first = evaluate(&policy, &staff, &business, BusinessPlan::Professional, 7);
        let second = evaluate(&policy, &staff, &business, BusinessPlan::Professional, 7);
        assert_eq!(first, second);
    }
}
