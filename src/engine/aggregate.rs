//! Revenue aggregation over completed bookings.
//!
//! Groups completed bookings by staff member and by time window,
//! producing per-staff gross revenue and business-wide totals. Bad rows
//! (negative amounts, references to unknown staff) are skipped and
//! reported, never fatal: the rest of the dataset still aggregates so a
//! dashboard stays usable on partial bad data.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ids::{BookingId, BusinessId, StaffId};
use crate::domain::money::Money;
use crate::domain::Booking;

/// Gross revenue figures for one staff member's bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StaffRevenue {
    /// Sum of completed booking amounts attributed to this member.
    pub own_revenue_all_time: Money,
    /// As above, restricted to the ISO week containing `as_of`.
    pub own_revenue_this_week: Money,
    /// Number of completed bookings attributed to this member.
    pub bookings_count: u64,
}

/// Aggregated gross revenue for one business as of a point in time.
///
/// A pure function of the input bookings and `as_of`; holds no state and
/// performs no I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueAggregate {
    /// Business the figures belong to.
    pub business_id: BusinessId,
    /// Per-staff revenue buckets. Staff with no completed bookings are
    /// simply absent; [`RevenueAggregate::staff`] reads them as zero.
    pub per_staff: HashMap<StaffId, StaffRevenue>,
    /// Revenue from completed bookings with no staff attribution.
    /// Included in business totals, excluded from every per-staff figure.
    pub unattributed_revenue: Money,
    /// Business-wide gross revenue over all time.
    pub total_revenue_all_time: Money,
    /// Business-wide gross revenue within the ISO week of `as_of`.
    pub total_revenue_this_week: Money,
}

impl RevenueAggregate {
    /// Returns the revenue bucket for a staff member, zero if they have
    /// no completed bookings.
    #[must_use]
    pub fn staff(&self, id: StaffId) -> StaffRevenue {
        self.per_staff.get(&id).copied().unwrap_or_default()
    }
}

/// A booking that could not be counted, reported beside the best-effort
/// aggregate rather than aborting it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum BookingIssue {
    /// The booking carried a negative amount. Negative revenue must
    /// never silently aggregate.
    NegativeAmount {
        /// Offending booking.
        booking_id: BookingId,
        /// The negative amount found.
        #[schema(value_type = f64)]
        amount: Money,
    },
    /// The booking references a staff member not in the business's
    /// staff set.
    UnknownStaff {
        /// Offending booking.
        booking_id: BookingId,
        /// The unrecognized staff reference.
        staff_id: StaffId,
    },
}

/// Aggregates completed bookings for one business.
///
/// Bookings for other businesses and bookings in any status other than
/// `COMPLETED` are ignored. Rows with negative amounts or unknown staff
/// references are excluded from every sum and reported as
/// [`BookingIssue`]s. An empty input produces an all-zero aggregate and
/// no issues.
#[must_use]
pub fn aggregate(
    bookings: &[Booking],
    business_id: BusinessId,
    staff_ids: &HashSet<StaffId>,
    as_of: DateTime<Utc>,
) -> (RevenueAggregate, Vec<BookingIssue>) {
    let mut per_staff: HashMap<StaffId, StaffRevenue> = HashMap::new();
    let mut unattributed = Money::ZERO;
    let mut unattributed_week = Money::ZERO;
    let mut issues = Vec::new();

    for booking in bookings {
        if booking.business_id != business_id || !booking.is_completed() {
            continue;
        }
        if booking.total_amount.is_negative() {
            issues.push(BookingIssue::NegativeAmount {
                booking_id: booking.id,
                amount: booking.total_amount,
            });
            continue;
        }
        let in_week = same_iso_week(booking.start_time, as_of);
        match booking.staff_id {
            Some(staff_id) => {
                if !staff_ids.contains(&staff_id) {
                    issues.push(BookingIssue::UnknownStaff {
                        booking_id: booking.id,
                        staff_id,
                    });
                    continue;
                }
                let bucket = per_staff.entry(staff_id).or_default();
                bucket.own_revenue_all_time += booking.total_amount;
                if in_week {
                    bucket.own_revenue_this_week += booking.total_amount;
                }
                bucket.bookings_count += 1;
            }
            None => {
                unattributed += booking.total_amount;
                if in_week {
                    unattributed_week += booking.total_amount;
                }
            }
        }
    }

    let total_revenue_all_time = per_staff
        .values()
        .map(|s| s.own_revenue_all_time)
        .sum::<Money>()
        + unattributed;
    let total_revenue_this_week = per_staff
        .values()
        .map(|s| s.own_revenue_this_week)
        .sum::<Money>()
        + unattributed_week;

    if !issues.is_empty() {
        tracing::warn!(
            %business_id,
            skipped = issues.len(),
            "bookings skipped during aggregation"
        );
    }

    (
        RevenueAggregate {
            business_id,
            per_staff,
            unattributed_revenue: unattributed,
            total_revenue_all_time,
            total_revenue_this_week,
        },
        issues,
    )
}

/// True when both timestamps fall in the same ISO week of the same
/// ISO year.
fn same_iso_week(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    let (wa, wb) = (a.iso_week(), b.iso_week());
    wa.year() == wb.year() && wa.week() == wb.week()
}
