//! Earnings service: orchestrates the allocation engine over snapshots.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::domain::ids::{BusinessId, StaffId};
use crate::domain::money::Money;
use crate::domain::{Booking, BusinessPlan, PayoutPolicy, StaffMember};
use crate::engine::aggregate::{aggregate, BookingIssue, RevenueAggregate};
use crate::engine::payout::{evaluate, owner_earnings, EarnedAmount};
use crate::engine::summary::{summarize, validate_payout_request, AllocationSummary, LedgerBalances};
use crate::error::GatewayError;

/// Default evaluation period when the caller does not specify one: the
/// current week.
pub const DEFAULT_PERIOD_DAYS: u32 = 7;

/// One request's worth of input: everything the engine needs, fetched
/// once by the caller from the external API. No global state — each
/// computation is a pure function of one snapshot.
#[derive(Debug, Clone)]
pub struct EarningsSnapshot {
    /// Business the snapshot describes.
    pub business_id: BusinessId,
    /// Raw booking records (all statuses; the engine filters).
    pub bookings: Vec<Booking>,
    /// The business's full team, owner included.
    pub staff: Vec<StaffMember>,
    /// Active subscription plan.
    pub plan: BusinessPlan,
    /// Point in time the figures are computed as of.
    pub as_of: DateTime<Utc>,
    /// Calendar days covered when projecting fixed payouts.
    pub period_days: u32,
}

/// One row of the team-earnings view.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffEarnings {
    /// The staff member the row describes.
    pub staff_id: StaffId,
    /// Given name, for display.
    pub first_name: String,
    /// Family name, for display.
    pub last_name: String,
    /// Whether this row is the owner's.
    pub is_owner: bool,
    /// Computed earnings (all-time and this-week).
    pub earnings: EarnedAmount,
    /// Number of completed bookings attributed to the member.
    pub bookings_count: u64,
    /// Business-wide gross revenue, repeated per row for the view.
    pub total_business_revenue: Money,
    /// Gross revenue of the member's own attributed bookings.
    pub own_bookings_revenue: Money,
}

/// Stateless orchestrator for all earnings computations.
///
/// Every method follows the same pattern: validate the snapshot shape,
/// run the engine, return the result together with any skipped-booking
/// issues. Reentrant and safe to share behind an `Arc` across handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarningsService;

impl EarningsService {
    /// Creates a new `EarningsService`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes the per-staff team-earnings view.
    ///
    /// Rows come back in snapshot staff order, the owner included.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidSnapshot`] when the staff set does
    /// not contain exactly one owner or spans multiple businesses.
    pub fn team_earnings(
        &self,
        snapshot: &EarningsSnapshot,
    ) -> Result<(Vec<StaffEarnings>, Vec<BookingIssue>), GatewayError> {
        let (agg, issues) = self.aggregate_snapshot(snapshot)?;

        let rows = snapshot
            .staff
            .iter()
            .map(|member| {
                let revenue = agg.staff(member.id);
                let earnings = match member.policy() {
                    None => owner_earnings(&revenue, snapshot.plan),
                    Some(policy) => {
                        evaluate(policy, &revenue, &agg, snapshot.plan, snapshot.period_days)
                    }
                };
                StaffEarnings {
                    staff_id: member.id,
                    first_name: member.first_name.clone(),
                    last_name: member.last_name.clone(),
                    is_owner: member.is_owner(),
                    earnings,
                    bookings_count: revenue.bookings_count,
                    total_business_revenue: agg.total_revenue_all_time,
                    own_bookings_revenue: revenue.own_revenue_all_time,
                }
            })
            .collect();

        Ok((rows, issues))
    }

    /// Computes the business-level allocation summary.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidSnapshot`] when the staff set does
    /// not contain exactly one owner or spans multiple businesses.
    pub fn business_summary(
        &self,
        snapshot: &EarningsSnapshot,
        ledger: LedgerBalances,
    ) -> Result<(AllocationSummary, Vec<BookingIssue>), GatewayError> {
        let (agg, issues) = self.aggregate_snapshot(snapshot)?;

        let mut per_staff: HashMap<StaffId, EarnedAmount> = HashMap::new();
        let mut owner = EarnedAmount::default();
        for member in &snapshot.staff {
            let revenue = agg.staff(member.id);
            match member.policy() {
                None => owner = owner_earnings(&revenue, snapshot.plan),
                Some(policy) => {
                    let earned =
                        evaluate(policy, &revenue, &agg, snapshot.plan, snapshot.period_days);
                    per_staff.insert(member.id, earned);
                }
            }
        }

        let summary = summarize(&agg, &per_staff, owner, snapshot.plan, ledger);
        Ok((summary, issues))
    }

    /// Evaluates a candidate policy for a staff member without
    /// persisting anything — the live settings-edit preview.
    ///
    /// The candidate is validated first; computation is never attempted
    /// for an out-of-range value. The evaluation itself is the exact
    /// function used for the persisted earnings display, so the preview
    /// always matches what saving would produce.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::InvalidPolicyValue`] for out-of-range values.
    /// - [`GatewayError::StaffNotFound`] when the member is not in the
    ///   snapshot.
    /// - [`GatewayError::InvalidRequest`] when targeting the owner,
    ///   whose share is not configurable.
    /// - [`GatewayError::InvalidSnapshot`] for a malformed staff set.
    pub fn preview_policy(
        &self,
        snapshot: &EarningsSnapshot,
        staff_id: StaffId,
        candidate: &PayoutPolicy,
    ) -> Result<(EarnedAmount, Vec<BookingIssue>), GatewayError> {
        candidate.validate()?;

        let member = snapshot
            .staff
            .iter()
            .find(|m| m.id == staff_id)
            .ok_or(GatewayError::StaffNotFound(staff_id))?;
        if member.is_owner() {
            return Err(GatewayError::InvalidRequest(
                "the owner's payout is not configurable".to_string(),
            ));
        }

        let (agg, issues) = self.aggregate_snapshot(snapshot)?;
        let revenue = agg.staff(staff_id);
        let earned = evaluate(candidate, &revenue, &agg, snapshot.plan, snapshot.period_days);
        Ok((earned, issues))
    }

    /// Validates a policy update before the caller persists it via the
    /// external API. Shape is guaranteed by deserialization; this gates
    /// the numeric range.
    ///
    /// # Errors
    ///
    /// [`GatewayError::InvalidPolicyValue`] for out-of-range values.
    pub fn validate_policy_update(&self, candidate: &PayoutPolicy) -> Result<(), GatewayError> {
        candidate.validate()
    }

    /// Validates a payout request against the external ledger's settled
    /// balance. The gateway does not move money; settlement belongs to
    /// the payment processor.
    ///
    /// # Errors
    ///
    /// See [`validate_payout_request`].
    pub fn request_payout(
        &self,
        amount: Money,
        ledger: LedgerBalances,
        destination_configured: bool,
    ) -> Result<(), GatewayError> {
        validate_payout_request(amount, ledger.available, destination_configured)
    }

    /// Validates the staff set and aggregates the snapshot's bookings.
    fn aggregate_snapshot(
        &self,
        snapshot: &EarningsSnapshot,
    ) -> Result<(RevenueAggregate, Vec<BookingIssue>), GatewayError> {
        let mut owners = 0usize;
        let mut staff_ids: HashSet<StaffId> = HashSet::with_capacity(snapshot.staff.len());
        for member in &snapshot.staff {
            if member.business_id != snapshot.business_id {
                return Err(GatewayError::InvalidSnapshot(format!(
                    "staff member {} belongs to another business",
                    member.id
                )));
            }
            if member.is_owner() {
                owners += 1;
            }
            staff_ids.insert(member.id);
        }
        match owners {
            1 => {}
            0 => {
                return Err(GatewayError::InvalidSnapshot(
                    "no owner in staff set".to_string(),
                ));
            }
            n => {
                return Err(GatewayError::InvalidSnapshot(format!(
                    "expected exactly one owner, found {n}"
                )));
            }
        }

        Ok(aggregate(
            &snapshot.bookings,
            snapshot.business_id,
            &staff_ids,
            snapshot.as_of,
        ))
    }
}
