//! Staff members and the owner/staff payee distinction.

use super::ids::{BusinessId, StaffId};
use super::policy::PayoutPolicy;

/// Who a share of revenue is paid to.
///
/// The wire format carries an `isOwner` flag next to editable payout
/// settings; internally that becomes a tagged variant dispatched once,
/// so owner special-casing cannot leak into every call site. The owner's
/// share is always 100% of their own net-of-fee revenue and is never
/// persisted as a policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payee {
    /// The business owner. Exactly one per business.
    Owner,
    /// A regular staff member paid under a configurable policy.
    Staff(PayoutPolicy),
}

/// A member of a business's team, the owner included.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffMember {
    /// Staff identifier.
    pub id: StaffId,
    /// Business this member belongs to.
    pub business_id: BusinessId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Display role (e.g. `"stylist"`), informational only.
    pub role: String,
    /// Owner or policy-paid staff.
    pub payee: Payee,
}

impl StaffMember {
    /// True when this member is the business owner.
    #[must_use]
    pub fn is_owner(&self) -> bool {
        matches!(self.payee, Payee::Owner)
    }

    /// The member's payout policy, if they are policy-paid staff.
    #[must_use]
    pub fn policy(&self) -> Option<&PayoutPolicy> {
        match &self.payee {
            Payee::Owner => None,
            Payee::Staff(policy) => Some(policy),
        }
    }
}
