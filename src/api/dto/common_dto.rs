//! Shared DTO types used across multiple endpoints.
//!
//! Every request carries its own snapshot of bookings, staff, and plan —
//! the caller fetches those from the platform API and hands them over,
//! so the gateway holds no per-business state of its own.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::ids::{BusinessId, StaffId};
use crate::domain::money::Money;
use crate::domain::{Booking, BusinessPlan, Payee, PayoutPolicy, StaffMember};
use crate::engine::summary::LedgerBalances;
use crate::service::earnings_service::DEFAULT_PERIOD_DAYS;
use crate::service::EarningsSnapshot;

/// Staff member as delivered on the wire: an `isOwner` flag beside
/// editable payout settings.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffMemberDto {
    /// Staff identifier.
    pub id: StaffId,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Display role.
    #[serde(default)]
    pub role: String,
    /// Whether this member is the business owner.
    #[serde(default)]
    pub is_owner: bool,
    /// Payout settings. Ignored for the owner; absent for a regular
    /// staff member it falls back to the platform default (60% of own).
    #[serde(default)]
    pub payout_settings: Option<PayoutPolicy>,
}

impl StaffMemberDto {
    /// Converts the wire shape into the domain model, folding the
    /// `isOwner` flag into a [`Payee`] variant dispatched once.
    #[must_use]
    pub fn into_domain(self, business_id: BusinessId) -> StaffMember {
        let payee = if self.is_owner {
            Payee::Owner
        } else {
            Payee::Staff(self.payout_settings.unwrap_or_default())
        };
        StaffMember {
            id: self.id,
            business_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role,
            payee,
        }
    }
}

/// The input snapshot shared by every earnings endpoint.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSnapshotDto {
    /// Business the snapshot describes.
    pub business_id: BusinessId,
    /// Raw booking records, any status.
    #[serde(default)]
    pub bookings: Vec<Booking>,
    /// The business's team, owner included.
    #[serde(default)]
    pub staff: Vec<StaffMemberDto>,
    /// Subscription plan; unknown or missing values read as `free`.
    #[serde(default)]
    pub plan: BusinessPlan,
    /// Point in time to compute figures as of. Defaults to now.
    #[serde(default)]
    pub as_of: Option<DateTime<Utc>>,
    /// Calendar days covered when projecting fixed payouts.
    /// Defaults to 7.
    #[serde(default)]
    pub period_days: Option<u32>,
}

impl EarningsSnapshotDto {
    /// Converts the wire snapshot into the service input.
    #[must_use]
    pub fn into_snapshot(self) -> EarningsSnapshot {
        let business_id = self.business_id;
        EarningsSnapshot {
            business_id,
            bookings: self.bookings,
            staff: self
                .staff
                .into_iter()
                .map(|s| s.into_domain(business_id))
                .collect(),
            plan: self.plan,
            as_of: self.as_of.unwrap_or_else(Utc::now),
            period_days: self.period_days.unwrap_or(DEFAULT_PERIOD_DAYS),
        }
    }
}

/// Settled and in-transit balances reported by the external payout
/// ledger.
#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LedgerBalancesDto {
    /// Settled funds available for payout.
    #[serde(default)]
    #[schema(value_type = f64)]
    pub available_balance: Money,
    /// Funds still in transit.
    #[serde(default)]
    #[schema(value_type = f64)]
    pub pending_balance: Money,
}

impl From<LedgerBalancesDto> for LedgerBalances {
    fn from(dto: LedgerBalancesDto) -> Self {
        Self {
            available: dto.available_balance,
            pending: dto.pending_balance,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn staff_dto_without_settings_gets_platform_default() {
        let json = r#"{ "id": "5b1f6c3e-2a4d-4e6f-8a90-b1c2d3e4f506", "firstName": "Bea" }"#;
        let dto: StaffMemberDto = match serde_json::from_str(json) {
            Ok(d) => d,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        let member = dto.into_domain(BusinessId::new());
        assert_eq!(member.policy(), Some(&PayoutPolicy::default()));
    }

    #[test]
    fn owner_flag_becomes_owner_payee() {
        let json = r#"{
            "id": "5b1f6c3e-2a4d-4e6f-8a90-b1c2d3e4f506",
            "isOwner": true,
            "payoutSettings": { "type": "percentage_own", "value": 40 }
        }"#;
        let dto: StaffMemberDto = match serde_json::from_str(json) {
            Ok(d) => d,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        // Settings on the owner are ignored: the owner has no policy.
        let member = dto.into_domain(BusinessId::new());
        assert!(member.is_owner());
        assert!(member.policy().is_none());
    }

    #[test]
    fn snapshot_defaults_apply() {
        let json = r#"{ "businessId": "27d9c8a0-0f1e-4a2b-8c3d-415161718191" }"#;
        let dto: EarningsSnapshotDto = match serde_json::from_str(json) {
            Ok(d) => d,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert_eq!(dto.plan, BusinessPlan::Free);
        let snapshot = dto.into_snapshot();
        assert_eq!(snapshot.period_days, DEFAULT_PERIOD_DAYS);
        assert!(snapshot.bookings.is_empty());
    }

    #[test]
    fn ledger_dto_maps_to_balances() {
        let json = r#"{ "availableBalance": 120.5, "pendingBalance": 30 }"#;
        let dto: LedgerBalancesDto = match serde_json::from_str(json) {
            Ok(d) => d,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        let ledger = LedgerBalances::from(dto);
        assert_eq!(ledger.available, Money::from_minor(12_050));
        assert_eq!(ledger.pending, Money::from_major(30));
    }
}
