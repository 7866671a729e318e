//! Payout-policy update and preview DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ids::StaffId;
use crate::domain::PayoutPolicy;
use crate::engine::aggregate::BookingIssue;
use crate::engine::payout::EarnedAmount;

use super::common_dto::EarningsSnapshotDto;

/// Request body for `POST /policies/validate`: the update the admin is
/// about to persist via the platform API.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyUpdateRequest {
    /// Staff member whose settings are being edited.
    pub staff_id: StaffId,
    /// The candidate payout settings.
    pub payout_settings: PayoutPolicy,
}

/// Request body for `POST /policies/preview`: the same update shape plus
/// the snapshot to evaluate it against, with nothing persisted.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    /// The earnings snapshot to evaluate against.
    #[serde(flatten)]
    pub snapshot: EarningsSnapshotDto,
    /// Staff member whose settings are being edited.
    pub staff_id: StaffId,
    /// The candidate payout settings.
    pub payout_settings: PayoutPolicy,
}

/// Response body for `POST /policies/preview`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    /// Staff member the projection applies to.
    pub staff_id: StaffId,
    /// Projected earnings under the candidate policy — computed by the
    /// same function the team view uses, so saving will show exactly
    /// this figure.
    pub projected: EarnedAmount,
    /// Bookings skipped as bad data during aggregation.
    pub issues: Vec<BookingIssue>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn preview_request_carries_snapshot_and_candidate() {
        let json = r#"{
            "businessId": "27d9c8a0-0f1e-4a2b-8c3d-415161718191",
            "staffId": "5b1f6c3e-2a4d-4e6f-8a90-b1c2d3e4f506",
            "payoutSettings": { "type": "percentage_total", "value": 15 }
        }"#;
        let req: PreviewRequest = match serde_json::from_str(json) {
            Ok(r) => r,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert_eq!(
            req.payout_settings,
            PayoutPolicy::PercentageTotal {
                value: Decimal::from(15)
            }
        );
    }
}
