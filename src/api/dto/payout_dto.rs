//! Payout-request validation DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::money::Money;

use super::common_dto::LedgerBalancesDto;

/// Request body for `POST /payouts/validate`.
///
/// The gateway validates the request against the ledger snapshot; the
/// actual transfer — and its settlement timing — belongs to the external
/// payment processor.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayoutValidationRequest {
    /// Amount the business wants to pay out.
    #[schema(value_type = f64)]
    pub amount: Money,
    /// Current ledger balances.
    #[serde(flatten)]
    pub ledger: LedgerBalancesDto,
    /// Whether a bank or payment destination is configured.
    #[serde(default)]
    pub destination_configured: bool,
}
