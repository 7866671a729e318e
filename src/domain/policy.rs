//! Configurable payout policies for staff members.
//!
//! A policy determines how much of the business's revenue a staff member
//! is paid. The owner never has a policy — their share is always 100% of
//! their own net-of-fee revenue — which is modelled by
//! [`super::staff::Payee`], not by a special policy variant here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::money::Money;
use crate::error::GatewayError;

/// Default percentage-of-own value assigned when a staff member is added.
const DEFAULT_OWN_PERCENTAGE: u32 = 60;

/// A staff member's payout policy, mutable by the business admin only.
///
/// Wire shape is internally tagged:
/// `{ "type": "weekly_fixed", "value": 400 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PayoutPolicy {
    /// Percentage of the staff member's own attributed booking revenue,
    /// net of the platform fee. Value must lie in [0, 100].
    PercentageOwn {
        /// Percentage in [0, 100].
        #[serde(with = "rust_decimal::serde::float")]
        #[schema(value_type = f64)]
        value: Decimal,
    },
    /// Percentage of the business's total net revenue, regardless of
    /// individual attribution. Value must lie in [0, 100].
    PercentageTotal {
        /// Percentage in [0, 100].
        #[serde(with = "rust_decimal::serde::float")]
        #[schema(value_type = f64)]
        value: Decimal,
    },
    /// Flat amount per week, independent of bookings. Must be ≥ 0.
    WeeklyFixed {
        /// Weekly amount in pounds.
        #[schema(value_type = f64)]
        value: Money,
    },
    /// Flat amount per working day, independent of bookings. Must be ≥ 0.
    /// The platform has no working-day calendar, so every calendar day in
    /// a period counts.
    DailyFixed {
        /// Daily amount in pounds.
        #[schema(value_type = f64)]
        value: Money,
    },
}

impl Default for PayoutPolicy {
    fn default() -> Self {
        Self::PercentageOwn {
            value: Decimal::from(DEFAULT_OWN_PERCENTAGE),
        }
    }
}

impl PayoutPolicy {
    /// Validates the policy value at the settings-edit boundary.
    ///
    /// Out-of-range values are rejected, never clamped, and must be
    /// rejected *before* any preview or summary computation is attempted.
    ///
    /// # Errors
    ///
    /// [`GatewayError::InvalidPolicyValue`] when a percentage lies outside
    /// [0, 100] or a fixed amount is negative.
    pub fn validate(&self) -> Result<(), GatewayError> {
        match self {
            Self::PercentageOwn { value } | Self::PercentageTotal { value } => {
                if *value < Decimal::ZERO || *value > Decimal::ONE_HUNDRED {
                    return Err(GatewayError::InvalidPolicyValue(format!(
                        "percentage must be between 0 and 100, got {value}"
                    )));
                }
                Ok(())
            }
            Self::WeeklyFixed { value } | Self::DailyFixed { value } => {
                if value.is_negative() {
                    return Err(GatewayError::InvalidPolicyValue(format!(
                        "fixed amount must not be negative, got {value}"
                    )));
                }
                Ok(())
            }
        }
    }
}
