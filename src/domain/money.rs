//! Currency amounts in major units (pounds).
//!
//! [`Money`] wraps a [`rust_decimal::Decimal`] so every rounding decision
//! in the engine goes through one place: [`Money::rounded`], which rounds
//! to 2 decimal places half-up (`MidpointAwayFromZero`). The JSON
//! representation is a plain decimal number in major units — pounds, not
//! pence — matching the convention used across the platform's API, so the
//! same figure never drifts between services.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of decimal places carried by a currency amount.
const CURRENCY_DP: u32 = 2;

/// A currency amount in major units (pounds).
///
/// Negative values are representable — the aggregator needs to *see* a
/// negative booking amount in order to reject it — but no computed figure
/// leaves the engine negative except a deliberately reported residual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Zero pounds.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wraps a raw decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Builds an amount from whole pounds.
    #[must_use]
    pub fn from_major(pounds: i64) -> Self {
        Self(Decimal::from(pounds))
    }

    /// Builds an amount from pence (e.g. `from_minor(11400)` is £114.00).
    #[must_use]
    pub fn from_minor(pence: i64) -> Self {
        Self(Decimal::new(pence, CURRENCY_DP))
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Rounds to currency precision (2 dp) using round-half-up.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Multiplies by an arbitrary decimal factor and rounds to currency
    /// precision.
    #[must_use]
    pub fn times(self, factor: Decimal) -> Self {
        Self(self.0 * factor).rounded()
    }

    /// Takes `pct` percent of this amount, rounded to currency precision.
    #[must_use]
    pub fn percent(self, pct: Decimal) -> Self {
        self.times(pct / Decimal::ONE_HUNDRED)
    }

    /// True when the amount is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded().0)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.to_f64() {
            Some(v) => serializer.serialize_f64(v),
            None => Err(S::Error::custom("currency amount out of f64 range")),
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        let dec = Decimal::from_f64_retain(raw)
            .ok_or_else(|| D::Error::custom(format!("invalid currency amount: {raw}")))?;
        // Float noise beyond 2 dp is not meaningful in major-unit currency.
        Ok(Self(dec).rounded())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_at_two_places() {
        assert_eq!(Money::from_minor(1).amount(), Decimal::new(1, 2));
        // 32.3301 -> 32.33
        assert_eq!(
            Money::new(Decimal::new(323_301, 4)).rounded(),
            Money::from_minor(3233)
        );
        // 1.005 -> 1.01 (half-up, not banker's)
        assert_eq!(
            Money::new(Decimal::new(1005, 3)).rounded(),
            Money::from_minor(101)
        );
    }

    #[test]
    fn percent_of_amount() {
        assert_eq!(
            Money::from_major(190).percent(Decimal::from(60)),
            Money::from_major(114)
        );
        assert_eq!(Money::from_major(50).percent(Decimal::ZERO), Money::ZERO);
    }

    #[test]
    fn arithmetic_and_sum() {
        let total: Money = [Money::from_minor(150), Money::from_minor(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_major(4));
        assert_eq!(total - Money::from_major(1), Money::from_major(3));
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_minor(9550)).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json, "95.5");
    }

    #[test]
    fn deserializes_from_number_and_rounds_noise() {
        let m: Money = match serde_json::from_str("200.004999") {
            Ok(m) => m,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert_eq!(m, Money::from_major(200));

        let neg: Money = match serde_json::from_str("-10") {
            Ok(m) => m,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert!(neg.is_negative());
    }

    #[test]
    fn display_always_shows_two_places() {
        assert_eq!(Money::from_major(475).to_string(), "475.00");
        assert_eq!(Money::from_minor(3233).to_string(), "32.33");
    }
}
