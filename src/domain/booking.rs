//! Booking records as delivered by the external booking system.
//!
//! Bookings are read-only input to this service: the external
//! booking/payment system creates and updates them, and the allocation
//! engine only ever counts the `COMPLETED` ones toward earnings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ids::{BookingId, BusinessId, StaffId};
use super::money::Money;

/// Lifecycle status of a booking, as delivered on the wire
/// (`"PENDING"`, `"COMPLETED"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Requested, not yet confirmed by the business.
    Pending,
    /// Confirmed but not yet performed.
    Confirmed,
    /// Service delivered and paid for. The only status that counts
    /// toward revenue and earnings.
    Completed,
    /// Cancelled before delivery.
    Cancelled,
    /// Currently being delivered.
    InProgress,
}

/// A single service transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Booking identifier.
    pub id: BookingId,
    /// Business the booking belongs to.
    pub business_id: BusinessId,
    /// Staff member the booking is attributed to. `None` means the
    /// booking is unattributed: it still counts toward the business
    /// total but toward no individual's figures.
    pub staff_id: Option<StaffId>,
    /// Gross amount paid, in pounds. Must be non-negative; negative
    /// values are reported as bad data by the aggregator.
    #[schema(value_type = f64)]
    pub total_amount: Money,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// When the booked service starts; used for day/week bucketing.
    pub start_time: DateTime<Utc>,
    /// Display name of the booked service.
    pub service_name: String,
}

impl Booking {
    /// True when this booking counts toward revenue.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == BookingStatus::Completed
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let json = r#"{
            "id": "7f1a3a1e-7b2d-4c5e-9f10-111213141516",
            "businessId": "27d9c8a0-0f1e-4a2b-8c3d-415161718191",
            "staffId": null,
            "totalAmount": 45.5,
            "status": "COMPLETED",
            "startTime": "2026-03-02T10:30:00Z",
            "serviceName": "Cut & Finish"
        }"#;
        let booking: Booking = match serde_json::from_str(json) {
            Ok(b) => b,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert!(booking.is_completed());
        assert!(booking.staff_id.is_none());
        assert_eq!(booking.total_amount, Money::from_minor(4550));
    }

    #[test]
    fn status_uses_screaming_snake_case() {
        let json = serde_json::to_string(&BookingStatus::InProgress).ok();
        assert_eq!(json.as_deref(), Some("\"IN_PROGRESS\""));
        let parsed: Result<BookingStatus, _> = serde_json::from_str("\"CANCELLED\"");
        assert_eq!(parsed.ok(), Some(BookingStatus::Cancelled));
    }
}
