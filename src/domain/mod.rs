//! Domain layer: currency, identifiers, and the booking-platform data model.
//!
//! These are the immutable input types the allocation engine computes
//! over. Nothing in here performs I/O or holds shared state; a request
//! hands the engine a snapshot of these values and gets figures back.

pub mod booking;
pub mod ids;
pub mod money;
pub mod plan;
pub mod policy;
pub mod staff;

pub use booking::{Booking, BookingStatus};
pub use ids::{BookingId, BusinessId, StaffId};
pub use money::Money;
pub use plan::BusinessPlan;
pub use policy::PayoutPolicy;
pub use staff::{Payee, StaffMember};
