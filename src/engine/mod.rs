//! The payout allocation engine.
//!
//! Pure, synchronous computation over immutable input snapshots. Data
//! flows leaves-first:
//!
//! ```text
//! bookings ──► aggregate ──► fees ──► { payout policies, owner residual }
//!                                            │
//!                                            └──► summary
//! ```
//!
//! Nothing in this module performs I/O, blocks, or shares state between
//! invocations — summaries for many businesses can be computed
//! concurrently with no coordination.

pub mod aggregate;
pub mod fees;
pub mod payout;
pub mod summary;

pub use aggregate::{aggregate, BookingIssue, RevenueAggregate, StaffRevenue};
pub use fees::{net_of_platform_fee, platform_fee};
pub use payout::{evaluate, owner_earnings, EarnedAmount};
pub use summary::{summarize, validate_payout_request, AllocationSummary, LedgerBalances};
