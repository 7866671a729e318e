//! Data Transfer Objects for REST request/response serialization.
//!
//! Field names are camelCase and currency values are plain JSON numbers
//! in major units (pounds), matching the platform-wide API contract.

pub mod common_dto;
pub mod earnings_dto;
pub mod payout_dto;
pub mod policy_dto;

pub use common_dto::*;
pub use earnings_dto::*;
pub use payout_dto::*;
pub use policy_dto::*;
