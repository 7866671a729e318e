//! # payout-gateway
//!
//! REST API gateway for the payout allocation engine of a multi-tenant
//! booking platform.
//!
//! Given a snapshot of a business's bookings, staff payout policies, and
//! subscription plan, the engine computes how gross revenue splits
//! between platform fees, staff earnings, and the owner's residual, and
//! validates payout requests against the external ledger. Persistence,
//! authentication, and settlement are external collaborators; every
//! request carries its own input snapshot and the computation is pure.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── EarningsService (service/)
//!     │
//!     ├── Allocation Engine (engine/)
//!     │
//!     └── Domain types (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod service;
