//! Service layer: snapshot orchestration over the allocation engine.

pub mod earnings_service;

pub use earnings_service::{EarningsService, EarningsSnapshot, StaffEarnings};
