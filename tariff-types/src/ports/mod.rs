//! Port traits (interfaces for adapters).
//!
//! These are the contracts the downstream adapters must implement.
//! The use cases depend on these traits, not on concrete HTTP clients.

mod repository;
mod services;

pub use repository::{AccountRepository, TariffAdjustmentRepository};
pub use services::{AccountSearcher, AdjustmentFlowProcessor};
