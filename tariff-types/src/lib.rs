//! # Tariff Types
//!
//! Domain types and port traits for the tariff adjustment backend-for-frontend.
//! This crate has ZERO IO dependencies - only data structures,
//! aggregation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Account, Fee, TariffAdjustmentRequest, Report)
//! - `ports/` - Trait definitions that the downstream adapters implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Domain, integration and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Account, AccountId, Fee, Report, TariffAdjustmentRequest, TransactionId};
pub use dto::*;
pub use error::{AppError, DomainError, IntegrationError};
pub use ports::{
    AccountRepository, AccountSearcher, AdjustmentFlowProcessor, TariffAdjustmentRepository,
};
