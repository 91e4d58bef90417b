//! # Tariff Hex
//!
//! Use cases and HTTP adapter for the tariff adjustment BFF.
//!
//! ## Architecture
//!
//! - `service/` - Use cases (accounts, search, report)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi` - OpenAPI document served under `/docs`
//!
//! Use cases hold their downstream ports as `Arc<dyn Port>` so the
//! adapters in `tariff-integrations` (or test doubles) can be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use inbound::{AppState, HttpServer};
pub use service::{AccountService, ReportService, SearchService};
