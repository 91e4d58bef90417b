//! # Tariff Integrations
//!
//! Adapters that implement the `tariff-types` ports over the downstream
//! fintech HTTP APIs.
//!
//! - `endpoint` - templated HTTP calls sharing one connection pool
//! - `accounts_api` - accounts store and tariff adjustment store
//! - `search_engine` - account search
//! - `adjustment_flow` - adjustment approval flow
//!
//! Every adapter checks the status code against the set its downstream
//! contract allows and returns [`IntegrationError::Http`] with the raw body
//! otherwise. Nothing is retried.
//!
//! [`IntegrationError::Http`]: tariff_types::IntegrationError::Http

pub mod accounts_api;
pub mod adjustment_flow;
pub mod endpoint;
pub mod search_engine;

mod types;

pub use accounts_api::AccountsApi;
pub use adjustment_flow::AdjustmentFlowApi;
pub use endpoint::{Endpoint, EndpointFactory, RequestOptions};
pub use search_engine::SearchEngine;
