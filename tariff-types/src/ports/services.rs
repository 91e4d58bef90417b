//! Ports for downstream services that are not plain stores.

use crate::domain::{Account, TariffAdjustmentRequest};
use crate::error::IntegrationError;

/// Searches accounts by free-text term. An empty term matches every account.
#[async_trait::async_trait]
pub trait AccountSearcher: Send + Sync + 'static {
    async fn search_by_term(&self, term: &str) -> Result<Vec<Account>, IntegrationError>;
}

/// Starts the external approval flow for a tariff adjustment.
#[async_trait::async_trait]
pub trait AdjustmentFlowProcessor: Send + Sync + 'static {
    async fn begin_flow(
        &self,
        request: &TariffAdjustmentRequest,
        callback_url: &str,
    ) -> Result<(), IntegrationError>;
}
