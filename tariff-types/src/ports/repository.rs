//! Repository ports backed by the downstream accounts store.

use crate::domain::{Account, AccountId, Fee, TariffAdjustmentRequest};
use crate::error::IntegrationError;

/// Reads and updates accounts in the accounts store.
#[async_trait::async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Fetches a single account.
    async fn get(&self, id: &AccountId) -> Result<Account, IntegrationError>;

    /// Writes a new monthly fee to the account record.
    async fn update_fee(&self, id: &AccountId, new_fee: Fee) -> Result<(), IntegrationError>;
}

/// Manages tariff adjustment requests in the adjustment store.
#[async_trait::async_trait]
pub trait TariffAdjustmentRepository: Send + Sync + 'static {
    /// Records a new adjustment request. The store calls `callback_url` once
    /// the request changes state.
    async fn create(
        &self,
        request: &TariffAdjustmentRequest,
        callback_url: &str,
    ) -> Result<(), IntegrationError>;

    /// Most recent adjustment for the account.
    async fn get_last_by_account(
        &self,
        id: &AccountId,
    ) -> Result<TariffAdjustmentRequest, IntegrationError>;

    /// Every adjustment for the account, in the order the store returns them
    /// (newest first).
    async fn all_by_account(
        &self,
        id: &AccountId,
    ) -> Result<Vec<TariffAdjustmentRequest>, IntegrationError>;
}
