//! Client for the fintech accounts API (accounts and their tariff adjustments).

use async_trait::async_trait;
use reqwest::StatusCode;

use tariff_types::{
    Account, AccountId, AccountRepository, Fee, IntegrationError, TariffAdjustmentRepository,
    TariffAdjustmentRequest,
};

use crate::endpoint::{Endpoint, EndpointFactory, RequestOptions, decode, expect_status};
use crate::types::{AccountRecord, AdjustmentRecord, CreateAdjustmentBody, UpdateAccountBody};

/// HTTP adapter implementing both [`AccountRepository`] and
/// [`TariffAdjustmentRepository`] over the accounts API.
pub struct AccountsApi {
    account: Endpoint,
    adjustments: Endpoint,
    last_adjustment: Endpoint,
}

impl AccountsApi {
    pub fn new(factory: &EndpointFactory) -> Self {
        Self {
            account: factory.build("/v1/accounts/{id}"),
            adjustments: factory.build("/v1/accounts/{id}/tariff-adjustments"),
            last_adjustment: factory.build("/v1/accounts/{id}/tariff-adjustments/last"),
        }
    }
}

fn for_account(id: &AccountId) -> RequestOptions {
    RequestOptions::new().param("id", id.as_str())
}

#[async_trait]
impl AccountRepository for AccountsApi {
    #[tracing::instrument(skip(self, id), fields(account_id = %id))]
    async fn get(&self, id: &AccountId) -> Result<Account, IntegrationError> {
        let response = self.account.get(for_account(id)).await?;
        let response = expect_status(response, &[StatusCode::OK]).await?;
        let record: AccountRecord = decode(response).await?;
        Ok(record.into())
    }

    #[tracing::instrument(
        skip(self, id, new_fee),
        fields(account_id = %id, new_fee = %new_fee)
    )]
    async fn update_fee(&self, id: &AccountId, new_fee: Fee) -> Result<(), IntegrationError> {
        let opts = for_account(id).json(&UpdateAccountBody {
            monthly_fee: new_fee,
        })?;
        let response = self.account.patch(opts).await?;
        expect_status(response, &[StatusCode::NO_CONTENT, StatusCode::OK]).await?;
        Ok(())
    }
}

#[async_trait]
impl TariffAdjustmentRepository for AccountsApi {
    #[tracing::instrument(
        skip(self, request),
        fields(account_id = %request.account_id, transaction_id = %request.transaction_id)
    )]
    async fn create(
        &self,
        request: &TariffAdjustmentRequest,
        callback_url: &str,
    ) -> Result<(), IntegrationError> {
        let opts = for_account(&request.account_id).json(&CreateAdjustmentBody {
            new_fee: request.new_fee,
            callback_url,
        })?;
        let response = self.adjustments.post(opts).await?;
        expect_status(response, &[StatusCode::CREATED, StatusCode::OK]).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, id), fields(account_id = %id))]
    async fn get_last_by_account(
        &self,
        id: &AccountId,
    ) -> Result<TariffAdjustmentRequest, IntegrationError> {
        let response = self.last_adjustment.get(for_account(id)).await?;
        let response = expect_status(response, &[StatusCode::OK]).await?;
        let record: AdjustmentRecord = decode(response).await?;
        Ok(record.into())
    }

    #[tracing::instrument(skip(self, id), fields(account_id = %id))]
    async fn all_by_account(
        &self,
        id: &AccountId,
    ) -> Result<Vec<TariffAdjustmentRequest>, IntegrationError> {
        let response = self.adjustments.get(for_account(id)).await?;
        let response = expect_status(response, &[StatusCode::OK]).await?;
        let records: Vec<AdjustmentRecord> = decode(response).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
