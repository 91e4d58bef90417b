//! Client for the adjustment approval flow service.

use async_trait::async_trait;
use reqwest::StatusCode;

use tariff_types::{AdjustmentFlowProcessor, IntegrationError, TariffAdjustmentRequest};

use crate::endpoint::{Endpoint, EndpointFactory, RequestOptions, expect_status};
use crate::types::ApprovalFlowBody;

pub struct AdjustmentFlowApi {
    flow: Endpoint,
}

impl AdjustmentFlowApi {
    pub fn new(factory: &EndpointFactory) -> Self {
        Self {
            flow: factory.build("/v1/adjustment-approval-flow"),
        }
    }
}

#[async_trait]
impl AdjustmentFlowProcessor for AdjustmentFlowApi {
    #[tracing::instrument(
        skip(self, request),
        fields(account_id = %request.account_id, transaction_id = %request.transaction_id)
    )]
    async fn begin_flow(
        &self,
        request: &TariffAdjustmentRequest,
        callback_url: &str,
    ) -> Result<(), IntegrationError> {
        let opts = RequestOptions::new().json(&ApprovalFlowBody {
            account_id: &request.account_id,
            new_fee: request.new_fee,
            callback_url,
        })?;
        let response = self.flow.post(opts).await?;
        expect_status(response, &[StatusCode::ACCEPTED, StatusCode::OK]).await?;
        Ok(())
    }
}
