//! Account and tariff adjustment use cases.

use std::sync::Arc;

use tracing::Instrument;

use tariff_types::{
    Account, AccountId, AccountRepository, AdjustmentFlowProcessor, AppError, Fee,
    TariffAdjustmentRepository, TariffAdjustmentRequest, TransactionId,
};

/// Path of the webhook the approval flow calls back on.
pub const NOTIFICATIONS_PATH: &str = "/v1/accounts/notifications";

/// Builds the callback URL handed to downstream systems.
pub fn notification_callback_url(public_base_url: &str) -> String {
    format!("{}{}", public_base_url.trim_end_matches('/'), NOTIFICATIONS_PATH)
}

/// Application service for accounts and their tariff adjustments.
pub struct AccountService {
    accounts: Arc<dyn AccountRepository>,
    adjustments: Arc<dyn TariffAdjustmentRepository>,
    flow: Arc<dyn AdjustmentFlowProcessor>,
    callback_url: String,
}

impl AccountService {
    /// Creates the service. `public_base_url` is this service's externally
    /// reachable address, used to build the notification callback URL.
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        adjustments: Arc<dyn TariffAdjustmentRepository>,
        flow: Arc<dyn AdjustmentFlowProcessor>,
        public_base_url: &str,
    ) -> Self {
        Self {
            accounts,
            adjustments,
            flow,
            callback_url: notification_callback_url(public_base_url),
        }
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Fetches an account. Downstream errors are returned unchanged.
    #[tracing::instrument(skip(self))]
    pub async fn get_account(&self, account_id: &str) -> Result<Account, AppError> {
        let id = AccountId::parse(account_id)?;
        Ok(self.accounts.get(&id).await?)
    }

    /// Submits a fee change and returns its freshly generated transaction id.
    ///
    /// Two detached tasks are spawned: one records the request in the
    /// adjustment store, the other starts the approval flow. They run in no
    /// particular order, outlive the caller, and are never joined. Their
    /// failures are logged and nothing else; the caller always sees success
    /// once the tasks are spawned. Must be called from within a Tokio runtime.
    pub fn send_tariff_adjustment_request(
        &self,
        account_id: &str,
        new_fee: Fee,
    ) -> Result<TransactionId, AppError> {
        let id = AccountId::parse(account_id)?;
        let request = TariffAdjustmentRequest::new(id, new_fee);
        let transaction_id = request.transaction_id.clone();

        tracing::info!(
            account_id = %request.account_id,
            transaction_id = %transaction_id,
            new_fee = %request.new_fee,
            "sending tariff adjustment request"
        );

        let store = Arc::clone(&self.adjustments);
        let store_request = request.clone();
        let store_callback = self.callback_url.clone();
        tokio::spawn(
            async move {
                if let Err(e) = store.create(&store_request, &store_callback).await {
                    tracing::error!(error = %e, "create tariff adjustment failed");
                }
            }
            .instrument(tracing::info_span!(
                "create_tariff_adjustment",
                transaction_id = %transaction_id
            )),
        );

        let flow = Arc::clone(&self.flow);
        let flow_callback = self.callback_url.clone();
        tokio::spawn(
            async move {
                if let Err(e) = flow.begin_flow(&request, &flow_callback).await {
                    tracing::error!(error = %e, "begin adjustment flow failed");
                }
            }
            .instrument(tracing::info_span!(
                "begin_adjustment_flow",
                transaction_id = %transaction_id
            )),
        );

        Ok(transaction_id)
    }

    /// Lists every adjustment for the account, newest first as the store returns them.
    #[tracing::instrument(skip(self))]
    pub async fn get_tariff_adjustments(
        &self,
        account_id: &str,
    ) -> Result<Vec<TariffAdjustmentRequest>, AppError> {
        let id = AccountId::parse(account_id)?;
        Ok(self.adjustments.all_by_account(&id).await?)
    }

    /// Applies the account's most recent adjustment to its monthly fee and
    /// returns the adjustment that was applied.
    ///
    /// Last write wins: this re-reads "last adjustment" instead of the one a
    /// given callback refers to, and concurrent adjustments for one account
    /// are not serialised. Two in-flight adjustments can race and the wrong
    /// one may be applied.
    #[tracing::instrument(skip(self))]
    pub async fn update_fee(&self, account_id: &str) -> Result<TariffAdjustmentRequest, AppError> {
        let id = AccountId::parse(account_id)?;

        let last = self.adjustments.get_last_by_account(&id).await?;
        tracing::info!(
            transaction_id = %last.transaction_id,
            new_fee = %last.new_fee,
            "applying last tariff adjustment"
        );

        self.accounts.update_fee(&id, last.new_fee).await?;
        Ok(last)
    }
}
