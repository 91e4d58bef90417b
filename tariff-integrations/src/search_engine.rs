//! Client for the account search API.

use async_trait::async_trait;
use reqwest::StatusCode;

use tariff_types::{Account, AccountSearcher, IntegrationError};

use crate::endpoint::{Endpoint, EndpointFactory, RequestOptions, decode, expect_status};
use crate::types::AccountRecord;

pub struct SearchEngine {
    accounts: Endpoint,
}

impl SearchEngine {
    pub fn new(factory: &EndpointFactory) -> Self {
        Self {
            accounts: factory.build("/v1/accounts"),
        }
    }
}

#[async_trait]
impl AccountSearcher for SearchEngine {
    /// An empty term sends no `term` parameter, which the API treats as "all accounts".
    ///
    /// Records that are not valid accounts (blank id, negative fee, missing
    /// fields) are logged and skipped; the rest of the page is still returned.
    #[tracing::instrument(skip(self))]
    async fn search_by_term(&self, term: &str) -> Result<Vec<Account>, IntegrationError> {
        let mut opts = RequestOptions::new();
        if !term.is_empty() {
            opts = opts.query("term", term);
        }

        let response = self.accounts.get(opts).await?;
        let response = expect_status(response, &[StatusCode::OK]).await?;
        let records: Vec<serde_json::Value> = decode(response).await?;
        Ok(records.into_iter().filter_map(into_account).collect())
    }
}

fn into_account(raw: serde_json::Value) -> Option<Account> {
    match serde_json::from_value::<AccountRecord>(raw) {
        Ok(record) => Some(record.into()),
        Err(e) => {
            tracing::warn!(error = %e, "skipping invalid account record");
            None
        }
    }
}
