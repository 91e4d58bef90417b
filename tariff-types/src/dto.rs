//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Account, AccountId, Fee, TariffAdjustmentRequest, TransactionId};

// ─────────────────────────────────────────────────────────────────────────────
// Account DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// A single account as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub id: AccountId,
    #[schema(example = "Everyday checking")]
    pub name: String,
    pub monthly_fee: Fee,
    #[serde(rename = "type")]
    #[schema(example = "checking")]
    pub account_type: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            monthly_fee: account.monthly_fee,
            account_type: account.account_type,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tariff adjustment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of a tariff adjustment submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TariffAdjustmentPayload {
    /// Requested monthly fee
    pub new_fee: Fee,
}

/// A tariff adjustment as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TariffAdjustmentResponse {
    pub transaction_id: TransactionId,
    pub account_id: AccountId,
    pub new_fee: Fee,
}

impl From<TariffAdjustmentRequest> for TariffAdjustmentResponse {
    fn from(req: TariffAdjustmentRequest) -> Self {
        Self {
            transaction_id: req.transaction_id,
            account_id: req.account_id,
            new_fee: req.new_fee,
        }
    }
}

/// Callback sent by the adjustment approval flow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationMessage {
    #[serde(default)]
    #[schema(example = "5b1f8e0c-3f2a-4d8e-9a51-0c1e2f3a4b5c")]
    pub transaction_id: String,
    #[schema(example = "23423da1-1570-4c3f-8384-2e0aa022e486")]
    pub account_id: String,
    #[serde(default)]
    #[schema(example = "approved")]
    pub status: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Search DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query string of the search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Free-text term; empty or missing matches every account
    #[serde(default)]
    pub term: String,
}

/// Envelope of the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub data: Vec<AccountResponse>,
}

impl From<Vec<Account>> for SearchResponse {
    fn from(accounts: Vec<Account>) -> Self {
        Self {
            data: accounts.into_iter().map(AccountResponse::from).collect(),
        }
    }
}
