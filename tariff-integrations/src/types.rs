//! Wire shapes of the downstream fintech APIs (snake_case JSON).

use serde::{Deserialize, Serialize};

use tariff_types::{Account, AccountId, Fee, TariffAdjustmentRequest, TransactionId};

// ─────────────────────────────────────────────────────────────────────────────
// Responses
// ─────────────────────────────────────────────────────────────────────────────

/// Account as returned by the accounts and search APIs.
#[derive(Debug, Deserialize)]
pub struct AccountRecord {
    pub id: AccountId,
    pub name: String,
    pub monthly_fee: Fee,
    #[serde(rename = "type")]
    pub account_type: String,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Account::new(record.id, record.name, record.monthly_fee, record.account_type)
    }
}

/// Adjustment as returned by the adjustment store.
#[derive(Debug, Deserialize)]
pub struct AdjustmentRecord {
    pub transaction_id: TransactionId,
    pub fee: Fee,
    pub account_id: AccountId,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<AdjustmentRecord> for TariffAdjustmentRequest {
    fn from(record: AdjustmentRecord) -> Self {
        TariffAdjustmentRequest::from_parts(
            record.transaction_id,
            record.account_id,
            record.fee,
            record.status,
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request bodies
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CreateAdjustmentBody<'a> {
    pub new_fee: Fee,
    pub callback_url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateAccountBody {
    pub monthly_fee: Fee,
}

#[derive(Debug, Serialize)]
pub struct ApprovalFlowBody<'a> {
    pub account_id: &'a AccountId,
    pub new_fee: Fee,
    pub callback_url: &'a str,
}
