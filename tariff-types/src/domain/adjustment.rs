//! Tariff adjustment domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::account::AccountId;
use super::fee::Fee;

/// Identifier of a single tariff adjustment submission.
///
/// Generated locally as a random UUID, but treated as an opaque string when
/// read back from the adjustment store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "5b1f8e0c-3f2a-4d8e-9a51-0c1e2f3a4b5c")]
pub struct TransactionId(String);

impl TransactionId {
    /// Creates a new random TransactionId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an identifier received from elsewhere.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request to change an account's monthly fee.
///
/// The authoritative copy lives in the downstream adjustment store; `status`
/// is whatever lifecycle tag the approval flow has set there, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffAdjustmentRequest {
    pub transaction_id: TransactionId,
    pub account_id: AccountId,
    pub new_fee: Fee,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TariffAdjustmentRequest {
    /// Creates a fresh submission with a newly generated transaction id.
    pub fn new(account_id: AccountId, new_fee: Fee) -> Self {
        Self {
            transaction_id: TransactionId::generate(),
            account_id,
            new_fee,
            status: None,
        }
    }

    /// Rebuilds a request read back from the adjustment store.
    pub fn from_parts(
        transaction_id: TransactionId,
        account_id: AccountId,
        new_fee: Fee,
        status: Option<String>,
    ) -> Self {
        Self {
            transaction_id,
            account_id,
            new_fee,
            status,
        }
    }
}
