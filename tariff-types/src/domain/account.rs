//! Account domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::fee::Fee;
use crate::error::DomainError;

/// Opaque identifier of an account in the downstream accounts store.
///
/// Never blank. Kept byte-for-byte as received; whitespace is not stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "23423da1-1570-4c3f-8384-2e0aa022e486")]
pub struct AccountId(String);

impl AccountId {
    /// Parses an account id, rejecting empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::MissingAccountId);
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AccountId::parse(&value)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountId::parse(s)
    }
}

/// A financial account (checking, loan, card, ...) as held by the accounts store.
///
/// This is a read-only snapshot; fee changes go through the downstream store
/// and never mutate a local copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,
    /// Human-readable account name
    #[schema(example = "Everyday checking")]
    pub name: String,
    /// Current monthly fee
    pub monthly_fee: Fee,
    /// Free-form account category
    #[serde(rename = "type")]
    #[schema(example = "checking")]
    pub account_type: String,
}

impl Account {
    pub fn new(
        id: AccountId,
        name: impl Into<String>,
        monthly_fee: Fee,
        account_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            monthly_fee,
            account_type: account_type.into(),
        }
    }
}
