//! Monthly fee value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::DomainError;

/// Non-negative monthly fee, held as a fixed-point decimal.
///
/// Serialised as a plain JSON number. Negative values are rejected both by
/// [`Fee::new`] and during deserialisation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
#[schema(value_type = f64, example = 12.5)]
pub struct Fee(Decimal);

impl Fee {
    /// Creates a new fee.
    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::NegativeFee);
        }
        Ok(Self(amount))
    }

    /// A zero fee.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Fee {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Fee::new(value)
    }
}

impl From<Fee> for Decimal {
    fn from(fee: Fee) -> Self {
        fee.0
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
