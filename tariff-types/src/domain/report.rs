//! Summary report computed over the full account population.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::account::Account;

/// Number of accounts kept in [`Report::top_100_by_fee`].
pub const TOP_BY_FEE_LIMIT: usize = 100;

/// Aggregate view of all accounts. Recomputed on every request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Report {
    /// Number of accounts in the population
    #[schema(example = 3)]
    pub total_accounts: usize,
    /// Account count per observed account type
    pub totals_by_type: HashMap<String, usize>,
    /// Highest monthly fees first, at most 100 entries
    pub top_100_by_fee: Vec<Account>,
}

impl Report {
    /// Builds the report from a fully materialised account list.
    pub fn from_accounts(accounts: &[Account]) -> Self {
        Self {
            total_accounts: accounts.len(),
            totals_by_type: totals_by_type(accounts),
            top_100_by_fee: top_by_fee(accounts, TOP_BY_FEE_LIMIT),
        }
    }
}

fn totals_by_type(accounts: &[Account]) -> HashMap<String, usize> {
    let mut totals = HashMap::new();
    for account in accounts {
        *totals.entry(account.account_type.clone()).or_insert(0) += 1;
    }
    totals
}

// Stable sort: equal fees keep their search-result order.
fn top_by_fee(accounts: &[Account], limit: usize) -> Vec<Account> {
    let mut ranked = accounts.to_vec();
    ranked.sort_by(|a, b| b.monthly_fee.cmp(&a.monthly_fee));
    ranked.truncate(limit);
    ranked
}
