//! Account search use case.

use std::sync::Arc;

use tariff_types::{Account, AccountSearcher, AppError};

/// Thin pass-through to the search port. No local filtering, paging or caching.
pub struct SearchService {
    searcher: Arc<dyn AccountSearcher>,
}

impl SearchService {
    pub fn new(searcher: Arc<dyn AccountSearcher>) -> Self {
        Self { searcher }
    }

    /// Searches accounts by term. An empty term matches every account.
    #[tracing::instrument(skip(self))]
    pub async fn search_accounts_by_term(&self, term: &str) -> Result<Vec<Account>, AppError> {
        self.searcher.search_by_term(term).await.map_err(|e| {
            tracing::error!(term, error = %e, "search by term failed");
            e.into()
        })
    }
}
