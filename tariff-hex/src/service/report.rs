//! Summary report use case.

use std::sync::Arc;

use tariff_types::{AppError, Report};

use super::SearchService;

pub struct ReportService {
    search: Arc<SearchService>,
}

impl ReportService {
    pub fn new(search: Arc<SearchService>) -> Self {
        Self { search }
    }

    /// Loads every account (empty search term) and aggregates it in memory.
    ///
    /// The whole population is materialised before aggregation; it is bounded
    /// by what a single search call returns.
    #[tracing::instrument(skip(self))]
    pub async fn get_report(&self) -> Result<Report, AppError> {
        let accounts = self.search.search_accounts_by_term("").await?;
        let report = Report::from_accounts(&accounts);
        tracing::debug!(total_accounts = report.total_accounts, "report computed");
        Ok(report)
    }
}
