//! Monthly sale statistics.

use crate::models::SaleSummary;
use crate::period::{Month, MonthWindow};
use crate::traits::TransactionStore;
use crate::AppError;

/// Service computing the sale total and sold/unsold counts for a month.
#[derive(Clone)]
pub struct StatisticsService<S: TransactionStore> {
    store: S,
}

impl<S: TransactionStore> StatisticsService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Aggregates records dated within `month` of `year`.
    ///
    /// An empty window yields a zero summary.
    pub async fn monthly_summary(&self, year: i32, month: Month) -> Result<SaleSummary, AppError> {
        let window = MonthWindow::new(year, month)?;
        let summary = self.store.sale_summary(&window).await?;

        tracing::debug!(
            year,
            month = month.number(),
            total_sale_amount = summary.total_sale_amount,
            "Computed monthly sale summary"
        );

        Ok(summary)
    }
}
