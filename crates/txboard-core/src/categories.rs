//! Category breakdown for one month of the current year.

use crate::models::CategoryCount;
use crate::period::{Month, MonthWindow};
use crate::traits::TransactionStore;
use crate::AppError;

#[derive(Clone)]
pub struct CategoryService<S: TransactionStore> {
    store: S,
}

impl<S: TransactionStore> CategoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record counts per category for `month` of the current UTC year.
    pub async fn category_breakdown(&self, month: Month) -> Result<Vec<CategoryCount>, AppError> {
        let window = MonthWindow::current_year(month)?;
        self.category_breakdown_for(&window).await
    }

    /// Record counts per category for an explicit window.
    ///
    /// The empty category is a group of its own.
    pub async fn category_breakdown_for(
        &self,
        window: &MonthWindow,
    ) -> Result<Vec<CategoryCount>, AppError> {
        self.store.category_counts(window).await
    }
}
