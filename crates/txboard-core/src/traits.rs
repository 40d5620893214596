//! Trait definitions for external dependencies.
//!
//! The services in this crate are generic over these traits so that the
//! PostgreSQL repository and HTTP client can be swapped for in-memory
//! implementations in tests:
//!
//! - [`TransactionStore`] - the record store (e.g. PostgreSQL)
//! - [`TransactionSource`] - the upstream dataset (e.g. an HTTP endpoint)
//!
//! # Example
//!
//! ```
//! use txboard_core::traits::TransactionStore;
//! use txboard_core::{AppError, Month, MonthWindow, SaleSummary};
//!
//! async fn march_2024<S: TransactionStore>(store: &S) -> Result<SaleSummary, AppError> {
//!     let window = MonthWindow::new(2024, Month::new(3)?)?;
//!     store.sale_summary(&window).await
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::histogram::PriceBand;
use crate::models::{CategoryCount, NewTransaction, SaleSummary, TransactionPage};
use crate::params::Pagination;
use crate::period::MonthWindow;
use crate::search::SearchFilter;
use crate::AppError;

/// Store for transaction persistence and aggregation.
///
/// The ingest is the only writer. All read operations may run concurrently
/// with each other and with an ingest.
pub trait TransactionStore: Send + Sync + Clone {
    /// Replaces the entire collection with `records`.
    ///
    /// Implementations must make the replacement atomic: on failure the
    /// previous contents remain, and concurrent readers never observe a
    /// partially replaced collection.
    ///
    /// # Returns
    ///
    /// The number of records written.
    fn replace_all(
        &self,
        records: &[NewTransaction],
    ) -> impl Future<Output = Result<u64, AppError>> + Send;

    /// Returns one page of records matching `filter`, in insertion order,
    /// together with the total number of matches.
    fn search(
        &self,
        filter: &SearchFilter,
        pagination: Pagination,
    ) -> impl Future<Output = Result<TransactionPage, AppError>> + Send;

    /// Computes the sale total and sold/unsold counts for a month window.
    fn sale_summary(
        &self,
        window: &MonthWindow,
    ) -> impl Future<Output = Result<SaleSummary, AppError>> + Send;

    /// Counts records in the window whose price falls in each band.
    ///
    /// # Returns
    ///
    /// One count per band, in the order of `bands`.
    fn price_band_counts(
        &self,
        window: &MonthWindow,
        bands: &[PriceBand],
    ) -> impl Future<Output = Result<Vec<i64>, AppError>> + Send;

    /// Counts records in the window grouped by category, sorted by category.
    fn category_counts(
        &self,
        window: &MonthWindow,
    ) -> impl Future<Output = Result<Vec<CategoryCount>, AppError>> + Send;

    /// Checks store connectivity.
    fn health_check(&self) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Source of the raw upstream dataset.
pub trait TransactionSource: Send + Sync + Clone {
    /// Fetches and decodes the upstream document.
    ///
    /// The returned value is whatever JSON the source served; checking
    /// that it is an array is left to the caller.
    fn fetch(&self) -> impl Future<Output = Result<Value, AppError>> + Send;
}
