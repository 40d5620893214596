//! In-memory [`TransactionStore`] implementation.
//!
//! Holds records in a vector behind a lock and evaluates filters with the
//! same predicates the SQL store encodes ([`SearchFilter::matches`],
//! [`MonthWindow::contains`], [`PriceBand::contains`]). Used by the
//! service and API test suites, and handy for local experiments without a
//! database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::histogram::PriceBand;
use crate::models::{CategoryCount, NewTransaction, SaleSummary, Transaction, TransactionPage};
use crate::params::Pagination;
use crate::period::MonthWindow;
use crate::search::SearchFilter;
use crate::traits::TransactionStore;
use crate::AppError;

#[derive(Default)]
struct Inner {
    records: Vec<Transaction>,
    next_id: i64,
}

/// Thread-safe in-memory record store.
///
/// Clones share the same underlying collection.
#[derive(Clone, Default)]
pub struct MemoryTransactionStore {
    inner: Arc<RwLock<Inner>>,
    failing: Arc<AtomicBool>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`.
    pub fn with_records(records: Vec<NewTransaction>) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.write() {
            for record in records {
                inner.next_id += 1;
                let id = inner.next_id;
                inner.records.push(record.into_stored(id));
            }
        }
        store
    }

    /// Makes every subsequent operation fail with `AppError::StoreError`
    /// until reset. Simulates an unreachable store.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns a copy of all stored records in insertion order.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.inner
            .read()
            .map(|inner| inner.records.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::StoreError("store unavailable".to_string()))
        } else {
            Ok(())
        }
    }

    fn read_records<T>(&self, f: impl FnOnce(&[Transaction]) -> T) -> Result<T, AppError> {
        self.check_available()?;
        let inner = self
            .inner
            .read()
            .map_err(|_| AppError::StoreError("store lock poisoned".to_string()))?;
        Ok(f(&inner.records))
    }
}

impl TransactionStore for MemoryTransactionStore {
    async fn replace_all(&self, records: &[NewTransaction]) -> Result<u64, AppError> {
        self.check_available()?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AppError::StoreError("store lock poisoned".to_string()))?;

        let mut next_id = inner.next_id;
        let replacement: Vec<Transaction> = records
            .iter()
            .cloned()
            .map(|record| {
                next_id += 1;
                record.into_stored(next_id)
            })
            .collect();

        inner.next_id = next_id;
        inner.records = replacement;
        Ok(inner.records.len() as u64)
    }

    async fn search(
        &self,
        filter: &SearchFilter,
        pagination: Pagination,
    ) -> Result<TransactionPage, AppError> {
        self.read_records(|records| {
            let matching: Vec<&Transaction> =
                records.iter().filter(|t| filter.matches(t)).collect();
            let total_count = matching.len() as i64;
            let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
            let limit = usize::try_from(pagination.limit()).unwrap_or(usize::MAX);

            TransactionPage {
                transactions: matching
                    .into_iter()
                    .skip(offset)
                    .take(limit)
                    .cloned()
                    .collect(),
                total_count,
            }
        })
    }

    async fn sale_summary(&self, window: &MonthWindow) -> Result<SaleSummary, AppError> {
        self.read_records(|records| {
            records
                .iter()
                .filter(|t| window.contains(t.date))
                .fold(SaleSummary::default(), |mut acc, t| {
                    acc.total_sale_amount += t.amount.unwrap_or(0.0);
                    match t.sold {
                        Some(true) => acc.total_sold_items += 1,
                        Some(false) => acc.total_not_sold_items += 1,
                        None => {}
                    }
                    acc
                })
        })
    }

    async fn price_band_counts(
        &self,
        window: &MonthWindow,
        bands: &[PriceBand],
    ) -> Result<Vec<i64>, AppError> {
        self.read_records(|records| {
            bands
                .iter()
                .map(|band| {
                    records
                        .iter()
                        .filter(|t| window.contains(t.date) && band.contains(t.price))
                        .count() as i64
                })
                .collect()
        })
    }

    async fn category_counts(&self, window: &MonthWindow) -> Result<Vec<CategoryCount>, AppError> {
        self.read_records(|records| {
            let mut groups: BTreeMap<&str, i64> = BTreeMap::new();
            for t in records.iter().filter(|t| window.contains(t.date)) {
                *groups.entry(t.category.as_str()).or_default() += 1;
            }
            groups
                .into_iter()
                .map(|(category, count)| CategoryCount {
                    category: category.to_string(),
                    count,
                })
                .collect()
        })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.check_available()
    }
}
