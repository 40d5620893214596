//! Ingest service that seeds the record store from the upstream dataset.
//!
//! # Flow
//!
//! 1. Fetch the upstream document through a [`TransactionSource`]
//! 2. Reject anything that is not a JSON array, before touching the store
//! 3. Normalize every element (defaults, date parsing, schema checks)
//! 4. Replace the stored collection in one atomic [`TransactionStore::replace_all`]
//!
//! The store is never partially replaced: if step 4 fails, the previous
//! contents remain and the ingest can simply be re-run.

use serde_json::Value;

use crate::normalize::normalize;
use crate::traits::{TransactionSource, TransactionStore};
use crate::AppError;

/// Outcome of a successful ingest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Elements in the upstream array.
    pub received: usize,
    /// Records written to the store.
    pub stored: u64,
    /// Elements dropped because their date was missing or unparseable.
    pub dropped_invalid_date: usize,
    /// Elements dropped because they were not JSON objects.
    pub dropped_malformed: usize,
    /// Stored records that carried no `sold` flag.
    pub missing_sold: usize,
}

/// Service for (re)initializing the record store.
///
/// # Type Parameters
///
/// * `S` - Record store implementation (e.g. `TransactionRepository`)
/// * `U` - Upstream source implementation (e.g. `HttpTransactionSource`)
pub struct IngestService<S, U>
where
    S: TransactionStore,
    U: TransactionSource,
{
    store: S,
    source: U,
}

impl<S, U> Clone for IngestService<S, U>
where
    S: TransactionStore,
    U: TransactionSource,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            source: self.source.clone(),
        }
    }
}

impl<S, U> IngestService<S, U>
where
    S: TransactionStore,
    U: TransactionSource,
{
    pub fn new(store: S, source: U) -> Self {
        Self { store, source }
    }

    /// Fetches the upstream dataset and replaces the stored collection.
    ///
    /// # Errors
    ///
    /// - `AppError::UpstreamFetch` if the source cannot be read
    /// - `AppError::UpstreamPayload` if the source did not serve an array;
    ///   the store is left untouched
    /// - a store error if the replacement fails; the previous contents remain
    pub async fn initialize(&self) -> Result<IngestReport, AppError> {
        let document = self.source.fetch().await?;

        let items = match document {
            Value::Array(items) => items,
            other => {
                return Err(AppError::UpstreamPayload(format!(
                    "expected a JSON array, got {}",
                    json_type_name(&other)
                )));
            }
        };

        let received = items.len();
        let batch = normalize(items);

        if batch.dropped_invalid_date > 0 || batch.dropped_malformed > 0 {
            tracing::warn!(
                dropped_invalid_date = batch.dropped_invalid_date,
                dropped_malformed = batch.dropped_malformed,
                "Dropped upstream records during normalization"
            );
        }

        if batch.missing_sold > 0 {
            tracing::warn!(
                missing_sold = batch.missing_sold,
                "Upstream records carry no sold flag; they count in neither sold facet"
            );
        }

        let stored = self.store.replace_all(&batch.records).await?;

        let report = IngestReport {
            received,
            stored,
            dropped_invalid_date: batch.dropped_invalid_date,
            dropped_malformed: batch.dropped_malformed,
            missing_sold: batch.missing_sold,
        };

        tracing::info!(
            received = report.received,
            stored = report.stored,
            "Record store initialized"
        );

        Ok(report)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
