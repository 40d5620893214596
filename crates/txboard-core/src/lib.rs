//! txboard Core - Domain types, business logic, and services.
//!
//! This crate provides the core functionality for txboard, including:
//!
//! - **Domain models**: [`Transaction`], [`NewTransaction`], [`SaleSummary`], etc.
//! - **Input schema**: [`RawTransaction`] and [`normalize`] for upstream records
//! - **Parameters**: [`Pagination`], [`Month`], [`MonthWindow`]
//! - **Services**: [`IngestService`] to seed the store, and the read-only
//!   [`SearchService`], [`StatisticsService`], [`HistogramService`] and
//!   [`CategoryService`]
//! - **Traits**: [`TransactionStore`] and [`TransactionSource`] for dependency injection
//!
//! # Architecture
//!
//! Business logic is decoupled from I/O through traits:
//!
//! - [`TransactionStore`] - abstracts the record store (e.g., PostgreSQL in `txboard-db`)
//! - [`TransactionSource`] - abstracts the upstream dataset (e.g., HTTP in `txboard-client`)
//!
//! [`MemoryTransactionStore`] implements the store in memory.
//!
//! # Example
//!
//! ```
//! use txboard_core::{MemoryTransactionStore, Pagination, SearchService};
//!
//! # async fn example() -> Result<(), txboard_core::AppError> {
//! let search = SearchService::new(MemoryTransactionStore::new());
//! let page = search.search("jacket", Pagination::new(1, 10)?).await?;
//! assert_eq!(page.total_count, 0);
//! # Ok(())
//! # }
//! ```

pub mod categories;
pub mod config;
pub mod error;
pub mod histogram;
pub mod ingest;
pub mod memory;
pub mod models;
pub mod normalize;
pub mod params;
pub mod period;
pub mod search;
pub mod statistics;
pub mod traits;

// Configuration
pub use config::{DbConfig, HttpConfig, validate_source_url};

// Error handling
pub use error::AppError;

// Domain models
pub use models::{
    CategoryCount, NewTransaction, PriceBandCount, SaleSummary, Transaction, TransactionPage,
};

// Input schema and normalization
pub use normalize::{NormalizedBatch, RawTransaction, normalize, parse_transaction_date};

// Parameters
pub use params::{Pagination, parse_month, parse_year};
pub use period::{Month, MonthWindow};

// Traits for dependency injection
pub use traits::{TransactionSource, TransactionStore};

// Services (generic over trait implementations)
pub use categories::CategoryService;
pub use histogram::{HistogramService, PRICE_BANDS, PriceBand};
pub use ingest::{IngestReport, IngestService};
pub use search::{SearchFilter, SearchResults, SearchService};
pub use statistics::StatisticsService;

// In-memory store
pub use memory::MemoryTransactionStore;
