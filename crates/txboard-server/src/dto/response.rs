//! Response DTOs for API endpoints.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use txboard_core::{
    CategoryCount, IngestReport, PriceBandCount, SaleSummary, SearchResults, Transaction,
};

// =============================================================================
// Health
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("healthy" or "degraded")
    pub status: String,
    /// Server version
    pub version: String,
    /// Database connectivity status
    pub database: ServiceStatus,
}

/// Status of an individual service component.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    /// Whether the service is reachable
    pub healthy: bool,
    /// Optional message (e.g., error details)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// Initialize
// =============================================================================

pub const INITIALIZE_MESSAGE: &str = "Database initialized successfully";

/// Result of re-seeding the store.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResponse {
    /// Always "Database initialized successfully"
    pub message: String,
    /// Elements in the upstream array
    pub received: usize,
    /// Records now in the store
    pub stored: u64,
    /// Elements dropped for a missing or unparseable date
    pub dropped_invalid_date: usize,
    /// Elements that were not JSON objects
    pub dropped_malformed: usize,
    /// Stored records without a sold flag
    pub missing_sold: usize,
}

impl From<IngestReport> for InitializeResponse {
    fn from(r: IngestReport) -> Self {
        Self {
            message: INITIALIZE_MESSAGE.to_string(),
            received: r.received,
            stored: r.stored,
            dropped_invalid_date: r.dropped_invalid_date,
            dropped_malformed: r.dropped_malformed,
            missing_sold: r.missing_sold,
        }
    }
}

// =============================================================================
// Transactions
// =============================================================================

/// A stored transaction.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    /// Store-assigned id, increasing with insertion order
    pub id: i64,
    pub transaction_id: Option<String>,
    pub product_id: Option<String>,
    pub user_id: Option<String>,
    pub amount: Option<f64>,
    pub date: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    /// Absent upstream flags stay null
    pub sold: Option<bool>,
}

impl From<Transaction> for TransactionDto {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            transaction_id: t.transaction_id,
            product_id: t.product_id,
            user_id: t.user_id,
            amount: t.amount,
            date: t.date,
            title: t.title,
            description: t.description,
            price: t.price,
            category: t.category,
            sold: t.sold,
        }
    }
}

/// One page of the transaction listing.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionDto>,
    /// Matches across all pages
    pub total_count: i64,
    /// `ceil(totalCount / perPage)`
    pub total_pages: i64,
    pub current_page: i64,
    pub per_page: i64,
}

impl From<SearchResults> for TransactionsResponse {
    fn from(r: SearchResults) -> Self {
        Self {
            transactions: r.transactions.into_iter().map(TransactionDto::from).collect(),
            total_count: r.total_count,
            total_pages: r.total_pages,
            current_page: r.current_page,
            per_page: r.per_page,
        }
    }
}

// =============================================================================
// Monthly aggregates
// =============================================================================

/// Sale statistics for one month.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    /// Sum of `amount` over the month, 0 when empty
    pub total_sale_amount: f64,
    /// Records with `sold == true`
    pub total_sold_items: i64,
    /// Records with `sold == false`
    pub total_not_sold_items: i64,
}

impl From<SaleSummary> for StatisticsResponse {
    fn from(s: SaleSummary) -> Self {
        Self {
            total_sale_amount: s.total_sale_amount,
            total_sold_items: s.total_sold_items,
            total_not_sold_items: s.total_not_sold_items,
        }
    }
}

/// Record count for one price band.
#[derive(Debug, Serialize, ToSchema)]
pub struct PriceRangeDto {
    /// Band label, e.g. "101 - 200" or "901 - above"
    pub range: String,
    pub count: i64,
}

impl From<PriceBandCount> for PriceRangeDto {
    fn from(b: PriceBandCount) -> Self {
        Self {
            range: b.range,
            count: b.count,
        }
    }
}

/// Record count for one category.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryStatDto {
    pub category: String,
    pub count: i64,
}

impl From<CategoryCount> for CategoryStatDto {
    fn from(c: CategoryCount) -> Self {
        Self {
            category: c.category,
            count: c.count,
        }
    }
}
