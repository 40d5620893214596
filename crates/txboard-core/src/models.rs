//! Domain models for stored transactions and query results.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A normalized transaction as held by the record store.
///
/// `id` is assigned by the store on insert and increases with insertion
/// order; listings are returned in that order.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
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
    pub sold: Option<bool>,
}

/// A normalized transaction ready to be written by the ingest.
///
/// Produced by [`crate::normalize::normalize`]; every instance carries a
/// valid date.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub transaction_id: Option<String>,
    pub product_id: Option<String>,
    pub user_id: Option<String>,
    pub amount: Option<f64>,
    pub date: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub sold: Option<bool>,
}

impl NewTransaction {
    /// Attaches a store-assigned id.
    pub fn into_stored(self, id: i64) -> Transaction {
        Transaction {
            id,
            transaction_id: self.transaction_id,
            product_id: self.product_id,
            user_id: self.user_id,
            amount: self.amount,
            date: self.date,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            sold: self.sold,
        }
    }
}

/// One page of search results plus the unpaginated match count.
#[derive(Debug, Clone, Default)]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub total_count: i64,
}

/// Sale aggregates for one month window.
///
/// The sold and not-sold counts are independent facets: records whose
/// `sold` flag is unknown count in neither.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SaleSummary {
    pub total_sale_amount: f64,
    pub total_sold_items: i64,
    pub total_not_sold_items: i64,
}

/// Record count for one price band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBandCount {
    /// Human readable band label, e.g. `"101 - 200"`.
    pub range: String,
    pub count: i64,
}

/// Record count for one category value.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}
