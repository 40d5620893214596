//! Paginated transaction search.

use crate::models::Transaction;
use crate::params::Pagination;
use crate::traits::TransactionStore;
use crate::AppError;

/// Match criteria for a transaction search.
///
/// A record matches when its title or description contains `term`
/// case-insensitively, or, when `term` reads as a finite number, when its
/// price equals that number exactly. An empty term matches every record.
/// NUL characters are dropped from the term; stored text never holds them.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    term: String,
    price: Option<f64>,
}

impl SearchFilter {
    pub fn new(term: &str) -> Self {
        let term = term.replace('\0', "");
        let price = term
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite());

        Self { term, price }
    }

    /// Filter that matches every record.
    pub fn all() -> Self {
        Self::new("")
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// The exact price to match, if the term is numeric.
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let needle = self.term.to_lowercase();
        transaction.title.to_lowercase().contains(&needle)
            || transaction.description.to_lowercase().contains(&needle)
            || self.price.is_some_and(|price| transaction.price == price)
    }
}

/// One page of search results with pagination metadata.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub transactions: Vec<Transaction>,
    pub total_count: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub per_page: i64,
}

/// Service for searching stored transactions.
#[derive(Clone)]
pub struct SearchService<S: TransactionStore> {
    store: S,
}

impl<S: TransactionStore> SearchService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Searches transactions and returns the requested page.
    ///
    /// # Arguments
    ///
    /// * `term` - Search text; empty matches everything
    /// * `pagination` - Validated page and page size
    pub async fn search(
        &self,
        term: &str,
        pagination: Pagination,
    ) -> Result<SearchResults, AppError> {
        let filter = SearchFilter::new(term);
        let page = self.store.search(&filter, pagination).await?;

        Ok(SearchResults {
            total_pages: pagination.total_pages(page.total_count),
            total_count: page.total_count,
            transactions: page.transactions,
            current_page: pagination.page,
            per_page: pagination.per_page,
        })
    }
}
