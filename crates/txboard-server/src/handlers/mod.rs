//! HTTP request handlers for API endpoints.

pub mod categories;
pub mod health;
pub mod initialize;
pub mod price_range;
pub mod statistics;
pub mod transactions;
