//! txboard Client - HTTP access to the upstream transaction dataset.
//!
//! - [`http`] - [`HttpTransactionSource`], the [`TransactionSource`] used in production
//!
//! [`TransactionSource`]: txboard_core::TransactionSource

pub mod http;

pub use http::HttpTransactionSource;
