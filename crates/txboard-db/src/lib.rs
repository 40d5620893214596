//! txboard DB - PostgreSQL record store.
//!
//! # Overview
//!
//! - [`TransactionRepository`] - [`TransactionStore`] backed by a `sqlx` pool
//! - [`SCHEMA`] - idempotent DDL applied by [`TransactionRepository::migrate`]
//!
//! [`TransactionStore`]: txboard_core::TransactionStore

mod repository;
mod schema;

pub use repository::TransactionRepository;
pub use schema::SCHEMA;
