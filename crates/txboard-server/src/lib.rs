//! txboard Server - REST API for the transactions dashboard
//!
//! This crate provides the HTTP API the dashboard front end talks to:
//!
//! - **Initialize**: Re-seed the record store from the upstream dataset
//! - **Transactions**: Paginated, searchable transaction listing
//! - **Statistics**: Monthly sale totals and sold/unsold counts
//! - **Price range / categories**: Monthly chart data
//!
//! # API Documentation
//!
//! When running the server, interactive API documentation is available
//! at `/swagger-ui`.

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
