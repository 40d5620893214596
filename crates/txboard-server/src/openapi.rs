//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::dto::{
    CategoryStatDto, HealthResponse, InitializeResponse, PriceRangeDto, ServiceStatus,
    StatisticsResponse, TransactionDto, TransactionsResponse,
};
use crate::error::ErrorResponse;
use crate::handlers::{categories, health, initialize, price_range, statistics, transactions};

/// OpenAPI documentation for the txboard API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "txboard API",
        version = "1.0.0",
        description = "Backend for the product transactions dashboard.

Seeds a record store from an upstream JSON dataset and serves listing and
monthly aggregate queries over it.

## Quick Start

1. Load the dataset: `GET /initialize`
2. Browse transactions: `GET /transactions?page=1&perPage=10&search=jacket`
3. Monthly statistics: `GET /statistics?month=3&year=2024`
4. Chart data: `GET /price-range?month=3`, `GET /category-stats?month=3`
",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        health::health_check,
        initialize::initialize,
        transactions::list_transactions,
        statistics::get_statistics,
        price_range::get_price_range,
        categories::get_category_stats,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceStatus,
            InitializeResponse,
            TransactionDto,
            TransactionsResponse,
            StatisticsResponse,
            PriceRangeDto,
            CategoryStatDto,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health"),
        (name = "ingest", description = "Store initialization from the upstream dataset"),
        (name = "transactions", description = "Transaction listing and search"),
        (name = "statistics", description = "Monthly aggregates"),
    )
)]
pub struct ApiDoc;
