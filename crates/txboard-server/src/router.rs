//! Router configuration and route composition.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::{Router, routing::get};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use txboard_core::{TransactionSource, TransactionStore};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::handlers::{categories, health, initialize, price_range, statistics, transactions};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
pub fn create_router<S, U>(state: AppState<S, U>, config: &ServerConfig) -> Router
where
    S: TransactionStore + 'static,
    U: TransactionSource + 'static,
{
    let api_routes = Router::new()
        .route("/health", get(health::health_check::<S, U>))
        .route("/initialize", get(initialize::initialize::<S, U>))
        .route(
            "/transactions",
            get(transactions::list_transactions::<S, U>),
        )
        .route("/statistics", get(statistics::get_statistics::<S, U>))
        .route("/price-range", get(price_range::get_price_range::<S, U>))
        .route(
            "/category-stats",
            get(categories::get_category_stats::<S, U>),
        );

    let cors_layer = build_cors_layer(&config.cors_origins);

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware layers (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configuration.
///
/// If `origins` is "*", allows any origin.
/// Otherwise, parses comma-separated origins.
fn build_cors_layer(origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600));

    if origins.trim() == "*" {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let allowed: Vec<HeaderValue> = origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(allowed)
    }
}
