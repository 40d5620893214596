use txboard_core::{
    CategoryService, HistogramService, IngestService, SearchService, StatisticsService,
    TransactionSource, TransactionStore,
};

/// Shared application state for all handlers.
///
/// Generic over the store and the upstream source so the router can be
/// driven by the PostgreSQL repository in production and by the
/// in-memory store in tests. Every service holds a clone of the same
/// store handle.
#[derive(Clone)]
pub struct AppState<S, U>
where
    S: TransactionStore,
    U: TransactionSource,
{
    /// Re-seeds the store from the upstream dataset
    pub ingest_service: IngestService<S, U>,

    /// Paginated transaction search
    pub search_service: SearchService<S>,

    /// Monthly sale statistics
    pub statistics_service: StatisticsService<S>,

    /// Monthly price histogram
    pub histogram_service: HistogramService<S>,

    /// Monthly category breakdown
    pub category_service: CategoryService<S>,

    /// Store handle for health checks
    pub store: S,
}

impl<S, U> AppState<S, U>
where
    S: TransactionStore,
    U: TransactionSource,
{
    /// Creates a new application state with all services initialized.
    pub fn new(store: S, source: U) -> Self {
        Self {
            ingest_service: IngestService::new(store.clone(), source),
            search_service: SearchService::new(store.clone()),
            statistics_service: StatisticsService::new(store.clone()),
            histogram_service: HistogramService::new(store.clone()),
            category_service: CategoryService::new(store.clone()),
            store,
        }
    }
}
