//! Integration tests for the read-only query services.

use txboard_core::{
    CategoryService, HistogramService, MemoryTransactionStore, Month, MonthWindow, PRICE_BANDS,
    Pagination, SaleSummary, SearchService, StatisticsService,
};

use super::common::{RecordExt, at, record};

fn march_2024() -> MonthWindow {
    MonthWindow::new(2024, Month::new(3).unwrap()).unwrap()
}

fn seeded_store() -> MemoryTransactionStore {
    MemoryTransactionStore::with_records(vec![
        record("Mens Cotton Jacket", at(2024, 3, 1))
            .description("Great outerwear")
            .price(55.99)
            .amount(100.0)
            .category("men's clothing")
            .sold(true),
        record("Backpack", at(2024, 3, 15))
            .description("Fits 15 inch laptops")
            .price(109.95)
            .amount(50.0)
            .category("men's clothing")
            .sold(false),
        record("Gold Ring", at(2024, 3, 31))
            .price(695.0)
            .amount(25.5)
            .category("jewelery")
            .sold(true),
        record("Monitor", at(2024, 3, 20))
            .price(999.99)
            .amount(10.0)
            .category("electronics"),
        record("Hard Drive", at(2024, 4, 1))
            .description("portable storage")
            .price(64.0)
            .amount(1000.0)
            .category("electronics")
            .sold(true),
        record("Rain Jacket", at(2023, 3, 10))
            .price(39.99)
            .amount(500.0)
            .category("women's clothing")
            .sold(false),
    ])
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_empty_term_pages_through_everything() {
    let service = SearchService::new(seeded_store());

    let first = service.search("", Pagination::new(1, 4).unwrap()).await.unwrap();
    assert_eq!(first.total_count, 6);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.current_page, 1);
    assert_eq!(first.per_page, 4);
    assert_eq!(first.transactions.len(), 4);
    assert_eq!(first.transactions[0].title, "Mens Cotton Jacket");

    let second = service.search("", Pagination::new(2, 4).unwrap()).await.unwrap();
    let titles: Vec<&str> = second.transactions.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Hard Drive", "Rain Jacket"]);
}

#[tokio::test]
async fn test_search_page_past_end_is_empty() {
    let service = SearchService::new(seeded_store());

    let page = service.search("", Pagination::new(9, 10).unwrap()).await.unwrap();

    assert!(page.transactions.is_empty());
    assert_eq!(page.total_count, 6);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_search_matches_title_and_description() {
    let service = SearchService::new(seeded_store());

    let jackets = service
        .search("JACKET", Pagination::default())
        .await
        .unwrap();
    assert_eq!(jackets.total_count, 2);

    let laptops = service
        .search("laptop", Pagination::default())
        .await
        .unwrap();
    assert_eq!(laptops.total_count, 1);
    assert_eq!(laptops.transactions[0].title, "Backpack");
}

#[tokio::test]
async fn test_search_numeric_term_matches_exact_price() {
    let service = SearchService::new(seeded_store());

    let hits = service.search("695", Pagination::default()).await.unwrap();
    assert_eq!(hits.total_count, 1);
    assert_eq!(hits.transactions[0].title, "Gold Ring");

    // "15" appears in a description, never as a price.
    let hits = service.search("15", Pagination::default()).await.unwrap();
    assert_eq!(hits.total_count, 1);
    assert_eq!(hits.transactions[0].title, "Backpack");
}

#[tokio::test]
async fn test_search_no_match_has_zero_pages() {
    let service = SearchService::new(seeded_store());

    let results = service
        .search("nonexistent", Pagination::default())
        .await
        .unwrap();

    assert_eq!(results.total_count, 0);
    assert_eq!(results.total_pages, 0);
}

// =============================================================================
// Statistics
// =============================================================================

#[tokio::test]
async fn test_monthly_summary_sums_window_only() {
    let service = StatisticsService::new(seeded_store());

    let summary = service
        .monthly_summary(2024, Month::new(3).unwrap())
        .await
        .unwrap();

    assert_eq!(
        summary,
        SaleSummary {
            total_sale_amount: 185.5,
            total_sold_items: 2,
            total_not_sold_items: 1,
        }
    );
}

#[tokio::test]
async fn test_monthly_summary_empty_month_is_zero() {
    let service = StatisticsService::new(seeded_store());

    let summary = service
        .monthly_summary(2024, Month::new(12).unwrap())
        .await
        .unwrap();

    assert_eq!(summary, SaleSummary::default());
}

#[tokio::test]
async fn test_monthly_summary_is_year_specific() {
    let service = StatisticsService::new(seeded_store());

    let summary = service
        .monthly_summary(2023, Month::new(3).unwrap())
        .await
        .unwrap();

    assert_eq!(summary.total_sale_amount, 500.0);
    assert_eq!(summary.total_sold_items, 0);
    assert_eq!(summary.total_not_sold_items, 1);
}

// =============================================================================
// Histogram
// =============================================================================

#[tokio::test]
async fn test_histogram_has_every_band_in_order() {
    let service = HistogramService::new(seeded_store());

    let histogram = service.price_histogram_for(&march_2024()).await.unwrap();

    assert_eq!(histogram.len(), PRICE_BANDS.len());
    assert_eq!(histogram[0].range, "0 - 100");
    assert_eq!(histogram[9].range, "901 - above");

    let counts: Vec<i64> = histogram.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![1, 1, 0, 0, 0, 0, 1, 0, 0, 1]);
    assert_eq!(counts.iter().sum::<i64>(), 4);
}

#[tokio::test]
async fn test_histogram_empty_window_is_all_zero() {
    let service = HistogramService::new(seeded_store());
    let window = MonthWindow::new(2022, Month::new(1).unwrap()).unwrap();

    let histogram = service.price_histogram_for(&window).await.unwrap();

    assert_eq!(histogram.len(), 10);
    assert!(histogram.iter().all(|b| b.count == 0));
}

#[tokio::test]
async fn test_histogram_propagates_store_failure() {
    let store = seeded_store();
    store.set_failing(true);
    let service = HistogramService::new(store);

    let err = service.price_histogram_for(&march_2024()).await.unwrap_err();

    assert!(err.is_store_error());
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn test_category_breakdown_counts_window() {
    let service = CategoryService::new(seeded_store());

    let categories = service.category_breakdown_for(&march_2024()).await.unwrap();

    let pairs: Vec<(&str, i64)> = categories
        .iter()
        .map(|c| (c.category.as_str(), c.count))
        .collect();
    assert_eq!(
        pairs,
        vec![("electronics", 1), ("jewelery", 1), ("men's clothing", 2)]
    );
    assert_eq!(categories.iter().map(|c| c.count).sum::<i64>(), 4);
}

#[tokio::test]
async fn test_category_breakdown_empty_window() {
    let service = CategoryService::new(seeded_store());
    let window = MonthWindow::new(2024, Month::new(6).unwrap()).unwrap();

    let categories = service.category_breakdown_for(&window).await.unwrap();

    assert!(categories.is_empty());
}
