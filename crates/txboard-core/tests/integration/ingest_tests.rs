//! Integration tests for IngestService.

use serde_json::json;
use txboard_core::{AppError, IngestReport, IngestService, MemoryTransactionStore};

use super::common::{MockSource, at, record};

fn upstream_document() -> serde_json::Value {
    json!([
        {
            "transaction_id": "t1",
            "product_id": 7,
            "user_id": "u1",
            "amount": 120.5,
            "date": "2024-03-05T10:00:00Z",
            "title": "Mens Cotton Jacket",
            "description": "Great outerwear jackets",
            "price": 55.99,
            "category": "men's clothing",
            "sold": true
        },
        {
            "transaction_id": "t2",
            "amount": "80",
            "date": "2024-03-20",
            "title": "Solid Gold Ring",
            "price": "695",
            "category": "jewelery",
            "sold": false
        },
        {
            "transaction_id": "t3",
            "date": "not a date",
            "title": "Lost record"
        },
        {
            "transaction_id": "t4",
            "date": "2024-04-01T00:00:00Z",
            "title": "No flag"
        },
        "garbage"
    ])
}

#[tokio::test]
async fn test_initialize_stores_normalized_records() {
    let store = MemoryTransactionStore::new();
    let source = MockSource::serving(upstream_document());
    let service = IngestService::new(store.clone(), source.clone());

    let report = service.initialize().await.unwrap();

    assert_eq!(
        report,
        IngestReport {
            received: 5,
            stored: 3,
            dropped_invalid_date: 1,
            dropped_malformed: 1,
            missing_sold: 1,
        }
    );
    assert_eq!(source.fetch_calls(), 1);

    let records = store.snapshot();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "Mens Cotton Jacket");
    assert_eq!(records[0].product_id.as_deref(), Some("7"));
    assert_eq!(records[1].price, 695.0);
    assert_eq!(records[1].amount, Some(80.0));
    assert_eq!(records[1].description, "");
    assert_eq!(records[2].sold, None);
    assert_eq!(records[2].price, 0.0);
    assert_eq!(records[2].category, "");
}

#[tokio::test]
async fn test_initialize_replaces_previous_contents() {
    let store = MemoryTransactionStore::with_records(vec![
        record("Stale one", at(2023, 1, 1)),
        record("Stale two", at(2023, 1, 2)),
    ]);
    let service = IngestService::new(store.clone(), MockSource::serving(upstream_document()));

    service.initialize().await.unwrap();
    let second = service.initialize().await.unwrap();

    assert_eq!(second.stored, 3);
    let titles: Vec<String> = store.snapshot().into_iter().map(|t| t.title).collect();
    assert_eq!(
        titles,
        vec!["Mens Cotton Jacket", "Solid Gold Ring", "No flag"],
        "re-running the ingest must not duplicate or keep stale records"
    );
}

#[tokio::test]
async fn test_non_array_payload_leaves_store_untouched() {
    let store = MemoryTransactionStore::with_records(vec![record("Keep me", at(2024, 3, 1))]);
    let source = MockSource::serving(json!({"transactions": []}));
    let service = IngestService::new(store.clone(), source);

    let err = service.initialize().await.unwrap_err();

    assert!(matches!(err, AppError::UpstreamPayload(_)));
    assert!(err.to_string().contains("an object"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot()[0].title, "Keep me");
}

#[tokio::test]
async fn test_unreachable_source_leaves_store_untouched() {
    let store = MemoryTransactionStore::with_records(vec![record("Keep me", at(2024, 3, 1))]);
    let service = IngestService::new(store.clone(), MockSource::unreachable("connection refused"));

    let err = service.initialize().await.unwrap_err();

    assert!(matches!(err, AppError::UpstreamFetch(_)));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_failed_replace_keeps_previous_contents() {
    let store = MemoryTransactionStore::with_records(vec![record("Keep me", at(2024, 3, 1))]);
    let service = IngestService::new(store.clone(), MockSource::serving(upstream_document()));

    store.set_failing(true);
    let err = service.initialize().await.unwrap_err();
    store.set_failing(false);

    assert!(err.is_store_error());
    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot()[0].title, "Keep me");
}

#[tokio::test]
async fn test_empty_array_empties_store() {
    let store = MemoryTransactionStore::with_records(vec![record("Old", at(2024, 3, 1))]);
    let service = IngestService::new(store.clone(), MockSource::serving(json!([])));

    let report = service.initialize().await.unwrap();

    assert_eq!(report, IngestReport::default());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_badly_typed_fields_do_not_drop_records() {
    let store = MemoryTransactionStore::new();
    let source = MockSource::serving(json!([
        {"title": "ok", "date": "2024-01-01"},
        {"title": 42, "date": "2024-01-02"},
        {"title": "priced", "date": "2024-01-03", "price": "cheap"},
        {"title": "soldstr", "date": "2024-01-04", "sold": "true"},
        {"title": "ancient", "date": -300_000_000_000_000_i64}
    ]));
    let service = IngestService::new(store.clone(), source);

    let report = service.initialize().await.unwrap();

    assert_eq!(report.received, 5);
    assert_eq!(report.stored, 4);
    assert_eq!(report.dropped_invalid_date, 1);
    assert_eq!(report.dropped_malformed, 0);
    let titles: Vec<String> = store.snapshot().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["ok", "42", "priced", "soldstr"]);
}
