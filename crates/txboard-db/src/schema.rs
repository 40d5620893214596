//! Table definitions for the record store.

/// DDL statements, executed one at a time in order.
///
/// `id` is a `BIGSERIAL`, so it grows with insertion order and gives
/// listings a stable order across pages.
pub const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS transactions (
        id BIGSERIAL PRIMARY KEY,
        transaction_id TEXT,
        product_id TEXT,
        user_id TEXT,
        amount DOUBLE PRECISION,
        date TIMESTAMPTZ NOT NULL,
        title TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        price DOUBLE PRECISION NOT NULL DEFAULT 0,
        category TEXT NOT NULL DEFAULT '',
        sold BOOLEAN
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date)",
];
