//! Input schema for upstream transaction records and their normalization.
//!
//! The upstream source serves loosely typed JSON. [`RawTransaction`] is the
//! explicit schema it is read through: every field is optional and each one
//! is coerced on its own, so a badly typed field falls back to its default
//! instead of rejecting the record. [`normalize`] drops only records whose
//! date cannot be parsed or stored.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::NewTransaction;

/// One upstream record as served by the source (snake_case fields).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTransaction {
    #[serde(default, deserialize_with = "opaque_id")]
    pub transaction_id: Option<String>,
    #[serde(default, deserialize_with = "opaque_id")]
    pub product_id: Option<String>,
    #[serde(default, deserialize_with = "opaque_id")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub sold: Option<bool>,
}

impl RawTransaction {
    /// Maps the record onto the stored schema.
    ///
    /// Returns `None` when the date is missing or invalid; such records
    /// are never stored. NUL characters are removed from text fields since
    /// PostgreSQL text columns cannot hold them.
    pub fn into_new_transaction(self) -> Option<NewTransaction> {
        let date = self.date.as_ref().and_then(parse_date_value)?;

        Some(NewTransaction {
            transaction_id: self.transaction_id.map(strip_nul),
            product_id: self.product_id.map(strip_nul),
            user_id: self.user_id.map(strip_nul),
            amount: self.amount,
            date,
            title: self.title.map(strip_nul).unwrap_or_default(),
            description: self.description.map(strip_nul).unwrap_or_default(),
            price: self.price.unwrap_or(0.0),
            category: self.category.map(strip_nul).unwrap_or_default(),
            sold: self.sold,
        })
    }
}

/// Result of normalizing one upstream payload.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub records: Vec<NewTransaction>,
    /// Elements that parsed but carried a missing or invalid date.
    pub dropped_invalid_date: usize,
    /// Elements that were not JSON objects.
    pub dropped_malformed: usize,
    /// Stored records without a `sold` flag.
    pub missing_sold: usize,
}

/// Normalizes every element of an upstream payload.
pub fn normalize(items: Vec<Value>) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();

    for item in items {
        let raw = match serde_json::from_value::<RawTransaction>(item) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed upstream record");
                batch.dropped_malformed += 1;
                continue;
            }
        };

        match raw.into_new_transaction() {
            Some(record) => {
                if record.sold.is_none() {
                    batch.missing_sold += 1;
                }
                batch.records.push(record);
            }
            None => batch.dropped_invalid_date += 1,
        }
    }

    batch
}

/// Earliest year a `TIMESTAMPTZ` column accepts for every day of the year.
///
/// PostgreSQL stops at 4713 BC. chrono's own range ends before PostgreSQL's
/// upper bound, so only the lower one needs checking.
const MIN_STORABLE_YEAR: i32 = -4711;

/// Parses an upstream date string.
///
/// Accepts RFC 3339, naive date-times (`T` or space separated, read as
/// UTC) and plain `YYYY-MM-DD` dates (UTC midnight). Returns `None` for
/// anything else, and for dates the store cannot hold.
pub fn parse_transaction_date(raw: &str) -> Option<DateTime<Utc>> {
    parse_date_str(raw).filter(is_storable)
}

fn parse_date_str(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn is_storable(date: &DateTime<Utc>) -> bool {
    date.year() >= MIN_STORABLE_YEAR
}

/// Parses a date that may be a string or an epoch-milliseconds number.
fn parse_date_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_transaction_date(s),
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f.trunc() as i64)
            })?;
            DateTime::from_timestamp_millis(millis).filter(is_storable)
        }
        _ => None,
    }
}

fn strip_nul(text: String) -> String {
    if text.contains('\0') {
        text.replace('\0', "")
    } else {
        text
    }
}

// The field helpers below never fail: a value of the wrong type reads as
// absent, so only the date decides whether a record is kept.

fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        _ => None,
    })
}
