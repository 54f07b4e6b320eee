use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

/// The backend sends prices either as JSON numbers or numeric strings.
pub(crate) fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|price: &f64| price.is_finite())
}

/// Accepts RFC 3339 and the naive ISO timestamps the backend writes, which
/// are taken as UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// `null` or an object with an `error` key, which the backend returns with a
/// success status for unknown records.
pub(crate) fn is_missing_record(body: &Value) -> bool {
    body.is_null() || body.get("error").is_some()
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Identifiers arrive as strings or bare numbers.
pub(crate) fn scalar_id(value: &Value) -> Option<String> {
    let id = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!id.is_empty()).then_some(id)
}
