//! Lenient decoders for the loosely typed JSON the backend produces.
//!
//! Decimal columns arrive as strings (`"19.99"`), sometimes as numbers or
//! `null`; timestamps may or may not carry an offset.

use super::EntityId;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Records addressable by their backend primary key.
pub trait HasId {
    fn entity_id(&self) -> EntityId;
}

/// Parse a decimal-as-string value. Non-finite and malformed input yields `None`.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn value_to_decimal_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Required decimal field; `null` decodes as `"0"`.
pub fn de_decimal_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_decimal_string(value).unwrap_or_else(|| "0".to_string()))
}

/// Optional decimal field.
pub fn de_opt_decimal_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_decimal_string(value).filter(|s| !s.trim().is_empty()))
}

/// Parse an ISO timestamp with or without offset. Naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = raw.parse::<DateTime<Utc>>() {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Optional timestamp; unparsable values decode as `None` instead of failing
/// the whole collection.
pub fn de_opt_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => parse_timestamp(&s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("19.99"), Some(19.99));
        assert_eq!(parse_decimal(" 5 "), Some(5.0));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let dt = parse_timestamp("2024-03-15T14:02:26.123+02:00").unwrap();
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.day(), 15);
    }

    #[test]
    fn test_parse_timestamp_naive() {
        let dt = parse_timestamp("2024-03-15T14:02:26").unwrap();
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.hour(), 14);
        assert!(parse_timestamp("yesterday").is_none());
    }
}
