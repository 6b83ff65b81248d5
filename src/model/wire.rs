//! Canonical text forms for the temporal, binary and special float kinds.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};
use serde_json::Value as JsonValue;

use crate::{Error, Result};

const TIME_FORMAT: &str = "%H:%M:%S%.f";

fn invalid(kind: &'static str, value: &str) -> Error {
    Error::InvalidValue { kind, value: value.to_owned() }
}

/// RFC 3339; offset-less values are taken as UTC.
pub fn parse_date_time(text: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|_| invalid("datetime", text))
}

pub fn format_date_time(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| invalid("date", text))
}

pub fn format_date(value: &NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn parse_time(text: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(text, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .map_err(|_| invalid("time", text))
}

pub fn format_time(value: &NaiveTime) -> String {
    value.format(TIME_FORMAT).to_string()
}

pub fn decode_bytes(text: &str) -> Result<Vec<u8>> {
    STANDARD.decode(text).map_err(|_| invalid("base64", text))
}

pub fn encode_bytes(value: &[u8]) -> String {
    STANDARD.encode(value)
}

/// Non-finite floats travel as the strings `NaN`, `INF` and `-INF`.
pub fn float_to_json(value: f64) -> JsonValue {
    match serde_json::Number::from_f64(value) {
        Some(number) => JsonValue::Number(number),
        None if value.is_nan() => JsonValue::String("NaN".into()),
        None if value.is_sign_negative() => JsonValue::String("-INF".into()),
        None => JsonValue::String("INF".into()),
    }
}

pub fn float_from_json(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => match s.as_str() {
            "NaN" => Some(f64::NAN),
            "INF" | "Infinity" => Some(f64::INFINITY),
            "-INF" | "-Infinity" => Some(f64::NEG_INFINITY),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_time_round_trip() {
        let dt = parse_date_time("2024-03-01T08:30:00Z").unwrap();
        assert_eq!(format_date_time(&dt), "2024-03-01T08:30:00Z");

        let dt = parse_date_time("2024-03-01T08:30:00.123+02:00").unwrap();
        assert_eq!(format_date_time(&dt), "2024-03-01T08:30:00.123+02:00");
    }

    #[test]
    fn test_date_time_without_offset_is_utc() {
        let dt = parse_date_time("2024-03-01T08:30:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 0);
        assert!(parse_date_time("yesterday").is_err());
    }

    #[test]
    fn test_time_forms() {
        assert_eq!(format_time(&parse_time("09:15:00").unwrap()), "09:15:00");
        assert_eq!(format_time(&parse_time("09:15:00.5").unwrap()), "09:15:00.500");
        assert_eq!(format_time(&parse_time("09:15").unwrap()), "09:15:00");
    }

    #[test]
    fn test_special_floats() {
        assert_eq!(float_to_json(f64::INFINITY), JsonValue::String("INF".into()));
        assert_eq!(float_to_json(f64::NEG_INFINITY), JsonValue::String("-INF".into()));
        assert!(float_from_json(&JsonValue::String("NaN".into())).unwrap().is_nan());
        assert_eq!(float_from_json(&serde_json::json!(1.5)), Some(1.5));
        assert_eq!(float_from_json(&serde_json::json!("1.5")), None);
    }

    #[test]
    fn test_bytes() {
        assert_eq!(encode_bytes(b"graph"), "Z3JhcGg=");
        assert_eq!(decode_bytes("Z3JhcGg=").unwrap(), b"graph");
        assert!(decode_bytes("not base64!").is_err());
    }
}
