//! Field coercions shared by the tagged decoder and the schema layer.
//!
//! Each function takes the name of the field being read (for error reporting) and the
//! decoded value, and returns the typed value or the error matching the field's
//! canonical form. Values that are already typed pass through unchanged.
use market_common::money::parse_exact;
use market_common::{CalendarDate, CodecError, ExactDecimal, Result, Timestamp, Value};

pub(crate) fn text(field: &str, value: Value) -> Result<String> {
    match value {
        Value::Text(text) => Ok(text),
        other => Err(expected(field, "text", &other)),
    }
}

/// Decimal from text or from an integer. Integers convert exactly. Fractional JSON
/// numbers have already been rounded to `f64` by the parser, so they are rejected.
pub(crate) fn decimal(field: &str, value: Value) -> Result<ExactDecimal> {
    let malformed = |value: String| CodecError::MalformedDecimal {
        field: field.to_string(),
        value,
    };
    match value {
        Value::Decimal(decimal) => Ok(decimal),
        Value::Text(text) => parse_exact(&text).map_err(|_| malformed(text)),
        Value::Int(n) => Ok(ExactDecimal::from(n)),
        Value::UInt(n) => Ok(ExactDecimal::from(n)),
        Value::Float(f) => Err(malformed(f.to_string())),
        other => Err(expected(field, "a decimal literal", &other)),
    }
}

pub(crate) fn date(field: &str, value: Value) -> Result<CalendarDate> {
    match value {
        Value::Date(date) => Ok(date),
        Value::Text(text) => text.parse().map_err(|_| CodecError::MalformedDate {
            field: field.to_string(),
            value: text,
        }),
        other => Err(expected(field, "a YYYY-MM-DD date", &other)),
    }
}

pub(crate) fn timestamp(field: &str, value: Value) -> Result<Timestamp> {
    match value {
        Value::Timestamp(ts) => Ok(ts),
        Value::Text(text) => text.parse().map_err(|_| CodecError::MalformedTimestamp {
            field: field.to_string(),
            value: text,
        }),
        other => Err(expected(field, "a YYYY-MM-DDTHH:MM:SS timestamp", &other)),
    }
}

pub(crate) fn unsigned(field: &str, value: Value) -> Result<u64> {
    value
        .as_u64()
        .ok_or_else(|| expected(field, "a non-negative integer", &value))
}

/// Any integer, kept in its `Int`/`UInt` form.
pub(crate) fn integer(field: &str, value: Value) -> Result<Value> {
    match value {
        Value::Int(_) | Value::UInt(_) => Ok(value),
        other => Err(expected(field, "an integer", &other)),
    }
}

fn expected(field: &str, what: &str, found: &Value) -> CodecError {
    CodecError::invalid_field(field, format!("expected {what}, found {}", found.type_name()))
}
