//! Tagged JSON encoder.
//!
//! Turns a [`Value`] tree into JSON. Decimals and calendar values become their
//! canonical text, records become objects carrying a `__type__` tag, and containers
//! are encoded element by element with their keys and order intact.
use log::trace;
use market_common::{CodecError, Record, Result, Value};
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::constants::TAG_FIELD;

/// Encoder for values that may contain records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedEncoder {
    pretty: bool,
}

impl TaggedEncoder {
    /// Creates an encoder producing compact JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches indented output on or off.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Encodes `value` to JSON text.
    pub fn encode(&self, value: &Value) -> Result<String> {
        let json = to_json(value)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        };
        Ok(text)
    }
}

/// Converts a value into its JSON tree.
pub fn to_json(value: &Value) -> Result<JsonValue> {
    let json = match value {
        Value::Null => JsonValue::Null,
        Value::Bool(flag) => JsonValue::Bool(*flag),
        Value::Int(n) => JsonValue::from(*n),
        Value::UInt(n) => JsonValue::from(*n),
        Value::Float(f) => Number::from_f64(*f)
            .map(JsonValue::Number)
            .ok_or_else(|| CodecError::UnsupportedType(format!("non-finite float {f}")))?,
        Value::Text(text) => JsonValue::String(text.clone()),
        Value::Decimal(decimal) => JsonValue::String(decimal.to_string()),
        Value::Date(date) => JsonValue::String(date.to_string()),
        Value::Timestamp(ts) => JsonValue::String(ts.to_string()),
        Value::Record(record) => JsonValue::Object(tagged_record(record)?),
        Value::List(items) => JsonValue::Array(items.iter().map(to_json).collect::<Result<_>>()?),
        Value::Map(map) => JsonValue::Object(
            map.iter()
                .map(|(key, item)| Ok((key.clone(), to_json(item)?)))
                .collect::<Result<_>>()?,
        ),
    };
    Ok(json)
}

/// Record fields followed by the `__type__` tag.
pub fn tagged_record(record: &Record) -> Result<JsonMap<String, JsonValue>> {
    let mut object = record_fields(record)?;
    object.insert(
        TAG_FIELD.to_string(),
        JsonValue::String(record.kind().tag().to_string()),
    );
    trace!("Encoded {} record for {}", record.kind(), record.symbol());
    Ok(object)
}

/// Untagged record fields in declaration order.
pub(crate) fn record_fields(record: &Record) -> Result<JsonMap<String, JsonValue>> {
    let json = match record {
        Record::Quote(quote) => serde_json::to_value(quote)?,
        Record::Trade(trade) => serde_json::to_value(trade)?,
    };
    match json {
        JsonValue::Object(object) => Ok(object),
        _ => Err(CodecError::UnsupportedType(format!(
            "{} record did not serialize to an object",
            record.kind()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_common::{CalendarDate, OrderSide, Quote, Timestamp, Trade};
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn quote() -> Quote {
        Quote::new(
            "AAPL",
            CalendarDate::from_ymd(2018, 11, 22).unwrap(),
            dec!(176.66),
            dec!(177.25),
            dec!(176.64),
            dec!(176.78),
            3_699_184,
        )
    }

    fn trade() -> Trade {
        Trade::new(
            "AAPL",
            Timestamp::from_ymd_hms(2018, 11, 22, 10, 30, 5).unwrap(),
            OrderSide::Sell,
            dec!(177.01),
            20,
            dec!(9.99),
        )
    }

    #[test]
    fn decimal_becomes_text() {
        let json = to_json(&Value::from(dec!(338.19))).unwrap();
        assert_eq!(json, JsonValue::String("338.19".to_string()));
    }

    #[test]
    fn calendar_values_become_iso_text() {
        let date = CalendarDate::from_ymd(2018, 11, 22).unwrap();
        let ts = Timestamp::from_ymd_hms(2018, 11, 22, 10, 5, 12).unwrap();
        assert_eq!(to_json(&Value::from(date)).unwrap(), "2018-11-22");
        assert_eq!(to_json(&Value::from(ts)).unwrap(), "2018-11-22T10:05:12");
    }

    #[test]
    fn quote_carries_stock_tag() {
        let json = to_json(&Value::from(quote())).unwrap();
        assert_eq!(json[TAG_FIELD], "Stock");
        assert_eq!(json["symbol"], "AAPL");
        assert_eq!(json["close"], "176.78");
        assert_eq!(json["volume"], 3_699_184);
    }

    #[test]
    fn trade_carries_trade_tag() {
        let json = to_json(&Value::from(trade())).unwrap();
        assert_eq!(json[TAG_FIELD], "Trade");
        assert_eq!(json["order"], "sell");
        assert_eq!(json["timestamp"], "2018-11-22T10:30:05");
    }

    #[test]
    fn untagged_fields_have_no_tag() {
        let fields = record_fields(&Record::from(trade())).unwrap();
        assert!(!fields.contains_key(TAG_FIELD));
        let names: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            ["symbol", "timestamp", "order", "price", "volume", "commission"]
        );
    }

    #[test]
    fn containers_keep_structure() {
        let mut activity = BTreeMap::new();
        activity.insert("quotes".to_string(), Value::from(vec![quote()]));
        activity.insert("trades".to_string(), Value::from(vec![trade(), trade()]));
        let json = to_json(&Value::from(activity)).unwrap();
        assert_eq!(json["quotes"].as_array().unwrap().len(), 1);
        assert_eq!(json["trades"].as_array().unwrap().len(), 2);
        assert_eq!(json["trades"][1][TAG_FIELD], "Trade");
    }

    #[test]
    fn primitives_are_native_json() {
        let value = Value::from(vec![
            Value::Null,
            Value::Bool(true),
            Value::Int(-4),
            Value::Float(0.5),
            Value::from("plain"),
        ]);
        let text = TaggedEncoder::new().encode(&value).unwrap();
        assert_eq!(text, r#"[null,true,-4,0.5,"plain"]"#);
    }

    #[test]
    fn non_finite_float_is_unsupported() {
        let err = to_json(&Value::Float(f64::NAN)).unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedType(_)));
        let nested = Value::from(vec![Value::Float(f64::INFINITY)]);
        assert!(matches!(
            TaggedEncoder::new().encode(&nested),
            Err(CodecError::UnsupportedType(_))
        ));
    }

    #[test]
    fn pretty_output_is_indented() {
        let text = TaggedEncoder::new()
            .pretty(true)
            .encode(&Value::from(quote()))
            .unwrap();
        assert!(text.contains("\n  \"symbol\": \"AAPL\""));
    }
}
