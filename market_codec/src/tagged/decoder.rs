//! Tagged JSON decoder.
//!
//! Parses JSON into a [`Value`] tree and runs [`reconstruct`] on every mapping once its
//! children are decoded, innermost first. A mapping carrying a `__type__` tag is
//! replaced by the record it names, so records nested anywhere inside lists or
//! mappings come back typed.
use log::debug;
use market_common::{
    CodecError, ExactDecimal, Map, OrderSide, Quote, Record, RecordKind, Result, Trade, Value,
};
use serde_json::{Number, Value as JsonValue};

use super::encoder;
use crate::coerce;
use crate::constants::TAG_FIELD;

/// Parses JSON text and rebuilds every tagged record in it.
pub fn decode(text: &str) -> Result<Value> {
    let json: JsonValue = serde_json::from_str(text)?;
    from_json(json)
}

/// Converts a JSON tree into a [`Value`], reconstructing records bottom-up.
pub fn from_json(json: JsonValue) -> Result<Value> {
    let value = match json {
        JsonValue::Object(object) => {
            let map = object
                .into_iter()
                .map(|(key, item)| Ok((key, from_json(item)?)))
                .collect::<Result<Map>>()?;
            reconstruct(map)?
        }
        JsonValue::Array(items) => {
            Value::List(items.into_iter().map(from_json).collect::<Result<_>>()?)
        }
        other => plain(other),
    };
    Ok(value)
}

/// Converts a JSON tree into a [`Value`] without looking at tags.
pub(crate) fn plain(json: JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(flag) => Value::Bool(flag),
        JsonValue::Number(number) => number_value(&number),
        JsonValue::String(text) => Value::Text(text),
        JsonValue::Array(items) => Value::List(items.into_iter().map(plain).collect()),
        JsonValue::Object(object) => Value::Map(
            object
                .into_iter()
                .map(|(key, item)| (key, plain(item)))
                .collect(),
        ),
    }
}

fn number_value(number: &Number) -> Value {
    if let Some(n) = number.as_i64() {
        Value::Int(n)
    } else if let Some(n) = number.as_u64() {
        Value::UInt(n)
    } else {
        number.as_f64().map_or(Value::Null, Value::Float)
    }
}

/// Reconstruction hook for a single decoded mapping.
///
/// Returns the mapping unchanged when it has no `__type__` field, otherwise strips the
/// tag and builds the record it names from the remaining fields.
pub fn reconstruct(mut map: Map) -> Result<Value> {
    let Some(tag) = map.remove(TAG_FIELD) else {
        return Ok(Value::Map(map));
    };
    let tag = match tag {
        Value::Text(tag) => tag,
        other => {
            return Err(CodecError::UnknownRecordKind(
                encoder::to_json(&other)?.to_string(),
            ));
        }
    };
    let kind: RecordKind = tag
        .parse()
        .map_err(|_| CodecError::UnknownRecordKind(tag.clone()))?;

    let mut fields = Fields { kind, map };
    let record = match kind {
        RecordKind::Quote => Record::Quote(fields.quote()?),
        RecordKind::Trade => Record::Trade(fields.trade()?),
    };
    fields.finish()?;

    debug!("Reconstructed {} record for {}", kind, record.symbol());
    Ok(Value::Record(record))
}

/// Remaining fields of a tagged mapping, consumed one by one.
struct Fields {
    kind: RecordKind,
    map: Map,
}

impl Fields {
    fn quote(&mut self) -> Result<Quote> {
        let date = coerce::date("date", self.take("date")?)?;
        let open = self.decimal("open")?;
        let high = self.decimal("high")?;
        let low = self.decimal("low")?;
        let close = self.decimal("close")?;
        Ok(Quote {
            symbol: coerce::text("symbol", self.take("symbol")?)?,
            date,
            open,
            high,
            low,
            close,
            volume: coerce::unsigned("volume", self.take("volume")?)?,
        })
    }

    fn trade(&mut self) -> Result<Trade> {
        let timestamp = coerce::timestamp("timestamp", self.take("timestamp")?)?;
        let price = self.decimal("price")?;
        let commission = self.decimal("commission")?;
        let order = coerce::text("order", self.take("order")?)?;
        let order: OrderSide = order.parse().map_err(|_| {
            CodecError::invalid_field("order", format!("expected buy or sell, found {order:?}"))
        })?;
        Ok(Trade {
            symbol: coerce::text("symbol", self.take("symbol")?)?,
            timestamp,
            order,
            price,
            volume: coerce::unsigned("volume", self.take("volume")?)?,
            commission,
        })
    }

    fn take(&mut self, field: &str) -> Result<Value> {
        self.map.remove(field).ok_or_else(|| CodecError::MissingField {
            kind: self.kind,
            field: field.to_string(),
        })
    }

    fn decimal(&mut self, field: &str) -> Result<ExactDecimal> {
        coerce::decimal(field, self.take(field)?)
    }

    /// Fails if any field was left over after the record was built.
    fn finish(self) -> Result<()> {
        match self.map.into_keys().next() {
            Some(field) => Err(CodecError::UnexpectedField(field)),
            None => Ok(()),
        }
    }
}
