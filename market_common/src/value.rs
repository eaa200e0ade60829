//! Dynamic value tree walked by the codec.
//!
//! `Value` is the in-memory counterpart of a JSON document that may also hold typed
//! market data: exact decimals, calendar values and whole records. The tagged encoder
//! turns a `Value` into JSON text and the tagged decoder produces one back, with every
//! tagged mapping replaced by the record it describes.
use std::collections::BTreeMap;

use crate::money::ExactDecimal;
use crate::record::{Quote, Record, Trade};
use crate::time::{CalendarDate, Timestamp};

/// Mapping node of a [`Value`] tree.
pub type Map = BTreeMap<String, Value>;

/// A JSON-shaped value that can carry typed market data.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer too large for `Int`.
    UInt(u64),
    /// Binary floating-point number. Never used for money.
    Float(f64),
    /// Text.
    Text(String),
    /// Exact decimal.
    Decimal(ExactDecimal),
    /// Calendar date.
    Date(CalendarDate),
    /// Date and time of day.
    Timestamp(Timestamp),
    /// Quote or trade.
    Record(Record),
    /// Ordered sequence.
    List(Vec<Value>),
    /// String-keyed mapping.
    Map(Map),
}

impl Value {
    /// Looks up `key` when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Borrowed text, if this value is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Decimal, if this value is one.
    pub fn as_decimal(&self) -> Option<ExactDecimal> {
        match self {
            Value::Decimal(decimal) => Some(*decimal),
            _ => None,
        }
    }

    /// Non-negative integer, if this value is one.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Int(n) => u64::try_from(*n).ok(),
            Value::UInt(n) => Some(*n),
            _ => None,
        }
    }

    /// Record, if this value is one.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Elements, if this value is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Entries, if this value is a mapping.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Consumes the value and returns its record.
    pub fn into_record(self) -> Option<Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::UInt(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Decimal(_) => "decimal",
            Value::Date(_) => "date",
            Value::Timestamp(_) => "timestamp",
            Value::Record(_) => "record",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u32 => Int,
    f64 => Float,
    String => Text,
    &str => Text,
    ExactDecimal => Decimal,
    CalendarDate => Date,
    Timestamp => Timestamp,
    Record => Record,
    Quote => Record,
    Trade => Record,
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Value::UInt(value), Value::Int)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Value::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
