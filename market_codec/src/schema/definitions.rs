//! Field declarations for each record kind, in serialization order.
use super::field::{FieldSpec, FieldType};

pub(crate) const QUOTE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("symbol", FieldType::Str),
    FieldSpec::new("date", FieldType::Str),
    FieldSpec::new("open", FieldType::Decimal),
    FieldSpec::new("high", FieldType::Decimal),
    FieldSpec::new("low", FieldType::Decimal),
    FieldSpec::new("close", FieldType::Decimal),
    FieldSpec::new("volume", FieldType::Integer),
];

pub(crate) const TRADE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("symbol", FieldType::Str),
    FieldSpec::new("timestamp", FieldType::Timestamp),
    FieldSpec::new("order", FieldType::Str),
    FieldSpec::new("price", FieldType::Decimal),
    FieldSpec::new("volume", FieldType::Integer),
    FieldSpec::new("commission", FieldType::Decimal),
];
