//! Field declarations: a name and the logical type its value must have.
use market_common::{Result, Value};
use serde_json::Value as JsonValue;

use crate::coerce;
use crate::tagged::{decoder, encoder};

/// Logical type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Plain text.
    Str,
    /// Exact decimal, carried as text in JSON.
    Decimal,
    /// Integer number.
    Integer,
    /// `YYYY-MM-DDTHH:MM:SS` timestamp, carried as text in JSON.
    Timestamp,
}

/// A single field of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Field name as it appears in JSON.
    pub name: &'static str,
    /// Logical type of the field's value.
    pub ty: FieldType,
}

impl FieldSpec {
    /// Declares a field.
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        FieldSpec { name, ty }
    }

    /// Coerces a JSON value into this field's logical type.
    pub fn load(&self, json: JsonValue) -> Result<Value> {
        let value = decoder::plain(json);
        let name = self.name;
        Ok(match self.ty {
            FieldType::Str => Value::Text(coerce::text(name, value)?),
            FieldType::Decimal => Value::Decimal(coerce::decimal(name, value)?),
            FieldType::Integer => coerce::integer(name, value)?,
            FieldType::Timestamp => Value::Timestamp(coerce::timestamp(name, value)?),
        })
    }

    /// Checks a record attribute against this field's type and renders it back to JSON.
    pub fn dump(&self, json: JsonValue) -> Result<JsonValue> {
        encoder::to_json(&self.load(json)?)
    }
}
