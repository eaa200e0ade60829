//! Declarative schema codec.
//!
//! Each record kind has a fixed list of [`FieldSpec`]s. Serialization writes the
//! declared fields in declaration order with no `__type__` tag; deserialization
//! coerces each field to its logical type and hands back a plain [`FieldMap`]
//! instead of a record. This path does not read or write tagged output.
//!
//! Decimals are always written as text and read back into exact decimals, so a
//! price survives the trip with its digits and scale intact.
pub mod definitions;
pub mod field;

use log::debug;
use market_common::{CodecError, Map, Record, RecordKind, Result};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::tagged::encoder;
use definitions::{QUOTE_FIELDS, TRADE_FIELDS};
pub use field::{FieldSpec, FieldType};

/// Untyped field-name → value mapping produced by deserialization.
pub type FieldMap = Map;

/// Field declarations for one record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    kind: RecordKind,
    fields: &'static [FieldSpec],
}

impl Schema {
    /// Schema for quotes.
    pub fn quote() -> Self {
        Schema {
            kind: RecordKind::Quote,
            fields: QUOTE_FIELDS,
        }
    }

    /// Schema for trades.
    pub fn trade() -> Self {
        Schema {
            kind: RecordKind::Trade,
            fields: TRADE_FIELDS,
        }
    }

    /// Schema declared for `kind`.
    pub fn for_kind(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Quote => Self::quote(),
            RecordKind::Trade => Self::trade(),
        }
    }

    /// Record kind this schema was declared for.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Declared fields in serialization order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Declaration of the field called `name`.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Renders `record` as a JSON object holding the declared fields in order.
    pub fn dump(&self, record: &Record) -> Result<JsonMap<String, JsonValue>> {
        if record.kind() != self.kind {
            return Err(CodecError::UnsupportedRecordKind {
                expected: self.kind,
                found: record.kind(),
            });
        }
        let attributes = encoder::record_fields(record)?;
        let mut object = JsonMap::new();
        for spec in self.fields {
            let json = attributes
                .get(spec.name)
                .ok_or_else(|| CodecError::MissingField {
                    kind: self.kind,
                    field: spec.name.to_string(),
                })?;
            object.insert(spec.name.to_string(), spec.dump(json.clone())?);
        }
        Ok(object)
    }

    /// Serializes `record` to JSON text.
    pub fn serialize(&self, record: &Record) -> Result<String> {
        let object = self.dump(record)?;
        debug!("Serialized {} record for {} by schema", self.kind, record.symbol());
        Ok(serde_json::to_string(&JsonValue::Object(object))?)
    }

    /// Coerces a JSON object into a field map.
    ///
    /// Declared fields missing from the input are left out; undeclared fields fail.
    pub fn load(&self, json: JsonValue) -> Result<FieldMap> {
        let JsonValue::Object(object) = json else {
            return Err(CodecError::invalid_field("<root>", "expected a JSON object"));
        };
        let mut fields = FieldMap::new();
        for (name, item) in object {
            let spec = self
                .field(&name)
                .ok_or_else(|| CodecError::UnexpectedField(name.clone()))?;
            let value = spec.load(item)?;
            fields.insert(name, value);
        }
        Ok(fields)
    }

    /// Parses JSON text into a field map.
    pub fn deserialize(&self, text: &str) -> Result<FieldMap> {
        self.load(serde_json::from_str(text)?)
    }
}

/// Serializes `record` with the schema declared for `kind`.
pub fn schema_serialize(record: &Record, kind: RecordKind) -> Result<String> {
    Schema::for_kind(kind).serialize(record)
}

/// Deserializes `text` with the schema declared for `kind`.
pub fn schema_deserialize(text: &str, kind: RecordKind) -> Result<FieldMap> {
    Schema::for_kind(kind).deserialize(text)
}
