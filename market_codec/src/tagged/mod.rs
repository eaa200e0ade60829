//! Tagged codec: records travel as JSON objects carrying a `__type__` tag.
//!
//! - `encoder`: `Value` → JSON, tagging every record with its kind.
//! - `decoder`: JSON → `Value`, rebuilding every tagged mapping bottom-up.
pub mod decoder;
pub mod encoder;

use market_common::{CodecError, Record, Result, Value};

pub use decoder::{decode, reconstruct};
pub use encoder::TaggedEncoder;

/// Encodes `value` to compact JSON text.
pub fn encode(value: &Value) -> Result<String> {
    TaggedEncoder::new().encode(value)
}

/// Encodes `value` to indented JSON text.
pub fn encode_pretty(value: &Value) -> Result<String> {
    TaggedEncoder::new().pretty(true).encode(value)
}

/// Encodes a single record.
pub fn encode_record(record: &Record) -> Result<String> {
    let json = serde_json::Value::Object(encoder::tagged_record(record)?);
    Ok(serde_json::to_string(&json)?)
}

/// Decodes text whose top-level value must be a tagged record.
pub fn decode_record(text: &str) -> Result<Record> {
    decode(text)?.into_record().ok_or(CodecError::NotARecord)
}
