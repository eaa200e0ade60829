//! Error types shared by the record model and the codec.
//!
//! The `CodecError` enum unifies every way an encode or decode call can fail:
//! values with no JSON form, text that does not match the canonical form of the
//! field it was read from, unknown record tags, and malformed JSON. Every failure
//! aborts the whole call; no partially decoded value is ever returned.
use thiserror::Error;

use crate::record::RecordKind;

/// Unified error type for the record model and the codec.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The encoder met a value that has no JSON representation.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// A date field did not match `YYYY-MM-DD`.
    #[error("Malformed date in field `{field}`: {value:?}")]
    MalformedDate {
        /// Field the text was read from.
        field: String,
        /// Offending text.
        value: String,
    },

    /// A timestamp field did not match `YYYY-MM-DDTHH:MM:SS`.
    #[error("Malformed timestamp in field `{field}`: {value:?}")]
    MalformedTimestamp {
        /// Field the text was read from.
        field: String,
        /// Offending text.
        value: String,
    },

    /// A decimal field was not a valid decimal literal.
    #[error("Malformed decimal in field `{field}`: {value:?}")]
    MalformedDecimal {
        /// Field the text was read from.
        field: String,
        /// Offending text.
        value: String,
    },

    /// The `__type__` tag named a record kind this codec does not know.
    #[error("Unknown record kind: {0:?}")]
    UnknownRecordKind(String),

    /// The schema layer was handed a record of a kind it was not declared for.
    #[error("Unsupported record kind: schema for {expected} cannot handle {found}")]
    UnsupportedRecordKind {
        /// Kind the schema was declared for.
        expected: RecordKind,
        /// Kind of the record that was passed in.
        found: RecordKind,
    },

    /// A tagged mapping lacked a field its record kind requires.
    #[error("Missing field `{field}` for {kind} record")]
    MissingField {
        /// Kind being reconstructed.
        kind: RecordKind,
        /// Name of the absent field.
        field: String,
    },

    /// A mapping carried a field the target shape does not declare.
    #[error("Unexpected field `{0}`")]
    UnexpectedField(String),

    /// A field held a JSON value of the wrong shape.
    #[error("Invalid field `{field}`: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: String,
        /// Human-readable description of what was expected.
        reason: String,
    },

    /// The decoded top-level value was expected to be a record and was not.
    #[error("Decoded value is not a record")]
    NotARecord,

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    /// Builds an `InvalidField` error.
    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        CodecError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
