//! Wire-level names shared by the encoder and decoder.

/// Reserved field that carries a record's kind next to its business fields.
pub const TAG_FIELD: &str = "__type__";
