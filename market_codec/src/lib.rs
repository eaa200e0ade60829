//!
//! JSON codec for market quotes and trades.
//!
//! Two independent paths are provided:
//! - `tagged`: encodes any `Value` tree, tagging each record with `__type__`, and
//!   decodes JSON back into a tree where every tagged mapping is a typed record again.
//! - `schema`: per-kind field declarations that serialize a record without a tag and
//!   deserialize into an untyped field map.
//!
//! Decimals are written as text and calendar values in their canonical ISO forms, so
//! prices, dates and timestamps come back exactly as they went in.
//!
//! ```
//! use market_codec::{decode, encode};
//! use market_common::{CalendarDate, Quote, Value};
//! use rust_decimal::Decimal;
//!
//! let quote = Quote::new(
//!     "TSLA",
//!     CalendarDate::from_ymd(2018, 11, 22).unwrap(),
//!     Decimal::new(33819, 2),
//!     Decimal::new(33864, 2),
//!     Decimal::new(33760, 2),
//!     Decimal::new(33819, 2),
//!     365_607,
//! );
//! let text = encode(&Value::from(quote.clone())).unwrap();
//! assert!(text.contains(r#""__type__":"Stock""#));
//!
//! let decoded = decode(&text).unwrap();
//! assert_eq!(decoded.as_record().and_then(|r| r.as_quote()), Some(&quote));
//! ```
#![warn(missing_docs)]
pub mod constants;
pub mod schema;
pub mod tagged;

mod coerce;

pub use constants::TAG_FIELD;
pub use schema::{FieldMap, FieldSpec, FieldType, Schema, schema_deserialize, schema_serialize};
pub use tagged::{
    TaggedEncoder, decode, decode_record, encode, encode_pretty, encode_record, reconstruct,
};
