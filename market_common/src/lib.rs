//!
//! Common types shared by the market record codec.
//!
//! This crate aggregates:
//! - `error`: unified error type `CodecError` used across the workspace.
//! - `result`: handy `Result<T, CodecError>` alias.
//! - `money`: the exact decimal type used for prices and commissions.
//! - `time`: `CalendarDate` and `Timestamp` with their canonical text forms.
//! - `record`: `Quote`, `Trade` and the closed `Record` enum.
//! - `value`: the dynamic `Value` tree the codec reads and writes.
#![warn(missing_docs)]
pub mod error;
pub mod money;
pub mod record;
pub mod result;
pub mod time;
pub mod value;

pub use error::CodecError;
pub use money::ExactDecimal;
pub use record::{OrderSide, Quote, Record, RecordKind, Trade};
pub use result::Result;
pub use time::{CalendarDate, Timestamp};
pub use value::{Map, Value};
