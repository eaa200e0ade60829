//! Market records: daily price quotes and executed trades.
//!
//! `Quote` and `Trade` are plain value objects built by callers. `Record` closes the
//! set of record kinds so that the codec can dispatch with an exhaustive `match`,
//! and `RecordKind` names each kind by the tag string written next to its fields.
use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::money::ExactDecimal;
use crate::time::{CalendarDate, Timestamp};

/// Daily OHLC price quote for a single symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Ticker symbol (e.g., `TSLA`).
    pub symbol: String,
    /// Trading day.
    pub date: CalendarDate,
    /// Opening price.
    #[serde(with = "rust_decimal::serde::str")]
    pub open: ExactDecimal,
    /// Highest price of the day.
    #[serde(with = "rust_decimal::serde::str")]
    pub high: ExactDecimal,
    /// Lowest price of the day.
    #[serde(with = "rust_decimal::serde::str")]
    pub low: ExactDecimal,
    /// Closing price.
    #[serde(with = "rust_decimal::serde::str")]
    pub close: ExactDecimal,
    /// Number of shares traded.
    pub volume: u64,
}

impl Quote {
    /// Creates a new quote.
    pub fn new(
        symbol: impl Into<String>,
        date: CalendarDate,
        open: ExactDecimal,
        high: ExactDecimal,
        low: ExactDecimal,
        close: ExactDecimal,
        volume: u64,
    ) -> Self {
        Quote {
            symbol: symbol.into(),
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Direction of an executed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderSide {
    /// Shares were bought.
    Buy,
    /// Shares were sold.
    Sell,
}

/// A single executed trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trade {
    /// Ticker symbol (e.g., `AAPL`).
    pub symbol: String,
    /// Execution time.
    pub timestamp: Timestamp,
    /// Buy or sell.
    pub order: OrderSide,
    /// Execution price per share.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: ExactDecimal,
    /// Number of shares traded.
    pub volume: u64,
    /// Commission charged for the trade.
    #[serde(with = "rust_decimal::serde::str")]
    pub commission: ExactDecimal,
}

impl Trade {
    /// Creates a new trade.
    pub fn new(
        symbol: impl Into<String>,
        timestamp: Timestamp,
        order: OrderSide,
        price: ExactDecimal,
        volume: u64,
        commission: ExactDecimal,
    ) -> Self {
        Trade {
            symbol: symbol.into(),
            timestamp,
            order,
            price,
            volume,
            commission,
        }
    }
}

/// Kind of a record, displayed as the tag written alongside its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum RecordKind {
    /// Tagged `Stock` on the wire.
    #[strum(serialize = "Stock")]
    Quote,
    /// Tagged `Trade` on the wire.
    #[strum(serialize = "Trade")]
    Trade,
}

impl RecordKind {
    /// Tag string for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            RecordKind::Quote => "Stock",
            RecordKind::Trade => "Trade",
        }
    }
}

/// Closed set of record kinds the codec knows how to tag and rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A daily price quote.
    Quote(Quote),
    /// An executed trade.
    Trade(Trade),
}

impl Record {
    /// Kind of this record.
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Quote(_) => RecordKind::Quote,
            Record::Trade(_) => RecordKind::Trade,
        }
    }

    /// Ticker symbol shared by both kinds.
    pub fn symbol(&self) -> &str {
        match self {
            Record::Quote(quote) => &quote.symbol,
            Record::Trade(trade) => &trade.symbol,
        }
    }

    /// The quote, if this record is one.
    pub fn as_quote(&self) -> Option<&Quote> {
        match self {
            Record::Quote(quote) => Some(quote),
            Record::Trade(_) => None,
        }
    }

    /// The trade, if this record is one.
    pub fn as_trade(&self) -> Option<&Trade> {
        match self {
            Record::Trade(trade) => Some(trade),
            Record::Quote(_) => None,
        }
    }
}

impl From<Quote> for Record {
    fn from(quote: Quote) -> Self {
        Record::Quote(quote)
    }
}

impl From<Trade> for Record {
    fn from(trade: Trade) -> Self {
        Record::Trade(trade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tsla_quote() -> Quote {
        Quote::new(
            "TSLA",
            CalendarDate::from_ymd(2018, 11, 22).unwrap(),
            dec!(338.19),
            dec!(338.64),
            dec!(337.60),
            dec!(338.19),
            365_607,
        )
    }

    #[test]
    fn kind_tags_match_wire_names() {
        assert_eq!(RecordKind::Quote.tag(), "Stock");
        assert_eq!(RecordKind::Trade.tag(), "Trade");
        assert_eq!(RecordKind::Quote.to_string(), "Stock");
        assert_eq!("Stock".parse::<RecordKind>().unwrap(), RecordKind::Quote);
        assert_eq!("Trade".parse::<RecordKind>().unwrap(), RecordKind::Trade);
        assert!("Bond".parse::<RecordKind>().is_err());
        assert!("Quote".parse::<RecordKind>().is_err());
    }

    #[test]
    fn order_side_is_lowercase() {
        assert_eq!(OrderSide::Buy.to_string(), "buy");
        assert_eq!("sell".parse::<OrderSide>().unwrap(), OrderSide::Sell);
        assert!("hold".parse::<OrderSide>().is_err());
    }

    #[test]
    fn quote_serializes_decimals_as_text() {
        let json = serde_json::to_value(tsla_quote()).unwrap();
        assert_eq!(json["date"], "2018-11-22");
        assert_eq!(json["low"], "337.60");
        assert_eq!(json["volume"], 365_607);
        assert!(json.get("__type__").is_none());
    }

    #[test]
    fn trade_serializes_order_and_timestamp() {
        let trade = Trade::new(
            "TSLA",
            Timestamp::from_ymd_hms(2018, 11, 22, 10, 5, 12).unwrap(),
            OrderSide::Buy,
            dec!(338.25),
            100,
            dec!(9.99),
        );
        let json = serde_json::to_value(&trade).unwrap();
        assert_eq!(json["timestamp"], "2018-11-22T10:05:12");
        assert_eq!(json["order"], "buy");
        assert_eq!(json["commission"], "9.99");
    }

    #[test]
    fn record_accessors() {
        let record = Record::from(tsla_quote());
        assert_eq!(record.kind(), RecordKind::Quote);
        assert_eq!(record.symbol(), "TSLA");
        assert!(record.as_quote().is_some());
        assert!(record.as_trade().is_none());
    }
}
