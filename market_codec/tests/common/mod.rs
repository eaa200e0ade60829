//! Sample trading activity shared by the integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;

use market_common::{CalendarDate, OrderSide, Quote, Timestamp, Trade, Value};
use rust_decimal_macros::dec;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn day() -> CalendarDate {
    CalendarDate::from_ymd(2018, 11, 22).unwrap()
}

pub fn at(hour: u32, minute: u32, second: u32) -> Timestamp {
    Timestamp::from_ymd_hms(2018, 11, 22, hour, minute, second).unwrap()
}

pub fn quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "TSLA",
            day(),
            dec!(338.19),
            dec!(338.64),
            dec!(337.60),
            dec!(338.19),
            365_607,
        ),
        Quote::new(
            "AAPL",
            day(),
            dec!(176.66),
            dec!(177.25),
            dec!(176.64),
            dec!(176.78),
            3_699_184,
        ),
        Quote::new(
            "MSFT",
            day(),
            dec!(103.25),
            dec!(103.48),
            dec!(103.07),
            dec!(103.11),
            4_493_689,
        ),
    ]
}

pub fn trades() -> Vec<Trade> {
    vec![
        Trade::new("TSLA", at(10, 5, 12), OrderSide::Buy, dec!(338.25), 100, dec!(9.99)),
        Trade::new("AAPL", at(10, 30, 5), OrderSide::Sell, dec!(177.01), 20, dec!(9.99)),
    ]
}

/// `{"quotes": [...], "trades": [...]}`
pub fn activity() -> Value {
    let mut activity = BTreeMap::new();
    activity.insert("quotes".to_string(), Value::from(quotes()));
    activity.insert("trades".to_string(), Value::from(trades()));
    Value::from(activity)
}
