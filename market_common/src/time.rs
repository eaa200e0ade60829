//! Calendar value types with a single canonical text form.
//!
//! `CalendarDate` wraps a `chrono::NaiveDate` and always renders as `YYYY-MM-DD`.
//! `Timestamp` wraps a `chrono::NaiveDateTime` truncated to whole seconds and always
//! renders as `YYYY-MM-DDTHH:MM:SS`. Parsing accepts only those forms, so a value
//! read back from text compares equal to the value that produced it.
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, SubsecRound};
use serde::{Serialize, Serializer};

/// Canonical `chrono` format of a [`CalendarDate`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Canonical `chrono` format of a [`Timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A date with no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Wraps an existing `NaiveDate`.
    pub fn new(date: NaiveDate) -> Self {
        CalendarDate(date)
    }

    /// Builds a date from its parts; `None` when the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    /// Underlying `chrono` value.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(CalendarDate)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A date and time of day with second precision and no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Wraps a `NaiveDateTime`, dropping any sub-second part.
    pub fn new(datetime: NaiveDateTime) -> Self {
        Timestamp(datetime.trunc_subsecs(0))
    }

    /// Builds a timestamp from its parts; `None` when the moment does not exist.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(Timestamp)
    }

    /// Underlying `chrono` value.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Calendar date part of the timestamp.
    pub fn date(&self) -> CalendarDate {
        CalendarDate(self.0.date())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map(Timestamp::new)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Timestamp::new(datetime)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
