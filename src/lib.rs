mod arithmetic;
mod calendar;
mod clock;
mod compare;
mod consts;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use compare::Candidates;
pub use consts::*;

use crate::prelude::*;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An immutable calendar date held in its canonical `YYYY-MM-DD` form.
///
/// Construction only checks the *shape* of the string. Calendar fields that
/// are out of range (`2023-13-01`, `2023-02-30`) are accepted and rolled
/// over by the arithmetic and accessors, which read the string as midnight
/// UTC on that date. Every operation returns a new value.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "{date}")]
pub struct SDate {
    date: String,
}

/// Error returned when a string is not a canonical `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input does not match `^\d{4}-\d{2}-\d{2}$`; carries the input.
    #[error("{}", INVALID_FORMAT_MESSAGE)]
    InvalidFormat(String),
}

/// Year, month and day-of-month of a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ymd {
    pub year:  i32,
    /// Month of the year, starting at 1
    pub month: u32,
    /// Day of the month
    pub date:  u32,
}

/// [`Ymd`] plus the Sunday-based weekday index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ymddt {
    pub year:  i32,
    /// Month of the year, starting at 1
    pub month: u32,
    /// Day of the month
    pub date:  u32,
    /// Weekday index, 0 for Sunday
    pub day:   u32,
}

impl SDate {
    /// Creates a date from a canonical `YYYY-MM-DD` string.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if `input` is not four digits,
    /// a hyphen, two digits, a hyphen and two digits.
    pub fn new(input: &str) -> Result<Self, ParseError> {
        Self::try_from(input.to_owned())
    }

    /// Today's local calendar date, read from the system clock.
    pub fn now() -> Self {
        Self::today(&SystemClock)
    }

    /// Today's date as reported by `clock`.
    pub fn today(clock: &dyn Clock) -> Self {
        Self::from(clock.today())
    }

    /// The canonical string, verbatim.
    pub fn as_str(&self) -> &str {
        &self.date
    }

    /// The UTC-midnight calendar date, with out-of-range fields rolled over.
    pub fn naive_date(&self) -> NaiveDate {
        let (year, month, day) = self.fields();
        let date = calendar::from_fields(year, month, day);
        if log::log_enabled!(log::Level::Trace) && calendar::canonical(date) != self.date {
            trace!("{} rolled over to {date}", self.date);
        }
        date
    }

    /// Calendar year, after rollover.
    pub fn year(&self) -> i32 {
        self.naive_date().year()
    }

    /// Last two digits of the decimal year.
    pub fn year_short(&self) -> String {
        let year = self.year().to_string();
        year[year.len().saturating_sub(2)..].to_owned()
    }

    /// Month of the year, starting at 1.
    pub fn month(&self) -> u32 {
        self.naive_date().month()
    }

    /// Month zero-padded to two digits.
    pub fn month_pad(&self) -> String {
        format!("{:02}", self.month())
    }

    /// Day of the month.
    pub fn date(&self) -> u32 {
        self.naive_date().day()
    }

    /// Day of the month zero-padded to two digits.
    pub fn date_pad(&self) -> String {
        format!("{:02}", self.date())
    }

    /// Weekday index: 0 is Sunday, 6 is Saturday.
    pub fn day(&self) -> u32 {
        self.weekday().num_days_from_sunday()
    }

    /// Day of the week as a `chrono::Weekday`.
    pub fn weekday(&self) -> Weekday {
        self.naive_date().weekday()
    }

    /// Formats as `DD/MM/YYYY` by reordering the stored fields.
    pub fn f_date(&self) -> String {
        let (year, month, day) = self.parts();
        format!("{day}{DMY_SEPARATOR}{month}{DMY_SEPARATOR}{year}")
    }

    /// Year, month and day of the month in one read.
    pub fn ymd(&self) -> Ymd {
        let date = self.naive_date();
        Ymd {
            year:  date.year(),
            month: date.month(),
            date:  date.day(),
        }
    }

    /// Like [`Self::ymd`], plus the weekday index.
    pub fn ymddt(&self) -> Ymddt {
        let date = self.naive_date();
        Ymddt {
            year:  date.year(),
            month: date.month(),
            date:  date.day(),
            day:   date.weekday().num_days_from_sunday(),
        }
    }

    /// Raw year, month and day slices of the stored string.
    fn parts(&self) -> (&str, &str, &str) {
        (
            &self.date[..YEAR_WIDTH],
            &self.date[MONTH_OFFSET..DAY_OFFSET - 1],
            &self.date[DAY_OFFSET..],
        )
    }

    /// Raw numeric fields, before any rollover.
    fn fields(&self) -> (i64, i64, i64) {
        let (year, month, day) = self.parts();
        (digits(year), digits(month), digits(day))
    }
}

/// Checks the `^\d{4}-\d{2}-\d{2}$` shape.
fn is_canonical(s: &str) -> bool {
    s.len() == CANONICAL_LEN
        && s.chars().enumerate().all(|(i, c)| {
            if i == MONTH_OFFSET - 1 || i == DAY_OFFSET - 1 {
                c == DATE_SEPARATOR
            } else {
                c.is_ascii_digit()
            }
        })
}

/// Decimal value of an all-ASCII-digit slice.
fn digits(s: &str) -> i64 {
    s.bytes()
        .fold(0, |acc, b| acc * 10 + i64::from(b.wrapping_sub(b'0')))
}

impl Default for SDate {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Debug for SDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.date, f)
    }
}

impl AsRef<str> for SDate {
    fn as_ref(&self) -> &str {
        &self.date
    }
}

impl FromStr for SDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for SDate {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for SDate {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !is_canonical(&value) {
            return Err(ParseError::InvalidFormat(value));
        }
        Ok(Self { date: value })
    }
}

impl From<NaiveDate> for SDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            date: calendar::canonical(calendar::clamp(date)),
        }
    }
}

/// Uses the calendar fields as seen in the value's own timezone: a
/// `DateTime<Local>` yields the local date, while `SDate::from(Utc::now())`
/// yields the UTC date. Convert with `with_timezone(&Local)` first to get
/// the local date of an instant held in another timezone.
impl<Tz: TimeZone> From<DateTime<Tz>> for SDate {
    fn from(value: DateTime<Tz>) -> Self {
        Self::from(value.date_naive())
    }
}

impl From<SDate> for NaiveDate {
    fn from(value: SDate) -> Self {
        value.naive_date()
    }
}

impl Serialize for SDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.date)
    }
}

impl<'de> Deserialize<'de> for SDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}
