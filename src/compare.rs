use chrono::{DateTime, TimeZone, Utc};

use crate::{Clock, SDate, SystemClock, calendar};

/// A homogeneous collection of dates to search with [`SDate::is_in_array`].
///
/// The variant fixes how every element is compared against the receiver.
#[derive(Debug, Clone, Copy)]
pub enum Candidates<'a> {
    /// Canonical strings, compared verbatim.
    Canonical(&'a [String]),
    /// Instants, compared by their UTC calendar date.
    Native(&'a [DateTime<Utc>]),
    /// Date values, compared by canonical form.
    Values(&'a [SDate]),
}

impl Candidates<'_> {
    pub const fn is_empty(&self) -> bool {
        match self {
            Self::Canonical(items) => items.is_empty(),
            Self::Native(items) => items.is_empty(),
            Self::Values(items) => items.is_empty(),
        }
    }
}

impl<'a> From<&'a [String]> for Candidates<'a> {
    fn from(items: &'a [String]) -> Self {
        Self::Canonical(items)
    }
}

impl<'a> From<&'a Vec<String>> for Candidates<'a> {
    fn from(items: &'a Vec<String>) -> Self {
        Self::Canonical(items)
    }
}

impl<'a> From<&'a [DateTime<Utc>]> for Candidates<'a> {
    fn from(items: &'a [DateTime<Utc>]) -> Self {
        Self::Native(items)
    }
}

impl<'a> From<&'a Vec<DateTime<Utc>>> for Candidates<'a> {
    fn from(items: &'a Vec<DateTime<Utc>>) -> Self {
        Self::Native(items)
    }
}

impl<'a> From<&'a [SDate]> for Candidates<'a> {
    fn from(items: &'a [SDate]) -> Self {
        Self::Values(items)
    }
}

impl<'a> From<&'a Vec<SDate>> for Candidates<'a> {
    fn from(items: &'a Vec<SDate>) -> Self {
        Self::Values(items)
    }
}

/// Canonical form of the UTC calendar date of `instant`.
fn utc_canonical<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    calendar::canonical(calendar::clamp(instant.with_timezone(&Utc).date_naive()))
}

impl SDate {
    /// Absolute number of whole days between the two dates.
    pub fn difference(&self, other: &Self) -> i64 {
        self.naive_date()
            .signed_duration_since(other.naive_date())
            .num_days()
            .abs()
    }

    /// Canonical-string equality.
    pub fn equals(&self, other: &Self) -> bool {
        self.date == other.date
    }

    /// Compares against the UTC calendar date of `instant`, whatever its
    /// timezone. Converting with `SDate::from` uses the instant's own
    /// timezone instead, so the two can disagree near midnight.
    pub fn equals_datetime<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        utc_canonical(instant) == self.date
    }

    /// Whether any element of `candidates` denotes this date.
    pub fn is_in_array<'a>(&self, candidates: impl Into<Candidates<'a>>) -> bool {
        let candidates = candidates.into();
        if candidates.is_empty() {
            return false;
        }
        match candidates {
            Candidates::Canonical(items) => items.iter().any(|s| *s == self.date),
            Candidates::Native(items) => items.iter().any(|dt| self.equals_datetime(dt)),
            Candidates::Values(items) => items.iter().any(|d| self.equals(d)),
        }
    }

    /// Whether the stored year and month fields equal `year` and `month`.
    ///
    /// A missing argument defaults to this date's own (rolled-over) year or
    /// month. The stored fields are compared as written, so `2023-13-01` is
    /// not in its own default month (January 2024).
    pub fn in_month(&self, year: Option<i32>, month: Option<u32>) -> bool {
        let year = year.unwrap_or_else(|| self.year());
        let month = month.unwrap_or_else(|| self.month());
        let (y, m, _) = self.fields();
        y == i64::from(year) && m == i64::from(month)
    }

    /// Whether this is the system clock's local date.
    pub fn is_today(&self) -> bool {
        self.is_today_with(&SystemClock)
    }

    pub fn is_today_with(&self, clock: &dyn Clock) -> bool {
        self.equals(&Self::today(clock))
    }
}

impl PartialEq<str> for SDate {
    fn eq(&self, other: &str) -> bool {
        self.date == other
    }
}

impl PartialEq<&str> for SDate {
    fn eq(&self, other: &&str) -> bool {
        self.date == *other
    }
}

impl<Tz: TimeZone> PartialEq<DateTime<Tz>> for SDate {
    fn eq(&self, other: &DateTime<Tz>) -> bool {
        self.equals_datetime(other)
    }
}
