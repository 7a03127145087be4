//! Calendar arithmetic on top of `chrono::NaiveDate`.
//!
//! Every date here is the UTC-midnight reading of a canonical string, so no
//! timezone or daylight-saving offset ever takes part in the arithmetic.

use chrono::{Datelike, Days, NaiveDate};
use log::warn;

use crate::consts::{DATE_SEPARATOR, MAX_YEAR, MIN_YEAR, MONTHS_PER_YEAR};

/// Earliest date the canonical format can carry (`0000-01-01`)
pub(crate) fn floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Latest date the canonical format can carry (`9999-12-31`)
pub(crate) fn ceiling() -> NaiveDate {
    NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Saturates `date` into the four-digit year range.
pub(crate) fn clamp(date: NaiveDate) -> NaiveDate {
    let (lo, hi) = (floor(), ceiling());
    if date < lo {
        warn!("date {date} precedes the representable range, saturating to {lo}");
        lo
    } else if date > hi {
        warn!("date {date} exceeds the representable range, saturating to {hi}");
        hi
    } else {
        date
    }
}

/// Moves `date` by a signed number of whole days.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(step).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(step).unwrap_or(NaiveDate::MIN)
    };
    clamp(shifted)
}

/// The Monday starting the week of `date`, restricted to weeks that lie
/// entirely inside the representable range.
///
/// The week of `0000-01-01` begins in year -1 and the week of `9999-12-31`
/// ends in year 10000, so dates in those partial weeks map to the nearest
/// full week instead.
pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    let monday = days_back(date, date.weekday().num_days_from_monday());
    let first = floor()
        .checked_add_days(Days::new(u64::from(
            (7 - floor().weekday().num_days_from_monday()) % 7,
        )))
        .unwrap_or_else(floor);
    let last_sunday = days_back(ceiling(), (ceiling().weekday().num_days_from_monday() + 1) % 7);
    let last = days_back(last_sunday, 6);

    let start = monday.clamp(first, last);
    if start != monday {
        warn!("week of {date} is not fully representable, using the week of {start}");
    }
    start
}

fn days_back(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(date)
}

/// Builds a date from fields that may lie outside their calendar ranges.
///
/// Overflow rolls into neighbouring units: month 13 is January of the next
/// year, day 0 is the last day of the previous month and day 31 of a 30-day
/// month is the first of the following one.
pub(crate) fn from_fields(year: i64, month: i64, day: i64) -> NaiveDate {
    let months = year
        .saturating_mul(MONTHS_PER_YEAR)
        .saturating_add(month.saturating_sub(1));
    let first = i32::try_from(months.div_euclid(MONTHS_PER_YEAR))
        .ok()
        .zip(u32::try_from(months.rem_euclid(MONTHS_PER_YEAR) + 1).ok())
        .and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1));

    match first {
        Some(first) => shift_days(first, day.saturating_sub(1)),
        None if months < 0 => clamp(NaiveDate::MIN),
        None => clamp(NaiveDate::MAX),
    }
}

/// Serializes `date` as `YYYY-MM-DD`.
pub(crate) fn canonical(date: NaiveDate) -> String {
    format!(
        "{:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
    }

    #[test]
    fn test_from_fields_rollover_cases() {
        struct TestCase {
            fields:      (i64, i64, i64),
            expected:    NaiveDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                fields:      (2023, 10, 26),
                expected:    ymd(2023, 10, 26),
                description: "in-range fields are unchanged",
            },
            TestCase {
                fields:      (2023, 13, 1),
                expected:    ymd(2024, 1, 1),
                description: "month 13 rolls into next year",
            },
            TestCase {
                fields:      (2023, 0, 15),
                expected:    ymd(2022, 12, 15),
                description: "month 0 is December of the previous year",
            },
            TestCase {
                fields:      (2023, 2, 30),
                expected:    ymd(2023, 3, 2),
                description: "February 30th rolls into March",
            },
            TestCase {
                fields:      (2024, 3, 0),
                expected:    ymd(2024, 2, 29),
                description: "day 0 is the last day of the previous month",
            },
            TestCase {
                fields:      (2023, 4, 31),
                expected:    ymd(2023, 5, 1),
                description: "31st of a 30-day month",
            },
            TestCase {
                fields:      (2023, -1, 1),
                expected:    ymd(2022, 11, 1),
                description: "negative month",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.fields;
            assert_eq!(from_fields(y, m, d), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_from_fields_saturates() {
        assert_eq!(from_fields(10_000, 1, 1), ceiling());
        assert_eq!(from_fields(-1, 12, 31), floor());
        assert_eq!(from_fields(i64::MAX, i64::MAX, i64::MAX), ceiling());
        assert_eq!(from_fields(i64::MIN, i64::MIN, i64::MIN), floor());
    }

    #[test]
    fn test_shift_days() {
        assert_eq!(shift_days(ymd(2023, 12, 31), 1), ymd(2024, 1, 1));
        assert_eq!(shift_days(ymd(2024, 3, 1), -1), ymd(2024, 2, 29));
        assert_eq!(shift_days(ymd(2023, 10, 26), 0), ymd(2023, 10, 26));
        assert_eq!(shift_days(ceiling(), 1), ceiling());
        assert_eq!(shift_days(floor(), i64::MIN), floor());
    }

    #[test]
    fn test_week_start() {
        assert_eq!(week_start(ymd(2023, 10, 26)), ymd(2023, 10, 23));
        assert_eq!(week_start(ymd(2023, 10, 23)), ymd(2023, 10, 23));
        assert_eq!(week_start(ymd(2023, 10, 29)), ymd(2023, 10, 23));
    }

    #[test]
    fn test_week_start_stays_in_full_weeks() {
        assert_eq!(floor().weekday(), chrono::Weekday::Sat);
        assert_eq!(ceiling().weekday(), chrono::Weekday::Fri);

        assert_eq!(week_start(floor()), ymd(0, 1, 3));
        assert_eq!(week_start(ymd(0, 1, 2)), ymd(0, 1, 3));
        assert_eq!(week_start(ymd(0, 1, 5)), ymd(0, 1, 3));
        assert_eq!(week_start(ymd(9999, 12, 26)), ymd(9999, 12, 20));
        assert_eq!(week_start(ymd(9999, 12, 27)), ymd(9999, 12, 20));
        assert_eq!(week_start(ceiling()), ymd(9999, 12, 20));
    }

    #[test]
    fn test_canonical_padding() {
        assert_eq!(canonical(ymd(2023, 1, 5)), "2023-01-05");
        assert_eq!(canonical(ymd(987, 12, 31)), "0987-12-31");
        assert_eq!(canonical(floor()), "0000-01-01");
        assert_eq!(canonical(ceiling()), "9999-12-31");
    }
}
