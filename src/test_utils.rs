//! Shared constructors for unit tests.

use chrono::NaiveDate;

use crate::SDate;

pub fn sdate(input: &str) -> SDate {
    SDate::new(input).expect("test input must be a canonical date")
}

pub fn naive(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
}

pub fn strings(dates: &[SDate]) -> Vec<String> {
    dates.iter().map(ToString::to_string).collect()
}
