/// Smallest year representable in the canonical four-digit format
pub const MIN_YEAR: i32 = 0;

/// Largest year representable in the canonical four-digit format
pub const MAX_YEAR: i32 = 9999;

/// Number of months in a year
pub const MONTHS_PER_YEAR: i64 = 12;

/// Number of days in a week
pub const DAYS_PER_WEEK: usize = 7;

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
/// Separator used by the day-first `DD/MM/YYYY` rendering
pub const DMY_SEPARATOR: char = '/';

/// Width of the year field
pub const YEAR_WIDTH: usize = 4;
/// Byte offset of the month field
pub const MONTH_OFFSET: usize = YEAR_WIDTH + 1;
/// Byte offset of the day field
pub const DAY_OFFSET: usize = MONTH_OFFSET + 3;
/// Total length of a canonical date string
pub const CANONICAL_LEN: usize = DAY_OFFSET + 2;

/// Message carried by every construction failure
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid date format. Please use YYYY-MM-DD.";
