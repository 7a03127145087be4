use chrono::{Local, NaiveDate};

/// Source of "today" for [`SDate::now`](crate::SDate::now) and
/// [`SDate::is_today`](crate::SDate::is_today).
///
/// Swapping the clock keeps date logic independent of the system time, so
/// callers and tests can pin "today" to a known value.
pub trait Clock: Send + Sync {
    /// Returns today's calendar date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date from the system clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_given_date() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 26).expect("valid date");
        let clock = FixedClock::new(date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_clock_trait_object() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date");
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(date));
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_system_clock_matches_local_date() {
        assert_eq!(SystemClock.today(), Local::now().date_naive());
    }
}
