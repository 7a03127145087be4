use crate::{SDate, calendar};

impl SDate {
    /// Returns the date `days` whole days away.
    pub fn add_days(&self, days: i64) -> Self {
        Self::from(calendar::shift_days(self.naive_date(), days))
    }

    /// Returns the date `months` months away, keeping the day of month.
    ///
    /// A day that does not exist in the target month rolls forward rather
    /// than clamping: `2023-01-31` plus one month is `2023-03-03`.
    pub fn add_months(&self, months: i32) -> Self {
        let (year, month, day) = self.rolled_fields();
        Self::from(calendar::from_fields(year, month + i64::from(months), day))
    }

    /// Returns the date `years` years away; `02-29` of a non-leap target
    /// year rolls to `03-01`.
    pub fn add_years(&self, years: i32) -> Self {
        let (year, month, day) = self.rolled_fields();
        Self::from(calendar::from_fields(year + i64::from(years), month, day))
    }

    fn rolled_fields(&self) -> (i64, i64, i64) {
        let ymd = self.ymd();
        (i64::from(ymd.year), i64::from(ymd.month), i64::from(ymd.date))
    }
}
