use std::iter;

use crate::{DAYS_PER_WEEK, SDate, calendar};

impl SDate {
    /// The Monday on or before this date.
    ///
    /// Dates in the partial weeks at the ends of the representable range
    /// (`0000-01-01`, `0000-01-02` and `9999-12-27` onwards) get the Monday of
    /// the nearest full week instead.
    pub fn start_of_week(&self) -> Self {
        Self::from(calendar::week_start(self.naive_date()))
    }

    /// Monday through Sunday of the week starting at [`Self::start_of_week`].
    pub fn days_in_week(&self) -> Vec<Self> {
        iter::successors(Some(self.start_of_week()), |d| Some(d.add_days(1)))
            .take(DAYS_PER_WEEK)
            .collect()
    }

    /// The first day of this date's month.
    pub fn start_of_month(&self) -> Self {
        let ymd = self.ymd();
        Self::from(calendar::from_fields(
            i64::from(ymd.year),
            i64::from(ymd.month),
            1,
        ))
    }

    /// The last day of this date's month.
    pub fn end_of_month(&self) -> Self {
        let ymd = self.ymd();
        // Day 0 of the next month.
        Self::from(calendar::from_fields(
            i64::from(ymd.year),
            i64::from(ymd.month) + 1,
            0,
        ))
    }

    /// Every day of this date's month, first to last.
    pub fn days_in_month(&self) -> Vec<Self> {
        let (year, month) = (Some(self.year()), Some(self.month()));
        let mut dates = Vec::new();
        let mut current = self.start_of_month();
        while current.in_month(year, month) {
            let next = current.add_days(1);
            let stalled = next == current;
            dates.push(current);
            if stalled {
                break;
            }
            current = next;
        }
        dates
    }
}
