//! Leaf date arithmetic: year-month values and month day enumeration.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A calendar month in a specific year.
///
/// Ordered chronologically (year first, then month), so month ranges read
/// naturally as `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month {month} out of range");
        YearMonth { year, month }
    }

    /// The year-month that owns the given date.
    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The following calendar month.
    pub fn next(self) -> Self {
        if self.month == 12 {
            YearMonth::new(self.year + 1, 1)
        } else {
            YearMonth::new(self.year, self.month + 1)
        }
    }

    /// The preceding calendar month.
    pub fn pred(self) -> Self {
        if self.month == 1 {
            YearMonth::new(self.year - 1, 12)
        } else {
            YearMonth::new(self.year, self.month - 1)
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn last_day(self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap()
    }

    /// Number of days in the month, leap-aware.
    pub fn day_count(self) -> u32 {
        self.last_day().day()
    }

    /// All days of the month in chronological order.
    pub fn days(self) -> Vec<NaiveDate> {
        (1..=self.day_count())
            .map(|day| NaiveDate::from_ymd_opt(self.year, self.month, day).unwrap())
            .collect()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
