//! Type definitions and constants for month grid generation.

use chrono::{NaiveDate, Weekday};
use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::calendar::YearMonth;

/// Which month a grid cell's day belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOwner {
    /// In-date: filler from the month before the one being laid out.
    PreviousMonth,
    /// A day of the month being laid out.
    ThisMonth,
    /// Out-date: filler from the month after the one being laid out.
    NextMonth,
}

/// How the first week of a month grid is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InDateStyle {
    /// Strict 7-day chunking of the month's own days, no alignment.
    None,
    /// Weeks aligned to the configured first day of the week; a short first
    /// week is completed with previous-month days.
    Aligned,
}

/// How the tail of a month grid is padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutDateStyle {
    /// No trailing padding.
    None,
    /// Pad only a short last week-row up to 7 days.
    EndOfRow,
    /// Pad the last row, then append next-month rows until the grid has
    /// exactly [`MAX_GRID_ROWS`] rows.
    EndOfGrid,
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub owner: DayOwner,
}

/// Position of one grid among the row-capped splits of a single month.
///
/// `index` ranges over `[0, count)`; every split of the same month carries
/// the same `count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSplit {
    pub index: usize,
    pub count: usize,
}

/// One renderable month grid: week-rows of days in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year_month: YearMonth,
    pub weeks: Vec<Vec<CalendarDay>>,
    /// `None` when generated without month boundaries, where a grid no
    /// longer corresponds to a single calendar month.
    pub split: Option<MonthSplit>,
}

impl CalendarMonth {
    /// All days of the grid in chronological order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }
}

/// Configuration errors, rejected before any generation runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max row count must be within 1..=6, got {0}")]
    InvalidRowCount(usize),
    #[error("start month {start} is after end month {end}")]
    InvalidRange { start: YearMonth, end: YearMonth },
}

/// Grid generation parameters.
///
/// The derived month list is computed once on first access to
/// [`months`](MonthConfig::months) and cached for the value's lifetime.
#[derive(Debug, Clone)]
pub struct MonthConfig {
    pub out_date_style: OutDateStyle,
    pub in_date_style: InDateStyle,
    pub max_row_count: usize,
    pub start_month: YearMonth,
    pub end_month: YearMonth,
    pub first_day_of_week: Weekday,
    /// Bounded mode (per-month alignment and padding) when true, one
    /// continuous day stream over the whole range when false.
    pub has_boundaries: bool,
    pub(crate) months: OnceCell<Vec<CalendarMonth>>,
}

impl MonthConfig {
    /// Validate and build a configuration. Fails fast on out-of-range row
    /// caps and inverted month ranges; generation itself cannot fail.
    pub fn new(
        out_date_style: OutDateStyle,
        in_date_style: InDateStyle,
        max_row_count: usize,
        start_month: YearMonth,
        end_month: YearMonth,
        first_day_of_week: Weekday,
        has_boundaries: bool,
    ) -> Result<Self, ConfigError> {
        if !(1..=MAX_GRID_ROWS).contains(&max_row_count) {
            return Err(ConfigError::InvalidRowCount(max_row_count));
        }
        if start_month > end_month {
            return Err(ConfigError::InvalidRange {
                start: start_month,
                end: end_month,
            });
        }
        Ok(MonthConfig {
            out_date_style,
            in_date_style,
            max_row_count,
            start_month,
            end_month,
            first_day_of_week,
            has_boundaries,
            months: OnceCell::new(),
        })
    }
}

// Constants for grid geometry
pub const DAYS_IN_WEEK: usize = 7;
pub const MAX_GRID_ROWS: usize = 6; // 6 weeks covers any month at any offset
