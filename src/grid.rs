//! Week grouping, boundary padding, and row-capped splitting for one month.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::YearMonth;
use crate::types::{
    CalendarDay, CalendarMonth, DAYS_IN_WEEK, DayOwner, InDateStyle, MAX_GRID_ROWS, MonthSplit,
    OutDateStyle,
};

/// Group a month's own days into week-rows according to the in-date style.
///
/// With [`InDateStyle::Aligned`] the rows follow the configured week start:
/// the first row holds the days up to the first week boundary and, when
/// short, is completed from the tail of the previous month.
pub fn build_weeks(
    year_month: YearMonth,
    in_date_style: InDateStyle,
    first_day_of_week: Weekday,
) -> Vec<Vec<CalendarDay>> {
    let days: Vec<CalendarDay> = year_month
        .days()
        .into_iter()
        .map(|date| CalendarDay {
            date,
            owner: DayOwner::ThisMonth,
        })
        .collect();

    match in_date_style {
        InDateStyle::None => chunk_rows(&days),
        InDateStyle::Aligned => {
            // Whole days between the week start and the month's first weekday
            let offset = (year_month.first_day().weekday().num_days_from_monday()
                + DAYS_IN_WEEK as u32
                - first_day_of_week.num_days_from_monday()) as usize
                % DAYS_IN_WEEK;
            let (head, rest) = days.split_at(DAYS_IN_WEEK - offset);

            let mut first_week = head.to_vec();
            if first_week.len() < DAYS_IN_WEEK {
                let previous = year_month.pred().days();
                let missing = DAYS_IN_WEEK - first_week.len();
                let in_dates = previous[previous.len() - missing..]
                    .iter()
                    .map(|&date| CalendarDay {
                        date,
                        owner: DayOwner::PreviousMonth,
                    });
                first_week.splice(0..0, in_dates);
            }

            let mut weeks = vec![first_week];
            weeks.extend(chunk_rows(rest));
            weeks
        }
    }
}

/// Append next-month out-dates to the grid tail according to the style.
pub fn pad_weeks(
    weeks: &mut Vec<Vec<CalendarDay>>,
    year_month: YearMonth,
    out_date_style: OutDateStyle,
) {
    match out_date_style {
        OutDateStyle::None => {}
        OutDateStyle::EndOfRow | OutDateStyle::EndOfGrid => {
            // Day numbering continues across every appended out-date,
            // never resetting between rows.
            let mut out_dates =
                std::iter::successors(Some(year_month.next().first_day()), NaiveDate::succ_opt)
                    .map(|date| CalendarDay {
                        date,
                        owner: DayOwner::NextMonth,
                    });

            if let Some(last) = weeks.last_mut() {
                let missing = DAYS_IN_WEEK - last.len();
                last.extend(out_dates.by_ref().take(missing));
            }
            if out_date_style == OutDateStyle::EndOfGrid {
                while weeks.len() < MAX_GRID_ROWS {
                    weeks.push(out_dates.by_ref().take(DAYS_IN_WEEK).collect());
                }
            }
        }
    }
}

/// Split a padded week-row list into calendar months of at most
/// `max_row_count` rows each; only the last split may be short.
pub fn split_rows(
    year_month: YearMonth,
    weeks: Vec<Vec<CalendarDay>>,
    max_row_count: usize,
) -> Vec<CalendarMonth> {
    let count = weeks.len().div_ceil(max_row_count);
    weeks
        .chunks(max_row_count)
        .enumerate()
        .map(|(index, rows)| CalendarMonth {
            year_month,
            weeks: rows.to_vec(),
            split: Some(MonthSplit { index, count }),
        })
        .collect()
}

/// Chunk days into 7-day rows; the last row may be short.
fn chunk_rows(days: &[CalendarDay]) -> Vec<Vec<CalendarDay>> {
    days.chunks(DAYS_IN_WEEK).map(<[_]>::to_vec).collect()
}
