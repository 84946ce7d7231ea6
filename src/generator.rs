//! Range orchestration: bounded per-month grids or one continuous day stream.

use crate::calendar::YearMonth;
use crate::grid::{build_weeks, pad_weeks, split_rows};
use crate::types::{CalendarDay, CalendarMonth, DAYS_IN_WEEK, DayOwner, MonthConfig};

impl MonthConfig {
    /// The derived month list, covering the whole configured range in
    /// order. Computed on first access and cached; subsequent reads are
    /// lock-free.
    pub fn months(&self) -> &[CalendarMonth] {
        self.months.get_or_init(|| self.generate())
    }

    fn generate(&self) -> Vec<CalendarMonth> {
        if self.has_boundaries {
            self.generate_bounded()
        } else {
            self.generate_unbounded()
        }
    }

    /// Build, pad, and split each month of the range on its own.
    fn generate_bounded(&self) -> Vec<CalendarMonth> {
        let mut months = Vec::new();
        let mut current = self.start_month;
        loop {
            let mut weeks = build_weeks(current, self.in_date_style, self.first_day_of_week);
            pad_weeks(&mut weeks, current, self.out_date_style);
            months.extend(split_rows(current, weeks, self.max_row_count));
            if current == self.end_month {
                break;
            }
            current = current.next();
        }
        months
    }

    /// Stream every day of the range as one chronological sequence, ignoring
    /// month boundaries: no alignment, no filler days, the very last row
    /// possibly short. Each emitted grid takes its year-month from its first
    /// day and carries no split position.
    fn generate_unbounded(&self) -> Vec<CalendarMonth> {
        let mut days: Vec<CalendarDay> = Vec::new();
        let mut current = self.start_month;
        loop {
            days.extend(current.days().into_iter().map(|date| CalendarDay {
                date,
                owner: DayOwner::ThisMonth,
            }));
            if current == self.end_month {
                break;
            }
            current = current.next();
        }

        let rows: Vec<Vec<CalendarDay>> =
            days.chunks(DAYS_IN_WEEK).map(<[_]>::to_vec).collect();
        rows.chunks(self.max_row_count)
            .map(|group| CalendarMonth {
                year_month: YearMonth::of(group[0][0].date),
                weeks: group.to_vec(),
                split: None,
            })
            .collect()
    }
}
