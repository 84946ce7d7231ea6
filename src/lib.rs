//! Month grid computation for scrollable calendar widgets.
//!
//! Features:
//! - Week-rows aligned to a configurable first day of the week
//! - Adjacent-month filler days (in-dates and out-dates) per style policy
//! - Fixed 6-row grid completion and row-capped month splitting
//! - Boundary-free continuous day streams for endless scrolling

pub mod calendar;
pub mod generator;
pub mod grid;
pub mod types;
