//! Month arithmetic and the projections that turn a flat item list into
//! calendar views.

mod events;
mod grid;
mod navigate;

pub use events::{CalendarEvent, filter_and_sort_month, group_by_day, in_month};
pub use grid::{
    CellMonth, DEFAULT_EVENTS_PER_CELL, DEFAULT_TITLE_WIDTH, EventSummary, GRID_CELLS,
    GridCell, GridOptions, MonthGrid, WEEKDAY_HEADERS, overflow_count, project_month,
    project_month_with, truncate_title,
};
pub use navigate::{Direction, MonthOverflow, navigate};

use chrono::{Datelike, NaiveDate};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a 1-based month. Months outside 1..=12 have no days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Weekday of the first of the reference month, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday(reference: NaiveDate) -> u32 {
    // Day 1 always exists.
    NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1)
        .unwrap_or(reference)
        .weekday()
        .num_days_from_sunday()
}

/// The (year, month) before the given one, wrapping January to December.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The (year, month) after the given one, wrapping December to January.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
