//! Six-week month grid with leading and trailing days from adjacent months.

use chrono::{Datelike, NaiveDate};

use super::events::group_by_day;
use super::{days_in_month, first_weekday, previous_month};
use crate::item::{ItemKind, SyllabusItem};

/// Weekday headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// 6 rows of 7 days.
pub const GRID_CELLS: usize = 42;

pub const DEFAULT_TITLE_WIDTH: usize = 20;
pub const DEFAULT_EVENTS_PER_CELL: usize = 2;

/// Which month a grid cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMonth {
    Previous,
    Current,
    Next,
}

/// Compact description of an item shown inside a grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub id: String,
    /// Title truncated to the cell width
    pub title: String,
    /// Untruncated title (hover text)
    pub full_title: String,
    pub kind: ItemKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub day: u32,
    pub month: CellMonth,
    pub events: Vec<EventSummary>,
    /// Items on this day beyond the ones listed in `events`
    pub overflow: usize,
}

impl GridCell {
    fn inert(day: u32, month: CellMonth) -> Self {
        GridCell {
            day,
            month,
            events: Vec::new(),
            overflow: 0,
        }
    }

    /// Only days of the projected month react to input.
    pub fn is_interactive(&self) -> bool {
        self.month == CellMonth::Current
    }
}

/// Render-ready month view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Weekday of the 1st (0 = Sunday), which is also the number of leading cells
    pub offset: u32,
    pub headers: [&'static str; 7],
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    pub fn count(&self, month: CellMonth) -> usize {
        self.cells.iter().filter(|c| c.month == month).count()
    }

    /// The current-month cell for a day, if the day exists.
    pub fn cell_for_day(&self, day: u32) -> Option<&GridCell> {
        self.cells
            .iter()
            .find(|c| c.month == CellMonth::Current && c.day == day)
    }
}

/// Cell layout knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    pub title_width: usize,
    pub events_per_cell: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            title_width: DEFAULT_TITLE_WIDTH,
            events_per_cell: DEFAULT_EVENTS_PER_CELL,
        }
    }
}

/// Project the reference month with the default cell layout.
pub fn project_month(reference: NaiveDate, items: &[SyllabusItem]) -> MonthGrid {
    project_month_with(reference, items, &GridOptions::default())
}

pub fn project_month_with(
    reference: NaiveDate,
    items: &[SyllabusItem],
    options: &GridOptions,
) -> MonthGrid {
    let (year, month) = (reference.year(), reference.month());
    let days = days_in_month(year, month);
    let offset = first_weekday(reference);
    let (prev_year, prev_month) = previous_month(year, month);
    let prev_days = days_in_month(prev_year, prev_month);
    let events = group_by_day(reference, items);

    let mut cells = Vec::with_capacity(GRID_CELLS);

    for day in (prev_days - offset + 1)..=prev_days {
        cells.push(GridCell::inert(day, CellMonth::Previous));
    }

    for day in 1..=days {
        let mut cell = GridCell::inert(day, CellMonth::Current);
        if let Some(event) = events.get(&day) {
            cell.events = event
                .items
                .iter()
                .take(options.events_per_cell)
                .map(|item| summarize(item, options.title_width))
                .collect();
            cell.overflow = overflow_count(event.len(), options.events_per_cell);
        }
        cells.push(cell);
    }

    let trailing = GRID_CELLS - cells.len();
    for day in 1..=trailing as u32 {
        cells.push(GridCell::inert(day, CellMonth::Next));
    }

    MonthGrid {
        year,
        month,
        offset,
        headers: WEEKDAY_HEADERS,
        cells,
    }
}

fn summarize(item: &SyllabusItem, title_width: usize) -> EventSummary {
    EventSummary {
        id: item.id.clone(),
        title: truncate_title(&item.title, title_width),
        full_title: item.title.clone(),
        kind: item.kind.clone(),
    }
}

/// Cut a title to `width` characters, marking the cut with "...".
pub fn truncate_title(title: &str, width: usize) -> String {
    if title.chars().count() > width {
        let head: String = title.chars().take(width).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

/// Items a cell cannot show, given how many it lists.
pub fn overflow_count(total: usize, shown: usize) -> usize {
    total.saturating_sub(shown)
}
