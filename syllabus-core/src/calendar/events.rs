//! Day grouping and month listing of syllabus items.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::item::SyllabusItem;

/// Items falling on one day of the reference month, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent<'a> {
    pub day: u32,
    pub items: Vec<&'a SyllabusItem>,
}

impl CalendarEvent<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// True when `date` lies in the same month and year as `reference`.
pub fn in_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

/// Group the items of the reference month by day-of-month.
pub fn group_by_day(
    reference: NaiveDate,
    items: &[SyllabusItem],
) -> BTreeMap<u32, CalendarEvent<'_>> {
    let mut events: BTreeMap<u32, CalendarEvent<'_>> = BTreeMap::new();

    for item in items.iter().filter(|i| in_month(i.date, reference)) {
        let day = item.date.day();
        events
            .entry(day)
            .or_insert_with(|| CalendarEvent { day, items: Vec::new() })
            .items
            .push(item);
    }

    events
}

/// Items of the reference month in ascending date order.
/// Same-day items keep their input order.
pub fn filter_and_sort_month(reference: NaiveDate, items: &[SyllabusItem]) -> Vec<&SyllabusItem> {
    let mut month: Vec<&SyllabusItem> = items
        .iter()
        .filter(|i| in_month(i.date, reference))
        .collect();

    // sort_by_key is stable
    month.sort_by_key(|i| i.date);
    month
}
