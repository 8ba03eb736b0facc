//! Month-to-month navigation of the reference date.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{days_in_month, next_month, previous_month};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prev" | "previous" => Ok(Direction::Prev),
            "next" => Ok(Direction::Next),
            other => Err(format!("Unknown direction '{}'. Expected prev or next", other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Prev => write!(f, "prev"),
            Direction::Next => write!(f, "next"),
        }
    }
}

/// What to do when the day-of-month does not exist in the target month
/// (e.g. moving from January 31st to February).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthOverflow {
    /// Stop at the last day of the target month (Jan 31 -> Feb 28).
    #[default]
    Clamp,
    /// Spill the missing days into the following month (Jan 31 -> Mar 3).
    Rollover,
}

impl fmt::Display for MonthOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthOverflow::Clamp => write!(f, "clamp"),
            MonthOverflow::Rollover => write!(f, "rollover"),
        }
    }
}

/// Move the reference date one month, keeping the day-of-month where possible.
pub fn navigate(reference: NaiveDate, direction: Direction, policy: MonthOverflow) -> NaiveDate {
    match policy {
        MonthOverflow::Clamp => {
            // chrono clamps to the end of the target month
            let moved = match direction {
                Direction::Prev => reference.checked_sub_months(Months::new(1)),
                Direction::Next => reference.checked_add_months(Months::new(1)),
            };
            moved.unwrap_or(reference)
        }
        MonthOverflow::Rollover => rollover(reference, direction).unwrap_or(reference),
    }
}

fn rollover(reference: NaiveDate, direction: Direction) -> Option<NaiveDate> {
    let (year, month) = match direction {
        Direction::Prev => previous_month(reference.year(), reference.month()),
        Direction::Next => next_month(reference.year(), reference.month()),
    };
    let day = reference.day();

    if day <= days_in_month(year, month) {
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(day - 1)))
}
