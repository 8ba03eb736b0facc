//! Terminal rendering for syllabus views.
//!
//! Extension traits that turn the core's view models into colored text
//! using owo_colors.

use owo_colors::OwoColorize;
use syllabus_core::app::{EMPTY_ITEMS_MESSAGE, EMPTY_LIST_MESSAGE, ParsedItemRow};
use syllabus_core::calendar::{CellMonth, GridCell, MonthGrid};
use syllabus_core::kind_style::{self, KindColor};
use syllabus_core::{ItemKind, SyllabusItem, ViewMode};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Paint text in the color assigned to a kind
fn paint(text: &str, color: KindColor) -> String {
    match color {
        KindColor::Blue => text.blue().to_string(),
        KindColor::Red => text.red().to_string(),
        KindColor::Green => text.green().to_string(),
        KindColor::Gray => text.dimmed().to_string(),
    }
}

impl Render for ItemKind {
    /// Badge such as "● exam"
    fn render(&self) -> String {
        let style = kind_style::style_for(self);
        paint(&format!("{} {}", style.icon, self), style.color)
    }
}

/// "● Assignment  ● Exam  ● Reading"
pub fn render_legend() -> String {
    kind_style::legend()
        .map(|style| paint(&format!("{} {}", style.icon, style.label), style.color))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Shown above the calendar whether or not anything has been uploaded.
pub fn render_preview_notice() -> String {
    format!(
        "{} {}",
        "Preview sample calendar:".blue().bold(),
        "upload a PDF to populate".blue()
    )
}

/// Month title between navigation arrows, followed by the legend.
pub fn render_header(title: &str) -> String {
    format!(
        "{} {} {}    {}",
        "‹".dimmed(),
        title.bold(),
        "›".dimmed(),
        render_legend()
    )
}

/// Tab bar with the active view highlighted.
pub fn render_tabs(active: ViewMode) -> String {
    let tab = |mode: ViewMode, label: &str| {
        if mode == active {
            format!("[{}]", label).blue().bold().to_string()
        } else {
            format!(" {} ", label).dimmed().to_string()
        }
    };

    format!(
        "{} {}",
        tab(ViewMode::Calendar, "Calendar View"),
        tab(ViewMode::List, "List View")
    )
}

/// Cells are as wide as a truncated title plus its ellipsis.
fn cell_width(grid: &MonthGrid) -> usize {
    grid.cells
        .iter()
        .flat_map(|c| c.events.iter())
        .map(|e| e.title.chars().count())
        .max()
        .unwrap_or(0)
        .max(10)
}

fn render_day(cell: &GridCell, width: usize) -> String {
    let label = format!("{:<width$}", cell.day);
    match cell.month {
        CellMonth::Current => label.bold().to_string(),
        CellMonth::Previous | CellMonth::Next => label.dimmed().to_string(),
    }
}

fn render_event_line(cell: &GridCell, line: usize, width: usize) -> String {
    match cell.events.get(line) {
        Some(event) => {
            let style = kind_style::style_for(&event.kind);
            paint(&format!("{:<width$}", event.title), style.color)
        }
        None => " ".repeat(width),
    }
}

fn render_overflow(cell: &GridCell, width: usize) -> String {
    if cell.overflow > 0 {
        format!("{:<width$}", format!("+{} more", cell.overflow))
            .dimmed()
            .to_string()
    } else {
        " ".repeat(width)
    }
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        let width = cell_width(self);
        let event_lines = self
            .cells
            .iter()
            .map(|c| c.events.len())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();

        let headers: Vec<String> = self
            .headers
            .iter()
            .map(|h| format!("{:<width$}", h).dimmed().to_string())
            .collect();
        lines.push(headers.join(" "));

        for row in self.rows() {
            lines.push(
                row.iter()
                    .map(|c| render_day(c, width))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
            for line in 0..event_lines {
                lines.push(
                    row.iter()
                        .map(|c| render_event_line(c, line, width))
                        .collect::<Vec<_>>()
                        .join(" "),
                );
            }
            if row.iter().any(|c| c.overflow > 0) {
                lines.push(
                    row.iter()
                        .map(|c| render_overflow(c, width))
                        .collect::<Vec<_>>()
                        .join(" "),
                );
            }
        }

        // Trailing padding is noise in a terminal
        lines
            .iter()
            .map(|l| l.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The month list: one entry per item with kind badge, title and day.
pub fn render_month_list(items: &[&SyllabusItem]) -> String {
    if items.is_empty() {
        return format!("   {}", EMPTY_LIST_MESSAGE.dimmed());
    }

    let mut lines = Vec::new();
    for item in items {
        lines.push(format!("   {}  {}", item.kind.render(), item.title.bold()));
        lines.push(format!(
            "   {}",
            item.date.format("%A, %B %-d").to_string().dimmed()
        ));
    }
    lines.join("\n")
}

/// The parsed-items panel: every item with its checkbox.
pub fn render_parsed_items(rows: &[ParsedItemRow<'_>], selected: usize) -> String {
    let mut lines = vec![format!(
        "{}  {}",
        "Parsed Items".bold(),
        format!("{} selected", selected).dimmed()
    )];

    if rows.is_empty() {
        lines.push(format!("   {}", EMPTY_ITEMS_MESSAGE.dimmed()));
        return lines.join("\n");
    }

    for row in rows {
        let checkbox = if row.selected { "[x]" } else { "[ ]" };
        lines.push(format!(
            "{} {}  {}  {}",
            checkbox,
            row.item.id.dimmed(),
            row.item.kind.render(),
            row.item.date.format("%-m/%-d/%Y").to_string().dimmed()
        ));
        lines.push(format!("      {}", row.item.title.bold()));
        if let Some(description) = &row.item.description {
            lines.push(format!("      {}", description.dimmed()));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use syllabus_core::calendar::project_month;
    use syllabus_core::ingest::sample_items;

    fn september() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    #[test]
    fn test_grid_shows_truncated_titles_and_overflow() {
        let mut items = sample_items();
        let day = NaiveDate::from_ymd_opt(2025, 9, 12).unwrap();
        items.push(SyllabusItem::new("4", "Reading Quiz", ItemKind::Reading, day));
        items.push(SyllabusItem::new("5", "Office Hours", ItemKind::Other("meeting".into()), day));

        let rendered = project_month(september(), &items).render();

        assert!(rendered.contains("Constitutional Law R..."));
        assert!(rendered.contains("Midterm Exam"));
        assert!(rendered.contains("+1 more"));
        assert!(!rendered.contains("Office Hours"));
        assert!(rendered.contains("SUN"));
    }

    #[test]
    fn test_preview_notice_text() {
        let notice = render_preview_notice();
        assert!(notice.contains("Preview sample calendar:"));
        assert!(notice.contains("upload a PDF to populate"));
    }

    #[test]
    fn test_month_list_empty_message() {
        assert!(render_month_list(&[]).contains(EMPTY_LIST_MESSAGE));
    }

    #[test]
    fn test_month_list_shows_weekday_labels() {
        let items = sample_items();
        let refs: Vec<&SyllabusItem> = items.iter().collect();

        let rendered = render_month_list(&refs);

        assert!(rendered.contains("Friday, September 5"));
        assert!(rendered.contains("Monday, September 8"));
        assert!(rendered.contains("Friday, September 12"));
    }

    #[test]
    fn test_parsed_items_checkboxes() {
        let items = sample_items();
        let rows: Vec<ParsedItemRow<'_>> = items
            .iter()
            .map(|item| ParsedItemRow {
                item,
                selected: item.id == "2",
            })
            .collect();

        let rendered = render_parsed_items(&rows, 1);

        assert!(rendered.contains("1 selected"));
        assert_eq!(rendered.matches("[x]").count(), 1);
        assert_eq!(rendered.matches("[ ]").count(), 2);
        assert!(rendered.contains("Marbury v. Madison case analysis"));
        assert!(rendered.contains("9/8/2025"));
    }

    #[test]
    fn test_parsed_items_empty_message() {
        let rendered = render_parsed_items(&[], 0);
        assert!(rendered.contains(EMPTY_ITEMS_MESSAGE));
        assert!(rendered.contains("0 selected"));
    }
}
