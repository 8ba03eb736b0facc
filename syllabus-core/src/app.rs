//! Application state and the controller that owns it.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::calendar::{
    self, Direction, GridOptions, MonthGrid, MonthOverflow, filter_and_sort_month,
    project_month_with,
};
use crate::config::SyllabusConfig;
use crate::error::SyllabusResult;
use crate::ingest::{self, IncomingFile, Ingestor, SampleIngestor};
use crate::item::{SyllabusItem, ensure_unique_ids};
use crate::selection::SelectionStore;

pub const EMPTY_ITEMS_MESSAGE: &str = "Upload a syllabus PDF to see parsed items here.";
pub const EMPTY_LIST_MESSAGE: &str = "No items to display. Upload a syllabus to see events.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Calendar,
    List,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar" => Ok(ViewMode::Calendar),
            "list" => Ok(ViewMode::List),
            other => Err(format!("Unknown view '{}'. Expected calendar or list", other)),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Calendar => write!(f, "calendar"),
            ViewMode::List => write!(f, "list"),
        }
    }
}

/// Everything the views are computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Only month and year are used for projection
    pub reference_date: NaiveDate,
    pub items: Vec<SyllabusItem>,
    pub selection: SelectionStore,
    pub view_mode: ViewMode,
}

/// One row of the parsed-items panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedItemRow<'a> {
    pub item: &'a SyllabusItem,
    pub selected: bool,
}

/// Owns the application state and applies user events to it.
pub struct App<I: Ingestor = SampleIngestor> {
    state: AppState,
    ingestor: I,
    overflow: MonthOverflow,
    grid_options: GridOptions,
}

impl App<SampleIngestor> {
    pub fn new(config: &SyllabusConfig) -> SyllabusResult<Self> {
        App::with_ingestor(config, SampleIngestor)
    }
}

impl<I: Ingestor> App<I> {
    pub fn with_ingestor(config: &SyllabusConfig, ingestor: I) -> SyllabusResult<Self> {
        Ok(App {
            state: AppState {
                reference_date: config.start_date()?,
                items: Vec::new(),
                selection: SelectionStore::new(),
                view_mode: config.view_mode,
            },
            ingestor,
            overflow: config.month_overflow,
            grid_options: config.grid_options(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.state.reference_date
    }

    pub fn items(&self) -> &[SyllabusItem] {
        &self.state.items
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.state.selection
    }

    /// Handle a drop of one or more files. Only the first PDF is ingested;
    /// a drop without one is ignored. Returns whether the items changed.
    pub fn drop_files(&mut self, files: &[IncomingFile]) -> bool {
        match ingest::first_pdf(files) {
            Some(file) => self.pick_file(file),
            None => {
                debug!("Ignoring drop of {} file(s): no PDF among them", files.len());
                false
            }
        }
    }

    /// Handle a file chosen through a picker. Rejected files leave the
    /// state untouched. Returns whether the items changed.
    pub fn pick_file(&mut self, file: &IncomingFile) -> bool {
        let items = match self.ingestor.ingest(file) {
            Ok(items) => items,
            Err(e) => {
                debug!("Ignoring '{}': {}", file.name, e);
                return false;
            }
        };

        match self.replace_items(items) {
            Ok(()) => true,
            Err(e) => {
                warn!("Discarding items from '{}': {}", file.name, e);
                false
            }
        }
    }

    /// Replace the whole collection. The selection refers to the old items,
    /// so it is cleared.
    pub fn replace_items(&mut self, items: Vec<SyllabusItem>) -> SyllabusResult<()> {
        ensure_unique_ids(&items)?;

        debug!("Loaded {} syllabus item(s)", items.len());
        self.state.items = items;
        self.state.selection.clear();
        Ok(())
    }

    pub fn navigate(&mut self, direction: Direction) -> NaiveDate {
        let next = calendar::navigate(self.state.reference_date, direction, self.overflow);
        debug!("Navigated {} from {} to {}", direction, self.state.reference_date, next);
        self.state.reference_date = next;
        next
    }

    /// Show the month containing `date`; the day is kept for later navigation.
    pub fn jump_to(&mut self, date: NaiveDate) {
        self.state.reference_date = date;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
    }

    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        let selected = self.state.selection.toggle(id);
        debug!(
            "Item '{}' {}; {} selected",
            id,
            if selected { "selected" } else { "unselected" },
            self.state.selection.count()
        );
        selected
    }

    pub fn select_all(&mut self) {
        self.state.selection.select_all(&self.state.items);
    }

    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    pub fn selected_count(&self) -> usize {
        self.state.selection.count()
    }

    pub fn month_grid(&self) -> MonthGrid {
        project_month_with(
            self.state.reference_date,
            &self.state.items,
            &self.grid_options,
        )
    }

    pub fn month_list(&self) -> Vec<&SyllabusItem> {
        filter_and_sort_month(self.state.reference_date, &self.state.items)
    }

    /// Every item in collection order, with its checkbox state.
    pub fn parsed_items(&self) -> Vec<ParsedItemRow<'_>> {
        self.state
            .items
            .iter()
            .map(|item| ParsedItemRow {
                item,
                selected: self.state.selection.is_selected(&item.id),
            })
            .collect()
    }

    /// e.g. "September 2025"
    pub fn month_title(&self) -> String {
        self.state.reference_date.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyllabusError;
    use crate::ingest::PDF_MIME;
    use crate::item::ItemKind;

    fn pdf() -> IncomingFile {
        IncomingFile::new("syllabus.pdf", PDF_MIME, Vec::new())
    }

    fn app() -> App {
        App::new(&SyllabusConfig::default()).unwrap()
    }

    #[test]
    fn test_new_app_starts_empty_in_september_2025() {
        let app = app();

        assert_eq!(app.reference_date(), NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert!(app.items().is_empty());
        assert_eq!(app.view_mode(), ViewMode::Calendar);
        assert_eq!(app.month_title(), "September 2025");
    }

    #[test]
    fn test_replacing_items_clears_selection() {
        let mut app = app();
        assert!(app.pick_file(&pdf()));
        app.toggle("1");
        assert_eq!(app.selected_count(), 1);

        assert!(app.pick_file(&pdf()));

        assert_eq!(app.selected_count(), 0);
        assert_eq!(app.items().len(), 3);
    }

    #[test]
    fn test_selection_survives_navigation_and_view_switch() {
        let mut app = app();
        app.pick_file(&pdf());
        app.toggle("2");

        app.navigate(Direction::Next);
        app.set_view_mode(ViewMode::List);
        app.navigate(Direction::Prev);

        assert!(app.selection().is_selected("2"));
        assert_eq!(app.view_mode(), ViewMode::List);
    }

    #[test]
    fn test_replace_items_rejects_duplicates_and_keeps_state() {
        let mut app = app();
        app.pick_file(&pdf());
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let dupes = vec![
            SyllabusItem::new("x", "A", ItemKind::Exam, date),
            SyllabusItem::new("x", "B", ItemKind::Exam, date),
        ];

        let err = app.replace_items(dupes).unwrap_err();

        assert!(matches!(err, SyllabusError::DuplicateId(_)));
        assert_eq!(app.items().len(), 3);
    }

    #[test]
    fn test_parsed_items_reflect_selection() {
        let mut app = app();
        app.pick_file(&pdf());
        app.toggle("3");

        let rows = app.parsed_items();
        let flags: Vec<_> = rows.iter().map(|r| (r.item.id.as_str(), r.selected)).collect();

        assert_eq!(flags, vec![("1", false), ("2", false), ("3", true)]);
    }

    struct RejectEverything;

    impl Ingestor for RejectEverything {
        fn ingest(&self, file: &IncomingFile) -> SyllabusResult<Vec<SyllabusItem>> {
            Err(SyllabusError::EmptyResult(file.name.clone()))
        }
    }

    #[test]
    fn test_failed_ingest_leaves_state_unchanged() {
        let mut app = App::with_ingestor(&SyllabusConfig::default(), RejectEverything).unwrap();
        let before = app.state().clone();

        assert!(!app.drop_files(&[pdf()]));

        assert_eq!(app.state(), &before);
    }

    #[test]
    fn test_select_all_then_clear() {
        let mut app = app();
        app.pick_file(&pdf());

        app.select_all();
        assert_eq!(app.selected_count(), 3);

        app.clear_selection();
        assert_eq!(app.selected_count(), 0);
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!("List".parse::<ViewMode>(), Ok(ViewMode::List));
        assert_eq!("calendar".parse::<ViewMode>(), Ok(ViewMode::Calendar));
        assert!("agenda".parse::<ViewMode>().is_err());
    }
}
