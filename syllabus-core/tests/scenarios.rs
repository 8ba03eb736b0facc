// End-to-end flows through the App controller.
use chrono::NaiveDate;
use syllabus_core::calendar::{CellMonth, Direction, MonthOverflow};
use syllabus_core::config::SyllabusConfig;
use syllabus_core::ingest::{IncomingFile, PDF_MIME};
use syllabus_core::{App, ViewMode};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn pdf() -> IncomingFile {
    IncomingFile::new("conlaw-syllabus.pdf", PDF_MIME, b"%PDF-1.7".to_vec())
}

fn loaded_app() -> App {
    let mut app = App::new(&SyllabusConfig::default()).unwrap();
    assert!(app.drop_files(&[pdf()]));
    app
}

#[test]
fn test_sample_items_render_in_september_grid_and_list() {
    let app = loaded_app();
    let grid = app.month_grid();

    for day in [5, 8, 12] {
        let cell = grid.cell_for_day(day).unwrap();
        assert_eq!(cell.events.len(), 1, "day {day}");
        assert_eq!(cell.overflow, 0);
    }
    let busy_days = grid
        .cells
        .iter()
        .filter(|c| c.month == CellMonth::Current && !c.events.is_empty())
        .count();
    assert_eq!(busy_days, 3);

    let list = app.month_list();
    let ids: Vec<_> = list.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert!(list.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn test_navigating_back_to_august_hides_september_items() {
    let mut app = loaded_app();

    let reference = app.navigate(Direction::Prev);

    assert_eq!(reference, date(2025, 8, 1));
    assert_eq!(app.month_title(), "August 2025");
    assert!(app.month_grid().cells.iter().all(|c| c.events.is_empty()));
    assert!(app.month_list().is_empty());
    assert_eq!(app.items().len(), 3);
}

#[test]
fn test_dropping_plain_text_changes_nothing() {
    let text = IncomingFile::new("notes.txt", "text/plain", b"Week 1: read ch. 1".to_vec());

    let mut empty = App::new(&SyllabusConfig::default()).unwrap();
    assert!(!empty.drop_files(&[text.clone()]));
    assert!(!empty.pick_file(&text));
    assert!(empty.items().is_empty());

    let mut loaded = loaded_app();
    loaded.toggle("1");
    let before = loaded.state().clone();
    assert!(!loaded.drop_files(&[text.clone()]));
    assert!(!loaded.pick_file(&text));
    assert_eq!(loaded.state(), &before);
}

#[test]
fn test_drop_with_mixed_files_uses_the_pdf() {
    let mut app = App::new(&SyllabusConfig::default()).unwrap();
    let files = vec![
        IncomingFile::new("notes.txt", "text/plain", Vec::new()),
        pdf(),
    ];

    assert!(app.drop_files(&files));
    assert_eq!(app.items().len(), 3);
}

#[test]
fn test_toggle_scenarios() {
    let mut app = loaded_app();

    app.toggle("2");
    app.toggle("2");
    assert_eq!(app.selected_count(), 0);

    app.toggle("1");
    app.toggle("3");
    assert_eq!(app.selected_count(), 2);
    assert!(app.selection().is_selected("1"));
    assert!(!app.selection().is_selected("2"));
    assert!(app.selection().is_selected("3"));
}

#[test]
fn test_round_trip_navigation_returns_to_same_month() {
    let mut app = loaded_app();

    app.navigate(Direction::Next);
    app.navigate(Direction::Next);
    assert_eq!(app.month_title(), "November 2025");
    app.navigate(Direction::Prev);
    app.navigate(Direction::Prev);

    assert_eq!(app.reference_date(), date(2025, 9, 1));
    assert_eq!(app.month_list().len(), 3);
}

#[test]
fn test_navigation_policy_from_config() {
    let mut clamp = App::new(&SyllabusConfig::default()).unwrap();
    clamp.jump_to(date(2025, 1, 31));
    assert_eq!(clamp.navigate(Direction::Next), date(2025, 2, 28));

    let rollover = SyllabusConfig {
        month_overflow: MonthOverflow::Rollover,
        ..SyllabusConfig::default()
    };
    let mut app = App::new(&rollover).unwrap();
    app.jump_to(date(2025, 1, 31));
    assert_eq!(app.navigate(Direction::Next), date(2025, 3, 3));
    assert_eq!(app.month_title(), "March 2025");
}

#[test]
fn test_initial_view_mode_from_config() {
    let config = SyllabusConfig {
        view_mode: ViewMode::List,
        ..SyllabusConfig::default()
    };
    let mut app = App::new(&config).unwrap();
    assert_eq!(app.view_mode(), ViewMode::List);

    app.set_view_mode(ViewMode::Calendar);
    assert_eq!(app.view_mode(), ViewMode::Calendar);
}
