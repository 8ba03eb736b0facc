use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use syllabus_core::calendar::Direction;
use syllabus_core::ingest::IncomingFile;
use syllabus_core::{App, ViewMode};

use super::incoming_file;
use crate::SourceArgs;
use crate::render::{
    Render, render_header, render_month_list, render_parsed_items, render_preview_notice, render_tabs,
};

const HELP: &str = "\
  prev | next          move one month
  calendar | list      switch view
  toggle <id>          select or unselect an item
  all | none           select every item / clear the selection
  drop <path>...       upload files (the first PDF is used)
  items                show parsed items
  help                 show this help
  quit                 leave";

/// One line typed at the session prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Navigate(Direction),
    View(ViewMode),
    Toggle(String),
    SelectAll,
    ClearSelection,
    Drop(Vec<PathBuf>),
    Items,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err("Type a command, or 'help'".to_string());
        };
        let rest: Vec<&str> = words.collect();

        match (head.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("prev" | "next", []) => head.parse().map(SessionCommand::Navigate),
            ("calendar" | "list", []) => head.parse().map(SessionCommand::View),
            ("toggle", [id]) => Ok(SessionCommand::Toggle(id.to_string())),
            ("toggle", _) => Err("Usage: toggle <id>".to_string()),
            ("all", []) => Ok(SessionCommand::SelectAll),
            ("none", []) => Ok(SessionCommand::ClearSelection),
            ("drop", []) => Err("Usage: drop <path>...".to_string()),
            ("drop", paths) => Ok(SessionCommand::Drop(
                paths.iter().map(|p| PathBuf::from(*p)).collect(),
            )),
            ("items", []) => Ok(SessionCommand::Items),
            ("help" | "?", []) => Ok(SessionCommand::Help),
            ("quit" | "exit" | "q", []) => Ok(SessionCommand::Quit),
            _ => Err(format!("Unknown command '{}'. Type 'help'", s.trim())),
        }
    }
}

pub fn run(source: &SourceArgs) -> Result<()> {
    let mut app = super::load_app(source)?;
    print_view(&app);

    loop {
        println!();
        let line: String = Input::new()
            .with_prompt(format!("  {} selected", app.selected_count()))
            .interact_text()?;

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e.red());
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => println!("{}", HELP.dimmed()),
            SessionCommand::Items => println!(
                "{}",
                render_parsed_items(&app.parsed_items(), app.selected_count())
            ),
            SessionCommand::Drop(paths) => {
                let files = read_files(&paths);
                if app.drop_files(&files) {
                    print_view(&app);
                } else {
                    println!("{}", "No PDF in that drop, nothing changed".dimmed());
                }
            }
            other => {
                apply(&mut app, other);
                print_view(&app);
            }
        }
    }

    Ok(())
}

/// Apply a state-changing command that needs no I/O.
fn apply(app: &mut App, command: SessionCommand) {
    match command {
        SessionCommand::Navigate(direction) => {
            app.navigate(direction);
        }
        SessionCommand::View(mode) => app.set_view_mode(mode),
        SessionCommand::Toggle(id) => {
            if !app.items().iter().any(|i| i.id == id) {
                println!("{}", format!("No item with id '{}'", id).yellow());
                return;
            }
            app.toggle(&id);
        }
        SessionCommand::SelectAll => app.select_all(),
        SessionCommand::ClearSelection => app.clear_selection(),
        SessionCommand::Drop(_)
        | SessionCommand::Items
        | SessionCommand::Help
        | SessionCommand::Quit => {}
    }
}

/// Unreadable paths are reported and left out of the drop.
fn read_files(paths: &[PathBuf]) -> Vec<IncomingFile> {
    paths
        .iter()
        .filter_map(|path| match incoming_file(path, None) {
            Ok(file) => Some(file),
            Err(e) => {
                println!("{}", format!("{:#}", e).red());
                None
            }
        })
        .collect()
}

fn print_view(app: &App) {
    println!("{}", render_header(&app.month_title()));
    println!("{}", render_tabs(app.view_mode()));
    println!();

    match app.view_mode() {
        ViewMode::Calendar => {
            println!("{}", render_preview_notice());
            println!("{}", app.month_grid().render());
        }
        ViewMode::List => println!("{}", render_month_list(&app.month_list())),
    }
}
