mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "syllabus")]
#[command(about = "Turn a course syllabus into a monthly calendar of readings, assignments and exams")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the items come from and which month to show.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Month to show (YYYY-MM), defaults to start_month from the config
    #[arg(short, long)]
    pub month: Option<String>,

    /// Syllabus file to upload (only PDFs are accepted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Override the MIME type inferred from the file extension
    #[arg(long, requires = "file")]
    pub mime: Option<String>,

    /// JSON file with an array of items, replacing anything uploaded
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// Mark an item as selected (repeatable)
    #[arg(short, long = "select", value_name = "ID")]
    pub select: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month as a calendar grid
    Month {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Show the month's items in date order
    List {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Show every parsed item with its selection state
    Items {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Browse months, switch views and select items interactively
    Session {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Show configuration paths and effective values
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Month { source } => commands::month::run(&source),
        Commands::List { source } => commands::list::run(&source),
        Commands::Items { source } => commands::items::run(&source),
        Commands::Session { source } => commands::session::run(&source),
        Commands::Config { init } => commands::config::run(init),
    }
}
