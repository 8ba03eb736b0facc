pub mod config;
pub mod items;
pub mod list;
pub mod month;
pub mod session;

use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use syllabus_core::App;
use syllabus_core::config::{SyllabusConfig, parse_month};
use syllabus_core::ingest::IncomingFile;
use syllabus_core::item::items_from_json;

use crate::SourceArgs;

/// Build the controller from the config file, then replay the source
/// arguments on it the way a user would: jump, upload, load, tick.
pub fn load_app(source: &SourceArgs) -> Result<App> {
    let config = SyllabusConfig::load().context("Failed to load configuration")?;
    let mut app = App::new(&config)?;

    if let Some(month) = &source.month {
        app.jump_to(parse_month(month)?);
    }

    if let Some(path) = &source.file {
        let file = incoming_file(path, source.mime.as_deref())?;
        if !app.pick_file(&file) {
            info!("'{}' ({}) was not accepted", path.display(), file.mime);
        }
    }

    if let Some(path) = &source.items {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read items file at {}", path.display()))?;
        let items = items_from_json(&json)
            .with_context(|| format!("Failed to parse items file at {}", path.display()))?;
        app.replace_items(items)?;
    }

    select_items(&mut app, &source.select)?;

    Ok(app)
}

/// Toggle each id in turn. Ids that name no loaded item are rejected.
pub fn select_items(app: &mut App, ids: &[String]) -> Result<()> {
    for id in ids {
        if !app.items().iter().any(|item| &item.id == id) {
            bail!("No item with id '{}'", id);
        }
        app.toggle(id);
    }

    Ok(())
}

/// Read a file for upload, optionally overriding the inferred MIME type.
pub fn incoming_file(path: &Path, mime: Option<&str>) -> Result<IncomingFile> {
    let mut file = IncomingFile::from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if let Some(mime) = mime {
        file.mime = mime.to_string();
    }

    Ok(file)
}
