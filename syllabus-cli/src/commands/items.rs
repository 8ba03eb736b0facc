use anyhow::Result;

use crate::SourceArgs;
use crate::render::render_parsed_items;

pub fn run(source: &SourceArgs) -> Result<()> {
    let app = super::load_app(source)?;

    println!(
        "{}",
        render_parsed_items(&app.parsed_items(), app.selected_count())
    );

    Ok(())
}
