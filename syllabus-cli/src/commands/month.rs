use anyhow::Result;

use crate::SourceArgs;
use crate::render::{Render, render_header, render_preview_notice};

pub fn run(source: &SourceArgs) -> Result<()> {
    let app = super::load_app(source)?;

    println!("{}", render_header(&app.month_title()));
    println!("{}", render_preview_notice());
    println!();
    println!("{}", app.month_grid().render());

    Ok(())
}
