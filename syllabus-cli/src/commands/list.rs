use anyhow::Result;

use crate::SourceArgs;
use crate::render::{render_header, render_month_list};

pub fn run(source: &SourceArgs) -> Result<()> {
    let app = super::load_app(source)?;

    println!("{}", render_header(&app.month_title()));
    println!();
    println!("{}", render_month_list(&app.month_list()));

    Ok(())
}
