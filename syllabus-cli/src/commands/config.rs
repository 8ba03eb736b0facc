use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use syllabus_core::config::SyllabusConfig;

pub fn run(init: bool) -> Result<()> {
    let config_path = SyllabusConfig::config_path()?;

    if init {
        if config_path.exists() {
            println!("{}", "Config file already exists".dimmed());
        } else {
            SyllabusConfig::create_default_config(&config_path)?;
            println!("{}", format!("Created {}", config_path.display()).green());
        }
    }

    let config = SyllabusConfig::load_from(&config_path).with_context(|| {
        format!("Failed to load config file at {}", config_path.display())
    })?;

    println!("{}", "Paths".bold());
    println!("  Config:           {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    println!("  start_month:      {}", config.start_month);
    println!("  view_mode:        {}", config.view_mode);
    println!("  month_overflow:   {}", config.month_overflow);
    println!("  title_width:      {}", config.title_width);
    println!("  events_per_cell:  {}", config.events_per_cell);

    Ok(())
}
