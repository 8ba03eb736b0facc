//! User configuration at ~/.config/syllabus-calendar/config.toml

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::app::ViewMode;
use crate::calendar::{DEFAULT_EVENTS_PER_CELL, DEFAULT_TITLE_WIDTH, GridOptions, MonthOverflow};
use crate::error::{SyllabusError, SyllabusResult};

static DEFAULT_START_MONTH: &str = "2025-09";

/// Environment variables named `SYLLABUS_<KEY>` override the file.
const ENV_PREFIX: &str = "SYLLABUS";

fn default_start_month() -> String {
    DEFAULT_START_MONTH.to_string()
}

fn default_title_width() -> usize {
    DEFAULT_TITLE_WIDTH
}

fn default_events_per_cell() -> usize {
    DEFAULT_EVENTS_PER_CELL
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusConfig {
    /// Month shown on start, as YYYY-MM
    #[serde(default = "default_start_month")]
    pub start_month: String,

    #[serde(default)]
    pub view_mode: ViewMode,

    #[serde(default)]
    pub month_overflow: MonthOverflow,

    #[serde(default = "default_title_width")]
    pub title_width: usize,

    #[serde(default = "default_events_per_cell")]
    pub events_per_cell: usize,
}

impl Default for SyllabusConfig {
    fn default() -> Self {
        SyllabusConfig {
            start_month: default_start_month(),
            view_mode: ViewMode::default(),
            month_overflow: MonthOverflow::default(),
            title_width: default_title_width(),
            events_per_cell: default_events_per_cell(),
        }
    }
}

impl SyllabusConfig {
    pub fn config_path() -> SyllabusResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SyllabusError::Config("Could not determine config directory".into()))?
            .join("syllabus-calendar");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> SyllabusResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, with `SYLLABUS_*` environment variables on top.
    pub fn load_from(path: &Path) -> SyllabusResult<Self> {
        Self::load_layered(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_layered(path: &Path, env: Environment) -> SyllabusResult<Self> {
        let config: SyllabusConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(env)
            .build()
            .map_err(|e| SyllabusError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SyllabusError::Config(e.to_string()))?;

        config.start_date()?;
        Ok(config)
    }

    /// First day of the configured start month.
    pub fn start_date(&self) -> SyllabusResult<NaiveDate> {
        parse_month(&self.start_month)
    }

    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            title_width: self.title_width,
            events_per_cell: self.events_per_cell,
        }
    }

    pub fn save(&self) -> SyllabusResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> SyllabusResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| SyllabusError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SyllabusError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| SyllabusError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SyllabusResult<()> {
        let contents = format!(
            "\
# syllabus-calendar configuration

# Month shown on start (YYYY-MM):
# start_month = \"{}\"

# Initial view, \"calendar\" or \"list\":
# view_mode = \"calendar\"

# Moving from the 31st into a shorter month, \"clamp\" or \"rollover\":
# month_overflow = \"clamp\"

# Characters of a title shown in a calendar cell:
# title_width = {}

# Events listed per calendar cell before \"+N more\":
# events_per_cell = {}
",
            DEFAULT_START_MONTH, DEFAULT_TITLE_WIDTH, DEFAULT_EVENTS_PER_CELL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SyllabusError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SyllabusError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Parse YYYY-MM into the first day of that month.
pub fn parse_month(s: &str) -> SyllabusResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| SyllabusError::MalformedDate(format!("{s} (expected YYYY-MM)")))
}
