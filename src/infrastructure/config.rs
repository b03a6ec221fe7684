//! Configuration management

use crate::error::{Result, TriplogError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Display format used when none is configured
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    pub created: DateTime<Utc>,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            date_format: default_date_format(),
            created: Utc::now(),
        }
    }

    /// Load config from .triplog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".triplog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TriplogError::NotTriplogDirectory(path.to_path_buf())
            } else {
                TriplogError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| TriplogError::Config(format!("Failed to parse config.toml: {}", e)))?;

        if !Self::is_valid_date_format(&config.date_format) {
            return Err(TriplogError::Config(format!(
                "Invalid date_format in config.toml: '{}'. Use date specifiers only, e.g. %d/%m/%Y",
                config.date_format
            )));
        }

        Ok(config)
    }

    /// Save config to .triplog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let triplog_dir = path.join(".triplog");
        let config_path = triplog_dir.join("config.toml");

        if !triplog_dir.exists() {
            fs::create_dir(&triplog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TriplogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Display format, honoring TRIPLOG_DATE_FORMAT when set
    pub fn get_date_format(&self) -> String {
        std::env::var("TRIPLOG_DATE_FORMAT")
            .ok()
            .filter(|value| Self::is_valid_date_format(value))
            .unwrap_or_else(|| self.date_format.clone())
    }

    /// Check that a strftime pattern renders a calendar date without errors.
    /// Time and offset specifiers parse fine but fail when rendered.
    pub fn is_valid_date_format(format: &str) -> bool {
        use std::fmt::Write;

        !format.trim().is_empty()
            && write!(String::new(), "{}", NaiveDate::MIN.format(format)).is_ok()
    }
}
