//! Config management use case

use crate::error::{Result, TriplogError};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing store configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "date_format" => Ok(config.date_format),
            _ => Err(TriplogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: date_format",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "date_format" => {
                if !Config::is_valid_date_format(value) {
                    return Err(TriplogError::Config(format!(
                        "Invalid date format: '{}'. Use strftime syntax, e.g. %d/%m/%Y",
                        value
                    )));
                }
                config.date_format = value.to_string();
            }
            "created" => {
                return Err(TriplogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TriplogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: date_format",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
