//! Error types for triplog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for triplog application
#[derive(Debug, Error)]
pub enum TriplogError {
    #[error("Not a triplog directory: {0}")]
    NotTriplogDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Journal not found: {0}")]
    JournalNotFound(String),

    #[error("Place not found in journal '{journal}': {place}")]
    PlaceNotFound { journal: String, place: String },

    #[error("Invalid place date: {0}")]
    InvalidPlaceDate(String),

    #[error("Invalid journal: {0}")]
    InvalidJournal(String),

    #[error("Invalid place: {0}")]
    InvalidPlace(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TriplogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TriplogError::NotTriplogDirectory(_) => 2,
            TriplogError::InvalidDate(_) => 3,
            TriplogError::JournalNotFound(_) | TriplogError::PlaceNotFound { .. } => 4,
            TriplogError::InvalidPlaceDate(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TriplogError::NotTriplogDirectory(path) => {
                format!(
                    "Not a triplog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'triplog init' in this directory to create a new store\n\
                    • Navigate to an existing triplog directory\n\
                    • Set TRIPLOG_ROOT environment variable to your store path",
                    path.display()
                )
            }
            TriplogError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • Day offsets from today: +3, -2\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    triplog new \"Japan\" --start 2025-01-10 --end 2025-01-20\n\
                    triplog check japan today --status visited",
                    input
                )
            }
            TriplogError::JournalNotFound(id) => {
                format!(
                    "Journal not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'triplog list' to see available journals\n\
                    • Journal ids are derived from titles (e.g., 'Japan 2025' -> japan-2025)",
                    id
                )
            }
            TriplogError::PlaceNotFound { journal, place } => {
                format!(
                    "No place '{}' in journal '{}'\n\n\
                    Suggestions:\n\
                    • Use 'triplog places {}' to see its places\n\
                    • Places can be selected by number or by name (case-insensitive)",
                    place, journal, journal
                )
            }
            TriplogError::InvalidPlaceDate(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Use 'triplog status <journal>' to see the allowed dates\n\
                    • Use 'triplog suggest <journal> --status <visited|planned>' for a default date",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TriplogError
pub type Result<T> = std::result::Result<T, TriplogError>;
