//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::{Config, DEFAULT_DATE_FORMAT};
pub use repository::{FileSystemRepository, JournalRepository};
