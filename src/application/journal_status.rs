//! Journal status use case

use crate::domain::{DateConstraints, Journal};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;

/// Everything a caller needs to explain what a journal accepts today
#[derive(Debug, Clone)]
pub struct JournalStatusReport {
    pub journal: Journal,
    pub constraints: DateConstraints,
    pub info_message: String,
    pub helper_text: String,
}

/// Service for computing a journal's date constraints
pub struct JournalStatusService {
    repository: FileSystemRepository,
}

impl JournalStatusService {
    pub fn new(repository: FileSystemRepository) -> Self {
        JournalStatusService { repository }
    }

    pub fn execute(&self, journal_id: &str, today: NaiveDate) -> Result<JournalStatusReport> {
        let config = self.repository.load_config()?;
        let date_format = config.get_date_format();
        let journal = self.repository.load_journal(journal_id)?;
        let constraints = journal.constraints(today);

        Ok(JournalStatusReport {
            info_message: constraints.info_message(&date_format),
            helper_text: constraints.helper_text(&date_format),
            journal,
            constraints,
        })
    }
}
