//! Create journal use case

use crate::domain::{slug_for_title, Journal};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;
use tracing::info;

/// Service for creating journals
pub struct CreateJournalService {
    repository: FileSystemRepository,
}

impl CreateJournalService {
    pub fn new(repository: FileSystemRepository) -> Self {
        CreateJournalService { repository }
    }

    /// Create and persist a journal. The id is the title's slug, suffixed
    /// with a counter when another journal already uses it.
    pub fn execute(
        &self,
        title: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        public: bool,
    ) -> Result<Journal> {
        let id = self.unique_id(&slug_for_title(title));

        let mut journal = Journal::new(&id, title, start_date, end_date)?;
        journal.public = public;

        self.repository.save_journal(&journal)?;
        info!(id = %journal.id, %start_date, %end_date, "created journal");

        Ok(journal)
    }

    fn unique_id(&self, base: &str) -> String {
        if !self.repository.journal_exists(base) {
            return base.to_string();
        }

        (2..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| !self.repository.journal_exists(candidate))
            .unwrap_or_else(|| base.to_string())
    }
}
