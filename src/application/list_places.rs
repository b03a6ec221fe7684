//! List places use case

use crate::domain::Journal;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};

/// Service for reading a journal's places
pub struct ListPlacesService {
    repository: FileSystemRepository,
}

impl ListPlacesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListPlacesService { repository }
    }

    /// The journal with its places in chronological order
    pub fn execute(&self, journal_id: &str) -> Result<Journal> {
        let mut journal = self.repository.load_journal(journal_id)?;
        journal.sort_places();
        Ok(journal)
    }
}
