//! Check and suggest place dates without saving anything

use crate::domain::{
    suggest_default_dates, validate_place_date, PlaceDateValidation, PlaceStatus, SuggestedDates,
};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;
use tracing::debug;

/// Service answering "may this place have this date?"
pub struct CheckDateService {
    repository: FileSystemRepository,
}

impl CheckDateService {
    pub fn new(repository: FileSystemRepository) -> Self {
        CheckDateService { repository }
    }

    pub fn validate(
        &self,
        journal_id: &str,
        candidate: NaiveDate,
        status: PlaceStatus,
        today: NaiveDate,
    ) -> Result<PlaceDateValidation> {
        let journal = self.repository.load_journal(journal_id)?;
        let result = validate_place_date(candidate, status, &journal.constraints(today));
        debug!(journal = %journal.id, %candidate, %status, valid = result.is_valid(), "checked date");
        Ok(result)
    }

    pub fn suggest(
        &self,
        journal_id: &str,
        status: PlaceStatus,
        today: NaiveDate,
    ) -> Result<SuggestedDates> {
        let journal = self.repository.load_journal(journal_id)?;
        Ok(suggest_default_dates(status, &journal.constraints(today)))
    }
}
