//! Toggle place status use case

use crate::domain::{suggest_default_dates, validate_place_dates, DateRejection, Place};
use crate::error::{Result, TriplogError};
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub place: Place,
    /// True when the old dates were not legal for the new status and were
    /// replaced by the suggested defaults
    pub dates_changed: bool,
}

/// Service flipping a place between visited and planned
pub struct TogglePlaceService {
    repository: FileSystemRepository,
}

impl TogglePlaceService {
    pub fn new(repository: FileSystemRepository) -> Self {
        TogglePlaceService { repository }
    }

    pub fn execute(
        &self,
        journal_id: &str,
        place_selector: &str,
        today: NaiveDate,
    ) -> Result<ToggleOutcome> {
        let mut journal = self.repository.load_journal(journal_id)?;
        let index = journal
            .find_place(place_selector)
            .ok_or_else(|| TriplogError::PlaceNotFound {
                journal: journal.id.clone(),
                place: place_selector.to_string(),
            })?;

        let constraints = journal.constraints(today);
        let place = &mut journal.places[index];
        let new_status = place.status.toggled();

        if !constraints.allows(new_status) {
            return Err(TriplogError::InvalidPlaceDate(
                DateRejection::StatusNotAllowed(new_status).to_string(),
            ));
        }

        let keeps_dates =
            validate_place_dates(place.start_date, place.end_date, new_status, &constraints)
                .is_valid();
        if !keeps_dates {
            let suggested = suggest_default_dates(new_status, &constraints);
            place.start_date = suggested.start_date;
            place.end_date = suggested.end_date;
        }
        place.status = new_status;

        let outcome = ToggleOutcome {
            place: place.clone(),
            dates_changed: !keeps_dates,
        };

        journal.sort_places();
        self.repository.save_journal(&journal)?;
        info!(
            journal = %journal.id,
            place = %outcome.place.name,
            status = %new_status,
            dates_changed = outcome.dates_changed,
            "toggled place status"
        );

        Ok(outcome)
    }
}
