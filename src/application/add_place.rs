//! Add place use case

use crate::domain::{
    suggest_default_dates, validate_place_dates, Place, PlaceDateValidation, PlaceStatus,
};
use crate::error::{Result, TriplogError};
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Input for a new place. Unset fields are filled from the journal's
/// constraints.
#[derive(Debug, Clone, Default)]
pub struct NewPlace {
    pub name: String,
    pub status: Option<PlaceStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub rating: Option<u8>,
    pub notes: Option<String>,
}

/// Service for adding places to a journal
pub struct AddPlaceService {
    repository: FileSystemRepository,
}

impl AddPlaceService {
    pub fn new(repository: FileSystemRepository) -> Self {
        AddPlaceService { repository }
    }

    /// Validate and persist a place.
    ///
    /// Without a status the first one the journal allows is used. Without
    /// dates the suggested defaults are used; a start date alone makes a
    /// one-day place.
    pub fn execute(&self, journal_id: &str, input: NewPlace, today: NaiveDate) -> Result<Place> {
        let mut journal = self.repository.load_journal(journal_id)?;
        let constraints = journal.constraints(today);

        let status = match input.status {
            Some(status) => status,
            None => constraints.allowed_statuses()[0],
        };

        let suggested = suggest_default_dates(status, &constraints);
        let start_date = input.start_date.unwrap_or(suggested.start_date);
        let end_date = match (input.start_date, input.end_date) {
            (_, Some(end)) => end,
            (Some(start), None) => start,
            (None, None) => suggested.end_date,
        };
        debug!(%status, %start_date, %end_date, "validating new place");

        if let PlaceDateValidation::Invalid(reason) =
            validate_place_dates(start_date, end_date, status, &constraints)
        {
            return Err(TriplogError::InvalidPlaceDate(reason.to_string()));
        }

        let mut place = Place::new(&input.name, status, start_date, end_date)?;
        if let Some(rating) = input.rating {
            place = place.with_rating(rating)?;
        }
        if let Some(notes) = input.notes.as_deref() {
            place = place.with_notes(notes);
        }

        if journal
            .places
            .iter()
            .any(|existing| existing.name.eq_ignore_ascii_case(&place.name))
        {
            return Err(TriplogError::InvalidPlace(format!(
                "Journal '{}' already has a place named '{}'",
                journal.id, place.name
            )));
        }

        journal.places.push(place.clone());
        journal.sort_places();
        self.repository.save_journal(&journal)?;
        info!(journal = %journal.id, place = %place.name, %status, "added place");

        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{date, store_with_japan};
    use tempfile::TempDir;

    fn named(name: &str) -> NewPlace {
        NewPlace {
            name: name.to_string(),
            ..NewPlace::default()
        }
    }

    #[test]
    fn test_future_journal_defaults_to_planned_at_start() {
        let temp = TempDir::new().unwrap();
        let service = AddPlaceService::new(store_with_japan(&temp));

        let place = service
            .execute("japan", named("Kyoto"), date(2025, 1, 1))
            .unwrap();

        assert_eq!(place.status, PlaceStatus::Planned);
        assert_eq!(place.start_date, date(2025, 1, 10));
        assert_eq!(place.end_date, date(2025, 1, 10));
    }

    #[test]
    fn test_past_journal_defaults_to_visited() {
        let temp = TempDir::new().unwrap();
        let service = AddPlaceService::new(store_with_japan(&temp));

        let place = service
            .execute("japan", named("Kyoto"), date(2025, 2, 1))
            .unwrap();

        assert_eq!(place.status, PlaceStatus::Visited);
        assert_eq!(place.start_date, date(2025, 1, 10));
    }

    #[test]
    fn test_start_only_makes_single_day() {
        let temp = TempDir::new().unwrap();
        let service = AddPlaceService::new(store_with_japan(&temp));

        let input = NewPlace {
            start_date: Some(date(2025, 1, 13)),
            ..named("Nara")
        };
        let place = service.execute("japan", input, date(2025, 2, 1)).unwrap();

        assert!(place.is_single_day());
        assert_eq!(place.start_date, date(2025, 1, 13));
    }

    #[test]
    fn test_visited_on_future_journal_rejected() {
        let temp = TempDir::new().unwrap();
        let service = AddPlaceService::new(store_with_japan(&temp));

        let input = NewPlace {
            status: Some(PlaceStatus::Visited),
            start_date: Some(date(2025, 1, 12)),
            ..named("Kyoto")
        };
        let err = service
            .execute("japan", input, date(2025, 1, 1))
            .unwrap_err();

        match err {
            TriplogError::InvalidPlaceDate(msg) => {
                assert_eq!(msg, "Cannot mark places as visited for this journal")
            }
            other => panic!("Expected InvalidPlaceDate, got {:?}", other),
        }
    }

    #[test]
    fn test_planned_in_past_rejected_while_ongoing() {
        let temp = TempDir::new().unwrap();
        let repo = store_with_japan(&temp);
        let service = AddPlaceService::new(repo.clone());

        let input = NewPlace {
            status: Some(PlaceStatus::Planned),
            start_date: Some(date(2025, 1, 12)),
            ..named("Osaka")
        };
        let err = service
            .execute("japan", input, date(2025, 1, 15))
            .unwrap_err();

        assert!(err.to_string().contains("Date cannot be in the past"));
        assert!(repo.load_journal("japan").unwrap().places.is_empty());
    }

    #[test]
    fn test_range_and_details_saved() {
        let temp = TempDir::new().unwrap();
        let repo = store_with_japan(&temp);
        let service = AddPlaceService::new(repo.clone());

        let input = NewPlace {
            status: Some(PlaceStatus::Visited),
            start_date: Some(date(2025, 1, 11)),
            end_date: Some(date(2025, 1, 13)),
            rating: Some(5),
            notes: Some("Temples everywhere".to_string()),
            ..named("Kyoto")
        };
        service.execute("japan", input, date(2025, 1, 15)).unwrap();

        let saved = &repo.load_journal("japan").unwrap().places[0];
        assert_eq!(saved.end_date, date(2025, 1, 13));
        assert_eq!(saved.rating, Some(5));
        assert_eq!(saved.notes.as_deref(), Some("Temples everywhere"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let temp = TempDir::new().unwrap();
        let service = AddPlaceService::new(store_with_japan(&temp));
        let today = date(2025, 2, 1);

        service.execute("japan", named("Kyoto"), today).unwrap();
        let err = service
            .execute("japan", named("kyoto"), today)
            .unwrap_err();

        assert!(matches!(err, TriplogError::InvalidPlace(_)));
    }

    #[test]
    fn test_bad_rating_rejected() {
        let temp = TempDir::new().unwrap();
        let service = AddPlaceService::new(store_with_japan(&temp));

        let input = NewPlace {
            rating: Some(9),
            ..named("Kyoto")
        };
        let err = service
            .execute("japan", input, date(2025, 2, 1))
            .unwrap_err();
        assert!(matches!(err, TriplogError::InvalidPlace(_)));
    }
}
