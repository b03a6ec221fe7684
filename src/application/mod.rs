//! Application layer - Use cases and orchestration

pub mod add_place;
pub mod check_date;
pub mod create_journal;
pub mod init;
pub mod journal_status;
pub mod list_journals;
pub mod list_places;
pub mod manage_config;
pub mod toggle_place;

pub use add_place::{AddPlaceService, NewPlace};
pub use check_date::CheckDateService;
pub use create_journal::CreateJournalService;
pub use journal_status::{JournalStatusReport, JournalStatusService};
pub use list_journals::{JournalSummary, ListJournalsService};
pub use list_places::ListPlacesService;
pub use manage_config::ConfigService;
pub use toggle_place::{ToggleOutcome, TogglePlaceService};
