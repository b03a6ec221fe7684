//! Domain layer - Travel date rules and journal models

pub mod constraints;
pub mod date_input;
pub mod journal;
pub mod place;
pub mod suggest;
pub mod travel_status;
pub mod validation;

pub use constraints::{format_date, DateConstraints, DateRange, TravelWindow};
pub use date_input::{parse_iso_date, resolve_date, DateInput, ISO_DATE_FORMAT};
pub use journal::{slug_for_title, Journal};
pub use place::{Place, PlaceStatus};
pub use suggest::{suggest_default_dates, SuggestedDates};
pub use travel_status::{resolve_travel_status, TravelStatus};
pub use validation::{validate_place_date, validate_place_dates, DateRejection, PlaceDateValidation};
