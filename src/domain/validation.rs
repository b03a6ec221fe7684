//! Place date validation against journal constraints
//!
//! Failures are returned as values so callers can show them next to the
//! offending field instead of aborting.

use crate::domain::constraints::DateConstraints;
use crate::domain::place::PlaceStatus;
use chrono::NaiveDate;
use std::fmt;

/// Why a place date was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRejection {
    /// The journal's travel status does not allow this place status
    StatusNotAllowed(PlaceStatus),
    /// No range exists for this place status
    ConstraintsMissing(PlaceStatus),
    /// The date falls before the range minimum
    TooEarly(PlaceStatus),
    /// The date falls after the range maximum
    TooLate(PlaceStatus),
    /// A multi-day place ends before it starts
    EndBeforeStart,
}

impl fmt::Display for DateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DateRejection::StatusNotAllowed(PlaceStatus::Visited) => {
                "Cannot mark places as visited for this journal"
            }
            DateRejection::StatusNotAllowed(PlaceStatus::Planned) => {
                "Cannot plan new places for this journal"
            }
            DateRejection::ConstraintsMissing(_) => {
                "Date constraints are not defined for this place status"
            }
            DateRejection::TooEarly(PlaceStatus::Visited) => {
                "Date cannot be before the journal start date"
            }
            DateRejection::TooEarly(PlaceStatus::Planned) => "Date cannot be in the past",
            DateRejection::TooLate(PlaceStatus::Visited) => {
                "Date cannot be after the journal end date or today"
            }
            DateRejection::TooLate(PlaceStatus::Planned) => {
                "Date cannot be after the journal end date"
            }
            DateRejection::EndBeforeStart => "End date cannot be before the start date",
        };
        f.write_str(msg)
    }
}

/// Outcome of validating a place date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceDateValidation {
    Valid,
    Invalid(DateRejection),
}

impl PlaceDateValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, PlaceDateValidation::Valid)
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            PlaceDateValidation::Valid => None,
            PlaceDateValidation::Invalid(reason) => Some(reason.to_string()),
        }
    }
}

/// Check a single date for a place with the given status
pub fn validate_place_date(
    candidate: NaiveDate,
    status: PlaceStatus,
    constraints: &DateConstraints,
) -> PlaceDateValidation {
    if !constraints.allows(status) {
        return PlaceDateValidation::Invalid(DateRejection::StatusNotAllowed(status));
    }

    let Some(range) = constraints.range_for(status) else {
        return PlaceDateValidation::Invalid(DateRejection::ConstraintsMissing(status));
    };

    if candidate < range.min {
        PlaceDateValidation::Invalid(DateRejection::TooEarly(status))
    } else if candidate > range.max {
        PlaceDateValidation::Invalid(DateRejection::TooLate(status))
    } else {
        PlaceDateValidation::Valid
    }
}

/// Check a start/end pair; both ends must be legal and in order
pub fn validate_place_dates(
    start: NaiveDate,
    end: NaiveDate,
    status: PlaceStatus,
    constraints: &DateConstraints,
) -> PlaceDateValidation {
    for date in [start, end] {
        let result = validate_place_date(date, status, constraints);
        if !result.is_valid() {
            return result;
        }
    }

    if end < start {
        return PlaceDateValidation::Invalid(DateRejection::EndBeforeStart);
    }

    PlaceDateValidation::Valid
}
