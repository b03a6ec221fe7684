//! Default dates offered when a place's status changes

use crate::domain::constraints::DateConstraints;
use crate::domain::place::PlaceStatus;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedDates {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Earliest legal date for `status`, used for both start and end.
///
/// Falls back to the constraints' `today` when the status has no range.
/// This is only a suggestion; validation still decides.
pub fn suggest_default_dates(status: PlaceStatus, constraints: &DateConstraints) -> SuggestedDates {
    let date = constraints
        .range_for(status)
        .map(|range| range.min)
        .unwrap_or(constraints.today);

    SuggestedDates {
        start_date: date,
        end_date: date,
    }
}
