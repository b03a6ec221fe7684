//! Date argument parsing and resolution

use crate::error::{Result, TriplogError};
use chrono::{Duration, NaiveDate};

/// Format used for dates at every boundary (arguments, files, output)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A date as typed by the user, resolved against a base day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    Today,
    Yesterday,
    Tomorrow,
    /// Signed number of days from the base day (`+3`, `-2`)
    Offset(i64),
    /// Calendar date in YYYY-MM-DD form
    Specific(NaiveDate),
}

impl DateInput {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateInput::Today),
            "yesterday" => Ok(DateInput::Yesterday),
            "tomorrow" => Ok(DateInput::Tomorrow),
            _ if normalized.starts_with('+') || normalized.starts_with('-') => normalized
                .parse::<i64>()
                .ok()
                .filter(|days| days.abs() <= 36_500)
                .map(DateInput::Offset)
                .ok_or_else(|| TriplogError::InvalidDate(input.to_string())),
            _ => parse_iso_date(&normalized).map(DateInput::Specific),
        }
    }

    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DateInput::Today => base_date,
            DateInput::Yesterday => base_date - Duration::days(1),
            DateInput::Tomorrow => base_date + Duration::days(1),
            DateInput::Offset(days) => base_date + Duration::days(*days),
            DateInput::Specific(date) => *date,
        }
    }
}

/// Parse and resolve in one step
pub fn resolve_date(input: &str, base_date: NaiveDate) -> Result<NaiveDate> {
    DateInput::parse(input).map(|parsed| parsed.resolve(base_date))
}

/// Strict YYYY-MM-DD parsing (zero-padded, fixed width)
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.len() != 10 {
        return Err(TriplogError::InvalidDate(input.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map_err(|_| TriplogError::InvalidDate(input.to_string()))
}
