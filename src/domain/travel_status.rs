//! Travel status resolution

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a journal's date range sits relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStatus {
    /// The journal has not started yet
    Future,
    /// Today falls inside the journal's range (bounds included)
    Ongoing,
    /// The journal has ended
    Past,
}

/// Classify a journal's range against `today`.
///
/// Assumes `journal_start <= journal_end`. The result is a snapshot: callers
/// capture `today` once and recompute when the day changes.
pub fn resolve_travel_status(
    today: NaiveDate,
    journal_start: NaiveDate,
    journal_end: NaiveDate,
) -> TravelStatus {
    if today < journal_start {
        TravelStatus::Future
    } else if today > journal_end {
        TravelStatus::Past
    } else {
        TravelStatus::Ongoing
    }
}

impl fmt::Display for TravelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TravelStatus::Future => "future",
            TravelStatus::Ongoing => "ongoing",
            TravelStatus::Past => "past",
        };
        f.write_str(name)
    }
}

impl FromStr for TravelStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "future" | "upcoming" => Ok(TravelStatus::Future),
            "ongoing" | "current" => Ok(TravelStatus::Ongoing),
            "past" => Ok(TravelStatus::Past),
            _ => Err(format!(
                "Invalid travel status: {}. Valid statuses: future, ongoing, past",
                s
            )),
        }
    }
}
