//! Places attached to a journal

use crate::error::{Result, TriplogError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a place has been visited or is still planned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceStatus {
    Visited,
    Planned,
}

impl PlaceStatus {
    /// Map the visited/planned toggle to a status
    pub fn from_visited_flag(is_visited: bool) -> Self {
        if is_visited {
            PlaceStatus::Visited
        } else {
            PlaceStatus::Planned
        }
    }

    pub fn is_visited(&self) -> bool {
        matches!(self, PlaceStatus::Visited)
    }

    /// The other status
    pub fn toggled(&self) -> Self {
        match self {
            PlaceStatus::Visited => PlaceStatus::Planned,
            PlaceStatus::Planned => PlaceStatus::Visited,
        }
    }
}

impl fmt::Display for PlaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceStatus::Visited => f.write_str("visited"),
            PlaceStatus::Planned => f.write_str("planned"),
        }
    }
}

impl FromStr for PlaceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visited" => Ok(PlaceStatus::Visited),
            "planned" => Ok(PlaceStatus::Planned),
            _ => Err(format!(
                "Invalid place status: {}. Valid statuses: visited, planned",
                s
            )),
        }
    }
}

/// A point of interest within a journal.
///
/// A one-day visit has `start_date == end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub status: PlaceStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Place {
    pub fn new(
        name: &str,
        status: PlaceStatus,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TriplogError::InvalidPlace(
                "Place name cannot be empty".to_string(),
            ));
        }

        Ok(Place {
            name: name.to_string(),
            status,
            start_date,
            end_date,
            rating: None,
            notes: None,
        })
    }

    /// Attach a 1-5 rating
    pub fn with_rating(mut self, rating: u8) -> Result<Self> {
        if !(1..=5).contains(&rating) {
            return Err(TriplogError::InvalidPlace(format!(
                "Rating must be between 1 and 5, got {}",
                rating
            )));
        }
        self.rating = Some(rating);
        Ok(self)
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        let notes = notes.trim();
        self.notes = if notes.is_empty() {
            None
        } else {
            Some(notes.to_string())
        };
        self
    }

    pub fn is_single_day(&self) -> bool {
        self.start_date == self.end_date
    }
}
