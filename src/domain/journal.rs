//! Journal aggregate root

use crate::domain::constraints::DateConstraints;
use crate::domain::place::Place;
use crate::domain::travel_status::{resolve_travel_status, TravelStatus};
use crate::error::{Result, TriplogError};
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn slug_separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Derive a journal id from its title ("Japan 2025!" -> "japan-2025")
pub fn slug_for_title(title: &str) -> String {
    let lower = title.trim().to_lowercase();
    let slug = slug_separator_regex().replace_all(&lower, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "journal".to_string()
    } else {
        slug.to_string()
    }
}

/// A trip with a date range and the places attached to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub public: bool,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub places: Vec<Place>,
}

impl Journal {
    /// Create a journal; the range must not end before it starts
    pub fn new(id: &str, title: &str, start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TriplogError::InvalidJournal(
                "Journal title cannot be empty".to_string(),
            ));
        }
        if end_date < start_date {
            return Err(TriplogError::InvalidJournal(format!(
                "End date {} is before start date {}",
                end_date, start_date
            )));
        }

        Ok(Journal {
            id: id.to_string(),
            title: title.to_string(),
            start_date,
            end_date,
            public: false,
            created: Utc::now(),
            places: Vec::new(),
        })
    }

    pub fn status(&self, today: NaiveDate) -> TravelStatus {
        resolve_travel_status(today, self.start_date, self.end_date)
    }

    pub fn constraints(&self, today: NaiveDate) -> DateConstraints {
        DateConstraints::compute(self.start_date, self.end_date, today)
    }

    /// Number of days covered, both ends included
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Index of a place by 1-based position or case-insensitive name
    pub fn find_place(&self, selector: &str) -> Option<usize> {
        let selector = selector.trim();

        if let Ok(position) = selector.parse::<usize>() {
            if position >= 1 && position <= self.places.len() {
                return Some(position - 1);
            }
        }

        let wanted = selector.to_lowercase();
        self.places
            .iter()
            .position(|place| place.name.to_lowercase() == wanted)
    }

    /// Keep places in chronological order
    pub fn sort_places(&mut self) {
        self.places
            .sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.name.cmp(&b.name)));
    }
}
