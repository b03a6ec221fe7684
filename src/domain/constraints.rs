//! Date constraints for places, derived from a journal's travel status

use crate::domain::place::PlaceStatus;
use crate::domain::travel_status::{resolve_travel_status, TravelStatus};
use crate::domain::date_input::ISO_DATE_FORMAT;
use chrono::NaiveDate;
use std::fmt::Write;

/// Render `date` with a strftime pattern. Patterns chrono cannot render for
/// a bare date (time or offset specifiers) fall back to YYYY-MM-DD.
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_ok() {
        return out;
    }
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Inclusive calendar-date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateRange {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        DateRange { min, max }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }
}

/// The ranges each travel status allows. A status with no range for a place
/// status has no field for it at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelWindow {
    Future { planned: DateRange },
    Ongoing { visited: DateRange, planned: DateRange },
    Past { visited: DateRange },
}

/// Legal place statuses and date ranges for a journal on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateConstraints {
    /// The day these constraints were computed for
    pub today: NaiveDate,
    pub window: TravelWindow,
}

const PLANNED_ONLY: &[PlaceStatus] = &[PlaceStatus::Planned];
const VISITED_ONLY: &[PlaceStatus] = &[PlaceStatus::Visited];
const BOTH: &[PlaceStatus] = &[PlaceStatus::Visited, PlaceStatus::Planned];

impl DateConstraints {
    /// Compute constraints for a journal running `journal_start..=journal_end`.
    ///
    /// On an ongoing journal `today` bounds both ranges, so a place dated
    /// today can be either visited or planned.
    pub fn compute(journal_start: NaiveDate, journal_end: NaiveDate, today: NaiveDate) -> Self {
        debug_assert!(journal_start <= journal_end);

        let window = match resolve_travel_status(today, journal_start, journal_end) {
            TravelStatus::Future => TravelWindow::Future {
                planned: DateRange::new(journal_start, journal_end),
            },
            TravelStatus::Ongoing => TravelWindow::Ongoing {
                visited: DateRange::new(journal_start, today),
                planned: DateRange::new(today, journal_end),
            },
            TravelStatus::Past => TravelWindow::Past {
                visited: DateRange::new(journal_start, journal_end),
            },
        };

        DateConstraints { today, window }
    }

    pub fn status(&self) -> TravelStatus {
        match self.window {
            TravelWindow::Future { .. } => TravelStatus::Future,
            TravelWindow::Ongoing { .. } => TravelStatus::Ongoing,
            TravelWindow::Past { .. } => TravelStatus::Past,
        }
    }

    /// Place statuses that may be used, visited first
    pub fn allowed_statuses(&self) -> &'static [PlaceStatus] {
        match self.window {
            TravelWindow::Future { .. } => PLANNED_ONLY,
            TravelWindow::Ongoing { .. } => BOTH,
            TravelWindow::Past { .. } => VISITED_ONLY,
        }
    }

    pub fn allows(&self, status: PlaceStatus) -> bool {
        self.allowed_statuses().contains(&status)
    }

    pub fn visited_range(&self) -> Option<DateRange> {
        match self.window {
            TravelWindow::Future { .. } => None,
            TravelWindow::Ongoing { visited, .. } | TravelWindow::Past { visited } => Some(visited),
        }
    }

    pub fn planned_range(&self) -> Option<DateRange> {
        match self.window {
            TravelWindow::Future { planned } | TravelWindow::Ongoing { planned, .. } => Some(planned),
            TravelWindow::Past { .. } => None,
        }
    }

    pub fn range_for(&self, status: PlaceStatus) -> Option<DateRange> {
        match status {
            PlaceStatus::Visited => self.visited_range(),
            PlaceStatus::Planned => self.planned_range(),
        }
    }

    /// Sentence explaining what can be added to the journal right now
    pub fn info_message(&self, date_format: &str) -> String {
        let fmt = |d: NaiveDate| format_date(d, date_format);

        match self.window {
            TravelWindow::Future { planned } => format!(
                "This trip starts on {}. You can plan places between {} and {}.",
                fmt(planned.min),
                fmt(planned.min),
                fmt(planned.max)
            ),
            TravelWindow::Ongoing { visited, planned } => format!(
                "This trip is in progress. You can add visited places from {} to {} \
                and plan places from {} to {}.",
                fmt(visited.min),
                fmt(visited.max),
                fmt(planned.min),
                fmt(planned.max)
            ),
            TravelWindow::Past { visited } => format!(
                "This trip ended on {}. You can add visited places between {} and {}.",
                fmt(visited.max),
                fmt(visited.min),
                fmt(visited.max)
            ),
        }
    }

    /// Short hint shown next to the date fields
    pub fn helper_text(&self, date_format: &str) -> String {
        let fmt = |d: NaiveDate| format_date(d, date_format);

        match self.window {
            TravelWindow::Future { planned } => {
                format!("Planned: {} to {}", fmt(planned.min), fmt(planned.max))
            }
            TravelWindow::Ongoing { visited, planned } => format!(
                "Visited: {} to {}; planned: {} to {}",
                fmt(visited.min),
                fmt(visited.max),
                fmt(planned.min),
                fmt(planned.max)
            ),
            TravelWindow::Past { visited } => {
                format!("Visited: {} to {}", fmt(visited.min), fmt(visited.max))
            }
        }
    }
}
