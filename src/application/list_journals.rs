//! List journals use case

use crate::domain::{Journal, TravelStatus};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;

/// A journal together with its status on the day it was listed
#[derive(Debug, Clone)]
pub struct JournalSummary {
    pub journal: Journal,
    pub status: TravelStatus,
}

/// Service for listing journals
pub struct ListJournalsService {
    repository: FileSystemRepository,
}

impl ListJournalsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListJournalsService { repository }
    }

    /// Journals sorted by start date, newest first, optionally limited to
    /// one travel status
    pub fn execute(
        &self,
        today: NaiveDate,
        filter: Option<TravelStatus>,
    ) -> Result<Vec<JournalSummary>> {
        let mut summaries: Vec<JournalSummary> = self
            .repository
            .list_journals()?
            .into_iter()
            .map(|journal| JournalSummary {
                status: journal.status(today),
                journal,
            })
            .filter(|summary| filter.is_none_or(|wanted| summary.status == wanted))
            .collect();

        summaries.sort_by(|a, b| {
            b.journal
                .start_date
                .cmp(&a.journal.start_date)
                .then_with(|| a.journal.id.cmp(&b.journal.id))
        });

        Ok(summaries)
    }
}
