//! Output formatting utilities

use crate::application::{JournalStatusReport, JournalSummary};
use crate::domain::{DateRange, Place, PlaceStatus, ISO_DATE_FORMAT};

/// Format journals for `list`
pub fn format_journal_list(summaries: &[JournalSummary]) -> String {
    if summaries.is_empty() {
        return "No journals found".to_string();
    }

    let mut output = String::new();
    for summary in summaries {
        let journal = &summary.journal;
        output.push_str(&format!(
            "{}  {}  {:<8} {} ({} place{}){}\n",
            journal.start_date.format(ISO_DATE_FORMAT),
            journal.end_date.format(ISO_DATE_FORMAT),
            summary.status.to_string(),
            journal.id,
            journal.places.len(),
            if journal.places.len() == 1 { "" } else { "s" },
            if journal.public { " [public]" } else { "" }
        ));
    }
    output
}

fn format_range(range: Option<DateRange>) -> String {
    match range {
        Some(range) => format!(
            "{} to {}",
            range.min.format(ISO_DATE_FORMAT),
            range.max.format(ISO_DATE_FORMAT)
        ),
        None => "not allowed".to_string(),
    }
}

/// Format the constraint report for `status`
pub fn format_status_report(report: &JournalStatusReport) -> String {
    let constraints = &report.constraints;
    let allowed: Vec<String> = constraints
        .allowed_statuses()
        .iter()
        .map(|status| status.to_string())
        .collect();

    format!(
        "{} ({})\n\
        status:  {}\n\
        allowed: {}\n\
        visited: {}\n\
        planned: {}\n\n\
        {}\n\
        {}\n",
        report.journal.title,
        report.journal.id,
        constraints.status(),
        allowed.join(", "),
        format_range(constraints.range_for(PlaceStatus::Visited)),
        format_range(constraints.range_for(PlaceStatus::Planned)),
        report.info_message,
        report.helper_text
    )
}

/// Format places for `places`, numbered from 1
pub fn format_place_list(places: &[Place]) -> String {
    if places.is_empty() {
        return "No places found".to_string();
    }

    let mut output = String::new();
    for (idx, place) in places.iter().enumerate() {
        let dates = if place.is_single_day() {
            place.start_date.format(ISO_DATE_FORMAT).to_string()
        } else {
            format!(
                "{}..{}",
                place.start_date.format(ISO_DATE_FORMAT),
                place.end_date.format(ISO_DATE_FORMAT)
            )
        };
        let rating = place
            .rating
            .map(|r| format!("  {}", "*".repeat(r as usize)))
            .unwrap_or_default();

        output.push_str(&format!(
            "{:>2}. [{}] {}  {}{}\n",
            idx + 1,
            place.status,
            dates,
            place.name,
            rating
        ));
        if let Some(notes) = &place.notes {
            output.push_str(&format!("      {}\n", notes));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Journal, TravelStatus};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_empty_journal_list() {
        assert_eq!(format_journal_list(&[]), "No journals found");
    }

    #[test]
    fn test_format_journal_list() {
        let mut journal = Journal::new("japan", "Japan", date(2025, 1, 10), date(2025, 1, 20)).unwrap();
        journal.public = true;
        let summaries = vec![JournalSummary {
            journal,
            status: TravelStatus::Ongoing,
        }];

        let output = format_journal_list(&summaries);
        assert_eq!(
            output,
            "2025-01-10  2025-01-20  ongoing  japan (0 places) [public]\n"
        );
    }

    #[test]
    fn test_format_place_list() {
        let places = vec![
            Place::new("Kyoto", PlaceStatus::Visited, date(2025, 1, 11), date(2025, 1, 13))
                .unwrap()
                .with_rating(3)
                .unwrap()
                .with_notes("Temples"),
            Place::new("Osaka", PlaceStatus::Planned, date(2025, 1, 18), date(2025, 1, 18)).unwrap(),
        ];

        let output = format_place_list(&places);
        assert!(output.contains(" 1. [visited] 2025-01-11..2025-01-13  Kyoto  ***\n"));
        assert!(output.contains("      Temples\n"));
        assert!(output.contains(" 2. [planned] 2025-01-18  Osaka\n"));
    }

    #[test]
    fn test_format_empty_place_list() {
        assert_eq!(format_place_list(&[]), "No places found");
    }

    #[test]
    fn test_format_status_report_for_future() {
        let journal = Journal::new("japan", "Japan", date(2025, 1, 10), date(2025, 1, 20)).unwrap();
        let constraints = journal.constraints(date(2025, 1, 1));
        let report = JournalStatusReport {
            info_message: constraints.info_message("%Y-%m-%d"),
            helper_text: constraints.helper_text("%Y-%m-%d"),
            journal,
            constraints,
        };

        let output = format_status_report(&report);
        assert!(output.contains("status:  future"));
        assert!(output.contains("allowed: planned"));
        assert!(output.contains("visited: not allowed"));
        assert!(output.contains("planned: 2025-01-10 to 2025-01-20"));
    }
}
