//! Recurring class-schedule scanning.
//!
//! Finds weekly meeting patterns of the form "MWF 10:00-11:30 AM" and
//! emits recurring-event records with a default academic-term window.
//! The window is a heuristic the user is expected to edit afterward.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::record::RecurringClass;
use crate::times::find_time_range;
use crate::weekdays::parse_weekdays;

// A weekday-cluster token immediately followed by a time range. The
// cluster must consist entirely of day letters so that ordinary words
// before a time ("from 10:00-11:00") don't match.
static RE_SCHEDULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b((?:th|tu|sa|su|[mtwrf])+)\s+(\d{1,2}:\d{2}\s*(?:am|pm)?\s*(?:-|–|—|to)+\s*\d{1,2}:\d{2}\s*(?:am|pm)?)",
    )
    .unwrap()
});

/// Scan syllabus text for recurring weekly meeting lines.
///
/// `reference` anchors the default term window (no ambient clock): a
/// reference month of August or later implies a Fall term, anything
/// earlier a Spring term. Multiple matches on one line are all emitted.
pub fn scan_schedule(
    text: &str,
    course_hint: Option<&str>,
    reference: NaiveDate,
) -> Vec<RecurringClass> {
    let (term_start, term_end) = default_term_window(reference);
    let mut out = Vec::new();

    for line in text.lines() {
        for caps in RE_SCHEDULE.captures_iter(line) {
            let weekdays = parse_weekdays(&caps[1]);
            if weekdays.is_empty() {
                continue;
            }
            let Some(range) = find_time_range(&caps[2]) else {
                continue;
            };

            let cluster_start = caps.get(1).map(|m| m.start()).unwrap_or(0);
            let title = line_label(line, cluster_start)
                .or_else(|| course_hint.map(str::to_string))
                .unwrap_or_else(|| "Class".to_string());

            out.push(RecurringClass {
                title,
                course_name: course_hint.map(str::to_string),
                weekdays,
                start_time: range.start,
                end_time: range.end,
                term_start,
                term_end,
            });
        }
    }

    out
}

/// Mid-August to mid-December for Fall, mid-January to mid-May for Spring.
fn default_term_window(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let year = reference.year();
    if reference.month() >= 8 {
        (
            NaiveDate::from_ymd_opt(year, 8, 15).unwrap(),
            NaiveDate::from_ymd_opt(year, 12, 15).unwrap(),
        )
    } else {
        (
            NaiveDate::from_ymd_opt(year, 1, 15).unwrap(),
            NaiveDate::from_ymd_opt(year, 5, 15).unwrap(),
        )
    }
}

/// A "<label>:" prefix earlier in the line, e.g. "Lecture: MWF 10:00...".
fn line_label(line: &str, before: usize) -> Option<String> {
    let prefix = line.get(..before)?;
    let (label, _) = prefix.split_once(':')?;
    let label = label.trim().trim_start_matches(['-', '*', '•']).trim();
    (!label.is_empty()).then(|| label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn fall_reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn set(days: &[u8]) -> BTreeSet<u8> {
        days.iter().copied().collect()
    }

    #[test]
    fn test_recurring_class_line() {
        let classes = scan_schedule("MWF 10:00-11:30 AM", None, fall_reference());
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].weekdays, set(&[1, 3, 5]));
        assert_eq!(
            classes[0].start_time,
            chrono::NaiveTime::from_hms_opt(10, 0, 0).unwrap()
        );
        assert_eq!(
            classes[0].end_time,
            chrono::NaiveTime::from_hms_opt(11, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_tuth_cluster() {
        let classes = scan_schedule("Seminar: TuTh 2:00 PM - 3:15 PM", None, fall_reference());
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].weekdays, set(&[2, 4]));
        assert_eq!(classes[0].title, "Seminar");
    }

    #[test]
    fn test_title_falls_back_to_course_hint() {
        let classes = scan_schedule("MW 9:00-9:50 AM", Some("CHEM 201"), fall_reference());
        assert_eq!(classes[0].title, "CHEM 201");
        assert_eq!(classes[0].course_name.as_deref(), Some("CHEM 201"));
    }

    #[test]
    fn test_title_falls_back_to_class() {
        let classes = scan_schedule("TR 1:00-2:15 PM", None, fall_reference());
        assert_eq!(classes[0].title, "Class");
    }

    #[test]
    fn test_fall_term_window() {
        let classes = scan_schedule("MWF 10:00-11:30 AM", None, fall_reference());
        assert_eq!(
            classes[0].term_start,
            NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
        );
        assert_eq!(
            classes[0].term_end,
            NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
        );
    }

    #[test]
    fn test_spring_term_window() {
        let spring = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let classes = scan_schedule("MWF 10:00-11:30 AM", None, spring);
        assert_eq!(
            classes[0].term_start,
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
        assert_eq!(
            classes[0].term_end,
            NaiveDate::from_ymd_opt(2026, 5, 15).unwrap()
        );
    }

    #[test]
    fn test_time_range_without_days_is_skipped() {
        let classes = scan_schedule("Office hours from 10:00-11:00", None, fall_reference());
        assert!(classes.is_empty());
    }

    #[test]
    fn test_plain_text_yields_nothing() {
        let classes = scan_schedule("Welcome to the course!", None, fall_reference());
        assert!(classes.is_empty());
    }
}
