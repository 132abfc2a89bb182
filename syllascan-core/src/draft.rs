//! Review drafts: scanner output promoted to user-editable state.
//!
//! A `Draft` carries every field the review UI can edit, tagged with
//! its originating kind so assignments and recurring classes render
//! different field sets. The id is random and purely a UI list key;
//! it carries no semantic meaning and is discarded on commit.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dedupe::Identity;
use crate::error::SyllascanResult;
use crate::record::{
    AssignmentType, CandidateAssignment, ParseOutcome, RecurringClass, TimeRange,
};

/// Which scanner a draft originated from (or "assignment" for manual ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftKind {
    #[serde(rename = "assignment")]
    Assignment,
    #[serde(rename = "recurring-class")]
    RecurringClass,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub id: Uuid,
    pub kind: DraftKind,
    pub title: String,
    pub description: Option<String>,
    pub course: Option<String>,

    // Assignment fields
    /// `None` only on manual drafts awaiting user input.
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<TimeRange>,
    pub assignment_type: Option<AssignmentType>,

    // Recurring-class fields
    pub weekdays: Option<BTreeSet<u8>>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub term_start: Option<NaiveDate>,
    pub term_end: Option<NaiveDate>,
}

impl Draft {
    pub fn from_assignment(record: CandidateAssignment) -> Self {
        Draft {
            id: Uuid::new_v4(),
            kind: DraftKind::Assignment,
            title: record.title,
            description: record.description,
            course: record.course_hint,
            due_date: record.due_date,
            due_time: record.due_time,
            assignment_type: Some(record.assignment_type),
            weekdays: None,
            start_time: None,
            end_time: None,
            term_start: None,
            term_end: None,
        }
    }

    pub fn from_class(record: RecurringClass) -> Self {
        Draft {
            id: Uuid::new_v4(),
            kind: DraftKind::RecurringClass,
            title: record.title,
            description: None,
            course: record.course_name,
            due_date: None,
            due_time: None,
            assignment_type: None,
            weekdays: Some(record.weekdays),
            start_time: Some(record.start_time),
            end_time: Some(record.end_time),
            term_start: Some(record.term_start),
            term_end: Some(record.term_end),
        }
    }

    /// A user-created draft with no date yet. Blank titles get a
    /// placeholder so a draft is never nameless in the review list.
    pub fn manual(title: &str) -> Self {
        let title = title.trim();
        Draft {
            id: Uuid::new_v4(),
            kind: DraftKind::Assignment,
            title: if title.is_empty() {
                "Untitled Assignment".to_string()
            } else {
                title.to_string()
            },
            description: None,
            course: None,
            due_date: None,
            due_time: None,
            assignment_type: Some(AssignmentType::Assignment),
            weekdays: None,
            start_time: None,
            end_time: None,
            term_start: None,
            term_end: None,
        }
    }
}

impl Identity for Draft {
    fn identity_course(&self) -> Option<&str> {
        self.course.as_deref()
    }

    fn identity_title(&self) -> &str {
        &self.title
    }

    fn identity_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

impl Identity for CandidateAssignment {
    fn identity_course(&self) -> Option<&str> {
        self.course_hint.as_deref()
    }

    fn identity_title(&self) -> &str {
        &self.title
    }

    fn identity_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

/// Parse a JSON array of drafts, as produced by `drafts_to_json`.
pub fn drafts_from_json(data: &str) -> SyllascanResult<Vec<Draft>> {
    Ok(serde_json::from_str(data)?)
}

/// Serialize a draft list for hand-off to the review layer.
pub fn drafts_to_json(drafts: &[Draft]) -> SyllascanResult<String> {
    Ok(serde_json::to_string_pretty(drafts)?)
}

/// Merge both scanner outputs into one reviewable draft list.
pub fn assemble_drafts(outcome: ParseOutcome) -> Vec<Draft> {
    outcome
        .assignments
        .into_iter()
        .map(Draft::from_assignment)
        .chain(outcome.classes.into_iter().map(Draft::from_class))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_text;

    #[test]
    fn test_assemble_tags_kinds() {
        let reference = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let text = "Homework 1 due 9/15\n\nLecture: MWF 10:00-11:30 AM";
        let outcome = parse_text(text, Some("BIO 101"), reference).unwrap();
        let drafts = assemble_drafts(outcome);

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].kind, DraftKind::Assignment);
        assert!(drafts[0].due_date.is_some());
        assert_eq!(drafts[1].kind, DraftKind::RecurringClass);
        assert!(drafts[1].weekdays.is_some());
    }

    #[test]
    fn test_draft_ids_are_unique() {
        let a = Draft::manual("A");
        let b = Draft::manual("B");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_manual_draft_defaults() {
        let draft = Draft::manual("   ");
        assert_eq!(draft.title, "Untitled Assignment");
        assert_eq!(draft.due_date, None);
        assert_eq!(draft.kind, DraftKind::Assignment);
    }

    #[test]
    fn test_draft_json_round_trip() {
        let drafts = vec![Draft::manual("Essay draft")];
        let json = drafts_to_json(&drafts).unwrap();
        let back = drafts_from_json(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].id, drafts[0].id);
        assert_eq!(back[0].title, "Essay draft");
    }

    #[test]
    fn test_drafts_from_json_rejects_garbage() {
        assert!(drafts_from_json("not json").is_err());
    }

    #[test]
    fn test_kind_serde_tags() {
        let json = serde_json::to_string(&DraftKind::RecurringClass).unwrap();
        assert_eq!(json, "\"recurring-class\"");
        let json = serde_json::to_string(&DraftKind::Assignment).unwrap();
        assert_eq!(json, "\"assignment\"");
    }
}
