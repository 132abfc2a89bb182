//! Scanner output types.
//!
//! These types represent extracted syllabus content in a source-agnostic way.
//! Whether the text came from a paste, an OCR pass, or a PDF extractor, the
//! scanners produce these records and the review layer works exclusively
//! with them.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// What kind of deliverable an assignment line describes.
///
/// Classified from an ordered keyword table (see `scan::assignments`);
/// the first matching entry wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssignmentType {
    #[default]
    Assignment,
    Reading,
    Exam,
    Quiz,
    Project,
    Paper,
    Lab,
    Homework,
    Discussion,
    Test,
    Presentation,
    Art,
    Other,
}

impl AssignmentType {
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentType::Assignment => "Assignment",
            AssignmentType::Reading => "Reading",
            AssignmentType::Exam => "Exam",
            AssignmentType::Quiz => "Quiz",
            AssignmentType::Project => "Project",
            AssignmentType::Paper => "Paper",
            AssignmentType::Lab => "Lab",
            AssignmentType::Homework => "Homework",
            AssignmentType::Discussion => "Discussion",
            AssignmentType::Test => "Test",
            AssignmentType::Presentation => "Presentation",
            AssignmentType::Art => "Art",
            AssignmentType::Other => "Other",
        }
    }
}

/// A start/end pair in 24-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One assignment candidate produced by the assignment-line scanner.
///
/// The scanner never emits a candidate without a resolvable `due_date`;
/// `None` appears only on manual drafts awaiting user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAssignment {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<TimeRange>,
    /// Caller-supplied course context, not discovered per-line.
    pub course_hint: Option<String>,
    pub assignment_type: AssignmentType,
    /// Zero-based line index of the triggering line, for traceability.
    pub source_line: Option<usize>,
}

/// A recurring weekly class meeting found by the schedule scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringClass {
    pub title: String,
    pub course_name: Option<String>,
    /// Weekday indices, Sunday = 0. Never empty when emitted.
    pub weekdays: BTreeSet<u8>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Default academic-term window; a heuristic meant to be edited
    /// by the user afterward.
    pub term_start: NaiveDate,
    pub term_end: NaiveDate,
}

/// Combined output of one parse invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub assignments: Vec<CandidateAssignment>,
    pub classes: Vec<RecurringClass>,
}

impl ParseOutcome {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty() && self.classes.is_empty()
    }
}
