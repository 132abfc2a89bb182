//! Assignment-line scanning.
//!
//! Walks syllabus text line by line looking for assignment-indicating
//! keywords, then tries to attach a due date (and optionally a time
//! range) found within a small lookahead window. Lines that never
//! resolve to a date are dropped: an assignment keyword without a due
//! date is not actionable. The whole pass is best-effort; skipping most
//! lines is the normal case, not a failure.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::dates::{contains_date, normalize_date};
use crate::record::{AssignmentType, CandidateAssignment};
use crate::times::find_time_range;

/// How many lines past the triggering line to search for a date/time.
const LOOKAHEAD_LINES: usize = 2;

/// Longest title emitted before truncation kicks in.
const MAX_TITLE_LEN: usize = 100;

/// Ordered keyword table: the first entry whose keyword appears in the
/// line decides the assignment type. Keyword matching is substring,
/// case-insensitive. Order is deliberate: specific deliverables
/// (reading, exam, quiz...) are tried before the generic "assignment".
const KEYWORD_TABLE: &[(AssignmentType, &[&str])] = &[
    (AssignmentType::Reading, &["reading"]),
    (AssignmentType::Exam, &["exam", "midterm", "final"]),
    (AssignmentType::Test, &["test"]),
    (AssignmentType::Project, &["project"]),
    (AssignmentType::Paper, &["paper", "essay"]),
    (AssignmentType::Quiz, &["quiz"]),
    (AssignmentType::Lab, &["lab", "laboratory"]),
    (AssignmentType::Homework, &["homework", "hw", "problem set"]),
    (AssignmentType::Assignment, &["assignment"]),
    (AssignmentType::Discussion, &["discussion"]),
    (AssignmentType::Presentation, &["presentation"]),
    (AssignmentType::Art, &["art"]),
];

// Leading bullet/numbering markers ("- ", "* ", "3.", "(2)") and a
// leading "due:" label are noise, not title content.
static RE_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*•‣◦]+|\(?\d{1,3}[.)])\s*").unwrap());
static RE_DUE_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^due\s*:\s*").unwrap());

/// Scan syllabus text for assignment lines.
///
/// `course_hint` is propagated onto every emitted record; it is caller
/// context, never discovered from the text. `reference` anchors
/// year-less date resolution.
pub fn scan_assignments(
    text: &str,
    course_hint: Option<&str>,
    reference: NaiveDate,
) -> Vec<CandidateAssignment> {
    let lines: Vec<&str> = text.lines().collect();
    let mut out = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some(assignment_type) = classify(trimmed) else {
            continue;
        };

        // Search the triggering line plus the next LOOKAHEAD_LINES for a
        // date; the first match wins and the search stops there.
        let window_end = (i + LOOKAHEAD_LINES + 1).min(lines.len());
        let window = &lines[i..window_end];
        let Some(due_date) = window.iter().find_map(|l| normalize_date(l, reference)) else {
            continue;
        };
        let due_time = window.iter().find_map(|l| find_time_range(l));

        // Opportunistic description: the very next line, unless it is
        // itself a date line.
        let description = lines
            .get(i + 1)
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && !contains_date(l))
            .map(str::to_string);

        out.push(CandidateAssignment {
            title: extract_title(trimmed),
            description,
            due_date: Some(due_date),
            due_time,
            course_hint: course_hint.map(str::to_string),
            assignment_type,
            source_line: Some(i),
        });
    }

    out
}

/// Classify a line against the keyword table; `None` means the line is
/// not an assignment line at all.
fn classify(line: &str) -> Option<AssignmentType> {
    let lower = line.to_lowercase();
    KEYWORD_TABLE.iter().find_map(|(ty, keywords)| {
        keywords
            .iter()
            .any(|keyword| lower.contains(keyword))
            .then_some(*ty)
    })
}

/// Strip leading markers and bound the title length.
fn extract_title(line: &str) -> String {
    let stripped = RE_BULLET.replace(line, "");
    let stripped = RE_DUE_LABEL.replace(&stripped, "");
    truncate_title(stripped.trim())
}

/// Titles longer than the bound are cut at the last sentence-ending
/// period inside it, or hard-truncated with an ellipsis.
fn truncate_title(title: &str) -> String {
    if title.chars().count() <= MAX_TITLE_LEN {
        return title.to_string();
    }
    let bounded: String = title.chars().take(MAX_TITLE_LEN).collect();
    match bounded.rfind('.') {
        Some(ix) if ix > 0 => bounded[..=ix].trim_end().to_string(),
        _ => format!("{}…", bounded.trim_end()),
    }
}
