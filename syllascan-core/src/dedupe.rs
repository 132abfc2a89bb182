//! Identity keys and duplicate filtering.
//!
//! Two records describe the same real-world assignment when course,
//! title, and due date all match after normalization, regardless of
//! superficial text differences. A partial match (same title, new
//! date) is a distinct assignment, not a duplicate.

use std::collections::HashSet;

use chrono::NaiveDate;

/// Anything that can derive an identity key: course + title + date,
/// case-insensitive and whitespace-collapsed.
pub trait Identity {
    fn identity_course(&self) -> Option<&str>;
    fn identity_title(&self) -> &str;
    fn identity_date(&self) -> Option<NaiveDate>;

    fn identity_key(&self) -> String {
        let date = self
            .identity_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        format!(
            "{}|{}|{}",
            normalize_component(self.identity_course().unwrap_or("")),
            normalize_component(self.identity_title()),
            date
        )
    }
}

/// Collapse runs of whitespace to single spaces and lowercase.
fn normalize_component(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Filter out candidates already present in `existing`.
///
/// A pure include-or-exclude filter: it never merges or mutates fields
/// of near-duplicates. Idempotent by construction: re-running against a
/// collection that already contains this call's output adds nothing.
pub fn dedupe_against_existing<T, E>(candidates: Vec<T>, existing: &[E]) -> Vec<T>
where
    T: Identity,
    E: Identity,
{
    let seen: HashSet<String> = existing.iter().map(Identity::identity_key).collect();
    candidates
        .into_iter()
        .filter(|candidate| !seen.contains(&candidate.identity_key()))
        .collect()
}
