//! Top-level parse entry point.

use chrono::NaiveDate;

use crate::error::{SyllascanError, SyllascanResult};
use crate::record::ParseOutcome;
use crate::scan::{scan_assignments, scan_schedule};

/// Upper bound on accepted input. Syllabi are a few pages of text; an
/// input this large indicates a caller bug (wrong file funneled in),
/// which per the error-handling contract fails fast instead of being
/// silently scanned.
const MAX_INPUT_BYTES: usize = 2 * 1024 * 1024;

/// Parse syllabus text into assignment and recurring-class candidates.
///
/// The text's provenance (paste, OCR, PDF extraction) is irrelevant
/// here; anything reduced to plain lines goes through the same
/// scanners. `reference` anchors year-less date resolution and the
/// default term window, keeping the whole call deterministic.
///
/// Unparseable lines are skipped silently; an empty outcome is a
/// normal result, not an error. Only boundary-contract violations
/// (oversized or binary input) return `Err`.
pub fn parse_text(
    text: &str,
    course_hint: Option<&str>,
    reference: NaiveDate,
) -> SyllascanResult<ParseOutcome> {
    if text.len() > MAX_INPUT_BYTES {
        return Err(SyllascanError::InvalidInput(format!(
            "input too large: {} bytes (max {})",
            text.len(),
            MAX_INPUT_BYTES
        )));
    }
    if text.contains('\0') {
        return Err(SyllascanError::InvalidInput(
            "input contains NUL bytes; expected plain text".to_string(),
        ));
    }

    Ok(ParseOutcome {
        assignments: scan_assignments(text, course_hint, reference),
        classes: scan_schedule(text, course_hint, reference),
    })
}
