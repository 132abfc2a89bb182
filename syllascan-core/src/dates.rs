//! Date normalization for free-form syllabus date strings.
//!
//! Syllabi write dates every way imaginable: "9/15", "09-15-2025",
//! "Sep 2nd", "December 17, 2026". `normalize_date` tries a fixed
//! priority order of pattern families and resolves year-less forms
//! with a "future-looking" policy relative to a caller-supplied
//! reference date, so parsing stays deterministic and testable.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::error::{SyllascanError, SyllascanResult};

static RE_ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").unwrap());
// Month and day components are bounded (1-12 / 1-31) so these cannot
// match inside a compact clock range like "1:00-3:00".
static RE_NUMERIC_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(1[0-2]|0?[1-9])[/-](3[01]|[12]?\d)[/-](\d{2,4})\b").unwrap()
});
static RE_NUMERIC_MD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(1[0-2]|0?[1-9])[/-](3[01]|[12]?\d)\b").unwrap());
static RE_MONTH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|
           jul(?:y)?|aug(?:ust)?|sep(?:tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)
        [\s.]*
        (\d{1,2})
        (?:st|nd|rd|th)?
        (?:,?\s*(\d{4}))?
        \b",
    )
    .unwrap()
});

/// Normalize a free-form date substring to a calendar date.
///
/// Pattern families are tried in a fixed priority order: ISO, numeric
/// with year, numeric month/day, then month-name forms. Year-less
/// dates assume `reference`'s year and roll forward one year when the
/// naive result would land in the past. Returns `None` when nothing
/// matches or the result is not a valid calendar date; callers treat
/// that as "no date found", not as an error.
pub fn normalize_date(raw: &str, reference: NaiveDate) -> Option<NaiveDate> {
    if let Some(caps) = RE_ISO.captures(raw) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = RE_NUMERIC_FULL.captures(raw) {
        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let year = expand_year(caps[3].parse().ok()?);
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = RE_NUMERIC_MD.captures(raw) {
        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        return future_looking(reference, month, day);
    }

    if let Some(caps) = RE_MONTH_NAME.captures(raw) {
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        return match caps.get(3) {
            Some(y) => NaiveDate::from_ymd_opt(y.as_str().parse().ok()?, month, day),
            None => future_looking(reference, month, day),
        };
    }

    None
}

/// Whether any recognized date pattern appears in the string.
///
/// Used by the scanners to decide if a line "looks like a date line"
/// without committing to a particular interpretation.
pub fn contains_date(raw: &str) -> bool {
    RE_ISO.is_match(raw)
        || RE_NUMERIC_FULL.is_match(raw)
        || RE_NUMERIC_MD.is_match(raw)
        || RE_MONTH_NAME.is_match(raw)
}

/// Strict YYYY-MM-DD parse for caller-supplied reference dates.
///
/// Unlike `normalize_date`, a bad value here is a caller error, not a
/// scan miss, so it surfaces as `Err` with a descriptive message.
pub fn parse_reference_date(s: &str) -> SyllascanResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| SyllascanError::InvalidDate(s.to_string()))
}

/// Expand a 2-digit year: >50 maps to the 1900s, otherwise the 2000s.
/// 3- and 4-digit years pass through untouched.
fn expand_year(year: i32) -> i32 {
    if year < 100 {
        if year > 50 { 1900 + year } else { 2000 + year }
    } else {
        year
    }
}

/// Resolve a year-less month/day against the reference date: same year
/// if that lands on or after the reference, otherwise next year.
fn future_looking(reference: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    let same_year = NaiveDate::from_ymd_opt(reference.year(), month, day)?;
    if same_year < reference {
        NaiveDate::from_ymd_opt(reference.year() + 1, month, day)
    } else {
        Some(same_year)
    }
}

fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_ascii_lowercase();
    match prefix.as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_round_trip() {
        let reference = date(2025, 1, 1);
        let d = normalize_date("2025-09-15", reference).unwrap();
        assert_eq!(d.format("%Y-%m-%d").to_string(), "2025-09-15");
    }

    #[test]
    fn test_numeric_with_year() {
        let reference = date(2025, 1, 1);
        assert_eq!(
            normalize_date("9/15/2025", reference),
            Some(date(2025, 9, 15))
        );
        assert_eq!(
            normalize_date("09-15-2025", reference),
            Some(date(2025, 9, 15))
        );
    }

    #[test]
    fn test_two_digit_year_century_split() {
        let reference = date(2025, 1, 1);
        assert_eq!(normalize_date("9/15/99", reference), Some(date(1999, 9, 15)));
        assert_eq!(normalize_date("9/15/25", reference), Some(date(2025, 9, 15)));
        assert_eq!(normalize_date("9/15/50", reference), Some(date(2050, 9, 15)));
    }

    #[test]
    fn test_month_day_assumes_reference_year() {
        let reference = date(2025, 1, 1);
        assert_eq!(normalize_date("9/15", reference), Some(date(2025, 9, 15)));
    }

    #[test]
    fn test_month_day_rolls_forward_when_past() {
        let reference = date(2025, 10, 1);
        assert_eq!(normalize_date("9/15", reference), Some(date(2026, 9, 15)));
        // On-or-after the reference stays in the reference year
        assert_eq!(normalize_date("10/1", reference), Some(date(2025, 10, 1)));
    }

    #[test]
    fn test_month_name_forms() {
        let reference = date(2025, 1, 1);
        assert_eq!(normalize_date("Jan 5", reference), Some(date(2025, 1, 5)));
        assert_eq!(
            normalize_date("January 5, 2026", reference),
            Some(date(2026, 1, 5))
        );
        assert_eq!(
            normalize_date("September 2nd", reference),
            Some(date(2025, 9, 2))
        );
        assert_eq!(
            normalize_date("DECEMBER 17TH", reference),
            Some(date(2025, 12, 17))
        );
    }

    #[test]
    fn test_month_name_rolls_forward() {
        let reference = date(2025, 10, 1);
        assert_eq!(normalize_date("Sep 2", reference), Some(date(2026, 9, 2)));
    }

    #[test]
    fn test_invalid_dates_return_none() {
        let reference = date(2025, 1, 1);
        assert_eq!(normalize_date("13/45", reference), None);
        assert_eq!(normalize_date("2/31", reference), None);
        assert_eq!(normalize_date("2025-13-01", reference), None);
        assert_eq!(normalize_date("no date here", reference), None);
        assert_eq!(normalize_date("", reference), None);
    }

    #[test]
    fn test_date_embedded_in_text() {
        let reference = date(2025, 1, 1);
        assert_eq!(
            normalize_date("Homework 1 due 9/15: Chapters 1-3", reference),
            Some(date(2025, 9, 15))
        );
    }

    #[test]
    fn test_clock_range_does_not_shadow_month_name_date() {
        // "00-3" inside a compact time range must not be taken for a
        // numeric date; the month-name family still gets its turn.
        let reference = date(2025, 1, 1);
        assert_eq!(
            normalize_date("Final exam 1:00-3:00 PM, December 12", reference),
            Some(date(2025, 12, 12))
        );
        assert_eq!(normalize_date("1:00-3:00 PM", reference), None);
    }

    #[test]
    fn test_bare_time_range_is_not_a_date_line() {
        assert!(!contains_date("3:00-5:00 PM"));
        assert!(!contains_date("10:00-11:30 AM"));
    }

    #[test]
    fn test_reference_date_strict_parse() {
        assert_eq!(
            parse_reference_date("2025-09-15").unwrap(),
            date(2025, 9, 15)
        );
        let err = parse_reference_date("9/15/2025").unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_contains_date() {
        assert!(contains_date("due 9/15"));
        assert!(contains_date("September 2nd"));
        assert!(!contains_date("Chapters one through three"));
    }
}
