//! Clock-time normalization ("2:30 PM" -> 14:30) and time-range matching.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::record::TimeRange;

static RE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2}):(\d{2})\s*(am|pm)?\b").unwrap());

// Time range: "H:MM [AM|PM]? [-/to] H:MM [AM|PM]?", tolerant of the
// various dash characters that show up in extracted text.
static RE_TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2}:\d{2}\s*(?:am|pm)?)\s*(?:-|–|—|to)+\s*(\d{1,2}:\d{2}\s*(?:am|pm)?)\b",
    )
    .unwrap()
});

/// Parse an "H:MM" or "H:MM AM/PM" string into 24-hour clock time.
///
/// PM adds 12 unless the hour is already 12; 12 AM becomes 00. When no
/// meridiem is present the digits are taken as already 24-hour, so
/// "14:30" works but a bare "2:00" stays 02:00. Returns `None` on
/// unparseable or out-of-range input.
pub fn normalize_time(raw: &str) -> Option<NaiveTime> {
    let caps = RE_TIME.captures(raw)?;
    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;

    match caps.get(3).map(|m| m.as_str().to_ascii_lowercase()) {
        Some(meridiem) if meridiem == "pm" => {
            if hour != 12 {
                hour += 12;
            }
        }
        Some(meridiem) if meridiem == "am" => {
            if hour == 12 {
                hour = 0;
            }
        }
        _ => {}
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Find the first time range in a string, e.g. "10:00-11:30 AM".
///
/// Both endpoints must normalize; a range with one bad endpoint is no
/// range at all.
pub fn find_time_range(raw: &str) -> Option<TimeRange> {
    let caps = RE_TIME_RANGE.captures(raw)?;
    let start = normalize_time(&caps[1])?;
    let end = normalize_time(&caps[2])?;
    Some(TimeRange { start, end })
}
