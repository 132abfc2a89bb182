//! Weekday-cluster parsing for compact schedule tokens ("MWF", "TuTh").

use std::collections::BTreeSet;

/// Sunday through Saturday, indexable by the 0..6 convention used in
/// `RecurringClass::weekdays` (Sunday = 0).
pub const DAY_ABBREVS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Parse a compact weekday cluster into a set of day indices (Sunday = 0).
///
/// Fixed compound patterns are checked first because naive single-letter
/// scanning cannot tell the "T" of Tuesday from the "T" in "Th":
/// "mwf", "tr"/"tuth", and "mw" short-circuit. Anything else is scanned
/// left to right, preferring the two-letter tokens "th"/"su"/"sa" before
/// the single letters m/t/w/f. An empty set means the token was not a
/// recognizable schedule cluster and the caller should skip it.
pub fn parse_weekdays(raw: &str) -> BTreeSet<u8> {
    let cleaned: String = raw
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect::<String>()
        .to_ascii_lowercase();

    let mut days = BTreeSet::new();

    match cleaned.as_str() {
        "mwf" => {
            days.extend([1, 3, 5]);
            return days;
        }
        "tr" | "tuth" => {
            days.extend([2, 4]);
            return days;
        }
        "mw" => {
            days.extend([1, 3]);
            return days;
        }
        _ => {}
    }

    let bytes = cleaned.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if i + 1 < bytes.len() {
            match &cleaned[i..i + 2] {
                "th" => {
                    days.insert(4);
                    i += 2;
                    continue;
                }
                "su" => {
                    days.insert(0);
                    i += 2;
                    continue;
                }
                "sa" => {
                    days.insert(6);
                    i += 2;
                    continue;
                }
                _ => {}
            }
        }
        match bytes[i] {
            b'm' => {
                days.insert(1);
            }
            b't' => {
                days.insert(2);
            }
            b'w' => {
                days.insert(3);
            }
            b'f' => {
                days.insert(5);
            }
            _ => {}
        }
        i += 1;
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(days: &[u8]) -> BTreeSet<u8> {
        days.iter().copied().collect()
    }

    #[test]
    fn test_compound_clusters() {
        assert_eq!(parse_weekdays("MWF"), set(&[1, 3, 5]));
        assert_eq!(parse_weekdays("TR"), set(&[2, 4]));
        assert_eq!(parse_weekdays("TuTh"), set(&[2, 4]));
        assert_eq!(parse_weekdays("MW"), set(&[1, 3]));
    }

    #[test]
    fn test_two_letter_tokens_win_over_single_letters() {
        assert_eq!(parse_weekdays("Th"), set(&[4]));
        assert_eq!(parse_weekdays("SaSu"), set(&[6, 0]));
        assert_eq!(parse_weekdays("WTh"), set(&[3, 4]));
    }

    #[test]
    fn test_single_letter_scan() {
        assert_eq!(parse_weekdays("MTWF"), set(&[1, 2, 3, 5]));
        assert_eq!(parse_weekdays("F"), set(&[5]));
    }

    #[test]
    fn test_punctuation_and_whitespace_stripped() {
        assert_eq!(parse_weekdays("M/W/F"), set(&[1, 3, 5]));
        assert_eq!(parse_weekdays(" m w f "), set(&[1, 3, 5]));
    }

    #[test]
    fn test_unrecognized_yields_empty() {
        assert_eq!(parse_weekdays("xyz"), BTreeSet::new());
        assert_eq!(parse_weekdays(""), BTreeSet::new());
        assert_eq!(parse_weekdays("123"), BTreeSet::new());
    }
}
