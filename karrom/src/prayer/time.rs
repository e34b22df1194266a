//! Time-of-day parsing for prayer schedules.

use std::sync::OnceLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

fn hh_mm_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*([0-9]{2}):([0-9]{2})").expect("valid regex"))
}

/// Parses the `HH:MM` prefix of a time string into minutes since midnight.
///
/// Anything after the minutes is ignored, so `"04:40:59"` and
/// `"04:40 (WIB)"` both yield 280. Returns `None` when the prefix is missing
/// or out of range.
pub fn minutes_of_day(time: &str) -> Option<u16> {
    let caps = hh_mm_prefix().captures(time)?;
    let hours: u16 = caps[1].parse().ok()?;
    let minutes: u16 = caps[2].parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Minutes since midnight for a wall-clock time, seconds truncated.
pub fn minutes_since_midnight(time: NaiveTime) -> u16 {
    (time.hour() * 60 + time.minute()) as u16
}

/// Formats minutes since midnight as `HH:MM`.
pub fn format_minutes(minutes: u16) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_hh_mm() {
        assert_eq!(minutes_of_day("00:00"), Some(0));
        assert_eq!(minutes_of_day("04:30"), Some(270));
        assert_eq!(minutes_of_day("23:59"), Some(1439));
    }

    #[test]
    fn test_seconds_are_truncated() {
        assert_eq!(minutes_of_day("04:40:59"), Some(280));
    }

    #[test]
    fn test_timezone_suffix_is_ignored() {
        assert_eq!(minutes_of_day("18:05 (WIB)"), Some(1085));
    }

    #[test]
    fn test_malformed_strings() {
        assert_eq!(minutes_of_day(""), None);
        assert_eq!(minutes_of_day("4:30"), None);
        assert_eq!(minutes_of_day("noon"), None);
        assert_eq!(minutes_of_day("24:00"), None);
        assert_eq!(minutes_of_day("12:60"), None);
    }

    #[test]
    fn test_minutes_since_midnight_truncates_seconds() {
        let t = NaiveTime::from_hms_opt(6, 0, 59).unwrap();
        assert_eq!(minutes_since_midnight(t), 360);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(1085), "18:05");
        assert_eq!(format_minutes(MINUTES_PER_DAY + 5), "00:05");
    }
}
