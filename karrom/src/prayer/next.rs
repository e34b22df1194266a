//! Next-prayer selection.
//!
//! The schedule is treated as cyclic: once the last entry of the day has
//! passed, the first entry (tomorrow's) is next.

use super::names::PrayerName;
use super::schedule::{PrayerEntry, PrayerSchedule};
use super::time::MINUTES_PER_DAY;

/// Returns the entry that comes next after `now_minutes`.
///
/// The first entry whose time strictly exceeds `now_minutes` wins. If none
/// does, the first entry of the schedule is returned.
pub fn next_entry(schedule: &PrayerSchedule, now_minutes: u16) -> &PrayerEntry {
    let entries = schedule.entries();
    entries
        .iter()
        .find(|entry| entry.minutes() > now_minutes)
        .unwrap_or(&entries[0])
}

/// Label of the next prayer after `now_minutes` (minutes since midnight).
pub fn next_prayer(schedule: &PrayerSchedule, now_minutes: u16) -> PrayerName {
    next_entry(schedule, now_minutes).name
}

/// Minutes from `now_minutes` until the next prayer, wrapping past midnight.
pub fn minutes_until(schedule: &PrayerSchedule, now_minutes: u16) -> u16 {
    let target = next_entry(schedule, now_minutes).minutes();
    let now = now_minutes % MINUTES_PER_DAY;
    if target > now {
        target - now
    } else {
        MINUTES_PER_DAY - now + target
    }
}
