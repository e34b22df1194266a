//! A day's prayer-time schedule.

use thiserror::Error;

use super::names::PrayerName;
use super::time::minutes_of_day;
use crate::provider::Timings;

/// Errors building a [`PrayerSchedule`] from labelled pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Schedule slot {index} must be {expected}, found {found}")]
    UnexpectedSlot {
        index: usize,
        expected: PrayerName,
        found: PrayerName,
    },
}

/// One labelled time in a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerEntry {
    pub name: PrayerName,
    /// Time as reported by the provider, `HH:MM` possibly followed by
    /// seconds or a zone suffix.
    pub time: String,
}

impl PrayerEntry {
    /// Minutes since midnight, seconds truncated.
    ///
    /// A malformed time counts as minute 0 so it is never selected as the
    /// next prayer once the day has started.
    pub fn minutes(&self) -> u16 {
        minutes_of_day(&self.time).unwrap_or(0)
    }

    /// The `HH:MM` part of the time, or the raw string if malformed.
    pub fn display_time(&self) -> &str {
        match minutes_of_day(&self.time) {
            Some(_) => {
                let trimmed = self.time.trim_start();
                &trimmed[..5]
            }
            None => &self.time,
        }
    }
}

/// Exactly seven labelled times in chronological order
/// (Imsak, Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha).
///
/// Replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerSchedule {
    entries: Vec<PrayerEntry>,
}

impl PrayerSchedule {
    /// Builds a schedule from seven pairs in [`PrayerName::ALL`] order.
    pub fn new(pairs: [(PrayerName, String); 7]) -> Result<Self, ScheduleError> {
        let mut entries = Vec::with_capacity(pairs.len());
        for (index, (name, time)) in pairs.into_iter().enumerate() {
            let expected = PrayerName::ALL[index];
            if name != expected {
                return Err(ScheduleError::UnexpectedSlot {
                    index,
                    expected,
                    found: name,
                });
            }
            entries.push(PrayerEntry { name, time });
        }
        Ok(Self { entries })
    }

    /// Builds a schedule from the timings API response.
    pub fn from_timings(timings: &Timings) -> Self {
        let entries = PrayerName::ALL
            .iter()
            .map(|name| PrayerEntry {
                name: *name,
                time: timings.time_for(*name).to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Entries in chronological order.
    pub fn entries(&self) -> &[PrayerEntry] {
        &self.entries
    }

    /// The entry for `name`.
    pub fn entry(&self, name: PrayerName) -> &PrayerEntry {
        // Slot order is fixed by construction.
        &self.entries[name as usize]
    }

    /// Raw time string for `name`.
    pub fn time_of(&self, name: PrayerName) -> &str {
        &self.entry(name).time
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample() -> PrayerSchedule {
        PrayerSchedule::new([
            (PrayerName::Imsak, "04:30".to_string()),
            (PrayerName::Fajr, "04:40".to_string()),
            (PrayerName::Sunrise, "05:55".to_string()),
            (PrayerName::Dhuhr, "12:00".to_string()),
            (PrayerName::Asr, "15:20".to_string()),
            (PrayerName::Maghrib, "18:05".to_string()),
            (PrayerName::Isha, "19:15".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn test_entries_in_chronological_order() {
        let schedule = sample();
        let names: Vec<PrayerName> = schedule.entries().iter().map(|e| e.name).collect();
        assert_eq!(names, PrayerName::ALL.to_vec());
    }

    #[test]
    fn test_lookup_by_name() {
        let schedule = sample();
        assert_eq!(schedule.time_of(PrayerName::Maghrib), "18:05");
        assert_eq!(schedule.entry(PrayerName::Isha).minutes(), 1155);
    }

    #[test]
    fn test_out_of_order_pairs_rejected() {
        let result = PrayerSchedule::new([
            (PrayerName::Fajr, "04:40".to_string()),
            (PrayerName::Imsak, "04:30".to_string()),
            (PrayerName::Sunrise, "05:55".to_string()),
            (PrayerName::Dhuhr, "12:00".to_string()),
            (PrayerName::Asr, "15:20".to_string()),
            (PrayerName::Maghrib, "18:05".to_string()),
            (PrayerName::Isha, "19:15".to_string()),
        ]);
        assert!(matches!(
            result,
            Err(ScheduleError::UnexpectedSlot { index: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_entry_counts_as_midnight() {
        let entry = PrayerEntry {
            name: PrayerName::Asr,
            time: "--:--".to_string(),
        };
        assert_eq!(entry.minutes(), 0);
        assert_eq!(entry.display_time(), "--:--");
    }

    #[test]
    fn test_display_time_strips_suffix() {
        let entry = PrayerEntry {
            name: PrayerName::Asr,
            time: "15:20 (WIB)".to_string(),
        };
        assert_eq!(entry.display_time(), "15:20");
    }
}
