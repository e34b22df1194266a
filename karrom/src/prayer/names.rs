//! The seven daily prayer-time labels.

use std::fmt;

use crate::locale::Language;

/// A labelled slot in the daily prayer schedule.
///
/// Declaration order is chronological order within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrayerName {
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// All slots in chronological order.
    pub const ALL: [PrayerName; 7] = [
        PrayerName::Imsak,
        PrayerName::Fajr,
        PrayerName::Sunrise,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    /// Key used by the timings API.
    pub fn api_key(&self) -> &'static str {
        match self {
            PrayerName::Imsak => "Imsak",
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    /// Localized label.
    pub fn label(&self, language: Language) -> &'static str {
        let strings = language.strings();
        match self {
            PrayerName::Imsak => strings.imsak,
            PrayerName::Fajr => strings.fajr,
            PrayerName::Sunrise => strings.sunrise,
            PrayerName::Dhuhr => strings.dhuhr,
            PrayerName::Asr => strings.asr,
            PrayerName::Maghrib => strings.maghrib,
            PrayerName::Isha => strings.isha,
        }
    }

    /// Whether this slot is an obligatory prayer (Imsak and Sunrise are
    /// markers, not prayers).
    pub fn is_prayer(&self) -> bool {
        !matches!(self, PrayerName::Imsak | PrayerName::Sunrise)
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_key())
    }
}
