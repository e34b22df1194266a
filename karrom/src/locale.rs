//! Display language and user-facing strings.
//!
//! The application is bilingual. Every record that carries a translation
//! holds both an Indonesian and an English text; the active [`Language`]
//! picks which one is shown.

use std::fmt;
use std::str::FromStr;

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Indonesian,
    English,
}

impl Language {
    /// Switches to the other language.
    pub fn toggle(self) -> Self {
        match self {
            Language::Indonesian => Language::English,
            Language::English => Language::Indonesian,
        }
    }

    /// Short code used in configuration files (`id` / `en`).
    pub fn code(&self) -> &'static str {
        match self {
            Language::Indonesian => "id",
            Language::English => "en",
        }
    }

    /// Picks the text for this language out of an (Indonesian, English) pair.
    #[inline]
    pub fn pick<'a>(&self, indonesian: &'a str, english: &'a str) -> &'a str {
        match self {
            Language::Indonesian => indonesian,
            Language::English => english,
        }
    }

    /// Static string table for this language.
    pub fn strings(&self) -> &'static UiStrings {
        match self {
            Language::Indonesian => &STRINGS_ID,
            Language::English => &STRINGS_EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" | "indonesian" | "indonesia" => Ok(Language::Indonesian),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unknown language '{}', expected 'id' or 'en'", other)),
        }
    }
}

/// User-facing strings for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiStrings {
    pub search_surah: &'static str,
    pub search_asmaul: &'static str,
    pub search_doa: &'static str,
    pub app_title: &'static str,
    pub verse: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub copied: &'static str,
    pub tab_quran: &'static str,
    pub tab_prayer: &'static str,
    pub tab_asmaul: &'static str,
    pub tab_doa: &'static str,
    pub locate_title: &'static str,
    pub locate_button: &'static str,
    pub qibla_button: &'static str,
    pub imsak: &'static str,
    pub fajr: &'static str,
    pub sunrise: &'static str,
    pub dhuhr: &'static str,
    pub asr: &'static str,
    pub maghrib: &'static str,
    pub isha: &'static str,
    pub waiting_location: &'static str,
    pub location_unavailable: &'static str,
    pub next_prayer: &'static str,
    pub prayer_source: &'static str,
}

pub static STRINGS_ID: UiStrings = UiStrings {
    search_surah: "Cari Surat...",
    search_asmaul: "Cari Nama Allah...",
    search_doa: "Cari Doa...",
    app_title: "Al-Quran",
    verse: "Ayat",
    loading: "Memuat...",
    error: "Gagal",
    copied: "Teks disalin",
    tab_quran: "Al-Quran",
    tab_prayer: "Jadwal Sholat",
    tab_asmaul: "Asmaul Husna",
    tab_doa: "Doa Harian",
    locate_title: "Lokasi Anda",
    locate_button: "Update Lokasi",
    qibla_button: "Arah Kiblat",
    imsak: "Imsak",
    fajr: "Subuh",
    sunrise: "Terbit",
    dhuhr: "Dzuhur",
    asr: "Ashar",
    maghrib: "Maghrib",
    isha: "Isya",
    waiting_location: "Menunggu Lokasi...",
    location_unavailable: "Lokasi tidak tersedia",
    next_prayer: "Sholat berikutnya",
    prayer_source: "Sumber: Kemenag RI",
};

pub static STRINGS_EN: UiStrings = UiStrings {
    search_surah: "Search Surah...",
    search_asmaul: "Search Name of Allah...",
    search_doa: "Search Prayer...",
    app_title: "Quran",
    verse: "Verse",
    loading: "Loading...",
    error: "Error",
    copied: "Text copied",
    tab_quran: "Quran",
    tab_prayer: "Prayer Times",
    tab_asmaul: "Asmaul Husna",
    tab_doa: "Daily Prayers",
    locate_title: "Your Location",
    locate_button: "Update Location",
    qibla_button: "Qibla Compass",
    imsak: "Imsak",
    fajr: "Fajr",
    sunrise: "Sunrise",
    dhuhr: "Dhuhr",
    asr: "Asr",
    maghrib: "Maghrib",
    isha: "Isha",
    waiting_location: "Waiting for Location...",
    location_unavailable: "Location unavailable",
    next_prayer: "Next prayer",
    prayer_source: "Source: Kemenag RI",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Language::Indonesian.toggle(), Language::English);
        assert_eq!(Language::English.toggle().toggle(), Language::English);
    }

    #[test]
    fn test_default_is_indonesian() {
        assert_eq!(Language::default(), Language::Indonesian);
        assert_eq!(Language::default().strings().fajr, "Subuh");
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::English));
        assert_eq!(" id ".parse::<Language>(), Ok(Language::Indonesian));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_pick() {
        assert_eq!(Language::English.pick("Pembukaan", "The Opening"), "The Opening");
        assert_eq!(Language::Indonesian.pick("Pembukaan", "The Opening"), "Pembukaan");
    }
}
