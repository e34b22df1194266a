//! Text placed on the clipboard when a record is copied.

use crate::catalog::{AsmaulHusna, DailyPrayer};
use crate::locale::Language;
use crate::provider::Verse;

/// A record that can be copied as plain text.
pub trait ClipText {
    /// Short label describing the clip ("Quran", "Doa", ...).
    fn clip_label(&self) -> &'static str;

    /// The plain text copied for this record.
    fn clip_text(&self, language: Language) -> String;
}

impl ClipText for Verse {
    fn clip_label(&self) -> &'static str {
        "Quran"
    }

    fn clip_text(&self, language: Language) -> String {
        format!(
            "QS {}\n{}\n\n{}",
            self.number.in_surah,
            self.text.arab,
            self.translation.get(language)
        )
    }
}

impl ClipText for AsmaulHusna {
    fn clip_label(&self) -> &'static str {
        "Asmaul Husna"
    }

    /// Falls back to the Indonesian meaning when no English one is known.
    fn clip_text(&self, language: Language) -> String {
        let meaning = match language {
            Language::English if !self.meaning_en.is_empty() => &self.meaning_en,
            _ => &self.meaning_id,
        };
        format!("{}\n{}\n{}", self.arabic, self.latin, meaning)
    }
}

impl ClipText for DailyPrayer {
    fn clip_label(&self) -> &'static str {
        "Doa"
    }

    fn clip_text(&self, language: Language) -> String {
        format!(
            "{}\n{}\n\n{}\n\n{}",
            self.title(language),
            self.arabic,
            self.latin,
            self.translation(language)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{bundled_name, daily_prayer};
    use crate::provider::fixtures::SURAH_DETAIL_JSON;
    use crate::provider::SurahDetail;

    fn first_verse() -> Verse {
        let value: serde_json::Value = serde_json::from_str(SURAH_DETAIL_JSON).unwrap();
        let detail: SurahDetail = serde_json::from_value(value["data"].clone()).unwrap();
        detail.verses[0].clone()
    }

    #[test]
    fn test_verse_clip() {
        let verse = first_verse();
        assert_eq!(
            verse.clip_text(Language::Indonesian),
            "QS 1\nبِسْمِ اللّٰهِ الرَّحْمٰنِ الرَّحِيْمِ\n\nDengan nama Allah Yang Maha Pengasih, Maha Penyayang."
        );
        assert!(verse
            .clip_text(Language::English)
            .ends_with("the Especially Merciful."));
    }

    #[test]
    fn test_asmaul_clip() {
        let name = bundled_name(1).unwrap();
        assert_eq!(
            name.clip_text(Language::English),
            "الرَّحْمَنُ\nAr Rahman\nThe Most Gracious"
        );
        assert_eq!(
            name.clip_text(Language::Indonesian),
            "الرَّحْمَنُ\nAr Rahman\nYang Maha Pengasih"
        );
    }

    #[test]
    fn test_asmaul_clip_without_english_meaning() {
        let mut name = bundled_name(2).unwrap();
        name.meaning_en.clear();
        assert!(name.clip_text(Language::English).ends_with("Yang Maha Penyayang"));
    }

    #[test]
    fn test_daily_prayer_clip() {
        let prayer = daily_prayer(17).unwrap();
        assert_eq!(prayer.clip_label(), "Doa");
        assert_eq!(
            prayer.clip_text(Language::English),
            "Prayer When Raining\nاللَّهُمَّ صَيِّبًا نَافِعًا\n\nAllahumma shoyyiban naafi’an\n\nO Allah, may it be a beneficial rain"
        );
    }
}
