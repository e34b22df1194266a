//! Quran text provider.
//!
//! # Endpoints
//!
//! - `GET surah` - all 114 surah headers
//! - `GET surah/{number}` - one surah with its verses
//! - `GET juz/{number}` - the verses of one Juz (1..=30)
//!
//! Every response wraps its payload in `{ "code": ..., "data": ... }`.

use serde::Deserialize;

use super::types::decode_data;
use super::url::join_url;
use crate::locale::Language;
use crate::provider::{HttpClient, ProviderError};

/// Default base URL of the Quran API.
pub const DEFAULT_QURAN_BASE_URL: &str = "https://api.quran.gading.dev/";

/// Number of surahs in the Quran.
pub const SURAH_COUNT: u16 = 114;

/// Number of Juz divisions.
pub const JUZ_COUNT: u8 = 30;

/// A text available in Indonesian and English.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct LocalizedText {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub en: String,
}

impl LocalizedText {
    pub fn get(&self, language: Language) -> &str {
        language.pick(&self.id, &self.en)
    }
}

/// Names of a surah.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SurahName {
    /// Arabic short name.
    pub short: String,
    pub transliteration: LocalizedText,
    pub translation: LocalizedText,
}

/// Where a surah was revealed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Revelation {
    /// Indonesian tag, e.g. "Makkiyyah".
    pub id: String,
    /// English tag, e.g. "Meccan".
    #[serde(default)]
    pub en: Option<String>,
}

impl Revelation {
    pub fn get(&self, language: Language) -> &str {
        match (language, &self.en) {
            (Language::English, Some(en)) => en,
            _ => &self.id,
        }
    }
}

/// One entry of the surah list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SurahSummary {
    pub number: u16,
    pub name: SurahName,
    pub revelation: Revelation,
    #[serde(default, rename = "numberOfVerses")]
    pub number_of_verses: Option<u16>,
}

/// A surah with all of its verses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SurahDetail {
    pub number: u16,
    pub name: SurahName,
    pub revelation: Revelation,
    pub verses: Vec<Verse>,
}

impl SurahDetail {
    /// Verse by its number within the surah.
    pub fn verse(&self, in_surah: u16) -> Option<&Verse> {
        self.verses.iter().find(|v| v.number.in_surah == in_surah)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VerseNumber {
    #[serde(rename = "inSurah")]
    pub in_surah: u16,
    #[serde(default, rename = "inQuran")]
    pub in_quran: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct VerseMeta {
    #[serde(default)]
    pub juz: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct VerseTransliteration {
    #[serde(default)]
    pub en: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerseText {
    pub arab: String,
    #[serde(default)]
    pub transliteration: VerseTransliteration,
}

/// One verse (ayat).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Verse {
    pub number: VerseNumber,
    #[serde(default)]
    pub meta: Option<VerseMeta>,
    pub text: VerseText,
    pub translation: LocalizedText,
}

impl Verse {
    /// Juz this verse belongs to, when the API reports it.
    pub fn juz(&self) -> Option<u8> {
        self.meta.and_then(|m| m.juz)
    }
}

/// The verses of one Juz.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JuzDetail {
    pub juz: u8,
    pub verses: Vec<Verse>,
}

/// Client for the Quran API.
pub struct QuranClient<C: HttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: HttpClient> QuranClient<C> {
    /// Creates a client against the default API.
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, DEFAULT_QURAN_BASE_URL)
    }

    /// Creates a client against a custom base URL.
    pub fn with_base_url(http_client: C, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Fetches the headers of all surahs, in surah order.
    pub fn surah_list(&self) -> Result<Vec<SurahSummary>, ProviderError> {
        let url = join_url(&self.base_url, "surah");
        let body = self.http_client.get(&url)?;
        decode_data(&url, &body)
    }

    /// Fetches one surah with its verses.
    pub fn surah_detail(&self, number: u16) -> Result<SurahDetail, ProviderError> {
        if !(1..=SURAH_COUNT).contains(&number) {
            return Err(ProviderError::InvalidRequest(format!(
                "surah number {} out of range 1..={}",
                number, SURAH_COUNT
            )));
        }
        let url = join_url(&self.base_url, &format!("surah/{}", number));
        let body = self.http_client.get(&url)?;
        decode_data(&url, &body)
    }

    /// Fetches the verses of one Juz.
    pub fn juz(&self, number: u8) -> Result<JuzDetail, ProviderError> {
        if !(1..=JUZ_COUNT).contains(&number) {
            return Err(ProviderError::InvalidRequest(format!(
                "juz number {} out of range 1..={}",
                number, JUZ_COUNT
            )));
        }
        let url = join_url(&self.base_url, &format!("juz/{}", number));
        let body = self.http_client.get(&url)?;
        decode_data(&url, &body)
    }
}
