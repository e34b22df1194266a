//! Remote data providers
//!
//! Thin clients over the three REST APIs the application reads from:
//! Quran text, prayer timings and the Asmaul Husna list. Each client is
//! generic over [`HttpClient`] so tests can inject a mock.
//!
//! ```ignore
//! use karrom::provider::{QuranClient, ReqwestClient};
//!
//! let http_client = ReqwestClient::new()?;
//! let quran = QuranClient::new(http_client);
//! let surahs = quran.surah_list()?;
//! ```

mod asmaul;
mod http;
mod prayer_times;
mod quran;
mod types;
mod url;

pub use asmaul::{AsmaulClient, AsmaulHusnaRecord, DEFAULT_ASMAUL_BASE_URL};
pub use http::{HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use prayer_times::{
    PrayerTimesClient, Timings, DATE_FORMAT, DEFAULT_CALCULATION_METHOD, DEFAULT_PRAYER_BASE_URL,
};
pub use quran::{
    JuzDetail, LocalizedText, QuranClient, Revelation, SurahDetail, SurahName, SurahSummary,
    Verse, VerseMeta, VerseNumber, VerseText, VerseTransliteration, DEFAULT_QURAN_BASE_URL,
    JUZ_COUNT, SURAH_COUNT,
};
pub use types::ProviderError;

#[cfg(test)]
pub use http::tests::MockHttpClient;

#[cfg(test)]
pub(crate) mod fixtures {
    pub(crate) use super::asmaul::tests::HUSNA_JSON;
    pub(crate) use super::prayer_times::tests::TIMINGS_JSON;
    pub(crate) use super::quran::tests::{juz_json, SURAH_DETAIL_JSON, SURAH_LIST_JSON};
}
