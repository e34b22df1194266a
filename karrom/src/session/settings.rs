//! Runtime settings a session is built from.

use crate::catalog::AsmaulSource;
use crate::locale::Language;
use crate::provider::{
    DEFAULT_ASMAUL_BASE_URL, DEFAULT_CALCULATION_METHOD, DEFAULT_PRAYER_BASE_URL,
    DEFAULT_QURAN_BASE_URL,
};

/// Endpoints and preferences for a [`Session`](super::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub quran_url: String,
    pub prayer_url: String,
    pub asmaul_url: String,
    /// Prayer-time calculation method passed to the timings API.
    pub method: u8,
    pub language: Language,
    pub asmaul_source: AsmaulSource,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            quran_url: DEFAULT_QURAN_BASE_URL.to_string(),
            prayer_url: DEFAULT_PRAYER_BASE_URL.to_string(),
            asmaul_url: DEFAULT_ASMAUL_BASE_URL.to_string(),
            method: DEFAULT_CALCULATION_METHOD,
            language: Language::default(),
            asmaul_source: AsmaulSource::default(),
        }
    }
}

impl SessionSettings {
    /// Points all three clients at one base URL (test servers, mirrors).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.quran_url = base_url.to_string();
        self.prayer_url = base_url.to_string();
        self.asmaul_url = base_url.to_string();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_asmaul_source(mut self, source: AsmaulSource) -> Self {
        self.asmaul_source = source;
        self
    }

    pub fn with_method(mut self, method: u8) -> Self {
        self.method = method;
        self
    }
}
