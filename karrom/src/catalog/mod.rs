//! Bundled content
//!
//! Static tables shipped with the application: the 20 daily prayers and
//! the 99 names of Allah. The daily prayers have no remote source; the
//! names can be loaded from the API or from this table, chosen by
//! [`AsmaulSource`].

mod asmaul_husna;
mod daily_prayers;

use std::fmt;
use std::str::FromStr;

pub use asmaul_husna::{bundled_asmaul_husna, bundled_name, AsmaulHusna, ASMAUL_HUSNA_COUNT};
pub use daily_prayers::{daily_prayer, DailyPrayer, DAILY_PRAYERS, DAILY_PRAYER_COUNT};

/// Where the Asmaul Husna list comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsmaulSource {
    /// Fetched from the Asmaul Husna API.
    #[default]
    Remote,
    /// Read from the bundled table, no network needed.
    Bundled,
}

impl AsmaulSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AsmaulSource::Remote => "remote",
            AsmaulSource::Bundled => "bundled",
        }
    }
}

impl fmt::Display for AsmaulSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AsmaulSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" | "api" => Ok(AsmaulSource::Remote),
            "bundled" | "local" => Ok(AsmaulSource::Bundled),
            other => Err(format!(
                "unknown source '{}', expected 'remote' or 'bundled'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parse() {
        assert_eq!("remote".parse::<AsmaulSource>(), Ok(AsmaulSource::Remote));
        assert_eq!("Bundled".parse::<AsmaulSource>(), Ok(AsmaulSource::Bundled));
        assert!("cache".parse::<AsmaulSource>().is_err());
    }

    #[test]
    fn test_source_display_roundtrips() {
        for source in [AsmaulSource::Remote, AsmaulSource::Bundled] {
            assert_eq!(source.to_string().parse::<AsmaulSource>(), Ok(source));
        }
    }
}
