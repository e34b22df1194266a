//! The INI configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use ini::Ini;
use tracing::debug;

use super::error::ConfigError;
use super::keys::ConfigKey;
use crate::catalog::AsmaulSource;
use crate::locale::Language;
use crate::provider::{
    DEFAULT_ASMAUL_BASE_URL, DEFAULT_CALCULATION_METHOD, DEFAULT_PRAYER_BASE_URL,
    DEFAULT_QURAN_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::qibla::DisplayRotation;

const APP_DIR: &str = "karrom";
const CONFIG_FILE_NAME: &str = "config.ini";

/// Per-user configuration directory (`~/.config/karrom` on Linux).
pub fn config_directory() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Path of the configuration file.
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

/// Default directory for log files.
pub fn default_log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("logs")
}

/// `[api]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub quran_url: String,
    pub prayer_url: String,
    pub asmaul_url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            quran_url: DEFAULT_QURAN_BASE_URL.to_string(),
            prayer_url: DEFAULT_PRAYER_BASE_URL.to_string(),
            asmaul_url: DEFAULT_ASMAUL_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `[prayer]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerSettings {
    /// Calculation method passed to the timings API.
    pub method: u8,
}

impl Default for PrayerSettings {
    fn default() -> Self {
        Self {
            method: DEFAULT_CALCULATION_METHOD,
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySettings {
    pub language: Language,
    pub asmaul_source: AsmaulSource,
    pub display_rotation: DisplayRotation,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub directory: PathBuf,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
        }
    }
}

/// The whole configuration file.
///
/// Keys absent from the file keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub api: ApiSettings,
    pub prayer: PrayerSettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Loads the user's configuration file, or defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Loads a configuration file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_ini(&ini)
    }

    /// Parses configuration from INI text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(text).map_err(|e| ConfigError::Read {
            path: PathBuf::new(),
            reason: e.to_string(),
        })?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for key in ConfigKey::all() {
            let value = ini
                .section(Some(key.section()))
                .and_then(|section| section.get(key.key_name()));
            if let Some(value) = value {
                key.set(&mut config, value)?;
            }
        }
        Ok(config)
    }

    /// Writes the configuration to the user's configuration file.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_error = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        self.to_ini().write_to_file(path).map_err(write_error)?;

        debug!(path = %path.display(), "Config file saved");
        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        for key in ConfigKey::all() {
            ini.with_section(Some(key.section()))
                .set(key.key_name(), key.get(self));
        }
        ini
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigFile::load_from(&dir.path().join("config.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.prayer.method, 20);
        assert_eq!(config.api.timeout, 30);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.display.language = Language::English;
        config.display.asmaul_source = AsmaulSource::Bundled;
        config.display.display_rotation = DisplayRotation::Rotation270;
        config.prayer.method = 3;
        config.api.quran_url = "http://localhost:8080/".to_string();
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = ConfigFile::parse("[display]\nlanguage = en\n").unwrap();
        assert_eq!(config.display.language, Language::English);
        assert_eq!(config.api, ApiSettings::default());
        assert_eq!(config.prayer.method, DEFAULT_CALCULATION_METHOD);
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let err = ConfigFile::parse("[prayer]\nmethod = kemenag\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "prayer.method"));

        let err = ConfigFile::parse("[display]\ndisplay_rotation = 45\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = ConfigFile::parse("[display]\ntheme = dark\n[other]\nx = 1\n").unwrap();
        assert_eq!(config, ConfigFile::default());
    }
}
