//! Addressable configuration keys (`section.key`).

use std::path::PathBuf;
use std::str::FromStr;

use super::error::ConfigError;
use super::file::ConfigFile;

/// A single setting of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ApiQuranUrl,
    ApiPrayerUrl,
    ApiAsmaulUrl,
    ApiTimeout,
    PrayerMethod,
    DisplayLanguage,
    DisplayAsmaulSource,
    DisplayRotation,
    LoggingDirectory,
}

impl ConfigKey {
    /// Every key, grouped by section in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::ApiQuranUrl,
            ConfigKey::ApiPrayerUrl,
            ConfigKey::ApiAsmaulUrl,
            ConfigKey::ApiTimeout,
            ConfigKey::PrayerMethod,
            ConfigKey::DisplayLanguage,
            ConfigKey::DisplayAsmaulSource,
            ConfigKey::DisplayRotation,
            ConfigKey::LoggingDirectory,
        ]
    }

    /// INI section name.
    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::ApiQuranUrl
            | ConfigKey::ApiPrayerUrl
            | ConfigKey::ApiAsmaulUrl
            | ConfigKey::ApiTimeout => "api",
            ConfigKey::PrayerMethod => "prayer",
            ConfigKey::DisplayLanguage
            | ConfigKey::DisplayAsmaulSource
            | ConfigKey::DisplayRotation => "display",
            ConfigKey::LoggingDirectory => "logging",
        }
    }

    /// Key name within the section.
    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::ApiQuranUrl => "quran_url",
            ConfigKey::ApiPrayerUrl => "prayer_url",
            ConfigKey::ApiAsmaulUrl => "asmaul_url",
            ConfigKey::ApiTimeout => "timeout",
            ConfigKey::PrayerMethod => "method",
            ConfigKey::DisplayLanguage => "language",
            ConfigKey::DisplayAsmaulSource => "asmaul_source",
            ConfigKey::DisplayRotation => "display_rotation",
            ConfigKey::LoggingDirectory => "directory",
        }
    }

    /// Full `section.key` name.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key_name())
    }

    /// Current value, formatted as it is written to the file.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::ApiQuranUrl => config.api.quran_url.clone(),
            ConfigKey::ApiPrayerUrl => config.api.prayer_url.clone(),
            ConfigKey::ApiAsmaulUrl => config.api.asmaul_url.clone(),
            ConfigKey::ApiTimeout => config.api.timeout.to_string(),
            ConfigKey::PrayerMethod => config.prayer.method.to_string(),
            ConfigKey::DisplayLanguage => config.display.language.to_string(),
            ConfigKey::DisplayAsmaulSource => config.display.asmaul_source.to_string(),
            ConfigKey::DisplayRotation => config.display.display_rotation.to_string(),
            ConfigKey::LoggingDirectory => config.logging.directory.display().to_string(),
        }
    }

    /// Validates `value` and stores it.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason,
        };

        match self {
            ConfigKey::ApiQuranUrl => config.api.quran_url = parse_url(value).map_err(invalid)?,
            ConfigKey::ApiPrayerUrl => config.api.prayer_url = parse_url(value).map_err(invalid)?,
            ConfigKey::ApiAsmaulUrl => config.api.asmaul_url = parse_url(value).map_err(invalid)?,
            ConfigKey::ApiTimeout => {
                config.api.timeout = match value.parse::<u64>() {
                    Ok(secs) if secs > 0 => secs,
                    _ => return Err(invalid("expected a positive number of seconds".to_string())),
                }
            }
            ConfigKey::PrayerMethod => {
                config.prayer.method = value
                    .parse()
                    .map_err(|_| invalid("expected a number between 0 and 255".to_string()))?
            }
            ConfigKey::DisplayLanguage => config.display.language = value.parse().map_err(invalid)?,
            ConfigKey::DisplayAsmaulSource => {
                config.display.asmaul_source = value.parse().map_err(invalid)?
            }
            ConfigKey::DisplayRotation => {
                config.display.display_rotation = value.parse().map_err(invalid)?
            }
            ConfigKey::LoggingDirectory => {
                if value.is_empty() {
                    return Err(invalid("directory must not be empty".to_string()));
                }
                config.logging.directory = PathBuf::from(value);
            }
        }
        Ok(())
    }
}

fn parse_url(value: &str) -> Result<String, String> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.to_string())
    } else {
        Err("expected an http:// or https:// URL".to_string())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;
    use crate::qibla::DisplayRotation;

    #[test]
    fn test_parse_key_names() {
        assert_eq!("api.timeout".parse::<ConfigKey>().unwrap(), ConfigKey::ApiTimeout);
        assert_eq!(
            "Display.Language".parse::<ConfigKey>().unwrap(),
            ConfigKey::DisplayLanguage
        );
        assert!(matches!(
            "display.theme".parse::<ConfigKey>(),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<String> = ConfigKey::all().iter().map(|k| k.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ConfigKey::all().len());
    }

    #[test]
    fn test_set_then_get() {
        let mut config = ConfigFile::default();
        ConfigKey::DisplayLanguage.set(&mut config, "english").unwrap();
        assert_eq!(config.display.language, Language::English);
        assert_eq!(ConfigKey::DisplayLanguage.get(&config), "en");

        ConfigKey::DisplayRotation.set(&mut config, "90").unwrap();
        assert_eq!(config.display.display_rotation, DisplayRotation::Rotation90);

        ConfigKey::ApiTimeout.set(&mut config, " 10 ").unwrap();
        assert_eq!(ConfigKey::ApiTimeout.get(&config), "10");
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = ConfigFile::default();
        assert!(ConfigKey::ApiTimeout.set(&mut config, "0").is_err());
        assert!(ConfigKey::PrayerMethod.set(&mut config, "256").is_err());
        assert!(ConfigKey::ApiQuranUrl.set(&mut config, "ftp://x").is_err());
        assert!(ConfigKey::DisplayAsmaulSource.set(&mut config, "cache").is_err());
        assert!(ConfigKey::LoggingDirectory.set(&mut config, "  ").is_err());
        assert_eq!(config, ConfigFile::default());
    }
}
