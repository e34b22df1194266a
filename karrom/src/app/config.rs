//! Runtime configuration assembled from the configuration file.

use std::path::PathBuf;

use super::error::AppError;
use crate::catalog::AsmaulSource;
use crate::config::ConfigFile;
use crate::locale::Language;
use crate::provider::{ProviderError, ReqwestClient};
use crate::qibla::DisplayRotation;
use crate::session::{Session, SessionSettings};

/// Everything needed to start a session, resolved from the config file
/// and any command-line overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Endpoints and preferences handed to the session.
    pub session: SessionSettings,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,

    /// Display rotation used by the compass.
    pub display_rotation: DisplayRotation,

    /// Directory for rolling log files.
    pub log_directory: PathBuf,
}

impl AppConfig {
    /// Loads the user's configuration file.
    pub fn load() -> Result<Self, AppError> {
        Ok(Self::from_config_file(&ConfigFile::load()?))
    }

    /// Translates the configuration file into runtime settings.
    pub fn from_config_file(config: &ConfigFile) -> Self {
        Self {
            session: SessionSettings {
                quran_url: config.api.quran_url.clone(),
                prayer_url: config.api.prayer_url.clone(),
                asmaul_url: config.api.asmaul_url.clone(),
                method: config.prayer.method,
                language: config.display.language,
                asmaul_source: config.display.asmaul_source,
            },
            timeout_secs: config.api.timeout,
            display_rotation: config.display.display_rotation,
            log_directory: config.logging.directory.clone(),
        }
    }

    /// Overrides the display language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.session.language = language;
        self
    }

    /// Overrides the Asmaul Husna source.
    pub fn with_asmaul_source(mut self, source: AsmaulSource) -> Self {
        self.session.asmaul_source = source;
        self
    }

    /// Builds the HTTP client with the configured timeout.
    pub fn http_client(&self) -> Result<ReqwestClient, ProviderError> {
        ReqwestClient::with_timeout(self.timeout_secs)
    }

    /// Starts a session against the configured endpoints.
    pub fn start_session(&self) -> Result<Session<ReqwestClient>, ProviderError> {
        Ok(Session::with_settings(
            self.http_client()?,
            self.session.clone(),
        ))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_config_file(&ConfigFile::default())
    }
}
