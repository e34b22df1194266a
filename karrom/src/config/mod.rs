//! Configuration file
//!
//! User settings live in an INI file at `~/.config/karrom/config.ini`:
//!
//! ```ini
//! [api]
//! quran_url = https://api.quran.gading.dev/
//! prayer_url = https://api.aladhan.com/v1/
//! asmaul_url = https://api.myquran.com/v2/
//! timeout = 30
//!
//! [prayer]
//! method = 20
//!
//! [display]
//! language = id
//! asmaul_source = remote
//! display_rotation = 0
//!
//! [logging]
//! directory = /home/user/.local/share/karrom/logs
//! ```
//!
//! A missing file or a missing key falls back to the default. Every key is
//! addressable as `section.key` through [`ConfigKey`], which is also the
//! single place values are validated.

mod error;
mod file;
mod keys;

pub use error::ConfigError;
pub use file::{
    config_directory, config_file_path, default_log_directory, ApiSettings, ConfigFile,
    DisplaySettings, LoggingSettings, PrayerSettings,
};
pub use keys::ConfigKey;
