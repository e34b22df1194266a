//! Application configuration and errors.
//!
//! [`AppConfig`] is resolved once at startup from the configuration file
//! (plus command-line overrides) and knows how to build the HTTP client
//! and the [`Session`](crate::session::Session).
//!
//! # Example
//!
//! ```ignore
//! use karrom::app::AppConfig;
//! use karrom::config::ConfigFile;
//!
//! let config = AppConfig::from_config_file(&ConfigFile::load()?);
//! let mut session = config.start_session()?;
//! session.refresh_surah_list()?;
//! ```

mod config;
mod error;

pub use config::AppConfig;
pub use error::AppError;
