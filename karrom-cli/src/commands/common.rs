//! Common types and utilities shared across CLI commands.

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, ValueEnum};
use karrom::app::AppConfig;
use karrom::coord::Coordinate;
use karrom::locale::Language;
use karrom::location::FixedLocation;
use karrom::provider::ReqwestClient;
use karrom::qibla::DisplayRotation;
use karrom::session::Session;

use crate::error::CliError;

/// Display language selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LangArg {
    /// Bahasa Indonesia
    Id,
    /// English
    En,
}

impl From<LangArg> for Language {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::Id => Language::Indonesian,
            LangArg::En => Language::English,
        }
    }
}

/// Position given on the command line.
#[derive(Debug, Clone, Args)]
pub struct LocationArgs {
    /// Latitude in degrees (south is negative)
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees (west is negative)
    #[arg(allow_negative_numbers = true)]
    pub lon: f64,
}

impl LocationArgs {
    /// Validated coordinate.
    pub fn coordinate(&self) -> Result<Coordinate, CliError> {
        Ok(Coordinate::new(self.lat, self.lon)?)
    }

    /// Location provider reporting this position.
    pub fn provider(&self) -> Result<FixedLocation, CliError> {
        self.coordinate().map(FixedLocation)
    }
}

/// Opens a session with the resolved configuration.
pub fn start_session(config: &AppConfig) -> Result<Session<ReqwestClient>, CliError> {
    Ok(config.start_session()?)
}

/// Parses a `DD-MM-YYYY` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%d-%m-%Y")
        .map_err(|_| format!("invalid date '{}', expected DD-MM-YYYY", s))
}

/// Parses an `HH:MM` time of day.
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| format!("invalid time '{}', expected HH:MM", s))
}

/// Parses a display rotation in degrees.
pub fn parse_rotation(s: &str) -> Result<DisplayRotation, String> {
    s.parse()
}
