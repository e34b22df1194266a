//! Karrom CLI - Quran, prayer times and qibla direction
//!
//! Every subcommand opens one [`karrom::session::Session`] configured from
//! `~/.config/karrom/config.ini`, runs a single operation against it and
//! prints the result.

mod commands;
mod error;

use std::process;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use console::style;
use karrom::app::AppConfig;
use karrom::logging::init_logging;
use karrom::qibla::DisplayRotation;
use tracing::debug;

use commands::common::{parse_date, parse_rotation, parse_time, LangArg, LocationArgs};
use commands::config::ConfigCommands;
use commands::surah::SurahCommands;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "karrom", version, about = "Quran, prayer times and qibla direction")]
struct Cli {
    /// Display language (defaults to display.language)
    #[arg(long, global = true, value_enum)]
    lang: Option<LangArg>,

    /// Show debug output on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse and read surahs
    #[command(subcommand)]
    Surah(SurahCommands),

    /// Read one Juz (1-30)
    Juz {
        /// Juz number
        number: u8,
    },

    /// Show today's prayer schedule for a position
    Prayer {
        #[command(flatten)]
        location: LocationArgs,

        /// Date as DD-MM-YYYY (defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Time of day as HH:MM used to pick the next prayer (defaults to now)
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
    },

    /// Show the qibla bearing for a position
    Qibla {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Live qibla compass from sensor readings on stdin
    Compass {
        #[command(flatten)]
        location: LocationArgs,

        /// Display rotation in degrees: 0, 90, 180 or 270
        #[arg(long, value_parser = parse_rotation)]
        rotation: Option<DisplayRotation>,
    },

    /// List the 99 names of Allah
    Asmaul {
        /// Filter by name or meaning
        #[arg(short, long)]
        query: Option<String>,

        /// Print the copy text of one name
        #[arg(long)]
        show: Option<u16>,

        /// Use the bundled list instead of the remote API
        #[arg(long)]
        bundled: bool,
    },

    /// List daily prayers (doa)
    Doa {
        /// Filter by title
        #[arg(short, long)]
        query: Option<String>,

        /// Print one prayer in full
        #[arg(long)]
        show: Option<u16>,
    },

    /// View or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("error:").red().bold(), e);
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = AppConfig::load()?;
    if let Some(lang) = cli.lang {
        config = config.with_language(lang.into());
    }

    let _logging = init_logging(&config.log_directory, cli.verbose);
    debug!(command = ?cli.command, "Starting");

    match cli.command {
        Commands::Surah(command) => commands::surah::run(command, &config),
        Commands::Juz { number } => commands::juz::run(number, &config),
        Commands::Prayer {
            location,
            date,
            time,
        } => commands::prayer::run(&location, date, time, &config),
        Commands::Qibla { location } => commands::qibla::run(&location, &config),
        Commands::Compass { location, rotation } => {
            commands::compass::run(&location, rotation, &config)
        }
        Commands::Asmaul {
            query,
            show,
            bundled,
        } => commands::asmaul::run(query, show, bundled, &config),
        Commands::Doa { query, show } => {
            commands::doa::run(query, show, config.session.language)
        }
        Commands::Config(command) => commands::config::run(command),
    }
}
