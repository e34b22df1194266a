//! Surah list and reader commands.

use clap::Subcommand;
use console::style;
use karrom::app::AppConfig;
use karrom::locale::Language;
use karrom::provider::Verse;

use super::common::start_session;
use crate::error::CliError;

/// Surah subcommands.
#[derive(Debug, Subcommand)]
pub enum SurahCommands {
    /// List all 114 surahs
    List {
        /// Filter by name, translation or number
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show the verses of one surah
    Show {
        /// Surah number (1-114)
        #[arg(value_parser = clap::value_parser!(u16).range(1..=114))]
        number: u16,

        /// Show only this verse
        #[arg(long)]
        verse: Option<u16>,
    },
}

/// Run a surah subcommand.
pub fn run(command: SurahCommands, config: &AppConfig) -> Result<(), CliError> {
    match command {
        SurahCommands::List { query } => run_list(query, config),
        SurahCommands::Show { number, verse } => run_show(number, verse, config),
    }
}

fn run_list(query: Option<String>, config: &AppConfig) -> Result<(), CliError> {
    let mut session = start_session(config)?;
    session.refresh_surah_list()?;
    session.set_surah_query(query.unwrap_or_default());

    let language = session.language();
    let hits = session.filtered_surahs();
    if hits.is_empty() {
        println!("No surah matches '{}'", session.surah_query());
        return Ok(());
    }

    for surah in hits {
        println!(
            "{:>3}. {:<24} {:<28} {}",
            surah.number,
            surah.name.transliteration.get(language),
            surah.name.translation.get(language),
            style(surah.revelation.get(language)).dim()
        );
    }
    Ok(())
}

fn run_show(number: u16, verse: Option<u16>, config: &AppConfig) -> Result<(), CliError> {
    let mut session = start_session(config)?;
    let language = session.language();
    let detail = session.load_surah_detail(number)?;

    println!(
        "{} {} ({})",
        style(detail.number).bold(),
        style(detail.name.transliteration.get(language)).bold(),
        detail.name.translation.get(language)
    );
    println!();

    match verse {
        Some(in_surah) => {
            let verse = detail.verse(in_surah).ok_or_else(|| {
                CliError::NotFound(format!("verse {} of surah {}", in_surah, number))
            })?;
            print_verse(verse, language);
        }
        None => detail.verses.iter().for_each(|v| print_verse(v, language)),
    }
    Ok(())
}

/// Prints one verse as number, Arabic text and translation.
pub fn print_verse(verse: &Verse, language: Language) {
    println!("[{}] {}", style(verse.number.in_surah).cyan(), verse.text.arab);
    println!("    {}", verse.translation.get(language));
    println!();
}
