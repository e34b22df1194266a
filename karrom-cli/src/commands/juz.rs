//! Juz reader command.
//!
//! Juz are fetched one page at a time, the way a scrolling reader appends
//! them, until the requested Juz is loaded.

use karrom::app::AppConfig;
use tracing::debug;

use super::common::start_session;
use super::surah::print_verse;
use crate::error::CliError;

/// Show the verses of Juz `number`.
pub fn run(number: u8, config: &AppConfig) -> Result<(), CliError> {
    let mut session = start_session(config)?;
    let language = session.language();
    let page_count = session.juz_reader().page_count();

    if number == 0 || u32::from(number) > page_count {
        return Err(CliError::InvalidInput(format!(
            "Juz must be between 1 and {}",
            page_count
        )));
    }

    while session.juz_reader().loaded_pages() < u32::from(number) {
        let before = session.juz_reader().items().len();
        if !session.load_next_juz()? {
            break;
        }
        let loaded = session.juz_reader().loaded_pages();
        debug!(
            juz = loaded,
            verses = session.juz_reader().items().len() - before,
            "Juz appended"
        );

        if loaded == u32::from(number) {
            for verse in &session.juz_reader().items()[before..] {
                print_verse(verse, language);
            }
        }
    }
    Ok(())
}
