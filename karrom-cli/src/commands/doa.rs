//! Daily prayers (doa) command. Works offline.

use console::style;
use karrom::catalog::{daily_prayer, DAILY_PRAYERS};
use karrom::clip::ClipText;
use karrom::filter::filter;
use karrom::locale::Language;

use crate::error::CliError;

/// List the bundled prayers, optionally filtered, or print one in full.
pub fn run(query: Option<String>, show: Option<u16>, language: Language) -> Result<(), CliError> {
    if let Some(id) = show {
        let prayer =
            daily_prayer(id).ok_or_else(|| CliError::NotFound(format!("doa #{}", id)))?;
        println!("{}", style(prayer.clip_label()).dim());
        println!("{}", prayer.clip_text(language));
        return Ok(());
    }

    let query = query.unwrap_or_default();
    let hits = filter(&DAILY_PRAYERS, &query);
    if hits.is_empty() {
        println!("No doa matches '{}'", query);
    }
    for prayer in hits {
        println!("{:>2}. {}", prayer.id, prayer.title(language));
    }
    Ok(())
}
