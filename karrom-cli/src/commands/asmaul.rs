//! Asmaul Husna command.

use console::style;
use karrom::app::AppConfig;
use karrom::catalog::AsmaulSource;
use karrom::clip::ClipText;

use super::common::start_session;
use crate::error::CliError;

/// List the 99 names, optionally filtered, or print one as copy text.
pub fn run(
    query: Option<String>,
    show: Option<u16>,
    bundled: bool,
    config: &AppConfig,
) -> Result<(), CliError> {
    let mut session = start_session(config)?;
    if bundled {
        session.set_asmaul_source(AsmaulSource::Bundled);
    }
    session.refresh_asmaul()?;
    let language = session.language();

    if let Some(index) = show {
        let name = session
            .asmaul_husna()
            .iter()
            .find(|name| name.index == index)
            .ok_or_else(|| CliError::NotFound(format!("Asmaul Husna #{}", index)))?;
        println!("{}", style(name.clip_label()).dim());
        println!("{}", name.clip_text(language));
        return Ok(());
    }

    session.set_asmaul_query(query.unwrap_or_default());
    for name in session.filtered_asmaul() {
        let meaning = match language.pick(&name.meaning_id, &name.meaning_en) {
            "" => name.meaning_id.as_str(),
            meaning => meaning,
        };
        println!(
            "{:>2}. {:<20} {:<14} {}",
            name.index,
            name.latin,
            name.arabic,
            style(meaning).dim()
        );
    }
    Ok(())
}
