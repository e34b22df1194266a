//! Daily prayer schedule command.

use chrono::{Local, NaiveDate, NaiveTime};
use console::style;
use karrom::app::AppConfig;
use karrom::location::NoGeocoder;
use karrom::prayer::format_minutes;

use super::common::{start_session, LocationArgs};
use crate::error::CliError;

/// Print the prayer schedule for a position and highlight the next prayer.
pub fn run(
    location: &LocationArgs,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    config: &AppConfig,
) -> Result<(), CliError> {
    let now = Local::now();
    let date = date.unwrap_or_else(|| now.date_naive());
    let time = time.unwrap_or_else(|| now.time());

    let mut session = start_session(config)?;
    session.locate(&location.provider()?, &NoGeocoder, date)?;

    let strings = session.strings();
    let language = session.language();
    let next = session.next_prayer(time);
    let Some(schedule) = session.schedule() else {
        return Err(CliError::NotFound("prayer schedule".to_string()));
    };

    println!("{}", style(strings.tab_prayer).bold());
    println!("{}  {}", session.location(), date.format("%d-%m-%Y"));
    println!();

    for entry in schedule.entries() {
        let line = format!("{:<10} {}", entry.name.label(language), entry.display_time());
        if Some(entry.name) == next {
            println!("{} {}", style(line).green().bold(), style("◀").green());
        } else {
            println!("{}", line);
        }
    }

    if let (Some(name), Some(minutes)) = (next, session.minutes_until_next(time)) {
        println!();
        println!(
            "{}: {} (-{})",
            strings.next_prayer,
            name.label(language),
            format_minutes(minutes)
        );
    }
    println!("{}", style(strings.prayer_source).dim());
    Ok(())
}
