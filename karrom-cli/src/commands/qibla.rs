//! Qibla direction command.

use karrom::app::AppConfig;
use karrom::location::NoGeocoder;

use super::common::{start_session, LocationArgs};
use crate::error::CliError;

/// Print the qibla bearing and the distance to the Kaaba.
pub fn run(location: &LocationArgs, config: &AppConfig) -> Result<(), CliError> {
    let mut session = start_session(config)?;
    session.resolve_location(&location.provider()?, &NoGeocoder)?;

    let (Some(bearing), Some(distance)) = (session.qibla_bearing(), session.qibla_distance_km())
    else {
        return Err(CliError::Location("no resolved location".to_string()));
    };

    println!("Location: {}", session.location());
    println!("Qibla:    {:.2}° from true north", bearing);
    println!("Distance: {:.0} km", distance);
    Ok(())
}
