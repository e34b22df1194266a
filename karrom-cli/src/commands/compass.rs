//! Live qibla compass fed by sensor readings on stdin.
//!
//! Each input line carries one reading in device coordinates:
//!
//! ```text
//! acc 0.0 0.0 9.81
//! mag 0.0 22.0 -40.0
//! ```
//!
//! Readings are dispatched from a reader thread, the way a platform sensor
//! service calls back on its own thread. The command runs until stdin is
//! closed or Ctrl+C is pressed.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use console::style;
use karrom::app::AppConfig;
use karrom::location::NoGeocoder;
use karrom::qibla::{
    AngleEaser, DisplayRotation, SensorError, SensorEvent, SensorRegistration, SensorSink,
    SensorSource, Vector3, DEFAULT_EASE_DURATION,
};
use parking_lot::Mutex;
use tracing::{debug, info};

use super::common::{start_session, LocationArgs};
use crate::error::CliError;

const FRAME_INTERVAL: Duration = Duration::from_millis(50);

// ============================================================================
// Sensor source
// ============================================================================

/// Sensor source whose readings are pushed in by a line reader.
#[derive(Default)]
pub struct StdinSensorSource {
    next_id: AtomicU64,
    sinks: Mutex<HashMap<u64, SensorSink>>,
}

impl StdinSensorSource {
    /// Delivers a reading to every registered sink; returns how many took it.
    pub fn dispatch(&self, event: SensorEvent) -> usize {
        let sinks: Vec<SensorSink> = self.sinks.lock().values().cloned().collect();
        sinks.iter().filter(|sink| sink.deliver(event)).count()
    }

    /// Number of live registrations.
    pub fn registrations(&self) -> usize {
        self.sinks.lock().len()
    }
}

impl SensorSource for StdinSensorSource {
    fn register(&self, sink: SensorSink) -> Result<SensorRegistration, SensorError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.sinks.lock().insert(id, sink);
        Ok(SensorRegistration::new(id))
    }

    fn unregister(&self, registration: SensorRegistration) {
        self.sinks.lock().remove(&registration.id());
    }
}

/// Parses one `acc|mag x y z` line. Blank lines and `#` comments yield `None`.
pub fn parse_sensor_line(line: &str) -> Result<Option<SensorEvent>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let kind = parts.next().unwrap_or_default();
    let values = parts
        .map(|p| p.parse::<f64>().map_err(|_| format!("invalid number '{}'", p)))
        .collect::<Result<Vec<f64>, String>>()?;

    let [x, y, z] = values.as_slice() else {
        return Err(format!("expected 3 components, got {}", values.len()));
    };
    let vector = Vector3::new(*x, *y, *z);

    match kind.to_lowercase().as_str() {
        "acc" | "accel" => Ok(Some(SensorEvent::Accelerometer(vector))),
        "mag" => Ok(Some(SensorEvent::MagneticField(vector))),
        other => Err(format!("unknown sensor '{}'", other)),
    }
}

fn spawn_reader(source: Arc<StdinSensorSource>, finished: Arc<AtomicBool>) {
    thread::spawn(move || {
        for (number, line) in io::stdin().lock().lines().enumerate() {
            let Ok(line) = line else { break };
            match parse_sensor_line(&line) {
                Ok(Some(event)) => {
                    source.dispatch(event);
                }
                Ok(None) => {}
                Err(reason) => debug!(line = number + 1, %reason, "Skipping sensor line"),
            }
        }
        finished.store(true, Ordering::SeqCst);
    });
}

// ============================================================================
// Command
// ============================================================================

/// Run the compass until input ends or the user interrupts.
pub fn run(
    location: &LocationArgs,
    rotation: Option<DisplayRotation>,
    config: &AppConfig,
) -> Result<(), CliError> {
    let mut session = start_session(config)?;
    session.resolve_location(&location.provider()?, &NoGeocoder)?;

    let rotation = rotation.unwrap_or(config.display_rotation);
    let source = Arc::new(StdinSensorSource::default());
    let mut compass = session.open_compass(Arc::clone(&source), rotation)?;

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))
            .map_err(|e| CliError::Compass(format!("failed to install Ctrl+C handler: {}", e)))?;
    }

    let finished = Arc::new(AtomicBool::new(false));
    spawn_reader(Arc::clone(&source), Arc::clone(&finished));

    println!(
        "Qibla bearing {:.2}° from {} (rotation {}°)",
        compass.bearing(),
        session.location(),
        rotation
    );
    println!("{}", style("Reading sensors from stdin, Ctrl+C to stop").dim());

    let mut pointer: Option<AngleEaser> = None;
    let mut heading = 0.0;
    let mut stdout = io::stdout();

    while running.load(Ordering::SeqCst) {
        let now = Instant::now();
        if let Some(reading) = compass.take_update() {
            heading = reading.heading;
            match pointer.as_mut() {
                Some(easer) => easer.retarget(reading.pointer_angle, now),
                None => {
                    pointer = Some(AngleEaser::new(reading.pointer_angle, DEFAULT_EASE_DURATION))
                }
            }
        }

        if let Some(easer) = &pointer {
            let angle = easer.value_at(now);
            print!(
                "\rheading {:>6.1}°  qibla pointer {:>6.1}° {}   ",
                heading,
                angle,
                arrow(angle)
            );
            // A closed stdout only loses frames.
            let _ = stdout.flush();
        }

        let settled = pointer.as_ref().map_or(true, |easer| easer.is_settled(now));
        if finished.load(Ordering::SeqCst) && settled {
            break;
        }
        thread::sleep(FRAME_INTERVAL);
    }
    println!();

    compass.close();
    info!(registrations = source.registrations(), "Compass stopped");
    Ok(())
}

/// Nearest of eight arrows for a screen angle, clockwise from up.
fn arrow(angle: f64) -> char {
    const ARROWS: [char; 8] = ['↑', '↗', '→', '↘', '↓', '↙', '←', '↖'];
    let sector = ((angle + 22.5).rem_euclid(360.0) / 45.0) as usize;
    ARROWS[sector % 8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sensor_lines() {
        assert_eq!(
            parse_sensor_line("acc 0 0 9.81").unwrap(),
            Some(SensorEvent::Accelerometer(Vector3::new(0.0, 0.0, 9.81)))
        );
        assert_eq!(
            parse_sensor_line("  MAG 0.0 22.0 -40.0 ").unwrap(),
            Some(SensorEvent::MagneticField(Vector3::new(0.0, 22.0, -40.0)))
        );
        assert_eq!(parse_sensor_line("").unwrap(), None);
        assert_eq!(parse_sensor_line("# header").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(parse_sensor_line("acc 1 2").is_err());
        assert!(parse_sensor_line("acc 1 2 x").is_err());
        assert!(parse_sensor_line("gyro 1 2 3").is_err());
    }

    #[test]
    fn test_arrow_sectors() {
        assert_eq!(arrow(0.0), '↑');
        assert_eq!(arrow(359.0), '↑');
        assert_eq!(arrow(90.0), '→');
        assert_eq!(arrow(295.15), '↖');
    }

    #[test]
    fn test_dispatch_reaches_open_compass_only() {
        let source = Arc::new(StdinSensorSource::default());
        let sink_source = Arc::clone(&source);
        let mut compass = karrom::qibla::CompassSession::open(
            sink_source,
            295.15,
            DisplayRotation::Rotation0,
        )
        .unwrap();

        assert_eq!(
            source.dispatch(SensorEvent::Accelerometer(Vector3::new(0.0, 0.0, 9.81))),
            1
        );
        source.dispatch(SensorEvent::MagneticField(Vector3::new(0.0, 22.0, -40.0)));
        let reading = compass.take_update().unwrap();
        assert!((reading.pointer_angle - 295.15).abs() < 0.1);

        compass.close();
        assert_eq!(source.registrations(), 0);
        assert_eq!(
            source.dispatch(SensorEvent::MagneticField(Vector3::new(0.0, 22.0, -40.0))),
            0
        );
    }
}
