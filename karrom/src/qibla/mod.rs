//! Qibla direction and compass
//!
//! Combines a static great-circle bearing towards the Kaaba with a live
//! device heading derived from accelerometer and magnetometer readings.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use karrom::coord::Coordinate;
//! use karrom::qibla::{qibla_bearing, CompassSession, DisplayRotation};
//!
//! let here = Coordinate::new(-6.2088, 106.8456)?;
//! let bearing = qibla_bearing(&here);
//!
//! let mut compass = CompassSession::open(Arc::new(platform_sensors), bearing, DisplayRotation::Rotation0)?;
//! // once per frame
//! if let Some(reading) = compass.take_update() {
//!     draw_pointer(reading.pointer_angle);
//! }
//! compass.close();
//! ```

mod bearing;
mod orientation;
mod smoothing;
mod tracker;

pub use bearing::{
    great_circle_distance_km, initial_bearing, normalize_degrees, qibla_bearing, EARTH_RADIUS_KM,
};
pub use orientation::{heading_for, DisplayRotation, RotationMatrix, Vector3};
pub use smoothing::{shortest_delta, AngleEaser, DEFAULT_EASE_DURATION};
pub use tracker::{
    CompassReading, CompassSession, HeadingFusion, SensorError, SensorEvent, SensorRegistration,
    SensorSink, SensorSource,
};

#[cfg(test)]
pub(crate) use tracker::tests::ManualSensorSource;
