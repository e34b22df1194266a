//! Sensor subscription and heading tracking for the qibla compass.
//!
//! Sensor callbacks arrive on whatever thread the platform chooses. They are
//! pushed through a [`SensorSink`] into a single-slot `watch` channel; the
//! rendering side drains the latest [`CompassReading`] once per frame.
//!
//! ```text
//! SensorSource ──deliver()──► SensorSink ──watch──► CompassSession ──► display
//!   (platform)                (fusion + bearing)     (latest value)
//! ```
//!
//! Closing a [`CompassSession`] closes the sink (dropping the channel
//! sender) and deregisters from the source. Once the sink is closed every
//! further delivery is rejected, so no reading can reach the consumer after
//! close even if the platform still has a callback in flight.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info};

use super::bearing::normalize_degrees;
use super::orientation::{heading_for, DisplayRotation, Vector3};

/// Errors raised when subscribing to device sensors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SensorError {
    #[error("Sensor unavailable: {0}")]
    Unavailable(String),

    #[error("Sensor registration failed: {0}")]
    RegistrationFailed(String),
}

/// One raw reading from a device sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorEvent {
    /// Gravity / acceleration estimate in m/s².
    Accelerometer(Vector3),
    /// Magnetic field estimate in µT.
    MagneticField(Vector3),
}

/// What the compass view draws for one heading update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassReading {
    /// Device heading, degrees clockwise from magnetic north.
    pub heading: f64,
    /// Rotation of the qibla pointer: bearing minus heading.
    pub pointer_angle: f64,
    /// Rotation of the north dial: minus heading.
    pub north_dial: f64,
}

impl CompassReading {
    /// Combines a qibla bearing with the current heading.
    pub fn new(bearing: f64, heading: f64) -> Self {
        Self {
            heading: normalize_degrees(heading),
            pointer_angle: normalize_degrees(bearing - heading),
            north_dial: normalize_degrees(-heading),
        }
    }
}

/// Keeps the latest gravity and magnetic readings and derives a heading.
#[derive(Debug, Clone, Default)]
pub struct HeadingFusion {
    gravity: Option<Vector3>,
    magnetic: Option<Vector3>,
    rotation: DisplayRotation,
}

impl HeadingFusion {
    pub fn new(rotation: DisplayRotation) -> Self {
        Self {
            gravity: None,
            magnetic: None,
            rotation,
        }
    }

    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.rotation = rotation;
    }

    /// Records a reading and returns the new heading once both sensors
    /// have reported and form a usable frame.
    pub fn update(&mut self, event: SensorEvent) -> Option<f64> {
        match event {
            SensorEvent::Accelerometer(v) => self.gravity = Some(v),
            SensorEvent::MagneticField(v) => self.magnetic = Some(v),
        }
        self.heading()
    }

    /// Heading from the most recent readings, if available.
    pub fn heading(&self) -> Option<f64> {
        match (&self.gravity, &self.magnetic) {
            (Some(g), Some(m)) => heading_for(g, m, self.rotation),
            _ => None,
        }
    }
}

/// Opaque handle identifying one sensor registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensorRegistration(u64);

impl SensorRegistration {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Platform sensor service.
///
/// Implementations call [`SensorSink::deliver`] from any thread for every
/// accelerometer and magnetometer reading until `unregister` is called.
pub trait SensorSource: Send + Sync {
    /// Starts delivering readings into `sink`.
    fn register(&self, sink: SensorSink) -> Result<SensorRegistration, SensorError>;

    /// Stops delivering readings for `registration`.
    fn unregister(&self, registration: SensorRegistration);
}

struct SinkState {
    fusion: HeadingFusion,
    bearing: f64,
    readings: watch::Sender<Option<CompassReading>>,
}

/// Thread-safe handle the platform delivers readings into.
#[derive(Clone)]
pub struct SensorSink {
    state: Arc<Mutex<Option<SinkState>>>,
}

impl SensorSink {
    fn new(state: SinkState) -> Self {
        Self {
            state: Arc::new(Mutex::new(Some(state))),
        }
    }

    /// Delivers one reading.
    ///
    /// Returns `false` once the owning session is closed; the reading is
    /// dropped in that case.
    pub fn deliver(&self, event: SensorEvent) -> bool {
        let mut guard = self.state.lock();
        let Some(state) = guard.as_mut() else {
            return false;
        };

        if let Some(heading) = state.fusion.update(event) {
            state
                .readings
                .send_replace(Some(CompassReading::new(state.bearing, heading)));
        }
        true
    }

    /// True while the owning session is open.
    pub fn is_open(&self) -> bool {
        self.state.lock().is_some()
    }

    fn set_rotation(&self, rotation: DisplayRotation) {
        if let Some(state) = self.state.lock().as_mut() {
            state.fusion.set_rotation(rotation);
            if let Some(heading) = state.fusion.heading() {
                state
                    .readings
                    .send_replace(Some(CompassReading::new(state.bearing, heading)));
            }
        }
    }

    /// Closes the sink, dropping the channel sender. Returns whether it was
    /// still open.
    fn close(&self) -> bool {
        self.state.lock().take().is_some()
    }
}

/// A live compass subscription, owned by the compass view.
///
/// Dropping the session has the same effect as [`CompassSession::close`].
pub struct CompassSession<S: SensorSource + ?Sized> {
    source: Arc<S>,
    sink: SensorSink,
    registration: Option<SensorRegistration>,
    readings: watch::Receiver<Option<CompassReading>>,
    bearing: f64,
}

impl<S: SensorSource + ?Sized> CompassSession<S> {
    /// Subscribes to `source` and starts tracking against `bearing`.
    pub fn open(
        source: Arc<S>,
        bearing: f64,
        rotation: DisplayRotation,
    ) -> Result<Self, SensorError> {
        let bearing = normalize_degrees(bearing);
        let (tx, rx) = watch::channel(None);
        let sink = SensorSink::new(SinkState {
            fusion: HeadingFusion::new(rotation),
            bearing,
            readings: tx,
        });

        let registration = match source.register(sink.clone()) {
            Ok(registration) => registration,
            Err(e) => {
                sink.close();
                return Err(e);
            }
        };

        info!(
            registration = registration.id(),
            bearing,
            rotation = %rotation,
            "Compass session opened"
        );

        Ok(Self {
            source,
            sink,
            registration: Some(registration),
            readings: rx,
            bearing,
        })
    }

    /// The qibla bearing this session tracks against.
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    /// Latest reading, if both sensors have reported.
    pub fn latest(&self) -> Option<CompassReading> {
        *self.readings.borrow()
    }

    /// Returns the latest reading if it changed since the previous call.
    pub fn take_update(&mut self) -> Option<CompassReading> {
        match self.readings.has_changed() {
            Ok(true) => *self.readings.borrow_and_update(),
            _ => None,
        }
    }

    /// Applies a new display rotation to subsequent (and the current) heading.
    pub fn set_display_rotation(&self, rotation: DisplayRotation) {
        debug!(rotation = %rotation, "Compass display rotation changed");
        self.sink.set_rotation(rotation);
    }

    /// True until the session is closed.
    pub fn is_open(&self) -> bool {
        self.registration.is_some()
    }

    /// Closes the channel and deregisters from the sensor source.
    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(registration) = self.registration.take() else {
            return;
        };

        // Closing the sink first cuts off deliveries racing with unregister.
        self.sink.close();
        self.source.unregister(registration);

        info!(registration = registration.id(), "Compass session closed");
    }
}

impl<S: SensorSource + ?Sized> Drop for CompassSession<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
