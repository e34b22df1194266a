//! Eased interpolation between successive display angles.
//!
//! Purely presentational: sensor headings jitter by a few degrees between
//! callbacks, so the compass dial glides towards each new target over a
//! short window instead of jumping.

use std::time::{Duration, Instant};

use super::bearing::normalize_degrees;

/// Default animation window for a new target.
pub const DEFAULT_EASE_DURATION: Duration = Duration::from_millis(200);

/// Interpolates an angle towards a target along the shortest arc.
#[derive(Debug, Clone)]
pub struct AngleEaser {
    duration: Duration,
    start_angle: f64,
    target_angle: f64,
    started_at: Option<Instant>,
}

impl AngleEaser {
    /// Creates an easer resting at `initial` degrees.
    pub fn new(initial: f64, duration: Duration) -> Self {
        let initial = normalize_degrees(initial);
        Self {
            duration,
            start_angle: initial,
            target_angle: initial,
            started_at: None,
        }
    }

    /// Starts moving from the current displayed angle towards `target`.
    pub fn retarget(&mut self, target: f64, now: Instant) {
        self.start_angle = self.value_at(now);
        self.target_angle = normalize_degrees(target);
        self.started_at = Some(now);
    }

    /// The target the easer is moving towards.
    pub fn target(&self) -> f64 {
        self.target_angle
    }

    /// Displayed angle at `now`, in `[0, 360)`.
    pub fn value_at(&self, now: Instant) -> f64 {
        let Some(started_at) = self.started_at else {
            return self.target_angle;
        };

        let progress = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(started_at);
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };

        let delta = shortest_delta(self.start_angle, self.target_angle);
        normalize_degrees(self.start_angle + delta * ease_out_cubic(progress))
    }

    /// True once the animation reached its target.
    pub fn is_settled(&self, now: Instant) -> bool {
        match self.started_at {
            None => true,
            Some(started_at) => now.saturating_duration_since(started_at) >= self.duration,
        }
    }
}

impl Default for AngleEaser {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_EASE_DURATION)
    }
}

/// Signed difference `to - from` folded into `(-180, 180]`.
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    let delta = normalize_degrees(to - from);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

#[inline]
fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
