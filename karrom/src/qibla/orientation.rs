//! Device orientation from gravity and magnetic-field vectors.
//!
//! The rotation matrix maps device coordinates to world coordinates
//! (East, North, Up). Its rows are the world axes expressed in the device
//! frame, so the azimuth of any device axis can be read directly from it.
//!
//! Before the azimuth is extracted the matrix is remapped for the current
//! display rotation, so that the heading follows what is visually "up" on
//! screen. Without the remap a landscape display reports a heading that is
//! off by the rotation angle.

use std::fmt;
use std::str::FromStr;

use super::bearing::normalize_degrees;

/// Minimum norm of `magnetic × gravity` for a usable matrix.
///
/// Below this the device is in free fall or the field is nearly parallel to
/// gravity (close to a magnetic pole) and the heading is meaningless.
const MIN_HORIZONTAL_NORM: f64 = 0.1;

/// A 3-axis sensor reading in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[inline]
    fn scaled(&self, factor: f64) -> Vector3 {
        Vector3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    #[inline]
    fn negated(&self) -> Vector3 {
        self.scaled(-1.0)
    }
}

/// Rotation of the display relative to the device's natural orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayRotation {
    #[default]
    Rotation0,
    Rotation90,
    Rotation180,
    Rotation270,
}

impl DisplayRotation {
    /// All rotations in increasing angle.
    pub const ALL: [DisplayRotation; 4] = [
        DisplayRotation::Rotation0,
        DisplayRotation::Rotation90,
        DisplayRotation::Rotation180,
        DisplayRotation::Rotation270,
    ];

    /// Rotation angle in degrees.
    pub fn degrees(&self) -> u16 {
        match self {
            DisplayRotation::Rotation0 => 0,
            DisplayRotation::Rotation90 => 90,
            DisplayRotation::Rotation180 => 180,
            DisplayRotation::Rotation270 => 270,
        }
    }

    /// Maps an angle in degrees to a rotation, if it is one of 0/90/180/270.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(DisplayRotation::Rotation0),
            90 => Some(DisplayRotation::Rotation90),
            180 => Some(DisplayRotation::Rotation180),
            270 => Some(DisplayRotation::Rotation270),
            _ => None,
        }
    }
}

impl fmt::Display for DisplayRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

impl FromStr for DisplayRotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(DisplayRotation::from_degrees)
            .ok_or_else(|| format!("display rotation must be 0, 90, 180 or 270, got '{}'", s))
    }
}

/// A 3×3 rotation matrix, row-major.
///
/// Rows are East, North and Up expressed in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix {
    m: [[f64; 3]; 3],
}

impl RotationMatrix {
    /// The identity matrix: device axes aligned with East/North/Up.
    pub const IDENTITY: RotationMatrix = RotationMatrix {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Builds the rotation matrix from a gravity and a magnetic-field vector.
    ///
    /// Gravity defines "up" (the accelerometer reads +g along the axis
    /// pointing away from the ground), the magnetic field defines
    /// "approximately north", and their cross product completes the frame.
    ///
    /// Returns `None` when the vectors cannot define a frame (free fall,
    /// zero vectors, or a field parallel to gravity).
    pub fn from_gravity_and_magnetic(gravity: &Vector3, magnetic: &Vector3) -> Option<Self> {
        let east = magnetic.cross(gravity);
        let east_norm = east.norm();
        let gravity_norm = gravity.norm();
        if !(east_norm >= MIN_HORIZONTAL_NORM) || !(gravity_norm > 0.0) {
            return None;
        }

        let east = east.scaled(1.0 / east_norm);
        let up = gravity.scaled(1.0 / gravity_norm);
        let north = up.cross(&east);

        Some(Self::from_rows(east, north, up))
    }

    fn from_rows(east: Vector3, north: Vector3, up: Vector3) -> Self {
        Self {
            m: [
                [east.x, east.y, east.z],
                [north.x, north.y, north.z],
                [up.x, up.y, up.z],
            ],
        }
    }

    fn column(&self, index: usize) -> Vector3 {
        Vector3::new(self.m[0][index], self.m[1][index], self.m[2][index])
    }

    fn from_columns(x: Vector3, y: Vector3, z: Vector3) -> Self {
        Self {
            m: [[x.x, y.x, z.x], [x.y, y.y, z.y], [x.z, y.z, z.z]],
        }
    }

    /// Element at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[row][col]
    }

    /// Remaps the device axes so the matrix describes the display frame.
    ///
    /// | rotation | new X | new Y |
    /// |----------|-------|-------|
    /// | 0        | X     | Y     |
    /// | 90       | Y     | -X    |
    /// | 180      | -X    | -Y    |
    /// | 270      | -Y    | X     |
    ///
    /// The new Z axis is `new X × new Y`, which is the device Z in every
    /// case.
    pub fn remapped_for(&self, rotation: DisplayRotation) -> Self {
        let x = self.column(0);
        let y = self.column(1);
        let z = self.column(2);

        match rotation {
            DisplayRotation::Rotation0 => *self,
            DisplayRotation::Rotation90 => Self::from_columns(y, x.negated(), z),
            DisplayRotation::Rotation180 => Self::from_columns(x.negated(), y.negated(), z),
            DisplayRotation::Rotation270 => Self::from_columns(y.negated(), x, z),
        }
    }

    /// Azimuth of the Y axis, degrees clockwise from north in `[0, 360)`.
    pub fn azimuth_degrees(&self) -> f64 {
        normalize_degrees(self.m[0][1].atan2(self.m[1][1]).to_degrees())
    }
}

/// Computes the on-screen heading for one pair of sensor readings.
///
/// Returns `None` when the readings cannot define an orientation.
pub fn heading_for(
    gravity: &Vector3,
    magnetic: &Vector3,
    rotation: DisplayRotation,
) -> Option<f64> {
    RotationMatrix::from_gravity_and_magnetic(gravity, magnetic)
        .map(|matrix| matrix.remapped_for(rotation).azimuth_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Device lying flat, screen up, top edge pointing to magnetic north.
    const FLAT_GRAVITY: Vector3 = Vector3::new(0.0, 0.0, 9.81);
    const FLAT_NORTH_FIELD: Vector3 = Vector3::new(0.0, 22.0, -40.0);

    fn assert_angle_eq(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        let diff = diff.min(360.0 - diff);
        assert!(diff < 1e-6, "expected {}°, got {}°", expected, actual);
    }

    #[test]
    fn test_flat_device_facing_north_is_identity() {
        let m = RotationMatrix::from_gravity_and_magnetic(&FLAT_GRAVITY, &FLAT_NORTH_FIELD)
            .unwrap();
        for row in 0..3 {
            for col in 0..3 {
                assert!((m.get(row, col) - RotationMatrix::IDENTITY.get(row, col)).abs() < 1e-9);
            }
        }
        assert_angle_eq(m.azimuth_degrees(), 0.0);
    }

    #[test]
    fn test_heading_follows_device_yaw() {
        // Top edge pointing east: the field is seen along -X.
        let field = Vector3::new(-22.0, 0.0, -40.0);
        let heading = heading_for(&FLAT_GRAVITY, &field, DisplayRotation::Rotation0).unwrap();
        assert_angle_eq(heading, 90.0);

        // Top edge pointing west: field along +X.
        let field = Vector3::new(22.0, 0.0, -40.0);
        let heading = heading_for(&FLAT_GRAVITY, &field, DisplayRotation::Rotation0).unwrap();
        assert_angle_eq(heading, 270.0);
    }

    #[test]
    fn test_each_display_rotation_shifts_heading() {
        let expected = [0.0, 270.0, 180.0, 90.0];
        let mut seen = Vec::new();

        for (rotation, expected) in DisplayRotation::ALL.iter().zip(expected) {
            let heading = heading_for(&FLAT_GRAVITY, &FLAT_NORTH_FIELD, *rotation).unwrap();
            assert_angle_eq(heading, expected);
            // Heading differs from the unrotated one by exactly the rotation.
            assert_angle_eq(normalize_degrees(heading + rotation.degrees() as f64), 0.0);
            seen.push(heading.round() as i64);
        }

        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4, "all four rotations must differ");
    }

    #[test]
    fn test_remap_applies_to_arbitrary_yaw() {
        // Top edge pointing east.
        let field = Vector3::new(-22.0, 0.0, -40.0);
        for rotation in DisplayRotation::ALL {
            let heading = heading_for(&FLAT_GRAVITY, &field, rotation).unwrap();
            let expected = normalize_degrees(90.0 - rotation.degrees() as f64);
            assert_angle_eq(heading, expected);
        }
    }

    #[test]
    fn test_free_fall_has_no_orientation() {
        let zero = Vector3::default();
        assert!(RotationMatrix::from_gravity_and_magnetic(&zero, &FLAT_NORTH_FIELD).is_none());
    }

    #[test]
    fn test_field_parallel_to_gravity_has_no_orientation() {
        let field = Vector3::new(0.0, 0.0, -45.0);
        assert!(heading_for(&FLAT_GRAVITY, &field, DisplayRotation::Rotation0).is_none());
    }

    #[test]
    fn test_nan_input_has_no_orientation() {
        let field = Vector3::new(f64::NAN, 22.0, -40.0);
        assert!(heading_for(&FLAT_GRAVITY, &field, DisplayRotation::Rotation0).is_none());
    }

    #[test]
    fn test_display_rotation_parsing() {
        assert_eq!("90".parse::<DisplayRotation>(), Ok(DisplayRotation::Rotation90));
        assert_eq!(" 270 ".parse::<DisplayRotation>(), Ok(DisplayRotation::Rotation270));
        assert!("45".parse::<DisplayRotation>().is_err());
        assert!("north".parse::<DisplayRotation>().is_err());
        assert_eq!(DisplayRotation::Rotation180.to_string(), "180");
    }
}
