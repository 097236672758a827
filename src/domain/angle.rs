//! Angle between two points
//!
//! Angles follow the `atan2` convention in image-pixel space: `0°` means the second
//! point lies directly to the right of the first one, and positive angles rotate
//! toward increasing `y`. Because image `y` grows downward, a positive angle points
//! *down* the screen (clockwise as seen by the user). The sign is not flipped to a
//! mathematical y-up convention.

use std::f64::consts::PI;

use super::geometry::Point;

/// Direction and length of the segment from one point to another
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AngleMeasurement {
    /// Direction in degrees, in `(-180, 180]`
    pub angle_degrees: f64,
    /// Euclidean distance between the two points
    pub line_length: f64,
}

impl AngleMeasurement {
    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees * PI / 180.0
    }
}

/// Measure the direction and length of the segment `p1 -> p2`
///
/// Coincident points give `0°` and length `0` rather than an error.
pub fn compute_angle(p1: Point, p2: Point) -> AngleMeasurement {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    // atan2 of signed zeros can yield ±180°
    if dx == 0.0 && dy == 0.0 {
        return AngleMeasurement::default();
    }

    let radians = dy.atan2(dx);
    let mut angle_degrees = if radians.abs() == PI {
        180.0
    } else {
        radians * 180.0 / PI
    };
    // Rounding just above -PI can still land on -180
    if angle_degrees <= -180.0 {
        angle_degrees = 180.0;
    }
    // atan2(-0.0, x > 0) is -0.0, which formats as "-0.00°"
    if angle_degrees == 0.0 {
        angle_degrees = 0.0;
    }

    AngleMeasurement {
        angle_degrees,
        line_length: p1.distance(p2),
    }
}
