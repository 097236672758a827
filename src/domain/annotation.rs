//! Angle annotation records
//!
//! All annotation types store coordinates in image-pixel space.

use super::angle::{AngleMeasurement, compute_angle};
use super::geometry::Point;

/// A measured point pair, created when the second point of a pair arrives
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleAnnotation {
    pub point1: Point,
    pub point2: Point,
    /// Direction of `point1 -> point2` in degrees, y-down convention
    pub angle_degrees: f64,
    /// Distance between the two points in image pixels
    pub line_length: f64,
}

impl AngleAnnotation {
    /// Measure a pair and record it
    pub fn from_pair(point1: Point, point2: Point) -> Self {
        let AngleMeasurement {
            angle_degrees,
            line_length,
        } = compute_angle(point1, point2);
        Self {
            point1,
            point2,
            angle_degrees,
            line_length,
        }
    }

    pub fn measurement(&self) -> AngleMeasurement {
        AngleMeasurement {
            angle_degrees: self.angle_degrees,
            line_length: self.line_length,
        }
    }

    /// Angle label text, rounded to two decimals
    pub fn label(&self) -> String {
        format_degrees(self.angle_degrees)
    }

    /// Human readable description of both endpoints
    pub fn points_summary(&self) -> String {
        format!(
            "Points on screen: ({:.2}, {:.2}) and ({:.2}, {:.2})",
            self.point1.x, self.point1.y, self.point2.x, self.point2.y
        )
    }
}

/// Format an angle as `"{degrees:.2}°"`
pub fn format_degrees(degrees: f64) -> String {
    format!("{degrees:.2}°")
}
