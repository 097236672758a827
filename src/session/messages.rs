//! Render instructions emitted by the session
//!
//! The session never draws anything itself. Every state change yields
//! [`RenderCommand`]s for whichever collaborator owns the drawing surface, to be
//! applied in order.

use crate::capture::image::BackgroundImage;
use crate::config::{OverlayStyle, ShapeColor};
use crate::domain::{AngleAnnotation, Point, format_degrees};
use crate::render::geometry::overlay;

/// Everything needed to draw one measured pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayInstruction {
    pub p1: Point,
    pub p2: Point,
    pub angle_degrees: f64,
    pub line_length: f64,
    /// Colors and stroke width of the session that measured the pair
    pub style: OverlayStyle,
}

impl OverlayInstruction {
    pub fn new(annotation: &AngleAnnotation, style: OverlayStyle) -> Self {
        Self {
            p1: annotation.point1,
            p2: annotation.point2,
            angle_degrees: annotation.angle_degrees,
            line_length: annotation.line_length,
            style,
        }
    }

    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees.to_radians()
    }

    /// End of the dashed horizontal reference line (starts at `p1`)
    pub fn horizontal_reference_end(&self) -> Point {
        self.p1.offset(self.line_length, 0.0)
    }

    /// End of the dashed vertical reference line (starts at `p1`, extends upward)
    pub fn vertical_reference_end(&self) -> Point {
        self.p1.offset(0.0, -self.line_length)
    }

    /// Label text, e.g. `"33.69°"`
    pub fn label(&self) -> String {
        format_degrees(self.angle_degrees)
    }

    /// Anchor of the label, at a fixed offset from `p1`
    pub fn label_position(&self) -> Point {
        self.p1.offset(overlay::LABEL_OFFSET_X, overlay::LABEL_OFFSET_Y)
    }
}

/// A side effect request for the rendering collaborator
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw a point marker
    DrawMarker { point: Point, color: ShapeColor },
    /// Draw connector, reference lines, arc and label for a completed pair
    DrawOverlay(OverlayInstruction),
    /// Resize the surface to the image, draw it at the origin and drop all overlay
    ResetSurface(BackgroundImage),
    /// Drop all overlay when there is no image to go back to
    ClearSurface,
}
