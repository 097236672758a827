//! Annotation rendering module
//!
//! This module contains:
//! - The [`Renderer`] trait, implemented by whatever owns the drawing surface
//! - Geometry shared by render instructions and raster output
//! - Raster rendering using tiny-skia

pub mod geometry;
pub mod image;

use crate::capture::image::BackgroundImage;
use crate::config::ShapeColor;
use crate::domain::Point;
use crate::session::messages::{OverlayInstruction, RenderCommand};

/// Consumer of the render instructions emitted by a session
pub trait Renderer {
    fn draw_marker(&mut self, point: Point, color: ShapeColor);

    /// Draw the connector, both dashed reference lines, the arc and the label
    fn draw_overlay(&mut self, instruction: &OverlayInstruction);

    /// Resize to the image, draw it at the origin and drop all overlay
    fn reset_surface(&mut self, image: &BackgroundImage);

    /// Drop all overlay, leaving an empty surface
    fn clear_surface(&mut self);

    fn apply(&mut self, command: &RenderCommand) {
        match command {
            RenderCommand::DrawMarker { point, color } => self.draw_marker(*point, *color),
            RenderCommand::DrawOverlay(instruction) => self.draw_overlay(instruction),
            RenderCommand::ResetSurface(image) => self.reset_surface(image),
            RenderCommand::ClearSurface => self.clear_surface(),
        }
    }

    fn apply_all(&mut self, commands: &[RenderCommand]) {
        for command in commands {
            self.apply(command);
        }
    }
}
