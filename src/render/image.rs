//! Raster rendering of markers and angle overlays using tiny-skia
//!
//! [`Canvas`] is a drawing surface that consumes render commands and keeps the
//! composited result as an `RgbaImage`, ready to display or save.

use std::path::Path;

use anyhow::Context;
use image::{Rgba, RgbaImage};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform,
};

use super::Renderer;
use super::geometry::{self, overlay};
use crate::capture::image::BackgroundImage;
use crate::config::ShapeColor;
use crate::domain::Point;
use crate::session::messages::OverlayInstruction;

/// Text placed on the surface
///
/// tiny-skia has no text support, so labels are kept as a separate layer for
/// the display front-end to draw on top of the raster.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Point,
    pub color: ShapeColor,
    pub font_size: f32,
}

/// Convert RgbaImage to Pixmap, apply drawing function, and copy back
fn with_pixmap(img: &mut RgbaImage, f: impl FnOnce(&mut Pixmap)) {
    let (w, h) = (img.width(), img.height());
    let Some(size) = tiny_skia::IntSize::from_wh(w, h) else {
        return;
    };
    let Some(mut pixmap) = Pixmap::from_vec(img.as_raw().clone(), size) else {
        return;
    };

    f(&mut pixmap);

    // Copy back
    img.copy_from_slice(pixmap.data());
}

fn paint_for(color: ShapeColor) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn line_path(from: Point, to: Point) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(from.x as f32, from.y as f32);
    pb.line_to(to.x as f32, to.y as f32);
    pb.finish()
}

fn arc_path(center: Point, sweep: f32) -> Option<tiny_skia::Path> {
    let points = geometry::arc_points(center.x as f32, center.y as f32, overlay::ARC_RADIUS, sweep);
    let (&(x0, y0), rest) = points.split_first()?;

    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    pb.finish()
}

/// Draw a filled point marker
pub fn draw_marker_on_image(img: &mut RgbaImage, point: Point, color: ShapeColor) {
    with_pixmap(img, |pixmap| {
        let Some(path) =
            PathBuilder::from_circle(point.x as f32, point.y as f32, overlay::MARKER_RADIUS)
        else {
            return;
        };
        pixmap.fill_path(
            &path,
            &paint_for(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    });
}

/// Draw connector, dashed reference lines and arc for one measured pair
///
/// Colors and stroke width come from the instruction. Zero-length pieces (a
/// degenerate pair) are skipped.
pub fn draw_overlay_on_image(img: &mut RgbaImage, instruction: &OverlayInstruction) {
    let style = &instruction.style;
    with_pixmap(img, |pixmap| {
        let solid = Stroke {
            width: style.line_width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };

        if let Some(path) = line_path(instruction.p1, instruction.p2) {
            pixmap.stroke_path(
                &path,
                &paint_for(style.connector_color),
                &solid,
                Transform::identity(),
                None,
            );
        }

        let dashed = Stroke {
            width: style.line_width,
            dash: StrokeDash::new(overlay::DASH.to_vec(), 0.0),
            ..Default::default()
        };
        let references = [
            instruction.horizontal_reference_end(),
            instruction.vertical_reference_end(),
        ];
        for end in references {
            if let Some(path) = line_path(instruction.p1, end) {
                pixmap.stroke_path(
                    &path,
                    &paint_for(style.reference_color),
                    &dashed,
                    Transform::identity(),
                    None,
                );
            }
        }

        if let Some(path) = arc_path(instruction.p1, instruction.angle_radians() as f32) {
            pixmap.stroke_path(
                &path,
                &paint_for(style.arc_color),
                &solid,
                Transform::identity(),
                None,
            );
        }
    });
}

/// A raster surface showing a background image with angle overlays
#[derive(Debug, Clone)]
pub struct Canvas {
    surface: RgbaImage,
    labels: Vec<TextLabel>,
}

impl Canvas {
    /// Create a transparent surface of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: RgbaImage::new(width, height),
            labels: Vec::new(),
        }
    }

    /// The composited surface, without text labels
    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Write the composited surface to disk as PNG
    pub fn save_png(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.surface
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("saving annotated image to {}", path.display()))?;
        log::info!(
            "Saved {}x{} annotated image to {}",
            self.surface.width(),
            self.surface.height(),
            path.display()
        );
        Ok(())
    }
}

impl Renderer for Canvas {
    fn draw_marker(&mut self, point: Point, color: ShapeColor) {
        draw_marker_on_image(&mut self.surface, point, color);
    }

    fn draw_overlay(&mut self, instruction: &OverlayInstruction) {
        draw_overlay_on_image(&mut self.surface, instruction);
        self.labels.push(TextLabel {
            text: instruction.label(),
            position: instruction.label_position(),
            color: instruction.style.label_color,
            font_size: overlay::LABEL_FONT_SIZE,
        });
    }

    fn reset_surface(&mut self, image: &BackgroundImage) {
        self.surface = image.rgba().clone();
        self.labels.clear();
    }

    fn clear_surface(&mut self) {
        for pixel in self.surface.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
        self.labels.clear();
    }
}
