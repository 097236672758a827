//! Points, sizes and conversions between coordinate spaces
//!
//! Three spaces are involved:
//! - normalized image space, where `(0, 0)` is the top-left corner of the image
//!   and `(1, 1)` the bottom-right one
//! - image-pixel space, the native resolution of the background image; this is
//!   the canonical space every stored point lives in
//! - device space, the on-screen size of the rendering surface, which may be
//!   scaled independently along each axis
//!
//! In all of them `y` grows downward.

use crate::error::{AnnotationError, Result};

/// A position in image-pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Translate the point by the given offset
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Width and height of a surface or image
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a size, rejecting non-positive or non-finite dimensions
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    fn validate(&self) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(AnnotationError::InvalidGeometry {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }
}

/// Map a click on the rendering surface to image-pixel space
///
/// `device_x`/`device_y` are relative to the surface's top-left corner. The X and Y
/// scale factors are independent, so a surface stretched non-uniformly still maps
/// correctly.
pub fn device_to_image_pixel(
    device_x: f64,
    device_y: f64,
    surface: Size,
    image: Size,
) -> Result<Point> {
    surface.validate()?;
    image.validate()?;

    let scale_x = image.width / surface.width;
    let scale_y = image.height / surface.height;
    Ok(Point::new(device_x * scale_x, device_y * scale_y))
}

/// Map a normalized coordinate to image-pixel space
///
/// Values outside `[0, 1]` are not clamped; they land off the image.
pub fn normalized_to_image_pixel(nx: f64, ny: f64, image: Size) -> Point {
    Point::new(nx * image.width, ny * image.height)
}

/// Map an image-pixel point to normalized coordinates
///
/// `image` is `None` while no background has been loaded yet.
pub fn image_pixel_to_normalized(point: Point, image: Option<Size>) -> Result<(f64, f64)> {
    let image = image.ok_or(AnnotationError::NoBackgroundImage)?;
    image.validate()?;
    Ok((point.x / image.width, point.y / image.height))
}
