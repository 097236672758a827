//! Background image handle for the annotation surface

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use image::RgbaImage;

use crate::domain::Size;
use crate::error::{AnnotationError, Result};

/// A decoded raster image with known, positive dimensions
///
/// Cloning is cheap; the pixel buffer is shared.
#[derive(Clone, Debug)]
pub struct BackgroundImage {
    rgba: Arc<RgbaImage>,
}

impl BackgroundImage {
    /// Wrap an already decoded image
    pub fn new(rgba: RgbaImage) -> Result<Self> {
        if rgba.width() == 0 || rgba.height() == 0 {
            return Err(AnnotationError::InvalidGeometry {
                width: f64::from(rgba.width()),
                height: f64::from(rgba.height()),
            });
        }
        Ok(Self {
            rgba: Arc::new(rgba),
        })
    }

    /// Decode an encoded image (PNG, JPEG, ...) held in memory
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let rgba = image::load_from_memory(bytes)
            .context("decoding background image")?
            .to_rgba8();
        let img = Self::new(rgba)?;
        log::debug!("Decoded background image: {}x{}", img.width(), img.height());
        Ok(img)
    }

    /// Decode an image file from disk
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let rgba = image::open(path)
            .with_context(|| format!("opening background image {}", path.display()))?
            .to_rgba8();
        let img = Self::new(rgba)?;
        log::info!(
            "Loaded background image {}: {}x{} pixels",
            path.display(),
            img.width(),
            img.height()
        );
        Ok(img)
    }

    pub fn rgba(&self) -> &RgbaImage {
        &self.rgba
    }

    /// Get the width of the image
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    /// Get the height of the image
    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    /// Dimensions defining the image-pixel coordinate space
    pub fn size(&self) -> Size {
        Size::from((self.width(), self.height()))
    }
}

impl PartialEq for BackgroundImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rgba, &other.rgba) || *self.rgba == *other.rgba
    }
}
