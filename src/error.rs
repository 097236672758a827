//! Error kinds reported by mapping and session operations
//!
//! None of these are fatal: a rejected operation leaves the session untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnnotationError {
    /// A surface or image size with a non-positive (or non-finite) dimension
    #[error("invalid geometry: dimensions must be positive, got {width}x{height}")]
    InvalidGeometry { width: f64, height: f64 },
    /// An image-space operation was requested before any image finished loading
    #[error("no background image loaded")]
    NoBackgroundImage,
    /// A coordinate entry that is not a finite number
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, AnnotationError>;

/// Reject NaN and infinite coordinate entries
pub(crate) fn ensure_finite(values: &[f64]) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(bad) => Err(AnnotationError::InvalidInput(format!(
            "coordinate {bad} is not a finite number"
        ))),
        None => Ok(()),
    }
}
