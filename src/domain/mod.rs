//! Pure domain types with minimal dependencies
//!
//! This module contains the geometry, angle math and selection state used
//! throughout the crate. Nothing here knows about rendering.

pub mod angle;
pub mod annotation;
pub mod geometry;
pub mod selection;

pub use angle::*;
pub use annotation::*;
pub use geometry::*;
pub use selection::*;
