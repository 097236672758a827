//! Angle measurement over raster images
//!
//! Points are collected in pairs on top of a background image; each completed
//! pair is measured and turned into an overlay (connector, dashed reference
//! lines, arc and degree label). The [`Session`] holds the state and emits
//! [`RenderCommand`]s; any [`Renderer`] can draw them, and [`Canvas`] does so
//! into an RGBA buffer.

pub mod capture;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod session;

pub use capture::image::BackgroundImage;
pub use config::{AngleMarkConfig, OverlayStyle, ShapeColor};
pub use domain::{AngleAnnotation, AngleMeasurement, Point, SelectionState, Size, compute_angle};
pub use error::{AnnotationError, Result};
pub use render::Renderer;
pub use render::image::Canvas;
pub use session::{OverlayInstruction, RenderCommand, Session};
