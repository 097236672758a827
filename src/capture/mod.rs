//! Image acquisition
//!
//! Decoding of the background image the annotations are drawn over.

pub mod image;
