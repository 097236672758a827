//! Annotation session management module
//!
//! This module contains:
//! - Session state (pending point, history, background image)
//! - Render instructions the session emits

pub mod messages;
pub mod state;

pub use messages::{OverlayInstruction, RenderCommand};
pub use state::Session;
