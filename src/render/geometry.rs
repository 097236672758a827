//! Shared geometry for the angle overlay
//!
//! Constants and math used both by the render instructions and by the
//! raster renderer.

/// Fixed overlay layout
pub mod overlay {
    /// Radius of a point marker in image pixels
    pub const MARKER_RADIUS: f32 = 5.0;
    /// Radius of the angle arc in image pixels
    pub const ARC_RADIUS: f32 = 50.0;
    /// Dash pattern of the reference lines (on, off)
    pub const DASH: [f32; 2] = [5.0, 5.0];
    /// Label anchor relative to the first point
    pub const LABEL_OFFSET_X: f64 = 30.0;
    pub const LABEL_OFFSET_Y: f64 = -30.0;
    /// Label font size hint for text-capable renderers
    pub const LABEL_FONT_SIZE: f32 = 14.0;
    /// Maximum angular step of the arc polyline in radians (2 degrees)
    pub const ARC_STEP: f32 = 0.034_906_585;
}

/// Points along a circular arc starting at angle 0 and sweeping by `sweep` radians
///
/// Angles are measured in y-down space, so a positive sweep turns toward
/// increasing `y`. The sweep takes the short way round; it is never wrapped
/// to a full revolution.
pub fn arc_points(cx: f32, cy: f32, radius: f32, sweep: f32) -> Vec<(f32, f32)> {
    let segments = (sweep.abs() / overlay::ARC_STEP).ceil().max(1.0) as usize;
    (0..=segments)
        .map(|i| {
            let angle = sweep * i as f32 / segments as f32;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}
