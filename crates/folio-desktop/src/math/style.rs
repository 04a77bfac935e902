//! Window chrome constants

/// Style constants for window frames and their fallback transitions
pub struct FrameStyle {
    /// Corner radius of a windowed (non-maximized) frame
    pub corner_radius: f32,
    /// Vertical offset a window rises from when opened without an origin
    pub fallback_rise: f32,
    /// Scale a window starts at when opened without an origin
    pub fallback_scale: f32,
}

/// Default frame style
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    corner_radius: 12.0,
    fallback_rise: 40.0,
    fallback_scale: 0.8,
};
