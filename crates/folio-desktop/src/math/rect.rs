//! Axis-aligned rectangle

use serde::{Deserialize, Serialize};

use super::Vec2;

/// Axis-aligned rectangle in screen pixels
///
/// This is the shape of every geometric input the shell deals with: the
/// trigger bounds captured at click time, the layout box of a window element,
/// and the viewport when a window is maximized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// True when the rectangle has no area (or non-finite extents)
    ///
    /// Unmounted elements report all-zero bounds; scale ratios against such a
    /// rectangle are meaningless.
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Linear interpolation between two rectangles
    pub fn lerp(from: &Rect, to: &Rect, t: f32) -> Rect {
        Rect::new(
            from.x + (to.x - from.x) * t,
            from.y + (to.y - from.y) * t,
            from.width + (to.width - from.width) * t,
            from.height + (to.height - from.height) * t,
        )
    }
}
