//! Element transform (translation plus scale about the centre)

use serde::{Deserialize, Serialize};

use super::{Rect, Vec2};

/// Visual transform applied on top of an element's layout box
///
/// Translation is in pixels; scale is applied about the centre of the box
/// (`transform-origin: 50% 50%`), so scaling never moves the centre.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, unit scale
    pub const IDENTITY: Transform = Transform {
        x: 0.0,
        y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// Pure translation
    pub const fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Translation component
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Copy of this transform with the scale reset to 1
    pub fn unscaled(&self) -> Self {
        Self::at(self.x, self.y)
    }

    /// On-screen rectangle of `layout` under this transform
    pub fn apply(&self, layout: Rect) -> Rect {
        let center = layout.center() + self.translation();
        let width = layout.width * self.scale_x;
        let height = layout.height * self.scale_y;
        Rect::new(
            center.x - width * 0.5,
            center.y - height * 0.5,
            width,
            height,
        )
    }

    /// Transform that makes `layout` appear exactly as `visual`
    ///
    /// Returns `None` when the layout box has no area.
    pub fn mapping(layout: Rect, visual: Rect) -> Option<Self> {
        if layout.is_empty() {
            return None;
        }
        let offset = visual.center() - layout.center();
        Some(Self {
            x: offset.x,
            y: offset.y,
            scale_x: visual.width / layout.width,
            scale_y: visual.height / layout.height,
        })
    }

    /// Linear interpolation between two transforms
    pub fn lerp(from: &Transform, to: &Transform, t: f32) -> Transform {
        Transform {
            x: from.x + (to.x - from.x) * t,
            y: from.y + (to.y - from.y) * t,
            scale_x: from.scale_x + (to.scale_x - from.scale_x) * t,
            scale_y: from.scale_y + (to.scale_y - from.scale_y) * t,
        }
    }
}
