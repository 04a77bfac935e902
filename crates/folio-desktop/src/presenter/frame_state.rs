//! Render output of a presenter

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Transform};
use crate::types::ZIndex;

/// Everything needed to paint one window for one frame
///
/// When `bounds` is set the element is positioned explicitly at that
/// rectangle and `transform` applies on top of it; otherwise the element keeps
/// its natural layout box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameState {
    pub transform: Transform,
    pub opacity: f32,
    /// `display` is on
    pub visible: bool,
    /// Receives pointer events
    pub interactive: bool,
    /// Transient compositing hint, set only while animating
    pub will_change: bool,
    pub z_index: ZIndex,
    /// Explicit position and size override
    pub bounds: Option<Rect>,
    pub corner_radius: f32,
    /// Drags are accepted; true only for a settled, windowed window
    pub draggable: bool,
}

impl FrameState {
    /// On-screen rectangle given the element's natural layout box
    pub fn visual_rect(&self, layout: Rect) -> Rect {
        self.transform.apply(self.bounds.unwrap_or(layout))
    }
}
