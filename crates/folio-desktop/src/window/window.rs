//! Window entity

use serde::{Deserialize, Serialize};

use super::{WindowData, WindowKey, ZIndex};
use crate::math::Rect;

/// A window slot and its current state
///
/// This is also the snapshot handed to presenters and subscribers after
/// every mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Slot identifier
    pub key: WindowKey,
    /// Visible and interactive when true
    pub is_open: bool,
    /// Occupies the viewport when true; independent of `is_open`
    pub is_maximized: bool,
    /// Stacking value; the baseline while closed
    pub z_index: ZIndex,
    /// Payload shown by the slot; survives close/reopen until replaced
    #[serde(default)]
    pub data: Option<WindowData>,
    /// Trigger bounds from the most recent open, stored verbatim
    #[serde(default)]
    pub origin_rect: Option<Rect>,
}

impl Window {
    /// A closed, non-maximized slot at the baseline stacking value
    pub fn new(key: impl Into<WindowKey>, baseline_z_index: ZIndex) -> Self {
        Self {
            key: key.into(),
            is_open: false,
            is_maximized: false,
            z_index: baseline_z_index,
            data: None,
            origin_rect: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let window = Window {
            is_open: true,
            z_index: 4,
            data: Some(WindowData::new(json!({"url": "https://example.com"}))),
            origin_rect: Some(Rect::new(1.0, 2.0, 3.0, 4.0)),
            ..Window::new("safari", 0)
        };

        let value = serde_json::to_value(&window).unwrap();
        assert_eq!(
            value,
            json!({
                "key": "safari",
                "isOpen": true,
                "isMaximized": false,
                "zIndex": 4,
                "data": {"url": "https://example.com"},
                "originRect": {"x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0},
            })
        );

        let back: Window = serde_json::from_value(value).unwrap();
        assert_eq!(back, window);
        let page = back.data.and_then(|d| d.page()).unwrap();
        assert_eq!(page.url, "https://example.com");
    }
}
