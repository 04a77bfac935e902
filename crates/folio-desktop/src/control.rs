//! Window control buttons
//!
//! The three traffic-light buttons in a window's title bar. Each one maps to
//! exactly one registry operation on the window's own key; hover only decides
//! whether the glyphs are drawn.

use serde::{Deserialize, Serialize};

use crate::engine::Desktop;
use crate::error::DesktopResult;
use crate::types::WindowKey;
use crate::window::{Window, WindowRegistry};

/// A title bar button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowControl {
    Close,
    Minimize,
    Maximize,
}

impl WindowControl {
    /// Buttons in title bar order
    pub const ALL: [WindowControl; 3] = [
        WindowControl::Close,
        WindowControl::Minimize,
        WindowControl::Maximize,
    ];

    /// Apply the button's registry operation to `key`
    pub fn dispatch<'a>(
        self,
        registry: &'a mut WindowRegistry,
        key: &str,
    ) -> DesktopResult<&'a Window> {
        match self {
            WindowControl::Close => registry.close(key),
            WindowControl::Minimize => registry.minimize(key),
            WindowControl::Maximize => registry.maximize(key),
        }
    }

    /// Accessible label
    pub fn label(self) -> &'static str {
        match self {
            WindowControl::Close => "Close",
            WindowControl::Minimize => "Minimize",
            WindowControl::Maximize => "Maximize",
        }
    }

    /// Glyph revealed on hover
    pub fn glyph(self) -> char {
        match self {
            WindowControl::Close => '×',
            WindowControl::Minimize => '−',
            WindowControl::Maximize => '⤢',
        }
    }
}

/// Control buttons of one window
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlBar {
    target: WindowKey,
    hovered: bool,
}

impl ControlBar {
    pub fn new(target: impl Into<WindowKey>) -> Self {
        Self {
            target: target.into(),
            hovered: false,
        }
    }

    /// Key of the window the buttons act on
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Pointer entered (`true`) or left (`false`) the button group
    pub fn hover(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Glyph for each button, shown only while hovered
    pub fn glyphs(&self) -> [(WindowControl, Option<char>); 3] {
        WindowControl::ALL.map(|control| (control, self.hovered.then(|| control.glyph())))
    }

    /// Click a button; returns false if the target slot is unknown
    pub fn press(&self, desktop: &mut Desktop, control: WindowControl, now: f64) -> bool {
        desktop.control(&self.target, control, now)
    }
}
