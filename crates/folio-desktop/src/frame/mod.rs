//! Generic window frame
//!
//! One [`WindowFrame`] wraps any [`WindowContent`] with the shared window
//! behaviour: title bar controls, visibility and presentation. Content only
//! decides what to draw from the slot's payload.

mod content;

pub use content::{DocumentViewer, ImageViewer, PageViewer};

use crate::control::{ControlBar, WindowControl};
use crate::engine::Desktop;
use crate::presenter::FrameState;
use crate::types::WindowKey;
use crate::window::WindowData;

/// What content gets to see of its window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentView<'a> {
    pub key: &'a str,
    pub data: Option<&'a WindowData>,
    pub is_maximized: bool,
}

/// Content-rendering capability of a window
///
/// Returning `None` leaves the frame empty; the window stays open. Plain
/// functions and closures implement this too.
pub trait WindowContent {
    type Output;

    fn render(&self, view: &ContentView<'_>) -> Option<Self::Output>;
}

impl<F, T> WindowContent for F
where
    F: Fn(&ContentView<'_>) -> Option<T>,
{
    type Output = T;

    fn render(&self, view: &ContentView<'_>) -> Option<T> {
        self(view)
    }
}

/// One painted window
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedWindow<T> {
    pub key: WindowKey,
    pub title: String,
    pub frame: FrameState,
    pub controls: [(WindowControl, Option<char>); 3],
    pub content: Option<T>,
}

/// Frame binding a content renderer to a window slot
#[derive(Clone, Debug)]
pub struct WindowFrame<C> {
    key: WindowKey,
    controls: ControlBar,
    content: C,
}

impl<C: WindowContent> WindowFrame<C> {
    pub fn new(key: impl Into<WindowKey>, content: C) -> Self {
        let key = key.into();
        Self {
            controls: ControlBar::new(key.clone()),
            key,
            content,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn controls(&self) -> &ControlBar {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ControlBar {
        &mut self.controls
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    /// Paint the window at `now`; `None` while it is hidden
    pub fn render(&self, desktop: &Desktop, now: f64) -> Option<RenderedWindow<C::Output>> {
        let window = desktop.window(&self.key)?;
        let frame = desktop.frame(&self.key, now)?;
        if !frame.visible {
            return None;
        }

        let view = ContentView {
            key: &self.key,
            data: window.data.as_ref(),
            is_maximized: window.is_maximized,
        };

        Some(RenderedWindow {
            key: self.key.clone(),
            title: desktop.title(&self.key).unwrap_or_default().to_string(),
            frame,
            controls: self.controls.glyphs(),
            content: self.content.render(&view),
        })
    }
}
