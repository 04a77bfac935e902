//! Desktop coordinator
//!
//! [`Desktop`] is the single entry point for triggers. It applies each
//! operation to the [`WindowRegistry`] and hands the resulting snapshot to
//! that window's [`WindowPresenter`], measuring layout through a
//! [`LayoutProbe`] so the core never touches the DOM.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::{DesktopConfig, Redirect};
use crate::control::WindowControl;
use crate::error::DesktopResult;
use crate::math::{Rect, Size};
use crate::presenter::{FrameState, WindowPresenter};
use crate::types::WindowKey;
use crate::window::{SubscriptionId, Window, WindowData, WindowRegistry};

/// Source of element geometry
pub trait LayoutProbe {
    /// Natural layout box of a window element (ignoring transforms), `None`
    /// if the element is not mounted
    fn layout_rect(&self, key: &str) -> Option<Rect>;

    /// Current viewport size
    fn viewport(&self) -> Size;
}

/// Layout probe backed by a fixed table of rectangles
///
/// Used off-browser and in tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedLayout {
    viewport: Size,
    rects: BTreeMap<WindowKey, Rect>,
}

impl FixedLayout {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            rects: BTreeMap::new(),
        }
    }

    /// Builder form of [`set_rect`](Self::set_rect)
    pub fn with_rect(mut self, key: impl Into<WindowKey>, rect: Rect) -> Self {
        self.set_rect(key, rect);
        self
    }

    pub fn set_rect(&mut self, key: impl Into<WindowKey>, rect: Rect) {
        self.rects.insert(key.into(), rect);
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }
}

impl LayoutProbe for FixedLayout {
    fn layout_rect(&self, key: &str) -> Option<Rect> {
        self.rects.get(key).copied()
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}

/// Window registry plus one presenter per slot
pub struct Desktop {
    config: DesktopConfig,
    registry: WindowRegistry,
    presenters: BTreeMap<WindowKey, WindowPresenter>,
    probe: Box<dyn LayoutProbe>,
}

/// Hand a registry result to the window's presenter, or log why not
fn present(
    presenters: &mut BTreeMap<WindowKey, WindowPresenter>,
    probe: &dyn LayoutProbe,
    result: DesktopResult<&Window>,
    op: &str,
    now: f64,
) -> bool {
    match result {
        Ok(window) => {
            if let Some(presenter) = presenters.get_mut(&window.key) {
                presenter.sync(
                    window,
                    probe.layout_rect(&window.key),
                    probe.viewport(),
                    now,
                );
            }
            true
        }
        Err(err) => {
            warn!(op, error = %err, "ignoring window operation");
            false
        }
    }
}

impl Desktop {
    /// Build the desktop from a validated configuration
    pub fn new(config: DesktopConfig, probe: impl LayoutProbe + 'static) -> DesktopResult<Self> {
        config.validate()?;

        let registry = WindowRegistry::new(&config);
        let presenters = registry
            .windows()
            .map(|window| {
                (
                    window.key.clone(),
                    WindowPresenter::new(window, config.timings),
                )
            })
            .collect();
        debug!(slots = registry.len(), "desktop initialized");

        Ok(Self {
            config,
            registry,
            presenters,
            probe: Box::new(probe),
        })
    }

    // =========================================================================
    // Triggers
    // =========================================================================

    /// Open a window, or toggle the target of a redirecting slot
    ///
    /// Returns false if the key is unknown.
    pub fn open(
        &mut self,
        key: &str,
        data: Option<WindowData>,
        origin: Option<Rect>,
        now: f64,
    ) -> bool {
        match self.redirect(key) {
            Some(redirect) => {
                debug!(key, target = %redirect.target, "redirecting open");
                self.toggle_slot(&redirect.target, redirect.data.or(data), origin, now)
            }
            None => self.open_slot(key, data, origin, now),
        }
    }

    /// Close a window if it is open and already shows `data`, else open it
    ///
    /// Without `data` any content counts as shown.
    pub fn toggle(
        &mut self,
        key: &str,
        data: Option<WindowData>,
        origin: Option<Rect>,
        now: f64,
    ) -> bool {
        match self.redirect(key) {
            Some(redirect) => self.toggle_slot(&redirect.target, redirect.data.or(data), origin, now),
            None => self.toggle_slot(key, data, origin, now),
        }
    }

    pub fn close(&mut self, key: &str, now: f64) -> bool {
        let result = self.registry.close(key);
        present(&mut self.presenters, self.probe.as_ref(), result, "close", now)
    }

    pub fn focus(&mut self, key: &str, now: f64) -> bool {
        let result = self.registry.focus(key);
        present(&mut self.presenters, self.probe.as_ref(), result, "focus", now)
    }

    pub fn minimize(&mut self, key: &str, now: f64) -> bool {
        let result = self.registry.minimize(key);
        present(&mut self.presenters, self.probe.as_ref(), result, "minimize", now)
    }

    /// Toggle maximize
    pub fn maximize(&mut self, key: &str, now: f64) -> bool {
        let result = self.registry.maximize(key);
        present(&mut self.presenters, self.probe.as_ref(), result, "maximize", now)
    }

    /// Apply a title bar button
    pub fn control(&mut self, key: &str, control: WindowControl, now: f64) -> bool {
        let result = control.dispatch(&mut self.registry, key);
        present(&mut self.presenters, self.probe.as_ref(), result, control.label(), now)
    }

    /// Pointer down on a window: raise it before any drag motion
    pub fn press_window(&mut self, key: &str, now: f64) -> bool {
        self.focus(key, now)
    }

    /// Drag motion; returns false if the window cannot be dragged right now
    pub fn drag_window(&mut self, key: &str, dx: f32, dy: f32) -> bool {
        match self.presenters.get_mut(key) {
            Some(presenter) => presenter.drag_by(dx, dy),
            None => {
                warn!(key, "ignoring drag of unknown window");
                false
            }
        }
    }

    fn open_slot(
        &mut self,
        key: &str,
        data: Option<WindowData>,
        origin: Option<Rect>,
        now: f64,
    ) -> bool {
        let result = self.registry.open(key, data, origin);
        present(&mut self.presenters, self.probe.as_ref(), result, "open", now)
    }

    fn toggle_slot(
        &mut self,
        key: &str,
        data: Option<WindowData>,
        origin: Option<Rect>,
        now: f64,
    ) -> bool {
        let showing = match self.registry.get(key) {
            Some(window) => {
                window.is_open
                    && data
                        .as_ref()
                        .map_or(true, |data| window.data.as_ref() == Some(data))
            }
            None => {
                warn!(key, "ignoring toggle of unknown window");
                return false;
            }
        };

        if showing {
            self.close(key, now)
        } else {
            self.open_slot(key, data, origin, now)
        }
    }

    fn redirect(&self, key: &str) -> Option<Redirect> {
        self.config
            .windows
            .get(key)
            .and_then(|slot| slot.redirect.clone())
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Settle every transition that has finished by `now`
    pub fn tick(&mut self, now: f64) {
        for presenter in self.presenters.values_mut() {
            presenter.tick(now);
        }
    }

    /// Render output of every slot, ordered by key
    pub fn frames(&self, now: f64) -> Vec<(&str, FrameState)> {
        self.presenters
            .iter()
            .map(|(key, presenter)| (key.as_str(), presenter.frame(now)))
            .collect()
    }

    /// Render output of one slot
    pub fn frame(&self, key: &str, now: f64) -> Option<FrameState> {
        self.presenters.get(key).map(|p| p.frame(now))
    }

    /// True while any window still has a transition to settle
    pub fn is_animating(&self) -> bool {
        self.presenters.values().any(|p| p.is_animating())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn window(&self, key: &str) -> Option<&Window> {
        self.registry.get(key)
    }

    pub fn presenter(&self, key: &str) -> Option<&WindowPresenter> {
        self.presenters.get(key)
    }

    /// Title bar caption of a slot
    pub fn title(&self, key: &str) -> Option<&str> {
        self.config.windows.get(key).map(|slot| slot.title.as_str())
    }

    pub fn probe(&self) -> &dyn LayoutProbe {
        self.probe.as_ref()
    }

    /// Observe registry changes
    pub fn subscribe(&mut self, listener: impl FnMut(&Window) + 'static) -> SubscriptionId {
        self.registry.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.registry.unsubscribe(id)
    }
}

impl std::fmt::Debug for Desktop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Desktop")
            .field("registry", &self.registry)
            .field("presenters", &self.presenters)
            .finish_non_exhaustive()
    }
}
