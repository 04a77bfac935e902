//! Window presenter state machine

use tracing::debug;

use super::{FrameState, PresenterState};
use crate::config::TransitionTimings;
use crate::math::{Rect, Size, Transform, FRAME_STYLE};
use crate::transition::Tween;
use crate::types::{WindowKey, ZIndex};
use crate::window::Window;

#[path = "transitions.rs"]
mod transitions;

/// Windowed geometry captured when a window enters maximize
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestoreGeometry {
    /// Transform of the windowed element
    pub transform: Transform,
    /// Absolute on-screen rectangle of the windowed element
    pub rect: Rect,
}

/// Presentation adapter for a single window
///
/// Feed it registry snapshots with [`sync`](Self::sync), advance it with
/// [`tick`](Self::tick) and paint [`frame`](Self::frame). A snapshot that
/// changes visibility or the maximize flag starts a transition from whatever
/// is on screen at that instant, superseding any transition in flight.
#[derive(Clone, Debug)]
pub struct WindowPresenter {
    key: WindowKey,
    timings: TransitionTimings,
    state: PresenterState,

    transform: Tween<Transform>,
    opacity: Tween<f32>,
    bounds: Option<Tween<Rect>>,
    radius: Tween<f32>,

    /// Windowed transform; moved by drags
    resting: Transform,
    /// Natural layout box, captured whenever no bounds override is active
    layout: Option<Rect>,
    origin: Option<Rect>,
    z_index: ZIndex,
    stacking_snapshot: ZIndex,
    last_visual_position: Option<Transform>,
    saved_restore: Option<RestoreGeometry>,

    observed_open: bool,
    observed_maximized: bool,
}

impl WindowPresenter {
    /// Presenter for a window that has not been shown yet
    pub fn new(window: &Window, timings: TransitionTimings) -> Self {
        Self {
            key: window.key.clone(),
            timings,
            state: PresenterState::Closed,
            transform: Tween::fixed(Transform::IDENTITY, 0.0),
            opacity: Tween::fixed(0.0, 0.0),
            bounds: None,
            radius: Tween::fixed(FRAME_STYLE.corner_radius, 0.0),
            resting: Transform::IDENTITY,
            layout: None,
            origin: window.origin_rect,
            z_index: window.z_index,
            stacking_snapshot: window.z_index,
            last_visual_position: None,
            saved_restore: None,
            observed_open: false,
            observed_maximized: window.is_maximized,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn state(&self) -> PresenterState {
        self.state
    }

    /// True until the current transition has been settled by a tick
    pub fn is_animating(&self) -> bool {
        self.state.is_transitioning()
    }

    /// Translation the window had when it last started to close
    pub fn last_visual_position(&self) -> Option<Transform> {
        self.last_visual_position
    }

    /// Geometry a maximized window returns to
    pub fn saved_restore(&self) -> Option<RestoreGeometry> {
        self.saved_restore
    }

    /// Stacking value to paint with while closing
    pub fn stacking_snapshot(&self) -> ZIndex {
        self.stacking_snapshot
    }

    /// Windowed transform
    pub fn resting(&self) -> Transform {
        self.resting
    }

    // =========================================================================
    // Driving
    // =========================================================================

    /// React to a registry snapshot
    ///
    /// `layout` is the element's natural layout box, `None` if it is not
    /// mounted. It is ignored while a bounds override is active.
    pub fn sync(&mut self, window: &Window, layout: Option<Rect>, viewport: Size, now: f64) {
        self.tick(now);

        self.z_index = window.z_index;
        if window.is_open {
            self.stacking_snapshot = window.z_index;
        }
        if window.origin_rect.is_some() {
            self.origin = window.origin_rect;
        }
        if self.bounds.is_none() {
            if let Some(layout) = layout.filter(|l| !l.is_empty()) {
                self.layout = Some(layout);
            }
        }

        let opened = window.is_open && !self.observed_open;
        let closed = !window.is_open && self.observed_open;
        let maximize_changed = window.is_maximized != self.observed_maximized;
        self.observed_open = window.is_open;
        self.observed_maximized = window.is_maximized;

        if opened {
            self.begin_open(viewport, now);
        } else if closed {
            self.begin_close(now);
        } else if maximize_changed && window.is_open {
            if window.is_maximized {
                self.begin_maximize(viewport, now);
            } else {
                self.begin_restore(now);
            }
        } else if maximize_changed {
            debug!(
                key = %self.key,
                maximized = window.is_maximized,
                "maximize recorded while hidden"
            );
        }
    }

    /// Settle the current transition once all of its tracks are complete
    pub fn tick(&mut self, now: f64) {
        if !self.state.is_transitioning() || !self.tracks_complete(now) {
            return;
        }

        match self.state {
            PresenterState::Closing => {
                // Next open starts from a clean, non-maximized layout
                self.bounds = None;
                self.radius = Tween::fixed(FRAME_STYLE.corner_radius, now);
                self.saved_restore = None;
            }
            PresenterState::Restoring => {
                let transform = self
                    .saved_restore
                    .take()
                    .map(|saved| saved.transform)
                    .unwrap_or(self.resting);
                self.resting = transform;
                self.bounds = None;
                self.transform = Tween::fixed(transform, now);
                self.radius = Tween::fixed(FRAME_STYLE.corner_radius, now);
            }
            _ => {}
        }

        let next = self.state.settled(self.observed_maximized);
        self.set_state(next);
    }

    /// Render output at `now`
    pub fn frame(&self, now: f64) -> FrameState {
        let visible = self.state.is_visible();
        let z_index = if self.state == PresenterState::Closing {
            self.stacking_snapshot
        } else {
            self.z_index
        };

        FrameState {
            transform: self.transform.sample(now),
            opacity: self.opacity.sample(now),
            visible,
            interactive: visible,
            will_change: self.state.is_transitioning(),
            z_index,
            bounds: self.bounds.as_ref().map(|b| b.sample(now)),
            corner_radius: self.radius.sample(now),
            draggable: self.state == PresenterState::Open,
        }
    }

    /// Move a windowed, settled window; returns false if dragging is disabled
    pub fn drag_by(&mut self, dx: f32, dy: f32) -> bool {
        if self.state != PresenterState::Open {
            return false;
        }
        self.resting.x += dx;
        self.resting.y += dy;
        // Open implies the transform track is complete; keep it that way
        self.transform = Tween::fixed(self.resting, self.transform.start_time);
        true
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn base_rect(&self, now: f64) -> Option<Rect> {
        self.bounds
            .as_ref()
            .map(|b| b.sample(now))
            .or(self.layout)
    }

    /// On-screen rectangle at `now`, if the element has ever been measured
    fn visual_rect(&self, now: f64) -> Option<Rect> {
        self.base_rect(now)
            .map(|base| self.transform.sample(now).apply(base))
    }

    fn tracks_complete(&self, now: f64) -> bool {
        self.transform.is_complete(now)
            && self.opacity.is_complete(now)
            && self.radius.is_complete(now)
            && self.bounds.as_ref().map_or(true, |b| b.is_complete(now))
    }

    fn set_state(&mut self, next: PresenterState) {
        if next != self.state {
            debug!(key = %self.key, from = ?self.state, to = ?next, "presenter state changed");
            self.state = next;
        }
    }
}

#[cfg(test)]
#[path = "presenter_tests.rs"]
mod presenter_tests;
