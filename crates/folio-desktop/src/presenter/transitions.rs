//! Transition starters
//!
//! Every `begin_*` samples what is on screen at `now` and lays fresh tracks
//! from there, so a transition can supersede another mid-flight.

use tracing::{debug, warn};

use super::{RestoreGeometry, WindowPresenter};
use crate::config::TrackTiming;
use crate::math::{Size, Transform, FRAME_STYLE};
use crate::presenter::PresenterState;
use crate::transition::{genie_transform, Lerp, Tween};

fn track<T: Lerp>(from: T, to: T, now: f64, timing: TrackTiming) -> Tween<T> {
    Tween::new(from, to, now, timing.duration_ms, timing.easing).with_delay(timing.delay_ms)
}

impl WindowPresenter {
    pub(super) fn begin_open(&mut self, viewport: Size, now: f64) {
        let maximized = self.observed_maximized;
        let interrupted = self.state == PresenterState::Closing;
        let current_visual = self.visual_rect(now);
        let current_transform = self.transform.sample(now);
        let current_opacity = self.opacity.sample(now);

        if let Some(last) = self.last_visual_position {
            self.resting = last;
        }

        let target_bounds = maximized.then(|| viewport.to_rect());
        if maximized && self.saved_restore.is_none() {
            let resting = self.resting;
            self.saved_restore = self.layout.map(|layout| RestoreGeometry {
                transform: resting,
                rect: resting.apply(layout),
            });
        }
        let target = if maximized {
            Transform::IDENTITY
        } else {
            self.resting
        };
        let base = target_bounds.or(self.layout);

        let radius = if maximized {
            0.0
        } else {
            FRAME_STYLE.corner_radius
        };
        self.bounds = target_bounds.map(|b| Tween::fixed(b, now));
        self.radius = Tween::fixed(radius, now);

        let genie = self
            .origin
            .zip(base)
            .and_then(|(origin, base)| genie_transform(origin, target.apply(base), target));

        if interrupted {
            let from = base
                .zip(current_visual)
                .and_then(|(base, visual)| Transform::mapping(base, visual))
                .unwrap_or(current_transform);
            self.transform = track(from, target, now, self.timings.open_transform);
            self.opacity = track(current_opacity, 1.0, now, self.timings.open_fade);
        } else if let Some(from) = genie {
            self.transform = track(from, target, now, self.timings.open_transform);
            self.opacity = track(0.0, 1.0, now, self.timings.open_fade);
        } else {
            self.warn_fallback("open");
            let from = Self::fallback_offset(target);
            self.transform = track(from, target, now, self.timings.fallback_open);
            self.opacity = track(0.0, 1.0, now, self.timings.fallback_open);
        }

        self.set_state(PresenterState::Opening);
    }

    pub(super) fn begin_close(&mut self, now: f64) {
        let current = self.transform.sample(now);
        let opacity = self.opacity.sample(now);

        let anchor = match self.state {
            PresenterState::Open => current,
            PresenterState::Opening => self.resting,
            PresenterState::Maximizing | PresenterState::Maximized | PresenterState::Restoring => {
                self.saved_restore
                    .map(|saved| saved.transform)
                    .unwrap_or(self.resting)
            }
            PresenterState::Closing | PresenterState::Closed => return,
        };
        self.last_visual_position = Some(anchor.unscaled());

        self.bounds = self.bounds.map(|b| Tween::fixed(b.sample(now), now));
        self.radius = Tween::fixed(self.radius.sample(now), now);
        let base = self.base_rect(now);

        let genie = self
            .origin
            .zip(base)
            .and_then(|(origin, base)| genie_transform(origin, current.apply(base), current));

        match genie {
            Some(to) => {
                self.transform = track(current, to, now, self.timings.close_transform);
                self.opacity = track(opacity, 0.0, now, self.timings.close_fade);
            }
            None => {
                self.warn_fallback("close");
                let to = Self::fallback_offset(current);
                self.transform = track(current, to, now, self.timings.fallback_close);
                self.opacity = track(opacity, 0.0, now, self.timings.fallback_close);
            }
        }

        self.set_state(PresenterState::Closing);
    }

    pub(super) fn begin_maximize(&mut self, viewport: Size, now: f64) {
        let viewport_rect = viewport.to_rect();
        let from = self.visual_rect(now).unwrap_or(viewport_rect);

        if self.saved_restore.is_none() {
            let resting = self.resting;
            self.saved_restore = Some(RestoreGeometry {
                transform: resting,
                rect: self.layout.map(|l| resting.apply(l)).unwrap_or(from),
            });
        }

        let timing = self.timings.maximize;
        self.transform = Tween::fixed(Transform::IDENTITY, now);
        self.bounds = Some(track(from, viewport_rect, now, timing));
        self.radius = track(self.radius.sample(now), 0.0, now, timing);
        self.opacity = track(self.opacity.sample(now), 1.0, now, timing);

        self.set_state(PresenterState::Maximizing);
    }

    pub(super) fn begin_restore(&mut self, now: f64) {
        let timing = self.timings.maximize;

        if let Some(from) = self.visual_rect(now) {
            let to = self
                .saved_restore
                .map(|saved| saved.rect)
                .or_else(|| self.layout.map(|l| self.resting.apply(l)))
                .unwrap_or(from);
            self.transform = Tween::fixed(Transform::IDENTITY, now);
            self.bounds = Some(track(from, to, now, timing));
        }
        self.radius = track(self.radius.sample(now), FRAME_STYLE.corner_radius, now, timing);
        self.opacity = track(self.opacity.sample(now), 1.0, now, timing);

        self.set_state(PresenterState::Restoring);
    }

    // =========================================================================

    /// Lowered and shrunk copy of `t` used when no trigger geometry exists
    fn fallback_offset(t: Transform) -> Transform {
        Transform {
            x: t.x,
            y: t.y + FRAME_STYLE.fallback_rise,
            scale_x: t.scale_x * FRAME_STYLE.fallback_scale,
            scale_y: t.scale_y * FRAME_STYLE.fallback_scale,
        }
    }

    fn warn_fallback(&self, transition: &str) {
        if self.origin.is_some() {
            warn!(key = %self.key, transition, "window not measurable, using fade fallback");
        } else {
            debug!(key = %self.key, transition, "no trigger rectangle, using fade fallback");
        }
    }
}
