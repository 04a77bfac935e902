//! Timed interpolation between two values

use crate::math::{Rect, Transform};

use super::Easing;

/// Values a [`Tween`] can interpolate
pub trait Lerp: Copy {
    fn lerp(from: Self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * t
    }
}

impl Lerp for Transform {
    fn lerp(from: Transform, to: Transform, t: f32) -> Transform {
        Transform::lerp(&from, &to, t)
    }
}

impl Lerp for Rect {
    fn lerp(from: Rect, to: Rect, t: f32) -> Rect {
        Rect::lerp(&from, &to, t)
    }
}

/// One animation track: a value eased from `from` to `to` over time
///
/// Opacity and transform are separate tracks so they can run with
/// independent durations, delays and curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    /// Value at (and before) the start of the track
    pub from: T,
    /// Value once the track completes
    pub to: T,
    /// Time the track was created (ms)
    pub start_time: f64,
    /// Time to wait before moving (ms)
    pub delay_ms: f32,
    /// Duration of the movement (ms)
    pub duration_ms: f32,
    /// Curve applied to linear progress
    pub easing: Easing,
}

impl<T: Lerp> Tween<T> {
    /// Create a track that starts moving immediately
    pub fn new(from: T, to: T, now: f64, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_time: now,
            delay_ms: 0.0,
            duration_ms,
            easing,
        }
    }

    /// A track that holds one value and is already complete
    pub fn fixed(value: T, now: f64) -> Self {
        Self::new(value, value, now, 0.0, Easing::Linear)
    }

    /// Delay the start of the movement
    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Time at which the track reaches `to` (ms)
    pub fn end_time(&self) -> f64 {
        self.start_time + f64::from(self.delay_ms) + f64::from(self.duration_ms.max(0.0))
    }

    /// Get linear progress (0.0 to 1.0)
    pub fn progress(&self, now: f64) -> f32 {
        let elapsed = (now - self.start_time) as f32 - self.delay_ms;
        if elapsed < 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Check if the track is complete
    pub fn is_complete(&self, now: f64) -> bool {
        now >= self.end_time()
    }

    /// Eased value at `now`
    pub fn sample(&self, now: f64) -> T {
        if self.is_complete(now) {
            return self.to;
        }
        T::lerp(self.from, self.to, self.easing.apply(self.progress(now)))
    }
}
