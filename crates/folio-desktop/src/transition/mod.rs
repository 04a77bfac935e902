//! Animation primitives for window transitions
//!
//! - [`easing`]: easing curves and the [`Easing`] selector
//! - [`Tween`]: a single timed track between two values
//! - [`genie_transform`]: origin-relative geometry of the dock "genie" effect
//!
//! Time is injected as `now` in milliseconds so every track is deterministic
//! under test.

pub mod easing;
mod genie;
mod tween;

pub use easing::Easing;
pub use genie::genie_transform;
pub use tween::{Lerp, Tween};

/// Duration of the genie transform when opening, in milliseconds
pub const OPEN_TRANSFORM_DURATION_MS: f32 = 500.0;

/// Duration of the opacity fade when opening (faster than the transform)
pub const OPEN_FADE_DURATION_MS: f32 = 200.0;

/// Duration of the genie transform when closing
pub const CLOSE_TRANSFORM_DURATION_MS: f32 = 400.0;

/// Duration of the opacity fade when closing
pub const CLOSE_FADE_DURATION_MS: f32 = 150.0;

/// Delay before the closing fade starts, so the shrink is visible first
pub const CLOSE_FADE_DELAY_MS: f32 = 250.0;

/// Duration of the fade-and-rise used when no origin rectangle is known
pub const FALLBACK_OPEN_DURATION_MS: f32 = 300.0;

/// Duration of the fade-and-sink used when no origin rectangle is known
pub const FALLBACK_CLOSE_DURATION_MS: f32 = 200.0;

/// Duration of maximize and restore animations
pub const MAXIMIZE_DURATION_MS: f32 = 400.0;
