//! Easing functions for animations

use serde::{Deserialize, Serialize};

/// Ease-in-out cubic function
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Ease-out cubic function
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Ease-in cubic function
#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// Ease-in quadratic function
#[inline]
pub fn ease_in_quad(t: f32) -> f32 {
    t * t
}

/// Ease-out quadratic function
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Ease-in quartic function
#[inline]
pub fn ease_in_quart(t: f32) -> f32 {
    t.powi(4)
}

/// Ease-out quartic function
#[inline]
pub fn ease_out_quart(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(4)
}

/// Exponential ease-out: very fast start, long settle
#[inline]
pub fn ease_out_expo(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f32.powf(-10.0 * t)
    }
}

/// Exponential ease-in: long wind-up, very fast finish
#[inline]
pub fn ease_in_expo(t: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else {
        2f32.powf(10.0 * (t - 1.0))
    }
}

/// Linear interpolation (no easing)
#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

/// Named easing curve
///
/// Names follow the `powerN` / `expo` vocabulary of common web tweening
/// libraries: `power1` is quadratic, `power2` cubic, `power3` quartic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    Linear,
    Power1In,
    Power1Out,
    Power2In,
    Power2Out,
    Power2InOut,
    Power3In,
    Power3Out,
    ExpoIn,
    ExpoOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => linear(t),
            Easing::Power1In => ease_in_quad(t),
            Easing::Power1Out => ease_out_quad(t),
            Easing::Power2In => ease_in_cubic(t),
            Easing::Power2Out => ease_out_cubic(t),
            Easing::Power2InOut => ease_in_out(t),
            Easing::Power3In => ease_in_quart(t),
            Easing::Power3Out => ease_out_quart(t),
            Easing::ExpoIn => ease_in_expo(t),
            Easing::ExpoOut => ease_out_expo(t),
        }
    }

    /// Every curve, for exhaustive checks
    pub fn all() -> &'static [Easing] {
        &[
            Easing::Linear,
            Easing::Power1In,
            Easing::Power1Out,
            Easing::Power2In,
            Easing::Power2Out,
            Easing::Power2InOut,
            Easing::Power3In,
            Easing::Power3Out,
            Easing::ExpoIn,
            Easing::ExpoOut,
        ]
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// All easing curves should map [0,1] inputs to [0,1] outputs
        #[test]
        fn easing_bounded_output(t in 0.0f32..=1.0) {
            for easing in Easing::all() {
                let result = easing.apply(t);
                prop_assert!(result >= -0.001, "{:?}({}) = {} < 0", easing, t, result);
                prop_assert!(result <= 1.001, "{:?}({}) = {} > 1", easing, t, result);
            }
        }

        /// All easing curves should be monotonically increasing
        #[test]
        fn easing_monotonic(t1 in 0.0f32..=1.0, t2 in 0.0f32..=1.0) {
            let (t_lo, t_hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            for easing in Easing::all() {
                prop_assert!(
                    easing.apply(t_lo) <= easing.apply(t_hi) + 0.001,
                    "{:?} not monotonic: f({}) > f({})",
                    easing, t_lo, t_hi
                );
            }
        }

        /// Endpoints should be fixed: f(0) = 0, f(1) = 1
        #[test]
        fn easing_endpoints_fixed(_seed in any::<u64>()) {
            for easing in Easing::all() {
                prop_assert!((easing.apply(0.0) - 0.0).abs() < 0.001);
                prop_assert!((easing.apply(1.0) - 1.0).abs() < 0.001);
            }
        }
    }
}
