//! Static desktop configuration
//!
//! The slot map is consumed once when the registry is built; its keys are the
//! fixed universe of windows. Timings are read by every presenter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::transition::{
    Easing, CLOSE_FADE_DELAY_MS, CLOSE_FADE_DURATION_MS, CLOSE_TRANSFORM_DURATION_MS,
    FALLBACK_CLOSE_DURATION_MS, FALLBACK_OPEN_DURATION_MS, MAXIMIZE_DURATION_MS,
    OPEN_FADE_DURATION_MS, OPEN_TRANSFORM_DURATION_MS,
};
use crate::types::{WindowKey, ZIndex};
use crate::window::WindowData;

/// Stacking value of closed windows in the portfolio layout
pub const PORTFOLIO_BASELINE_Z_INDEX: ZIndex = 1000;

/// Top-level desktop configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Stacking value assigned to closed windows
    #[serde(default)]
    pub baseline_z_index: ZIndex,
    /// Window slots by key
    pub windows: BTreeMap<WindowKey, WindowSlot>,
    /// Animation timings
    #[serde(default)]
    pub timings: TransitionTimings,
}

/// One configured window slot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSlot {
    /// Caption shown in the title bar
    #[serde(default)]
    pub title: String,
    /// Opening this slot toggles another slot instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Redirect>,
}

/// Slot that stands in for another one, such as a trash can shown by the finder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Redirect {
    /// Slot that is actually shown
    pub target: WindowKey,
    /// Payload handed to the target
    #[serde(default)]
    pub data: Option<WindowData>,
}

impl WindowSlot {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            redirect: None,
        }
    }

    /// Slot that toggles `target` with `data` when opened
    pub fn redirecting(
        title: impl Into<String>,
        target: impl Into<WindowKey>,
        data: Option<WindowData>,
    ) -> Self {
        Self {
            title: title.into(),
            redirect: Some(Redirect {
                target: target.into(),
                data,
            }),
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Slots titled by their own keys, baseline 0, default timings
    pub fn with_slots<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<WindowKey>,
    {
        let windows = keys
            .into_iter()
            .map(|key| {
                let key = key.into();
                (key.clone(), WindowSlot::new(key))
            })
            .collect();

        Self {
            baseline_z_index: 0,
            windows,
            timings: TransitionTimings::default(),
        }
    }

    /// The portfolio desktop's slot set
    ///
    /// `trash` is a slot of its own even though its content is a finder view.
    pub fn portfolio() -> Self {
        let mut windows: BTreeMap<WindowKey, WindowSlot> = [
            ("finder", "Portfolio"),
            ("contact", "Contact Me"),
            ("resume", "Resume"),
            ("safari", "Articles"),
            ("photos", "Gallery"),
            ("terminal", "Skills"),
            ("txtfile", "Text File"),
            ("imgfile", "Image File"),
        ]
        .into_iter()
        .map(|(key, title)| (key.to_string(), WindowSlot::new(title)))
        .collect();

        let trash_location = WindowData::new(serde_json::json!({ "location": "trash" }));
        windows.insert(
            "trash".to_string(),
            WindowSlot::redirecting("Trash", "finder", Some(trash_location)),
        );

        Self {
            baseline_z_index: PORTFOLIO_BASELINE_Z_INDEX,
            windows,
            timings: TransitionTimings::default(),
        }
    }

    /// Reject configurations the registry cannot work with
    pub fn validate(&self) -> DesktopResult<()> {
        if self.windows.is_empty() {
            return Err(DesktopError::InvalidConfig(
                "at least one window slot is required".to_string(),
            ));
        }
        if self.windows.keys().any(|key| key.trim().is_empty()) {
            return Err(DesktopError::InvalidConfig(
                "window keys must not be empty".to_string(),
            ));
        }
        for (key, slot) in &self.windows {
            if let Some(redirect) = &slot.redirect {
                let target = self.windows.get(&redirect.target);
                if redirect.target == *key || target.map_or(true, |t| t.redirect.is_some()) {
                    return Err(DesktopError::InvalidConfig(format!(
                        "slot {} must redirect to a plain slot, not {}",
                        key, redirect.target
                    )));
                }
            }
        }
        if self.baseline_z_index == ZIndex::MAX {
            return Err(DesktopError::InvalidConfig(
                "baseline z-index leaves no room for focus".to_string(),
            ));
        }
        self.timings.validate()
    }
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Duration, delay and curve of one animation track
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackTiming {
    pub duration_ms: f32,
    #[serde(default)]
    pub delay_ms: f32,
    pub easing: Easing,
}

impl TrackTiming {
    pub const fn new(duration_ms: f32, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing,
        }
    }

    pub fn delayed(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Time from start until the track settles
    pub fn total_ms(&self) -> f32 {
        self.delay_ms + self.duration_ms
    }

    fn is_valid(&self) -> bool {
        self.duration_ms.is_finite()
            && self.duration_ms >= 0.0
            && self.delay_ms.is_finite()
            && self.delay_ms >= 0.0
    }
}

/// Every animation timing used by the presenters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitionTimings {
    /// Genie growth out of the trigger
    pub open_transform: TrackTiming,
    /// Opacity on open; shorter so the window solidifies before it settles
    pub open_fade: TrackTiming,
    /// Genie collapse into the trigger
    pub close_transform: TrackTiming,
    /// Opacity on close; delayed so the shrink is visible first
    pub close_fade: TrackTiming,
    /// Fade-and-rise when no trigger rectangle is known
    pub fallback_open: TrackTiming,
    /// Fade-and-sink when no trigger rectangle is known
    pub fallback_close: TrackTiming,
    /// Maximize and restore
    pub maximize: TrackTiming,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            open_transform: TrackTiming::new(OPEN_TRANSFORM_DURATION_MS, Easing::ExpoOut),
            open_fade: TrackTiming::new(OPEN_FADE_DURATION_MS, Easing::Power1Out),
            close_transform: TrackTiming::new(CLOSE_TRANSFORM_DURATION_MS, Easing::ExpoIn),
            close_fade: TrackTiming::new(CLOSE_FADE_DURATION_MS, Easing::Power1In)
                .delayed(CLOSE_FADE_DELAY_MS),
            fallback_open: TrackTiming::new(FALLBACK_OPEN_DURATION_MS, Easing::Power3Out),
            fallback_close: TrackTiming::new(FALLBACK_CLOSE_DURATION_MS, Easing::Power3In),
            maximize: TrackTiming::new(MAXIMIZE_DURATION_MS, Easing::Power2InOut),
        }
    }
}

impl TransitionTimings {
    /// Every track completes at `now`; useful for tests and reduced motion
    pub fn instant() -> Self {
        let zero = |t: TrackTiming| TrackTiming {
            duration_ms: 0.0,
            delay_ms: 0.0,
            ..t
        };
        let d = Self::default();
        Self {
            open_transform: zero(d.open_transform),
            open_fade: zero(d.open_fade),
            close_transform: zero(d.close_transform),
            close_fade: zero(d.close_fade),
            fallback_open: zero(d.fallback_open),
            fallback_close: zero(d.fallback_close),
            maximize: zero(d.maximize),
        }
    }

    fn validate(&self) -> DesktopResult<()> {
        let tracks = [
            ("openTransform", self.open_transform),
            ("openFade", self.open_fade),
            ("closeTransform", self.close_transform),
            ("closeFade", self.close_fade),
            ("fallbackOpen", self.fallback_open),
            ("fallbackClose", self.fallback_close),
            ("maximize", self.maximize),
        ];
        for (name, track) in tracks {
            if !track.is_valid() {
                return Err(DesktopError::InvalidConfig(format!(
                    "timing {} must be finite and non-negative",
                    name
                )));
            }
        }
        Ok(())
    }
}
