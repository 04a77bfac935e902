//! Presenter animation state

use serde::{Deserialize, Serialize};

/// Animation state of one window
///
/// Open/close and maximize/restore share this single machine, so at most one
/// geometry animation drives a window at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresenterState {
    /// Hidden and non-interactive
    #[default]
    Closed,
    /// Growing out of its trigger (or fading in)
    Opening,
    /// At rest in its windowed geometry
    Open,
    /// Collapsing into its trigger (or fading out)
    Closing,
    /// Growing to fill the viewport
    Maximizing,
    /// At rest filling the viewport
    Maximized,
    /// Returning from the viewport to its windowed geometry
    Restoring,
}

impl PresenterState {
    /// True while a transition is in flight
    pub fn is_transitioning(self) -> bool {
        matches!(
            self,
            PresenterState::Opening
                | PresenterState::Closing
                | PresenterState::Maximizing
                | PresenterState::Restoring
        )
    }

    /// True for every state in which the window is painted
    pub fn is_visible(self) -> bool {
        self != PresenterState::Closed
    }

    /// State the machine settles in once the current transition completes
    pub fn settled(self, maximized: bool) -> PresenterState {
        match self {
            PresenterState::Opening if maximized => PresenterState::Maximized,
            PresenterState::Opening => PresenterState::Open,
            PresenterState::Closing => PresenterState::Closed,
            PresenterState::Maximizing => PresenterState::Maximized,
            PresenterState::Restoring => PresenterState::Open,
            rest => rest,
        }
    }
}
