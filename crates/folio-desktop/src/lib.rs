//! Window Management for the Folio Desktop
//!
//! This crate provides the window layer of a browser "portfolio desktop":
//! - Window registry (open, close, focus, minimize, maximize, z-order)
//! - Per-window presentation with genie-effect open/close transitions
//! - Maximize/restore with saved windowed geometry
//! - Title bar controls and a generic window frame for content
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`, `Transform`)
//! - [`window`]: Window slots, payloads and the authoritative registry
//! - [`transition`]: Easing curves, tweens and genie geometry
//! - [`presenter`]: Per-window animation state machine
//! - [`control`]: Close/minimize/maximize buttons
//! - [`frame`]: Generic frame binding content to a slot
//!
//! [`Desktop`] ties them together: triggers go in, [`FrameState`]s come out.
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{Desktop, DesktopConfig, FixedLayout, PresenterState, Rect, Size};
//!
//! let layout = FixedLayout::new(Size::new(1440.0, 900.0))
//!     .with_rect("finder", Rect::new(370.0, 200.0, 700.0, 500.0));
//! let mut desktop = Desktop::new(DesktopConfig::portfolio(), layout).unwrap();
//!
//! let dock_icon = Rect::new(688.0, 836.0, 64.0, 64.0);
//! desktop.open("finder", None, Some(dock_icon), 0.0);
//! desktop.tick(500.0);
//!
//! let finder = desktop.presenter("finder").unwrap();
//! assert_eq!(finder.state(), PresenterState::Open);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Single owner**: only the registry mutates window state
//! 2. **Time Abstraction**: animations take `now` in milliseconds for deterministic testing
//! 3. **Visual bookkeeping stays visual**: presenters own geometry the registry never sees
//! 4. **No browser in the core**: the DOM is reached only through the `wasm` feature

pub mod config;
pub mod control;
pub mod frame;
pub mod math;
pub mod presenter;
pub mod transition;
pub mod window;

mod engine;
mod error;
mod types;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use config::{DesktopConfig, Redirect, TrackTiming, TransitionTimings, WindowSlot};
pub use control::{ControlBar, WindowControl};
pub use engine::{Desktop, FixedLayout, LayoutProbe};
pub use error::{DesktopError, DesktopResult};
pub use frame::{ContentView, RenderedWindow, WindowContent, WindowFrame};
pub use math::{FrameStyle, Rect, Size, Transform, Vec2, FRAME_STYLE};
pub use presenter::{FrameState, PresenterState, RestoreGeometry, WindowPresenter};
pub use transition::{Easing, Tween};
pub use types::{WindowKey, ZIndex};
pub use window::{Window, WindowData, WindowRegistry};
