//! Per-window presentation
//!
//! A [`WindowPresenter`] turns registry snapshots into a continuous sequence
//! of [`FrameState`]s. It owns all visual bookkeeping (where the window last
//! disappeared, what to restore to after maximize, which stacking value to
//! paint with while closing); none of it is written back to the registry.

mod frame_state;
#[allow(clippy::module_inception)]
mod presenter;
mod state;

pub use frame_state::FrameState;
pub use presenter::{RestoreGeometry, WindowPresenter};
pub use state::PresenterState;
