//! Window registry module
//!
//! Owns the canonical state of every window slot: open flag, maximize flag,
//! stacking value, payload and the origin rectangle of the last trigger.

mod data;
mod registry;
#[allow(clippy::module_inception)]
mod window;

pub use data::{DocumentPayload, ImagePayload, PagePayload, WindowData};
pub use registry::{StackCounter, SubscriptionId, WindowListener, WindowRegistry};
pub use window::Window;

pub use crate::types::{WindowKey, ZIndex};
