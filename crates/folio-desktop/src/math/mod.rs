//! Core geometry types for the desktop shell
//!
//! These types provide the 2D math used by the registry (origin rectangles)
//! and by the presenters (layout rectangles, transforms, maximize bounds).

mod rect;
mod size;
mod style;
mod transform;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
pub use transform::Transform;
pub use vec2::Vec2;
