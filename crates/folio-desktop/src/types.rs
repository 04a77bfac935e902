//! Core type definitions for the desktop shell
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Stable window slot identifier
///
/// Slots are predeclared in the desktop configuration (`"finder"`,
/// `"safari"`, ...). No slot is created or destroyed at runtime.
pub type WindowKey = String;

/// Stacking value; higher paints on top
pub type ZIndex = u32;
