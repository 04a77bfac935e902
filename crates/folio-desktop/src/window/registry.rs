//! Window registry: the single owner of window state
//!
//! ## Stacking
//!
//! Stacking values come from one [`StackCounter`] shared by every slot.
//! `open`, `focus` and `maximize` each take the next value, so the most
//! recently touched window is always strictly on top and no two grants ever
//! tie. `close` and `minimize` drop the slot back to the configured baseline.
//!
//! ## Subscriptions
//!
//! Every successful mutation notifies subscribers with the new state of the
//! mutated window before the call returns. Operations on unknown keys return
//! [`DesktopError::UnknownWindow`] and change nothing, the counter included.

use std::collections::BTreeMap;

use tracing::debug;

use super::{Window, WindowData, WindowKey, ZIndex};
use crate::config::DesktopConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::math::Rect;

/// Monotonic source of stacking values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackCounter {
    next: ZIndex,
}

impl StackCounter {
    /// Counter whose first grant is `first`
    pub fn starting_at(first: ZIndex) -> Self {
        Self { next: first }
    }

    /// Value the next grant will return
    pub fn peek(&self) -> ZIndex {
        self.next
    }

    /// Get-and-increment; sticks at `ZIndex::MAX` once exhausted
    pub fn take(&mut self) -> ZIndex {
        let z = self.next;
        self.next = self.next.saturating_add(1);
        z
    }
}

/// Handle returned by [`WindowRegistry::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Callback invoked with the new window state after each mutation
pub type WindowListener = Box<dyn FnMut(&Window)>;

/// Registry of the fixed set of window slots
pub struct WindowRegistry {
    windows: BTreeMap<WindowKey, Window>,
    baseline_z_index: ZIndex,
    counter: StackCounter,
    listeners: Vec<(SubscriptionId, WindowListener)>,
    next_subscription: u64,
}

impl WindowRegistry {
    /// Materialize every configured slot: closed, restored, baseline stacking
    pub fn new(config: &DesktopConfig) -> Self {
        let baseline = config.baseline_z_index;
        let windows = config
            .windows
            .keys()
            .map(|key| (key.clone(), Window::new(key.clone(), baseline)))
            .collect();

        Self {
            windows,
            baseline_z_index: baseline,
            counter: StackCounter::starting_at(baseline + 1),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Open a window and bring it to the front
    ///
    /// `data` replaces the payload only when given; otherwise the slot keeps
    /// whatever it showed last. `origin` is recorded verbatim when given.
    pub fn open(
        &mut self,
        key: &str,
        data: Option<WindowData>,
        origin: Option<Rect>,
    ) -> DesktopResult<&Window> {
        let window = self
            .windows
            .get_mut(key)
            .ok_or_else(|| DesktopError::UnknownWindow(key.to_string()))?;

        window.is_open = true;
        window.z_index = self.counter.take();
        if let Some(data) = data {
            window.data = Some(data);
        }
        if let Some(origin) = origin {
            window.origin_rect = Some(origin);
        }
        debug!(key, z_index = window.z_index, "window opened");

        self.commit(key)
    }

    /// Close a window and send it to the back of the stack
    pub fn close(&mut self, key: &str) -> DesktopResult<&Window> {
        self.hide(key)?;
        debug!(key, "window closed");
        self.commit(key)
    }

    /// Raise an open window without changing its visibility
    pub fn focus(&mut self, key: &str) -> DesktopResult<&Window> {
        let window = self
            .windows
            .get_mut(key)
            .ok_or_else(|| DesktopError::UnknownWindow(key.to_string()))?;

        window.z_index = self.counter.take();
        debug!(key, z_index = window.z_index, "window focused");

        self.commit(key)
    }

    /// Minimize a window
    ///
    /// Minimized and closed share one visibility flag: the slot is hidden and
    /// its stacking value reset exactly as by [`close`](Self::close).
    pub fn minimize(&mut self, key: &str) -> DesktopResult<&Window> {
        self.hide(key)?;
        debug!(key, "window minimized");
        self.commit(key)
    }

    /// Toggle the maximize flag and bring the window to the front
    ///
    /// There is no separate restore: calling this again restores. The open
    /// flag is untouched, so a closed window can be maximized for next time.
    pub fn maximize(&mut self, key: &str) -> DesktopResult<&Window> {
        let window = self
            .windows
            .get_mut(key)
            .ok_or_else(|| DesktopError::UnknownWindow(key.to_string()))?;

        window.is_maximized = !window.is_maximized;
        window.z_index = self.counter.take();
        debug!(
            key,
            maximized = window.is_maximized,
            z_index = window.z_index,
            "window maximize toggled"
        );

        self.commit(key)
    }

    fn hide(&mut self, key: &str) -> DesktopResult<()> {
        let window = self
            .windows
            .get_mut(key)
            .ok_or_else(|| DesktopError::UnknownWindow(key.to_string()))?;

        window.is_open = false;
        window.z_index = self.baseline_z_index;
        Ok(())
    }

    /// Notify subscribers of the new state of `key`
    fn commit(&mut self, key: &str) -> DesktopResult<&Window> {
        let window = self
            .windows
            .get(key)
            .ok_or_else(|| DesktopError::UnknownWindow(key.to_string()))?;

        for (_, listener) in self.listeners.iter_mut() {
            listener(window);
        }
        Ok(window)
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register a listener for window changes
    pub fn subscribe(&mut self, listener: impl FnMut(&Window) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        let listener: WindowListener = Box::new(listener);
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    // =========================================================================
    // Read view
    // =========================================================================

    /// Get a window by key
    pub fn get(&self, key: &str) -> Option<&Window> {
        self.windows.get(key)
    }

    /// Check whether a key names a configured slot
    pub fn contains(&self, key: &str) -> bool {
        self.windows.contains_key(key)
    }

    /// All windows, ordered by key
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Number of configured slots
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True if no slots are configured
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Stacking value the next focus-granting operation will assign
    pub fn next_z_index(&self) -> ZIndex {
        self.counter.peek()
    }

    /// Stacking value of closed windows
    pub fn baseline_z_index(&self) -> ZIndex {
        self.baseline_z_index
    }

    /// The open window painted on top, if any
    pub fn front_most(&self) -> Option<&Window> {
        self.windows
            .values()
            .filter(|w| w.is_open)
            .max_by_key(|w| w.z_index)
    }

    /// Open windows from back to front
    pub fn stacking_order(&self) -> Vec<&Window> {
        let mut open: Vec<&Window> = self.windows.values().filter(|w| w.is_open).collect();
        open.sort_by_key(|w| w.z_index);
        open
    }
}

impl std::fmt::Debug for WindowRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowRegistry")
            .field("windows", &self.windows)
            .field("baseline_z_index", &self.baseline_z_index)
            .field("counter", &self.counter)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;

#[cfg(test)]
#[path = "registry_proptests.rs"]
mod registry_proptests;
