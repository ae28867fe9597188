//! Stateful components

use crate::core::BoxedWidget;

/// A stateful unit that derives a widget tree from its current state.
///
/// State transitions happen first, against the component's own state; `build`
/// then derives a fresh tree for the renderer to flatten. Keeping the two
/// steps separate means each can be asserted on independently.
pub trait Component: Send + Sync {
    /// Derive the widget tree for the current state.
    fn build(&self) -> BoxedWidget;

    /// Returns true once after each state change, then resets.
    fn take_dirty(&self) -> bool;
}
