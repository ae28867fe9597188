//! Tally - the counter state machine
//!
//! The state record and pure transitions behind the counter widget. No UI
//! types live here; deriving a view from the state is `tally-ui`'s job, so
//! everything in this crate is testable without a widget tree.

use serde::{Deserialize, Serialize};

/// A user-activatable control on the counter widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Increment,
    Decrement,
}

/// Counter widget state.
///
/// One record per rendered frame: transitions return a new record instead of
/// mutating in place, so every intermediate state can be asserted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// Current count. Never goes below zero through the public controls.
    pub count: u64,
    /// True only immediately after a rejected decrement attempt.
    pub error: bool,
}

impl CounterState {
    /// Fresh state at widget mount: zero, no warning shown.
    pub fn new() -> Self {
        Self {
            count: 0,
            error: false,
        }
    }

    /// Apply a control activation and return the next state.
    ///
    /// Decrement at zero raises the below-zero warning and leaves the count
    /// untouched; it never panics and never returns an error. A warning
    /// raised earlier survives decrements from positive counts - increment
    /// is the only transition that clears it. Whether that asymmetry is
    /// intentional is unresolved upstream, so it is reproduced as observed
    /// rather than fixed.
    pub fn apply(self, control: Control) -> CounterState {
        let next = match control {
            Control::Increment => CounterState {
                count: self.count.saturating_add(1),
                error: false,
            },
            Control::Decrement if self.count == 0 => CounterState {
                error: true,
                ..self
            },
            Control::Decrement => CounterState {
                count: self.count - 1,
                ..self
            },
        };
        tracing::debug!(
            ?control,
            from = self.count,
            to = next.count,
            error = next.error,
            "applied control"
        );
        next
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_zero() {
        let state = CounterState::new();
        assert_eq!(state.count, 0);
        assert!(!state.error);
    }

    #[test]
    fn test_increment_bumps_count() {
        let state = CounterState::new().apply(Control::Increment);
        assert_eq!(state.count, 1);
        assert!(!state.error);
    }

    #[test]
    fn test_decrement_lowers_count() {
        let state = CounterState { count: 3, error: false }.apply(Control::Decrement);
        assert_eq!(state.count, 2);
        assert!(!state.error);
    }

    #[test]
    fn test_decrement_at_zero_raises_warning_and_keeps_count() {
        let state = CounterState::new().apply(Control::Decrement);
        assert_eq!(state.count, 0);
        assert!(state.error);
    }

    #[test]
    fn test_repeated_rejection_stays_at_zero() {
        let state = CounterState::new()
            .apply(Control::Decrement)
            .apply(Control::Decrement);
        assert_eq!(state.count, 0);
        assert!(state.error);
    }

    #[test]
    fn test_increment_clears_warning() {
        let state = CounterState::new()
            .apply(Control::Decrement)
            .apply(Control::Increment);
        assert_eq!(state.count, 1);
        assert!(!state.error);
    }

    #[test]
    fn test_decrement_from_positive_keeps_stale_warning() {
        // error && count > 0 is unreachable through the controls alone; it
        // can be seeded externally, and the warning must survive as observed.
        let state = CounterState { count: 5, error: true }.apply(Control::Decrement);
        assert_eq!(state.count, 4);
        assert!(state.error);
    }

    #[test]
    fn test_increment_saturates_at_max() {
        let state = CounterState { count: u64::MAX, error: false }.apply(Control::Increment);
        assert_eq!(state.count, u64::MAX);
    }

    proptest! {
        #[test]
        fn increments_add_up(start in 0u64..10_000, clicks in 0usize..200) {
            let mut state = CounterState { count: start, error: false };
            for _ in 0..clicks {
                state = state.apply(Control::Increment);
            }
            prop_assert_eq!(state.count, start + clicks as u64);
            prop_assert!(!state.error);
        }

        #[test]
        fn decrements_subtract(start in 0u64..10_000, clicks in 0usize..200) {
            prop_assume!(clicks as u64 <= start);
            let mut state = CounterState { count: start, error: false };
            for _ in 0..clicks {
                state = state.apply(Control::Decrement);
            }
            prop_assert_eq!(state.count, start - clicks as u64);
            prop_assert!(!state.error);
        }

        #[test]
        fn over_decrementing_lands_at_zero_with_warning(start in 0u64..200, extra in 1usize..50) {
            let mut state = CounterState { count: start, error: false };
            for _ in 0..start as usize + extra {
                state = state.apply(Control::Decrement);
            }
            prop_assert_eq!(state.count, 0);
            prop_assert!(state.error);
        }
    }
}
