//! The counter component
//!
//! A count readout, a below-zero warning line, and increment/decrement
//! buttons. Clicks run a transition against the shared state; the next
//! build derives the tree for whatever the state now says.

use crate::core::{BoxedWidget, Component, State};
use crate::style::Color;
use crate::widgets::{Button, Column, Row, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tally::{Control, CounterState};

/// Shown under the count while a decrement stands rejected.
const BELOW_ZERO_WARNING: &str = "The counter cannot go below zero!";

pub struct CounterApp {
    state: State<CounterState>,
    dirty: Arc<AtomicBool>,
}

impl CounterApp {
    pub fn new() -> Self {
        Self::with_state(CounterState::new())
    }

    /// Mount with a preset state instead of the default zero.
    pub fn with_state(initial: CounterState) -> Self {
        let state = State::new(initial);
        let dirty = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&dirty);
        state.subscribe(move || flag.store(true, Ordering::SeqCst));
        Self { state, dirty }
    }

    /// Handle to the underlying state, for seeding and readback.
    pub fn state(&self) -> State<CounterState> {
        self.state.clone()
    }
}

impl Default for CounterApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CounterApp {
    fn build(&self) -> BoxedWidget {
        let current = self.state.get();
        let inc = self.state.clone();
        let dec = self.state.clone();

        // The warning line is always in the tree; its text empties out
        // once an increment clears the flag.
        let warning = if current.error {
            tracing::debug!(count = current.count, "warning line rendered");
            BELOW_ZERO_WARNING
        } else {
            ""
        };

        Box::new(
            Column::new()
                .with_test_id("comp-app")
                .padding(24.0)
                .gap(16.0)
                .child(
                    Text::new(format!("The counter is currently {}", current.count))
                        .with_test_id("count-display")
                        .size(32.0)
                        .bold()
                        .center(),
                )
                .child(
                    Text::new(warning)
                        .with_test_id("error-message")
                        .color(Color::rgb(255, 59, 48)),
                )
                .child(
                    Row::new()
                        .gap(12.0)
                        .child(
                            Button::new("Increment")
                                .with_test_id("btn-inc")
                                .on_click(move || inc.update(|s| *s = s.apply(Control::Increment))),
                        )
                        .child(
                            Button::new("Decrement")
                                .with_test_id("btn-dec")
                                .on_click(move || dec.update(|s| *s = s.apply(Control::Decrement))),
                        ),
                ),
        )
    }

    fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Widget;

    #[test]
    fn test_build_derives_count_text() {
        let app = CounterApp::with_state(CounterState { count: 42, error: false });
        let root = app.build();

        let texts: Vec<&str> = collect_texts(root.as_ref());
        assert!(texts.contains(&"The counter is currently 42"));
    }

    #[test]
    fn test_warning_text_follows_error_flag() {
        let app = CounterApp::with_state(CounterState { count: 0, error: true });
        let root = app.build();
        assert!(collect_texts(root.as_ref()).contains(&BELOW_ZERO_WARNING));

        app.state().set(CounterState { count: 0, error: false });
        let root = app.build();
        assert!(!collect_texts(root.as_ref()).contains(&BELOW_ZERO_WARNING));
    }

    #[test]
    fn test_state_change_marks_dirty_once() {
        let app = CounterApp::new();
        assert!(!app.take_dirty());

        app.state().update(|s| *s = s.apply(Control::Increment));
        assert!(app.take_dirty());
        assert!(!app.take_dirty());
    }

    fn collect_texts(widget: &dyn Widget) -> Vec<&str> {
        let mut out = Vec::new();
        fn visit<'a>(widget: &'a dyn Widget, out: &mut Vec<&'a str>) {
            if let Some(text) = widget.text() {
                out.push(text);
            }
            for child in widget.children() {
                visit(child.as_ref(), out);
            }
        }
        visit(widget, &mut out);
        out
    }
}
