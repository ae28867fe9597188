//! Tally UI - headless widget tree for the counter
//!
//! Widgets, a render pass that derives display text from state, and a
//! test-id driven harness for mounting and clicking the counter component.

pub mod core;
pub mod widgets;
pub mod render;
pub mod style;
pub mod counter;
pub mod harness;

pub use counter::CounterApp;
pub use harness::{Harness, HarnessError};
pub use widgets::*;
pub use style::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{Component, Event, MouseButton, State, Widget};
    pub use crate::counter::CounterApp;
    pub use crate::harness::{Harness, HarnessError};
    pub use crate::render::{Frame, Region};
    pub use crate::style::*;
    pub use crate::widgets::*;
}
