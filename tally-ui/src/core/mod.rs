//! Core types and traits for Tally UI

mod widget;
mod state;
mod events;
mod component;

pub use widget::*;
pub use state::*;
pub use events::*;
pub use component::*;
