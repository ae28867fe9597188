//! Built-in widgets

mod container;
mod text;
mod button;

pub use container::*;
pub use text::*;
pub use button::*;
