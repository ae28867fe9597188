//! Headless rendering: widget tree to frame

mod renderer;
mod primitives;

pub use renderer::*;
pub use primitives::*;
