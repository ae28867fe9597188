//! Headless renderer

use crate::core::Widget;
use crate::render::{Frame, Region};

/// Flattens a widget tree into a frame, depth-first
pub struct Renderer {
    frames: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self { frames: 0 }
    }

    /// Number of frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Render a frame
    pub fn render(&mut self, root: &dyn Widget) -> Frame {
        let mut frame = Frame::new();
        Self::visit(root, &mut frame);
        self.frames += 1;
        tracing::debug!(frame = self.frames, regions = frame.regions.len(), "rendered");
        frame
    }

    fn visit(widget: &dyn Widget, frame: &mut Frame) {
        frame.regions.push(Region {
            widget: widget.id(),
            kind: widget.kind(),
            test_id: widget.test_id().map(str::to_owned),
            text: widget.text().unwrap_or("").to_owned(),
        });
        for child in widget.children() {
            Self::visit(child.as_ref(), frame);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
