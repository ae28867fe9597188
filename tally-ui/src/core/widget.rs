//! Widget trait and core widget types

use crate::core::Event;
use crate::style::Style;

/// Unique identifier for widgets
pub type WidgetId = u64;

/// Core trait that all UI components implement
pub trait Widget: Send + Sync {
    /// Returns the widget's unique identifier
    fn id(&self) -> WidgetId;

    /// Widget kind name, recorded on frame regions
    fn kind(&self) -> &'static str;

    /// Get the widget's style
    fn style(&self) -> &Style;

    /// Test marker attached via `with_test_id`, if any
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Text this widget contributes to the frame
    fn text(&self) -> Option<&str> {
        None
    }

    /// Child widgets, in layout order
    fn children(&self) -> &[BoxedWidget] {
        &[]
    }

    /// Mutable child widgets, for event dispatch
    fn children_mut(&mut self) -> &mut [BoxedWidget] {
        &mut []
    }

    /// Handle events (clicks, etc.)
    fn on_event(&mut self, event: &Event) -> bool {
        let _ = event;
        false // Not handled by default
    }
}

/// A boxed widget for dynamic dispatch
pub type BoxedWidget = Box<dyn Widget>;

/// Helper to generate unique widget IDs
pub fn next_widget_id() -> WidgetId {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
