//! Button widget

use crate::core::{next_widget_id, Event, MouseButton, Widget, WidgetId};
use crate::style::{Color, Style};
use std::sync::Arc;

/// Callback type for button clicks
pub type OnClick = Arc<dyn Fn() + Send + Sync>;

/// Standard button widget. Fires its handler on left mouse-up.
pub struct Button {
    id: WidgetId,
    style: Style,
    test_id: Option<String>,
    label: String,
    on_click: Option<OnClick>,
    disabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: next_widget_id(),
            style: Style::new()
                .padding(12.0)
                .background(Color::rgb(0, 122, 255)),
            test_id: None,
            label: label.into(),
            on_click: None,
            disabled: false,
        }
    }

    pub fn on_click<F: Fn() + Send + Sync + 'static>(mut self, handler: F) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for Button {
    fn id(&self) -> WidgetId { self.id }
    fn kind(&self) -> &'static str { "button" }
    fn style(&self) -> &Style { &self.style }
    fn test_id(&self) -> Option<&str> { self.test_id.as_deref() }

    fn text(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn on_event(&mut self, event: &Event) -> bool {
        if self.disabled {
            return false;
        }

        match event {
            Event::MouseUp { button: MouseButton::Left, .. } => {
                if let Some(ref handler) = self.on_click {
                    handler();
                    return true;
                }
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn left_mouse_up() -> Event {
        Event::MouseUp { x: 0.0, y: 0.0, button: MouseButton::Left }
    }

    #[test]
    fn test_button_carries_label_and_marker() {
        let button = Button::new("Increment").with_test_id("btn-inc");

        assert_eq!(button.label(), "Increment");
        assert_eq!(button.test_id(), Some("btn-inc"));
    }

    #[test]
    fn test_click_fires_handler_on_mouse_up() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let mut button = Button::new("Increment")
            .on_click(move || { counter.fetch_add(1, Ordering::SeqCst); });

        assert!(!button.on_event(&Event::MouseDown { x: 0.0, y: 0.0, button: MouseButton::Left }));
        assert!(button.on_event(&left_mouse_up()));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_only_left_button_counts() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let mut button = Button::new("Increment")
            .on_click(move || { counter.fetch_add(1, Ordering::SeqCst); });

        button.on_event(&Event::MouseUp { x: 0.0, y: 0.0, button: MouseButton::Right });
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_disabled_button_ignores_clicks() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let mut button = Button::new("Increment")
            .disabled(true)
            .on_click(move || { counter.fetch_add(1, Ordering::SeqCst); });

        assert!(!button.on_event(&left_mouse_up()));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }
}
