//! Text widget

use crate::core::{next_widget_id, Widget, WidgetId};
use crate::style::{Color, FontWeight, Style, TextAlign};

/// Text display widget
pub struct Text {
    id: WidgetId,
    style: Style,
    test_id: Option<String>,
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: next_widget_id(),
            style: Style::new(),
            test_id: None,
            content: content.into(),
        }
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.style.font_size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.text_color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.style.font_weight = FontWeight::Bold;
        self
    }

    pub fn center(mut self) -> Self {
        self.style.text_align = TextAlign::Center;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Widget for Text {
    fn id(&self) -> WidgetId { self.id }
    fn kind(&self) -> &'static str { "text" }
    fn style(&self) -> &Style { &self.style }
    fn test_id(&self) -> Option<&str> { self.test_id.as_deref() }

    fn text(&self) -> Option<&str> {
        Some(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_carries_content_and_marker() {
        let text = Text::new("The counter is currently 0")
            .with_test_id("count-display")
            .size(32.0)
            .bold()
            .center();

        assert_eq!(text.content(), "The counter is currently 0");
        assert_eq!(text.test_id(), Some("count-display"));
        assert_eq!(text.style().font_size, 32.0);
        assert_eq!(text.style().font_weight, FontWeight::Bold);
        assert_eq!(text.style().text_align, TextAlign::Center);
    }
}
