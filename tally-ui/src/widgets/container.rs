//! Container widgets (Column, Row)

use crate::core::{next_widget_id, BoxedWidget, Widget, WidgetId};
use crate::style::{EdgeInsets, FlexDirection, Style};

/// Vertical layout container
pub struct Column {
    id: WidgetId,
    style: Style,
    test_id: Option<String>,
    children: Vec<BoxedWidget>,
}

impl Column {
    pub fn new() -> Self {
        Self {
            id: next_widget_id(),
            style: Style::new().flex_direction(FlexDirection::Column),
            test_id: None,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.style.gap = gap;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.style.padding = EdgeInsets::all(padding);
        self
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn id(&self) -> WidgetId { self.id }
    fn kind(&self) -> &'static str { "column" }
    fn style(&self) -> &Style { &self.style }
    fn test_id(&self) -> Option<&str> { self.test_id.as_deref() }

    fn children(&self) -> &[BoxedWidget] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [BoxedWidget] {
        &mut self.children
    }
}

/// Horizontal layout container
pub struct Row {
    id: WidgetId,
    style: Style,
    test_id: Option<String>,
    children: Vec<BoxedWidget>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            id: next_widget_id(),
            style: Style::new().flex_direction(FlexDirection::Row),
            test_id: None,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.style.gap = gap;
        self
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Row {
    fn id(&self) -> WidgetId { self.id }
    fn kind(&self) -> &'static str { "row" }
    fn style(&self) -> &Style { &self.style }
    fn test_id(&self) -> Option<&str> { self.test_id.as_deref() }

    fn children(&self) -> &[BoxedWidget] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [BoxedWidget] {
        &mut self.children
    }
}
