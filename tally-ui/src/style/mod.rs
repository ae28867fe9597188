//! Styling system for Tally UI

/// Style definition for a widget
#[derive(Debug, Clone)]
pub struct Style {
    // Layout
    pub flex_direction: FlexDirection,
    pub gap: f32,
    pub padding: EdgeInsets,

    // Visual
    pub background: Option<Color>,

    // Text
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub text_color: Option<Color>,
    pub text_align: TextAlign,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            flex_direction: FlexDirection::Row,
            gap: 0.0,
            padding: EdgeInsets::zero(),
            background: None,
            font_size: 16.0,
            font_weight: FontWeight::Normal,
            text_color: None,
            text_align: TextAlign::Left,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    // Builder methods
    pub fn flex_direction(mut self, dir: FlexDirection) -> Self {
        self.flex_direction = dir;
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn padding(mut self, p: f32) -> Self {
        self.padding = EdgeInsets::all(p);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Thin,
    Light,
    Normal,
    Medium,
    Bold,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInsets {
    pub fn zero() -> Self {
        Self { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 }
    }

    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builders_set_fields() {
        let style = Style::new()
            .flex_direction(FlexDirection::Column)
            .gap(8.0)
            .padding(12.0)
            .background(Color::rgb(0, 122, 255));

        assert_eq!(style.flex_direction, FlexDirection::Column);
        assert_eq!(style.gap, 8.0);
        assert_eq!(style.padding, EdgeInsets::all(12.0));
        assert_eq!(style.background, Some(Color::rgb(0, 122, 255)));
    }
}
