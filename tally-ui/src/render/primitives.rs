//! Frame primitives

use crate::core::WidgetId;
use serde::Serialize;

/// One widget flattened into the frame.
///
/// `text` is the widget's own text, empty for containers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub widget: WidgetId,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    pub text: String,
}

/// A rendered frame: every widget in the tree, depth-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub regions: Vec<Region>,
}

impl Frame {
    pub fn new() -> Self {
        Self { regions: Vec::new() }
    }

    /// All regions carrying the given test id
    pub fn select(&self, test_id: &str) -> Vec<&Region> {
        self.regions
            .iter()
            .filter(|r| r.test_id.as_deref() == Some(test_id))
            .collect()
    }

    /// Serialize the frame for readback
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
