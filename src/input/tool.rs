//! Editing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editing tool selection.
///
/// The active tool decides which interaction mode receives pointer gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Select, move and edit existing objects (default)
    #[default]
    Select,
    /// Rotate an object about its centroid
    Rotate,
    /// Click out a polyline
    Line,
    /// Click and drag out a Bezier path
    Bezier,
    /// Drag out a rectangle
    Rectangle,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Rotate => "rotate",
            Tool::Line => "line",
            Tool::Bezier => "bezier",
            Tool::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
