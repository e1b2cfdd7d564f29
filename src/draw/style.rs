//! Stroke and fill attributes carried by drawable objects.

use super::color::{BLACK, Color, TRANSPARENT};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Dash pattern for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DashStyle {
    /// Continuous line
    #[default]
    Solid,
    /// Long dashes
    Dash,
    /// Dots
    Dot,
    /// Alternating dash and dot
    DashDot,
}

impl DashStyle {
    /// Dash lengths for this style, scaled by the stroke width.
    ///
    /// An empty pattern means a solid line.
    pub fn pattern(self, width: f64) -> Vec<f64> {
        let w = width.max(1.0);
        match self {
            DashStyle::Solid => Vec::new(),
            DashStyle::Dash => vec![3.0 * w, 2.0 * w],
            DashStyle::Dot => vec![w, w],
            DashStyle::DashDot => vec![3.0 * w, w, w, w],
        }
    }
}

/// Value attributes of a shape: line width, colors and dash pattern.
///
/// Purely visual; never affects path structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub line_width: f64,
    pub line_color: Color,
    pub fill_color: Color,
    pub dash: DashStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            line_color: BLACK,
            fill_color: TRANSPARENT,
            dash: DashStyle::Solid,
        }
    }
}

impl Style {
    /// Stroke parameters for the outline.
    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.line_color,
            width: self.line_width,
            dash: self.dash,
        }
    }

    pub fn has_fill(&self) -> bool {
        !self.fill_color.is_transparent()
    }
}

/// Parameters for a single stroke call on a [`DrawSurface`](super::DrawSurface).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub dash: DashStyle,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: DashStyle::Solid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_patterns_scale_with_width() {
        assert!(DashStyle::Solid.pattern(4.0).is_empty());
        assert_eq!(DashStyle::Dash.pattern(2.0), vec![6.0, 4.0]);
        assert_eq!(DashStyle::Dot.pattern(0.5), vec![1.0, 1.0]);
    }

    #[test]
    fn default_style_has_no_fill() {
        assert!(!Style::default().has_fill());
    }
}
