//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{DashStyle, Style, color::BLACK, color::TRANSPARENT};
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas dimensions and background of the base layer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in model units (valid range: 1 - 20000)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Canvas height in model units (valid range: 1 - 20000)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Background color of the base layer; "none" keeps it transparent
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Snap grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    /// Grid interval in model units (valid range: 1 - 500)
    #[serde(default = "default_grid_size")]
    pub size: i32,

    /// Snap construction clicks and drags to the grid
    #[serde(default = "default_snap")]
    pub snap: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: default_grid_size(),
            snap: default_snap(),
        }
    }
}

/// Hit-testing tolerances and gesture behavior.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EditingConfig {
    /// Radius within which a point handle is hit (valid range: 1.0 - 50.0)
    #[serde(default = "default_hit_radius")]
    pub hit_radius: f64,

    /// Extra distance beyond half the line width that still hits an outline
    /// (valid range: 0.0 - 20.0)
    #[serde(default = "default_outline_tolerance")]
    pub outline_tolerance: f64,

    /// Distance within which a construction click closes onto the first vertex
    /// (valid range: 1.0 - 50.0)
    #[serde(default = "default_coincidence_threshold")]
    pub coincidence_threshold: f64,

    /// Angle step used when Shift constrains a segment (valid range: 1.0 - 90.0)
    #[serde(default = "default_angle_step")]
    pub angle_step_degrees: f64,

    /// Rotation deltas at or below this magnitude are ignored (valid range: 0.0 - 10.0)
    #[serde(default = "default_min_rotation")]
    pub min_rotation_degrees: f64,

    /// Rectangle tool creates a primitive rectangle instead of an editable path
    #[serde(default)]
    pub rectangle_primitive: bool,

    /// Offset applied to duplicated objects, in model units
    #[serde(default = "default_duplicate_offset")]
    pub duplicate_offset: i32,

    /// Tool active at startup
    #[serde(default)]
    pub default_tool: Tool,
}

impl Default for EditingConfig {
    fn default() -> Self {
        Self {
            hit_radius: default_hit_radius(),
            outline_tolerance: default_outline_tolerance(),
            coincidence_threshold: default_coincidence_threshold(),
            angle_step_degrees: default_angle_step(),
            min_rotation_degrees: default_min_rotation(),
            rectangle_primitive: false,
            duplicate_offset: default_duplicate_offset(),
            default_tool: Tool::default(),
        }
    }
}

/// Template style copied onto newly constructed objects.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    /// Outline width (valid range: 0.5 - 50.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    #[serde(default = "default_line_color")]
    pub line_color: ColorSpec,

    /// Fill color for closed shapes; "none" disables filling
    #[serde(default = "default_fill_color")]
    pub fill_color: ColorSpec,

    #[serde(default)]
    pub dash: DashStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            line_color: default_line_color(),
            fill_color: default_fill_color(),
            dash: DashStyle::default(),
        }
    }
}

impl StyleConfig {
    pub fn to_style(&self) -> Style {
        Style {
            line_width: self.line_width,
            line_color: self.line_color.to_color_or(BLACK),
            fill_color: self.fill_color.to_color_or(TRANSPARENT),
            dash: self.dash,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> i32 {
    1024
}

fn default_canvas_height() -> i32 {
    768
}

fn default_background() -> ColorSpec {
    ColorSpec::named("white")
}

fn default_grid_size() -> i32 {
    10
}

fn default_snap() -> bool {
    true
}

fn default_hit_radius() -> f64 {
    6.0
}

fn default_outline_tolerance() -> f64 {
    3.0
}

fn default_coincidence_threshold() -> f64 {
    8.0
}

fn default_angle_step() -> f64 {
    15.0
}

fn default_min_rotation() -> f64 {
    0.1
}

fn default_duplicate_offset() -> i32 {
    10
}

fn default_line_width() -> f64 {
    2.0
}

fn default_line_color() -> ColorSpec {
    ColorSpec::named("black")
}

fn default_fill_color() -> ColorSpec {
    ColorSpec::named("none")
}
