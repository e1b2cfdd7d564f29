//! Tolerances and snapping parameters used by hit-testing and gestures.

use crate::config::Config;
use crate::util::{self, Point};

/// Runtime editing parameters derived from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditSettings {
    /// Radius within which a point handle is hit
    pub hit_radius: f64,
    /// Extra distance beyond half the line width that still hits an outline
    pub outline_tolerance: f64,
    /// Distance within which a construction click closes onto the first vertex
    pub coincidence_threshold: f64,
    /// Grid interval for snapping
    pub grid_size: i32,
    /// Whether drags and construction clicks snap to the grid
    pub snap_to_grid: bool,
    /// Angle step applied when constraining segments with Shift
    pub angle_step_degrees: f64,
    /// Rotation deltas at or below this magnitude are ignored
    pub min_rotation_degrees: f64,
    /// Rectangle mode creates a primitive instead of a closed path
    pub rectangle_primitive: bool,
}

impl Default for EditSettings {
    fn default() -> Self {
        Self {
            hit_radius: 6.0,
            outline_tolerance: 3.0,
            coincidence_threshold: 8.0,
            grid_size: 10,
            snap_to_grid: true,
            angle_step_degrees: 15.0,
            min_rotation_degrees: 0.1,
            rectangle_primitive: false,
        }
    }
}

impl EditSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            hit_radius: config.editing.hit_radius,
            outline_tolerance: config.editing.outline_tolerance,
            coincidence_threshold: config.editing.coincidence_threshold,
            grid_size: config.grid.size,
            snap_to_grid: config.grid.snap,
            angle_step_degrees: config.editing.angle_step_degrees,
            min_rotation_degrees: config.editing.min_rotation_degrees,
            rectangle_primitive: config.editing.rectangle_primitive,
        }
    }

    /// Snaps `pos` to the grid when snapping is enabled.
    pub fn snap(&self, pos: Point) -> Point {
        if self.snap_to_grid {
            util::align_point(pos, self.grid_size)
        } else {
            pos
        }
    }
}
