//! Coordinate, snapping, and color-name utilities.
//!
//! This module provides:
//! - The integer [`Point`] used for every model coordinate
//! - Grid alignment (round-half-up) and 15° angle constraints
//! - [`Rect`] bounds and the page↔world [`GridTransform`]
//! - Color name mapping used by the configuration system

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};

// ============================================================================
// Points
// ============================================================================

/// Integer model-space coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Converts to a floating-point kurbo point for curve math.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x as f64, self.y as f64)
    }

    /// Rounds a kurbo point back onto the integer grid.
    pub fn from_kurbo(p: kurbo::Point) -> Self {
        Self::new(p.x.round() as i32, p.y.round() as i32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// ============================================================================
// Snapping
// ============================================================================

/// Snaps a single coordinate to the nearest multiple of `interval`.
///
/// Ties round up (toward positive infinity), so `15` with an interval of `10`
/// becomes `20` and `-15` becomes `-10`. A non-positive interval leaves the
/// value untouched.
pub fn align_value(value: i32, interval: i32) -> i32 {
    if interval <= 0 {
        return value;
    }
    let steps = (value as f64 / interval as f64 + 0.5).floor() as i32;
    steps * interval
}

/// Snaps both axes of a point to the grid.
pub fn align_point(point: Point, interval: i32) -> Point {
    Point::new(align_value(point.x, interval), align_value(point.y, interval))
}

/// Constrains `cursor` so that the segment from `origin` lies on a multiple of
/// `step_degrees`, keeping the segment length.
///
/// Returns `cursor` unchanged when the step is not positive or both points coincide.
pub fn constrain_angle(origin: Point, cursor: Point, step_degrees: f64) -> Point {
    let dx = (cursor.x - origin.x) as f64;
    let dy = (cursor.y - origin.y) as f64;
    let length = (dx * dx + dy * dy).sqrt();
    if step_degrees <= 0.0 || length < f64::EPSILON {
        return cursor;
    }

    let angle = dy.atan2(dx).to_degrees();
    let snapped = ((angle / step_degrees).round() * step_degrees).to_radians();

    Point::new(
        origin.x + (length * snapped.cos()).round() as i32,
        origin.y + (length * snapped.sin()).round() as i32,
    )
}

/// Difference between two angles in degrees, normalized to `(-180, 180]`.
pub fn angle_delta_degrees(from: f64, to: f64) -> f64 {
    let mut delta = to - from;
    while delta > 180.0 {
        delta -= 360.0;
    }
    while delta <= -180.0 {
        delta += 360.0;
    }
    delta
}

// ============================================================================
// Bounds
// ============================================================================

/// Axis-aligned rectangle in model coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be non-negative.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width < 0 || height < 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds the normalized rectangle spanned by two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Smallest rectangle containing every point, or `None` for an empty input.
    pub fn bounding<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::from_corners(
            Point::new(min_x, min_y),
            Point::new(max_x, max_y),
        ))
    }

    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn max(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> kurbo::Point {
        kurbo::Point::new(
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    /// Returns true if `p` lies inside the rectangle grown by `margin` on every side.
    pub fn contains(&self, p: Point, margin: f64) -> bool {
        let px = p.x as f64;
        let py = p.y as f64;
        px >= self.x as f64 - margin
            && px <= (self.x + self.width) as f64 + margin
            && py >= self.y as f64 - margin
            && py <= (self.y + self.height) as f64 + margin
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.x as f64,
            self.y as f64,
            (self.x + self.width) as f64,
            (self.y + self.height) as f64,
        )
    }
}

// ============================================================================
// Page <-> World Transform
// ============================================================================

/// Maps host page (device) coordinates onto model coordinates.
///
/// ```text
/// world = (page - offset) / scale
/// page  = world * scale + offset
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTransform {
    offset_x: f64,
    offset_y: f64,
    scale: f64,
}

impl Default for GridTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl GridTransform {
    pub fn identity() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Sets the zoom factor, constrained between 0.05 and 50.0.
    pub fn set_scale(&mut self, scale: f64) {
        if scale > 0.05 && scale < 50.0 {
            self.scale = scale;
        }
    }

    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Converts a page position into the nearest model point.
    pub fn page_to_world(&self, x: f64, y: f64) -> Point {
        Point::new(
            ((x - self.offset_x) / self.scale).round() as i32,
            ((y - self.offset_y) / self.scale).round() as i32,
        )
    }

    /// Converts a model point back into page coordinates.
    pub fn world_to_page(&self, p: Point) -> (f64, f64) {
        (
            p.x as f64 * self.scale + self.offset_x,
            p.y as f64 * self.scale + self.offset_y,
        )
    }
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
/// - "none" / "transparent" for an invisible fill
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "none" | "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}
