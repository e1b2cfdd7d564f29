//! Point primitives: free points, path vertices and tangent handles.

use super::id::PointId;
use super::object::Movable;
use crate::input::Modifiers;
use crate::util::{self, Point};
use serde::Serialize;

/// Role of a [`CanvasPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    /// Standalone point not owned by a path
    Free,
    /// Anchor of a path segment; always visible
    Vertex,
    /// Tangent handle; its anchor is derived from its index in the owning path
    Control,
}

/// A single editable point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasPoint {
    pub id: PointId,
    pub position: Point,
    pub selected: bool,
    pub kind: PointKind,
}

impl CanvasPoint {
    pub fn new(position: Point, kind: PointKind) -> Self {
        Self {
            id: PointId::next(),
            position,
            selected: false,
            kind,
        }
    }

    pub fn free(position: Point) -> Self {
        Self::new(position, PointKind::Free)
    }

    pub fn vertex(position: Point) -> Self {
        Self::new(position, PointKind::Vertex)
    }

    pub fn control(position: Point) -> Self {
        Self::new(position, PointKind::Control)
    }

    pub fn is_vertex(&self) -> bool {
        self.kind == PointKind::Vertex
    }

    pub fn is_control(&self) -> bool {
        self.kind == PointKind::Control
    }

    /// True if `pos` lies within `radius` of this point.
    pub fn hit(&self, pos: Point, radius: f64) -> bool {
        self.position.distance(pos) <= radius
    }

    /// Copy with a fresh id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: PointId::next(),
            ..self.clone()
        }
    }
}

impl Movable for CanvasPoint {
    /// Points carry no adjacency of their own; cascades are run by the owning path.
    fn move_by(&mut self, dx: i32, dy: i32, _modifiers: Modifiers, _suppress_callback: bool) {
        self.position = self.position.offset(dx, dy);
    }

    fn align(&mut self, interval: i32) {
        self.position = util::align_point(self.position, interval);
    }
}
