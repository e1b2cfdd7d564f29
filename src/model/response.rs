//! Gesture resolution results and cursor feedback handed back to the host.

use super::id::{ObjectId, PointId};
use super::point::PointKind;
use serde::Serialize;

/// The most specific entity under a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HitObject {
    /// A whole object (outline or fill)
    Object(ObjectId),
    /// A point owned by a path
    Point {
        object: ObjectId,
        point: PointId,
        /// Position of the point in the owning path's list at hit time
        index: usize,
        kind: PointKind,
    },
}

impl HitObject {
    /// The object that owns the hit entity.
    pub fn object_id(&self) -> ObjectId {
        match self {
            HitObject::Object(id) => *id,
            HitObject::Point { object, .. } => *object,
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, HitObject::Point { .. })
    }

    pub fn point_kind(&self) -> Option<PointKind> {
        match self {
            HitObject::Point { kind, .. } => Some(*kind),
            HitObject::Object(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MouseOverResponse {
    pub hit_object: Option<HitObject>,
}

/// Result of a press on an object.
///
/// `allow_move == false` means the press was consumed (insert, delete, toggle)
/// and no drag should follow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MouseDownResponse {
    pub hit_object: Option<HitObject>,
    pub child_hit_object: Option<HitObject>,
    pub allow_move: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MouseUpResponse {
    pub hit_object: Option<HitObject>,
    pub inner_hit_object: Option<HitObject>,
    pub allow_move: bool,
}

/// Cursor shape the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorKind {
    #[default]
    Default,
    Move,
    Crosshair,
    AddPoint,
    RemovePoint,
    MovePoint,
    Rotate,
    ClosePath,
}

/// Cursor plus a short hint describing the next valid gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Feedback {
    pub cursor: CursorKind,
    pub hint: String,
}

impl Feedback {
    pub fn new(cursor: CursorKind, hint: impl Into<String>) -> Self {
        Self {
            cursor,
            hint: hint.into(),
        }
    }
}
