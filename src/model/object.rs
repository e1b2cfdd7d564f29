//! Capability traits and the closed set of canvas objects.

use super::id::ObjectId;
use super::path::BezierPath;
use super::primitive::RectanglePrimitive;
use super::response::{Feedback, HitObject, MouseDownResponse, MouseUpResponse};
use super::settings::EditSettings;
use crate::draw::{DrawSurface, Style};
use crate::input::Modifiers;
use crate::util::{Point, Rect};
use serde::Serialize;

/// Emits primitive draw calls for an entity.
pub trait Drawable {
    fn draw(&self, surface: &mut dyn DrawSurface);
}

/// Resolves the most specific entity under a position.
pub trait HitTestable {
    fn mouse_over(
        &self,
        pos: Point,
        modifiers: Modifiers,
        settings: &EditSettings,
    ) -> Option<HitObject>;
}

/// Translation and grid alignment.
pub trait Movable {
    /// Translates whatever is currently moveable.
    ///
    /// With `suppress_callback` set, no follow-up cascade (handle drag,
    /// mirroring) runs.
    fn move_by(&mut self, dx: i32, dy: i32, modifiers: Modifiers, suppress_callback: bool);

    /// Snaps every owned coordinate to the nearest multiple of `interval`.
    fn align(&mut self, interval: i32);
}

/// Rotation about an arbitrary center.
pub trait Rotatable {
    fn rotate(&mut self, degrees: f64, center: kurbo::Point);

    fn centroid(&self) -> Option<kurbo::Point>;
}

/// Anything that can live in a [`Layer`](super::Layer).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CanvasObject {
    Path(BezierPath),
    Primitive(RectanglePrimitive),
}

impl CanvasObject {
    pub fn id(&self) -> ObjectId {
        match self {
            CanvasObject::Path(p) => p.id(),
            CanvasObject::Primitive(r) => r.id(),
        }
    }

    pub fn is_selected(&self) -> bool {
        match self {
            CanvasObject::Path(p) => p.is_selected(),
            CanvasObject::Primitive(r) => r.is_selected(),
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        match self {
            CanvasObject::Path(p) => p.set_selected(selected),
            CanvasObject::Primitive(r) => r.set_selected(selected),
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            CanvasObject::Path(p) => &p.style,
            CanvasObject::Primitive(r) => &r.style,
        }
    }

    /// Deep copy with fresh ids.
    pub fn duplicate(&self) -> Self {
        match self {
            CanvasObject::Path(p) => CanvasObject::Path(p.duplicate()),
            CanvasObject::Primitive(r) => CanvasObject::Primitive(r.duplicate()),
        }
    }

    pub fn centroid(&self) -> Option<kurbo::Point> {
        match self {
            CanvasObject::Path(p) => p.centroid(),
            CanvasObject::Primitive(r) => Some(r.centroid()),
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        match self {
            CanvasObject::Path(p) => p.bounds(),
            CanvasObject::Primitive(r) => Some(r.rect),
        }
    }

    pub fn as_path(&self) -> Option<&BezierPath> {
        match self {
            CanvasObject::Path(p) => Some(p),
            CanvasObject::Primitive(_) => None,
        }
    }

    pub fn as_path_mut(&mut self) -> Option<&mut BezierPath> {
        match self {
            CanvasObject::Path(p) => Some(p),
            CanvasObject::Primitive(_) => None,
        }
    }

    /// Rotation capability; primitives stay axis-aligned and have none.
    pub fn as_rotatable_mut(&mut self) -> Option<&mut dyn Rotatable> {
        match self {
            CanvasObject::Path(p) => Some(p),
            CanvasObject::Primitive(_) => None,
        }
    }

    pub fn is_rotatable(&self) -> bool {
        matches!(self, CanvasObject::Path(_))
    }

    pub fn on_mouse_down(
        &mut self,
        pos: Point,
        modifiers: Modifiers,
        settings: &EditSettings,
    ) -> MouseDownResponse {
        match self {
            CanvasObject::Path(p) => p.on_mouse_down(pos, modifiers, settings),
            CanvasObject::Primitive(r) => MouseDownResponse {
                hit_object: Some(HitObject::Object(r.id())),
                child_hit_object: None,
                allow_move: true,
            },
        }
    }

    pub fn on_mouse_up(
        &mut self,
        pos: Point,
        modifiers: Modifiers,
        settings: &EditSettings,
    ) -> MouseUpResponse {
        match self {
            CanvasObject::Path(p) => p.on_mouse_up(pos, modifiers, settings),
            CanvasObject::Primitive(r) => MouseUpResponse {
                hit_object: Some(HitObject::Object(r.id())),
                inner_hit_object: None,
                allow_move: true,
            },
        }
    }

    pub fn feedback(&self, hit: Option<&HitObject>, modifiers: Modifiers) -> Feedback {
        match self {
            CanvasObject::Path(p) => p.feedback(hit, modifiers),
            CanvasObject::Primitive(r) => r.feedback(hit, modifiers),
        }
    }
}

impl Drawable for CanvasObject {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        match self {
            CanvasObject::Path(p) => p.draw(surface),
            CanvasObject::Primitive(r) => r.draw(surface),
        }
    }
}

impl HitTestable for CanvasObject {
    fn mouse_over(
        &self,
        pos: Point,
        modifiers: Modifiers,
        settings: &EditSettings,
    ) -> Option<HitObject> {
        match self {
            CanvasObject::Path(p) => p.mouse_over(pos, modifiers, settings),
            CanvasObject::Primitive(r) => r.mouse_over(pos, modifiers, settings),
        }
    }
}

impl Movable for CanvasObject {
    fn move_by(&mut self, dx: i32, dy: i32, modifiers: Modifiers, suppress_callback: bool) {
        match self {
            CanvasObject::Path(p) => p.move_by(dx, dy, modifiers, suppress_callback),
            CanvasObject::Primitive(r) => r.move_by(dx, dy, modifiers, suppress_callback),
        }
    }

    fn align(&mut self, interval: i32) {
        match self {
            CanvasObject::Path(p) => p.align(interval),
            CanvasObject::Primitive(r) => r.align(interval),
        }
    }
}

impl From<BezierPath> for CanvasObject {
    fn from(path: BezierPath) -> Self {
        CanvasObject::Path(path)
    }
}

impl From<RectanglePrimitive> for CanvasObject {
    fn from(rect: RectanglePrimitive) -> Self {
        CanvasObject::Primitive(rect)
    }
}
