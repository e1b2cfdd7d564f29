//! Non-editable axis-aligned rectangle.

use super::id::ObjectId;
use super::object::{Drawable, HitTestable, Movable};
use super::path::{BezierPath, PathKind};
use super::response::{CursorKind, Feedback, HitObject};
use super::settings::EditSettings;
use crate::draw::{DrawSurface, Style};
use crate::input::Modifiers;
use crate::util::{self, Point, Rect};
use kurbo::Shape as _;
use serde::Serialize;

/// Rectangle that can be moved and aligned but has no editable points.
#[derive(Debug, Clone, Serialize)]
pub struct RectanglePrimitive {
    id: ObjectId,
    pub rect: Rect,
    pub style: Style,
    selected: bool,
}

impl RectanglePrimitive {
    pub fn new(rect: Rect, style: Style) -> Self {
        Self {
            id: ObjectId::next(),
            rect,
            style,
            selected: false,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn duplicate(&self) -> Self {
        Self {
            id: ObjectId::next(),
            ..self.clone()
        }
    }

    pub fn centroid(&self) -> kurbo::Point {
        self.rect.center()
    }

    /// Four corners, clockwise from the top-left.
    pub fn corners(&self) -> [Point; 4] {
        let min = self.rect.min();
        let max = self.rect.max();
        [min, Point::new(max.x, min.y), max, Point::new(min.x, max.y)]
    }

    /// Equivalent editable closed path with the same style.
    pub fn to_path(&self) -> BezierPath {
        BezierPath::from_vertices(PathKind::Closed, self.style, &self.corners())
    }

    pub fn feedback(&self, _hit: Option<&HitObject>, _modifiers: Modifiers) -> Feedback {
        if self.selected {
            Feedback::new(CursorKind::Move, "Drag to move rectangle")
        } else {
            Feedback::new(CursorKind::Move, "Click to select rectangle")
        }
    }
}

impl Drawable for RectanglePrimitive {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        let outline = self.rect.to_kurbo().to_path(0.1);
        if self.style.has_fill() {
            surface.fill_path(&outline, self.style.fill_color);
        }
        surface.stroke_path(&outline, &self.style.stroke());
        if self.selected {
            crate::draw::render::render_selection_frame(
                surface,
                self.rect.to_kurbo().inflate(4.0, 4.0),
                crate::draw::color::SELECTION,
            );
        }
    }
}

impl HitTestable for RectanglePrimitive {
    fn mouse_over(
        &self,
        pos: Point,
        _modifiers: Modifiers,
        settings: &EditSettings,
    ) -> Option<HitObject> {
        let tolerance = self.style.line_width / 2.0 + settings.outline_tolerance;
        if !self.rect.contains(pos, tolerance) {
            return None;
        }
        let inner = self.rect.to_kurbo().inflate(-tolerance, -tolerance);
        let on_edge = !inner.contains(pos.to_kurbo());
        (on_edge || self.style.has_fill()).then_some(HitObject::Object(self.id))
    }
}

impl Movable for RectanglePrimitive {
    fn move_by(&mut self, dx: i32, dy: i32, _modifiers: Modifiers, _suppress_callback: bool) {
        self.rect.x += dx;
        self.rect.y += dy;
    }

    fn align(&mut self, interval: i32) {
        let min = util::align_point(self.rect.min(), interval);
        let max = util::align_point(self.rect.max(), interval);
        self.rect = Rect::from_corners(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RectanglePrimitive {
        RectanglePrimitive::new(Rect::new(10, 10, 80, 40).unwrap(), Style::default())
    }

    #[test]
    fn hollow_rectangle_hits_edges_only() {
        let rect = sample();
        let settings = EditSettings::default();
        assert!(rect.mouse_over(Point::new(10, 30), Modifiers::new(), &settings).is_some());
        assert!(rect.mouse_over(Point::new(50, 30), Modifiers::new(), &settings).is_none());
        assert!(rect.mouse_over(Point::new(200, 200), Modifiers::new(), &settings).is_none());
    }

    #[test]
    fn align_snaps_both_corners() {
        let mut rect = RectanglePrimitive::new(Rect::new(14, 16, 21, 9).unwrap(), Style::default());
        rect.align(10);
        assert_eq!(rect.rect, Rect::new(10, 20, 30, 10).unwrap());
    }

    #[test]
    fn converts_to_closed_path() {
        let path = sample().to_path();
        assert!(path.is_closed());
        assert_eq!(
            path.vertices().collect::<Vec<_>>(),
            vec![Point::new(10, 10), Point::new(90, 10), Point::new(90, 50), Point::new(10, 50)]
        );
    }
}
