//! Press-drag-release rectangle construction.

use super::{InteractionMode, ModeContext, Outcome, place};
use crate::draw::{DashStyle, DrawSurface, StrokeStyle, Style};
use crate::input::Modifiers;
use crate::model::{BezierPath, CursorKind, EditSettings, Feedback, Layer, PathKind, RectanglePrimitive};
use crate::util::{Point, Rect};

/// Tracks the anchor and opposite corner of a rectangle being dragged out.
#[derive(Debug, Default)]
pub struct RectangleMode {
    anchor: Option<Point>,
    corner: Option<Point>,
}

/// Moves `corner` so the rectangle from `anchor` is a square, keeping the
/// drag direction on both axes.
fn square_corner(anchor: Point, corner: Point) -> Point {
    let dx = corner.x - anchor.x;
    let dy = corner.y - anchor.y;
    let side = dx.abs().max(dy.abs());
    let sx = if dx < 0 { -1 } else { 1 };
    let sy = if dy < 0 { -1 } else { 1 };
    Point::new(anchor.x + sx * side, anchor.y + sy * side)
}

impl RectangleMode {
    fn corner_for(&self, anchor: Point, pos: Point, modifiers: Modifiers, settings: &EditSettings) -> Point {
        let corner = place(pos, modifiers, settings);
        if modifiers.shift() {
            square_corner(anchor, corner)
        } else {
            corner
        }
    }

    /// Corners in drag order: anchor, then clockwise for a down-right drag.
    pub fn corners(anchor: Point, corner: Point) -> [Point; 4] {
        [
            anchor,
            Point::new(corner.x, anchor.y),
            corner,
            Point::new(anchor.x, corner.y),
        ]
    }
}

impl InteractionMode for RectangleMode {
    fn on_mouse_down(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        modifiers: Modifiers,
    ) -> Outcome {
        let anchor = place(pos, modifiers, ctx.settings);
        self.anchor = Some(anchor);
        self.corner = Some(anchor);
        Outcome::redraw()
    }

    fn on_mouse_move(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        modifiers: Modifiers,
    ) -> Outcome {
        let Some(anchor) = self.anchor else {
            return Outcome::default();
        };
        let corner = self.corner_for(anchor, pos, modifiers, ctx.settings);
        if self.corner == Some(corner) {
            return Outcome::handled();
        }
        self.corner = Some(corner);
        Outcome::redraw()
    }

    fn on_mouse_up(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        modifiers: Modifiers,
    ) -> Outcome {
        let Some(anchor) = self.anchor.take() else {
            return Outcome::default();
        };
        self.corner = None;
        let corner = self.corner_for(anchor, pos, modifiers, ctx.settings);
        let bounds = Rect::from_corners(anchor, corner);
        if !bounds.is_valid() {
            log::debug!("Discarded degenerate rectangle at ({}, {})", anchor.x, anchor.y);
            return Outcome::redraw();
        }

        let id = if ctx.settings.rectangle_primitive {
            ctx.layer.add(RectanglePrimitive::new(bounds, *ctx.template))
        } else {
            ctx.layer.add(BezierPath::from_vertices(
                PathKind::Closed,
                *ctx.template,
                &Self::corners(anchor, corner),
            ))
        };
        log::info!(
            "Created rectangle {id} {}x{} at ({}, {})",
            bounds.width,
            bounds.height,
            bounds.x,
            bounds.y
        );
        Outcome::redraw()
    }

    fn reset(&mut self, layer: &mut Layer) -> Outcome {
        let had_drag = self.anchor.take().is_some();
        self.corner = None;
        let deselected = layer.deselect_all();
        Outcome {
            redraw: had_drag || deselected,
            selection_changed: deselected,
            handled: true,
        }
    }

    fn draw(&self, surface: &mut dyn DrawSurface, template: &Style, _settings: &EditSettings) {
        let (Some(anchor), Some(corner)) = (self.anchor, self.corner) else {
            return;
        };
        let preview = BezierPath::from_vertices(
            PathKind::Closed,
            *template,
            &Self::corners(anchor, corner),
        );
        let stroke = StrokeStyle {
            dash: DashStyle::Dash,
            ..template.stroke()
        };
        surface.stroke_path(&preview.to_bez_path(), &stroke);
    }

    fn feedback(
        &self,
        _layer: &Layer,
        _settings: &EditSettings,
        _pos: Point,
        modifiers: Modifiers,
    ) -> Feedback {
        match (self.anchor, modifiers.shift()) {
            (Some(_), true) => Feedback::new(CursorKind::Crosshair, "Release to place the square"),
            (Some(_), false) => {
                Feedback::new(CursorKind::Crosshair, "Release to place, Shift for a square")
            }
            (None, _) => Feedback::new(CursorKind::Crosshair, "Drag to draw a rectangle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::modifiers::Modifier;
    use crate::model::CanvasObject;

    fn drag(mode: &mut RectangleMode, layer: &mut Layer, settings: &EditSettings, from: Point, to: Point, modifiers: Modifiers) {
        let template = Style::default();
        let mut ctx = ModeContext {
            layer,
            settings,
            template: &template,
        };
        mode.on_mouse_down(&mut ctx, from, modifiers);
        mode.on_mouse_move(&mut ctx, to, modifiers);
        mode.on_mouse_up(&mut ctx, to, modifiers);
    }

    #[test]
    fn drag_builds_closed_four_vertex_path() {
        let mut layer = Layer::new("rect", 200, 200);
        let mut mode = RectangleMode::default();
        drag(&mut mode, &mut layer, &EditSettings::default(), Point::new(0, 0), Point::new(100, 50), Modifiers::new());
        let CanvasObject::Path(path) = &layer.objects()[0] else {
            panic!("expected a path");
        };
        assert!(path.is_closed());
        assert_eq!(
            path.vertices().collect::<Vec<_>>(),
            vec![Point::new(0, 0), Point::new(100, 0), Point::new(100, 50), Point::new(0, 50)]
        );
    }

    #[test]
    fn shift_forces_square() {
        let mut layer = Layer::new("rect", 200, 200);
        let mut mode = RectangleMode::default();
        let shift = Modifiers::new().with(Modifier::Shift);
        drag(&mut mode, &mut layer, &EditSettings::default(), Point::new(0, 0), Point::new(-30, 60), shift);
        let bounds = layer.objects()[0].bounds().unwrap();
        assert_eq!(bounds, Rect::new(-60, 0, 60, 60).unwrap());
    }

    #[test]
    fn degenerate_drag_is_discarded() {
        let mut layer = Layer::new("rect", 200, 200);
        let mut mode = RectangleMode::default();
        drag(&mut mode, &mut layer, &EditSettings::default(), Point::new(10, 10), Point::new(60, 12), Modifiers::new());
        assert!(layer.is_empty());
    }

    #[test]
    fn primitive_setting_creates_primitive() {
        let mut layer = Layer::new("rect", 200, 200);
        let mut mode = RectangleMode::default();
        let settings = EditSettings {
            rectangle_primitive: true,
            ..EditSettings::default()
        };
        drag(&mut mode, &mut layer, &settings, Point::new(0, 0), Point::new(100, 50), Modifiers::new());
        assert!(matches!(layer.objects()[0], CanvasObject::Primitive(_)));
    }
}
