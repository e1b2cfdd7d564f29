//! Rotating an object about its centroid by dragging around it.

use super::{InteractionMode, ModeContext, Outcome};
use crate::draw::render::render_marker;
use crate::draw::{DrawSurface, Style};
use crate::input::Modifiers;
use crate::model::{CanvasObject, CursorKind, EditSettings, Feedback, Layer, ObjectId};
use crate::util::{Point, angle_delta_degrees};

#[derive(Debug)]
struct RotationArm {
    object: ObjectId,
    center: kurbo::Point,
    /// Geometry at arm time; every step re-rotates it by the running total
    /// so integer rounding does not accumulate.
    snapshot: CanvasObject,
    previous: Point,
    total_degrees: f64,
}

/// Rotates the pressed object about the centroid it had when pressed.
#[derive(Debug, Default)]
pub struct RotationMode {
    arm: Option<RotationArm>,
}

fn bearing(center: kurbo::Point, pos: Point) -> f64 {
    (pos.y as f64 - center.y)
        .atan2(pos.x as f64 - center.x)
        .to_degrees()
}

impl RotationMode {
    pub fn is_armed(&self) -> bool {
        self.arm.is_some()
    }
}

impl InteractionMode for RotationMode {
    fn on_mouse_down(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        modifiers: Modifiers,
    ) -> Outcome {
        self.arm = None;
        let Some(hit) = ctx.layer.hit_test(pos, modifiers, ctx.settings) else {
            return Outcome::selection(ctx.layer.deselect_all());
        };
        let id = hit.object_id();
        let changed = ctx.layer.selected_ids() != vec![id];
        ctx.layer.select_only(id);

        let Some(object) = ctx.layer.get(id) else {
            return Outcome::selection(changed);
        };
        if !object.is_rotatable() {
            log::debug!("{id} cannot be rotated");
            return Outcome::selection(changed);
        }
        let Some(center) = object.centroid() else {
            return Outcome::selection(changed);
        };

        self.arm = Some(RotationArm {
            object: id,
            center,
            snapshot: object.clone(),
            previous: pos,
            total_degrees: 0.0,
        });
        log::debug!("Armed rotation of {id} about ({:.1}, {:.1})", center.x, center.y);
        Outcome {
            redraw: true,
            selection_changed: changed,
            handled: true,
        }
    }

    fn on_mouse_move(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        _modifiers: Modifiers,
    ) -> Outcome {
        let Some(arm) = self.arm.as_mut() else {
            return Outcome::default();
        };
        let delta = angle_delta_degrees(bearing(arm.center, arm.previous), bearing(arm.center, pos));
        if delta.abs() <= ctx.settings.min_rotation_degrees {
            return Outcome::handled();
        }

        let Some(object) = ctx.layer.get_mut(arm.object) else {
            self.arm = None;
            return Outcome::handled();
        };
        arm.total_degrees += delta;
        arm.previous = pos;
        *object = arm.snapshot.clone();
        if let Some(rotatable) = object.as_rotatable_mut() {
            rotatable.rotate(arm.total_degrees, arm.center);
        }
        Outcome::redraw()
    }

    fn on_mouse_up(
        &mut self,
        _ctx: &mut ModeContext<'_>,
        _pos: Point,
        _modifiers: Modifiers,
    ) -> Outcome {
        match self.arm.take() {
            Some(arm) => {
                log::info!("Rotated {} by {:.1}°", arm.object, arm.total_degrees);
                Outcome::redraw()
            }
            None => Outcome::default(),
        }
    }

    fn reset(&mut self, layer: &mut Layer) -> Outcome {
        self.arm = None;
        Outcome::selection(layer.deselect_all())
    }

    fn draw(&self, surface: &mut dyn DrawSurface, _template: &Style, _settings: &EditSettings) {
        if let Some(arm) = &self.arm {
            render_marker(surface, Point::from_kurbo(arm.center), 3.0);
        }
    }

    fn feedback(
        &self,
        layer: &Layer,
        settings: &EditSettings,
        pos: Point,
        modifiers: Modifiers,
    ) -> Feedback {
        if self.arm.is_some() {
            return Feedback::new(CursorKind::Rotate, "Drag around the center to rotate");
        }
        let target = layer
            .hit_test(pos, modifiers, settings)
            .and_then(|hit| layer.get(hit.object_id()));
        match target {
            Some(object) if object.is_rotatable() => {
                Feedback::new(CursorKind::Rotate, "Press and drag to rotate about the centroid")
            }
            Some(_) => Feedback::new(CursorKind::Default, "Convert to a path to rotate"),
            None => Feedback::new(CursorKind::Default, "Press on a path to rotate it"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BezierPath, PathKind};

    fn square_layer() -> (Layer, ObjectId) {
        let mut layer = Layer::new("rot", 200, 200);
        let id = layer.add(BezierPath::from_vertices(
            PathKind::Closed,
            Style::default(),
            &[Point::new(0, 0), Point::new(100, 0), Point::new(100, 100), Point::new(0, 100)],
        ));
        (layer, id)
    }

    #[test]
    fn tiny_moves_do_not_rotate() {
        let (mut layer, id) = square_layer();
        let settings = EditSettings::default();
        let template = Style::default();
        let mut mode = RotationMode::default();
        let mut ctx = ModeContext {
            layer: &mut layer,
            settings: &settings,
            template: &template,
        };
        mode.on_mouse_down(&mut ctx, Point::new(100, 50), Modifiers::new());
        assert!(mode.is_armed());
        let before: Vec<Point> = ctx.layer.get(id).and_then(|o| o.as_path()).unwrap().vertices().collect();
        let outcome = mode.on_mouse_move(&mut ctx, Point::new(100, 50), Modifiers::new());
        assert!(!outcome.redraw);
        let after: Vec<Point> = ctx.layer.get(id).and_then(|o| o.as_path()).unwrap().vertices().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn quarter_turn_drag() {
        let (mut layer, id) = square_layer();
        let settings = EditSettings::default();
        let template = Style::default();
        let mut mode = RotationMode::default();
        let mut ctx = ModeContext {
            layer: &mut layer,
            settings: &settings,
            template: &template,
        };
        mode.on_mouse_down(&mut ctx, Point::new(100, 50), Modifiers::new());
        mode.on_mouse_move(&mut ctx, Point::new(80, 80), Modifiers::new());
        mode.on_mouse_move(&mut ctx, Point::new(50, 100), Modifiers::new());
        mode.on_mouse_up(&mut ctx, Point::new(50, 100), Modifiers::new());
        assert!(!mode.is_armed());
        let vertices: Vec<Point> = ctx.layer.get(id).and_then(|o| o.as_path()).unwrap().vertices().collect();
        assert_eq!(vertices[0], Point::new(100, 0));
        assert_eq!(vertices[1], Point::new(100, 100));
    }
}
