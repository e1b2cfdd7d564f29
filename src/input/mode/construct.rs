//! Click-by-click construction of polylines and Bezier paths.

use super::{InteractionMode, ModeContext, Outcome, place};
use crate::draw::render::{render_control_handle, render_marker, render_vertex_handle};
use crate::draw::{DashStyle, DrawSurface, StrokeStyle, Style};
use crate::input::{Key, Modifiers};
use crate::model::{BezierPath, CursorKind, EditSettings, Feedback, Layer, PathKind};
use crate::util::{Point, constrain_angle};

/// Which kind of path a construction produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionKind {
    Line,
    Bezier,
}

/// Buffers clicked vertices until the path is finished or closed.
#[derive(Debug)]
pub struct ConstructionMode {
    kind: ConstructionKind,
    vertices: Vec<Point>,
    /// Tangent handle offset per buffered vertex (Bezier only)
    handles: Vec<(i32, i32)>,
    cursor: Option<Point>,
    /// Vertex whose handle is being pulled by the current drag
    pulling: Option<usize>,
}

impl ConstructionMode {
    pub fn new(kind: ConstructionKind) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
            handles: Vec::new(),
            cursor: None,
            pulling: None,
        }
    }

    pub fn kind(&self) -> ConstructionKind {
        self.kind
    }

    /// Vertices placed so far.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.handles.clear();
        self.cursor = None;
        self.pulling = None;
    }

    /// Where a click at `pos` would put the next vertex.
    fn next_position(&self, pos: Point, modifiers: Modifiers, settings: &EditSettings) -> Point {
        let placed = place(pos, modifiers, settings);
        match self.vertices.last() {
            Some(last) if modifiers.shift() => {
                constrain_angle(*last, placed, settings.angle_step_degrees)
            }
            _ => placed,
        }
    }

    fn closes_at(&self, pos: Point, placed: Point, settings: &EditSettings) -> bool {
        let Some(first) = self.vertices.first() else {
            return false;
        };
        self.vertices.len() >= 3
            && first.distance(pos).min(first.distance(placed)) <= settings.coincidence_threshold
    }

    fn build(&self, template: &Style, closed: bool) -> BezierPath {
        match self.kind {
            ConstructionKind::Line if closed => {
                // polygon: the repeated first vertex becomes the closing edge
                let ring = &self.vertices[..self.vertices.len() - 1];
                BezierPath::from_vertices(PathKind::Closed, *template, ring)
            }
            ConstructionKind::Line => {
                BezierPath::from_vertices(PathKind::Line, *template, &self.vertices)
            }
            ConstructionKind::Bezier => {
                let mut path = BezierPath::from_vertices(PathKind::Open, *template, &self.vertices);
                let n = self.vertices.len();
                for (k, (v, &(hx, hy))) in self.vertices.iter().zip(&self.handles).enumerate() {
                    if (hx, hy) == (0, 0) {
                        continue;
                    }
                    if k + 1 < n {
                        path.set_point_position(3 * k + 1, v.offset(hx, hy));
                    }
                    if k > 0 {
                        path.set_point_position(3 * k - 1, v.offset(-hx, -hy));
                    }
                }
                path
            }
        }
    }

    fn finalize(&mut self, ctx: &mut ModeContext<'_>, closed: bool) -> Outcome {
        if self.vertices.len() < 2 {
            self.clear();
            return Outcome::redraw();
        }
        let mut path = self.build(ctx.template, closed);
        path.closing_threshold = ctx.settings.coincidence_threshold;
        let vertex_count = path.vertex_count();
        let is_closed = path.is_closed();
        let id = ctx.layer.add(path);
        log::info!("Created {id} with {vertex_count} vertices (closed: {is_closed})");
        self.clear();
        Outcome::redraw()
    }
}

impl InteractionMode for ConstructionMode {
    fn on_mouse_down(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        modifiers: Modifiers,
    ) -> Outcome {
        let placed = self.next_position(pos, modifiers, ctx.settings);

        if self.closes_at(pos, placed, ctx.settings) {
            let first = self.vertices[0];
            let first_handle = self.handles[0];
            self.vertices.push(first);
            self.handles.push(first_handle);
            return self.finalize(ctx, true);
        }
        if modifiers.ctrl() && self.vertices.len() >= 2 {
            return self.finalize(ctx, false);
        }
        if self.vertices.last() == Some(&placed) {
            return Outcome::handled();
        }

        self.vertices.push(placed);
        self.handles.push((0, 0));
        if self.kind == ConstructionKind::Bezier {
            self.pulling = Some(self.vertices.len() - 1);
        }
        self.cursor = Some(placed);
        log::debug!("Buffered vertex {} at ({}, {})", self.vertices.len(), placed.x, placed.y);
        Outcome::redraw()
    }

    fn on_mouse_move(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        modifiers: Modifiers,
    ) -> Outcome {
        if let Some(k) = self.pulling {
            let v = self.vertices[k];
            self.handles[k] = (pos.x - v.x, pos.y - v.y);
            return Outcome::redraw();
        }
        if self.vertices.is_empty() {
            return Outcome::default();
        }
        let placed = self.next_position(pos, modifiers, ctx.settings);
        if self.cursor == Some(placed) {
            return Outcome::handled();
        }
        self.cursor = Some(placed);
        Outcome::redraw()
    }

    fn on_mouse_up(
        &mut self,
        _ctx: &mut ModeContext<'_>,
        _pos: Point,
        _modifiers: Modifiers,
    ) -> Outcome {
        self.pulling = None;
        Outcome::handled()
    }

    fn on_double_click(
        &mut self,
        ctx: &mut ModeContext<'_>,
        _pos: Point,
        _modifiers: Modifiers,
    ) -> Outcome {
        if self.vertices.len() >= 2 {
            self.finalize(ctx, false)
        } else {
            Outcome::handled()
        }
    }

    fn on_key_down(&mut self, ctx: &mut ModeContext<'_>, key: Key, _modifiers: Modifiers) -> Outcome {
        match key {
            Key::Return if self.vertices.len() >= 2 => self.finalize(ctx, false),
            Key::Backspace if !self.vertices.is_empty() => {
                self.vertices.pop();
                self.handles.pop();
                self.pulling = None;
                if self.vertices.is_empty() {
                    self.cursor = None;
                }
                Outcome::redraw()
            }
            Key::Escape if !self.vertices.is_empty() => {
                log::debug!("Discarded {} buffered vertices", self.vertices.len());
                self.clear();
                Outcome::redraw()
            }
            _ => Outcome::default(),
        }
    }

    fn reset(&mut self, layer: &mut Layer) -> Outcome {
        let had_buffer = !self.vertices.is_empty();
        self.clear();
        let deselected = layer.deselect_all();
        Outcome {
            redraw: had_buffer || deselected,
            selection_changed: deselected,
            handled: true,
        }
    }

    fn draw(&self, surface: &mut dyn DrawSurface, template: &Style, settings: &EditSettings) {
        let (Some(first), Some(last)) = (self.vertices.first(), self.vertices.last()) else {
            return;
        };
        let stroke = template.stroke();
        if self.vertices.len() >= 2 {
            surface.stroke_path(&self.build(template, false).to_bez_path(), &stroke);
        }
        if let (Some(cursor), None) = (self.cursor, self.pulling) {
            let pending = StrokeStyle {
                dash: DashStyle::Dash,
                ..stroke
            };
            surface.draw_line(last.to_kurbo(), cursor.to_kurbo(), &pending);
        }
        for (v, &(hx, hy)) in self.vertices.iter().zip(&self.handles) {
            if (hx, hy) != (0, 0) {
                render_control_handle(surface, *v, v.offset(hx, hy), false);
                render_control_handle(surface, *v, v.offset(-hx, -hy), false);
            }
        }
        if self.vertices.len() >= 3 {
            render_marker(surface, *first, settings.coincidence_threshold);
        }
        for v in &self.vertices {
            render_vertex_handle(surface, *v, false);
        }
    }

    fn feedback(
        &self,
        _layer: &Layer,
        settings: &EditSettings,
        pos: Point,
        modifiers: Modifiers,
    ) -> Feedback {
        let placed = self.next_position(pos, modifiers, settings);
        if self.closes_at(pos, placed, settings) {
            return Feedback::new(CursorKind::ClosePath, "Click to close the path");
        }
        let hint = match (self.vertices.len(), self.kind) {
            (0, ConstructionKind::Line) => "Click to place the first point",
            (0, ConstructionKind::Bezier) => "Click to place the first point, drag to pull a handle",
            (1, _) => "Click to add a point, Shift to constrain angle",
            _ => "Click to add a point, Shift to constrain angle, double-click or Ctrl+click to finish",
        };
        Feedback::new(CursorKind::Crosshair, hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::modifiers::Modifier;
    use crate::model::CanvasObject;
    use crate::draw::{DrawCommand, RecordingSurface};

    struct Fixture {
        layer: Layer,
        settings: EditSettings,
        template: Style,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                layer: Layer::new("build", 400, 400),
                settings: EditSettings::default(),
                template: Style::default(),
            }
        }

        fn ctx(&mut self) -> ModeContext<'_> {
            ModeContext {
                layer: &mut self.layer,
                settings: &self.settings,
                template: &self.template,
            }
        }

        fn only_path(&self) -> &crate::model::BezierPath {
            match self.layer.objects() {
                [CanvasObject::Path(path)] => path,
                other => panic!("expected one path, got {}", other.len()),
            }
        }
    }

    fn click(mode: &mut ConstructionMode, fx: &mut Fixture, x: i32, y: i32, modifiers: Modifiers) {
        let mut ctx = fx.ctx();
        mode.on_mouse_down(&mut ctx, Point::new(x, y), modifiers);
        mode.on_mouse_up(&mut ctx, Point::new(x, y), modifiers);
    }

    #[test]
    fn closing_click_on_first_vertex_closes() {
        let mut fx = Fixture::new();
        let mut mode = ConstructionMode::new(ConstructionKind::Bezier);
        for (x, y) in [(0, 0), (100, 0), (100, 100), (0, 0)] {
            click(&mut mode, &mut fx, x, y, Modifiers::new());
        }
        assert!(mode.vertices().is_empty());
        let path = fx.only_path();
        assert!(path.is_closed());
        assert_eq!(path.vertex_count(), 4);
    }

    #[test]
    fn far_click_keeps_building() {
        let mut fx = Fixture::new();
        let mut mode = ConstructionMode::new(ConstructionKind::Bezier);
        for (x, y) in [(0, 0), (100, 0), (100, 100), (20, 20)] {
            click(&mut mode, &mut fx, x, y, Modifiers::new());
        }
        assert!(fx.layer.is_empty());
        assert_eq!(mode.vertices().len(), 4);
        mode.on_key_down(&mut fx.ctx(), Key::Return, Modifiers::new());
        assert!(!fx.only_path().is_closed());
    }

    #[test]
    fn closed_polyline_becomes_polygon() {
        let mut fx = Fixture::new();
        let mut mode = ConstructionMode::new(ConstructionKind::Line);
        for (x, y) in [(0, 0), (100, 0), (100, 100), (0, 0)] {
            click(&mut mode, &mut fx, x, y, Modifiers::new());
        }
        let path = fx.only_path();
        assert_eq!(path.kind(), PathKind::Closed);
        assert_eq!(path.vertex_count(), 3);
    }

    #[test]
    fn ctrl_click_finishes_with_two_vertices() {
        let mut fx = Fixture::new();
        let mut mode = ConstructionMode::new(ConstructionKind::Line);
        let ctrl = Modifiers::new().with(Modifier::Control);
        click(&mut mode, &mut fx, 0, 0, ctrl);
        assert_eq!(mode.vertices().len(), 1);
        click(&mut mode, &mut fx, 50, 0, Modifiers::new());
        click(&mut mode, &mut fx, 300, 300, ctrl);
        let path = fx.only_path();
        assert_eq!(path.kind(), PathKind::Line);
        assert_eq!(path.vertices().collect::<Vec<_>>(), vec![Point::new(0, 0), Point::new(50, 0)]);
    }

    #[test]
    fn shift_constrains_to_angle_steps() {
        let mut fx = Fixture::new();
        let mut mode = ConstructionMode::new(ConstructionKind::Line);
        let shift = Modifiers::new().with(Modifier::Shift);
        click(&mut mode, &mut fx, 0, 0, Modifiers::new());
        click(&mut mode, &mut fx, 100, 10, shift);
        assert_eq!(mode.vertices()[1], Point::new(100, 0));
    }

    #[test]
    fn clicks_snap_unless_alt() {
        let mut fx = Fixture::new();
        let mut mode = ConstructionMode::new(ConstructionKind::Line);
        click(&mut mode, &mut fx, 14, 16, Modifiers::new());
        click(&mut mode, &mut fx, 33, 47, Modifiers::new().with(Modifier::Alt));
        assert_eq!(mode.vertices(), &[Point::new(10, 20), Point::new(33, 47)]);
    }

    #[test]
    fn backspace_and_escape_edit_buffer() {
        let mut fx = Fixture::new();
        let mut mode = ConstructionMode::new(ConstructionKind::Line);
        click(&mut mode, &mut fx, 0, 0, Modifiers::new());
        click(&mut mode, &mut fx, 50, 0, Modifiers::new());
        assert!(mode.on_key_down(&mut fx.ctx(), Key::Backspace, Modifiers::new()).handled);
        assert_eq!(mode.vertices().len(), 1);
        assert!(mode.on_key_down(&mut fx.ctx(), Key::Escape, Modifiers::new()).handled);
        assert!(mode.vertices().is_empty());
        assert!(!mode.on_key_down(&mut fx.ctx(), Key::Escape, Modifiers::new()).handled);
        assert!(fx.layer.is_empty());
    }

    #[test]
    fn dragging_pulls_mirrored_handle() {
        let mut fx = Fixture::new();
        let mut mode = ConstructionMode::new(ConstructionKind::Bezier);
        click(&mut mode, &mut fx, 0, 0, Modifiers::new());
        {
            let mut ctx = fx.ctx();
            mode.on_mouse_down(&mut ctx, Point::new(100, 0), Modifiers::new());
            mode.on_mouse_move(&mut ctx, Point::new(120, 30), Modifiers::new());
            mode.on_mouse_up(&mut ctx, Point::new(120, 30), Modifiers::new());
        }
        click(&mut mode, &mut fx, 200, 0, Modifiers::new());
        mode.on_double_click(&mut fx.ctx(), Point::new(200, 0), Modifiers::new());

        let path = fx.only_path();
        assert_eq!(path.vertex_count(), 3);
        assert_eq!(path.points()[4].position, Point::new(120, 30));
        assert_eq!(path.points()[2].position, Point::new(80, -30));
    }

    #[test]
    fn configured_threshold_drives_marker_and_path() {
        let mut fx = Fixture::new();
        fx.settings.coincidence_threshold = 20.0;
        let mut mode = ConstructionMode::new(ConstructionKind::Bezier);
        for (x, y) in [(0, 0), (100, 0), (100, 100)] {
            click(&mut mode, &mut fx, x, y, Modifiers::new());
        }

        let mut surface = RecordingSurface::new();
        mode.draw(&mut surface, &fx.template, &fx.settings);
        assert!(surface.commands().iter().any(|c| matches!(
            c,
            DrawCommand::StrokeEllipse { rx, .. } if *rx == 20.0
        )));

        click(&mut mode, &mut fx, 10, 10, Modifiers::new());
        let path = fx.only_path();
        assert!(path.is_closed());
        assert_eq!(path.closing_threshold, 20.0);
    }

    #[test]
    fn feedback_offers_closing() {
        let mut fx = Fixture::new();
        let mut mode = ConstructionMode::new(ConstructionKind::Line);
        for (x, y) in [(0, 0), (100, 0), (100, 100)] {
            click(&mut mode, &mut fx, x, y, Modifiers::new());
        }
        let feedback = mode.feedback(&fx.layer, &fx.settings, Point::new(3, 2), Modifiers::new());
        assert_eq!(feedback.cursor, CursorKind::ClosePath);
    }
}
