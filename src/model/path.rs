//! Editable Bezier paths, closed paths and polylines.
//!
//! Points are stored flat as `[V0, C0a, C0b, V1, C1a, C1b, V2, ...]`, so a path
//! with N vertices holds `3N - 2` points. A control point's anchor is derived
//! from its index: `i % 3 == 1` belongs to vertex `i - 1`, `i % 3 == 2` to
//! vertex `i + 1`.

use super::id::{ObjectId, PointId};
use super::object::{Drawable, HitTestable, Movable, Rotatable};
use super::point::{CanvasPoint, PointKind};
use super::response::{CursorKind, Feedback, HitObject, MouseDownResponse, MouseUpResponse};
use super::settings::EditSettings;
use crate::draw::render::{render_control_handle, render_vertex_handle};
use crate::draw::{DrawSurface, Style};
use crate::input::modifiers::{Modifier, Modifiers};
use crate::util::{Point, Rect};
use kurbo::{Affine, BezPath, CubicBez, Line, ParamCurveNearest, PathSeg, Shape as _};
use serde::Serialize;

/// Default distance within which first and last vertex count as coincident.
pub const DEFAULT_CLOSING_THRESHOLD: f64 = 8.0;

const NEAREST_ACCURACY: f64 = 0.1;

/// Structural flavour of a [`BezierPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    /// Cubic path; closed when its boundary vertices coincide
    Open,
    /// Cubic path with a straight closing segment back to the first vertex
    Closed,
    /// Polyline; handles are hidden and segments are straight
    Line,
}

/// An editable path made of vertices and tangent handles.
#[derive(Debug, Clone, Serialize)]
pub struct BezierPath {
    id: ObjectId,
    kind: PathKind,
    points: Vec<CanvasPoint>,
    pub style: Style,
    selected: bool,
    pub closing_threshold: f64,
    /// Points a drag translates; independent of the visible point selection
    #[serde(skip)]
    moveable: Vec<PointId>,
}

impl BezierPath {
    pub fn new(kind: PathKind, style: Style) -> Self {
        Self {
            id: ObjectId::next(),
            kind,
            points: Vec::new(),
            style,
            selected: false,
            closing_threshold: DEFAULT_CLOSING_THRESHOLD,
            moveable: Vec::new(),
        }
    }

    /// Builds a path by appending each vertex in order.
    pub fn from_vertices(kind: PathKind, style: Style, vertices: &[Point]) -> Self {
        let mut path = Self::new(kind, style);
        for v in vertices {
            path.add_vertex(*v);
        }
        path
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    pub fn points(&self) -> &[CanvasPoint] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&CanvasPoint> {
        self.points.get(index)
    }

    /// Index of the point with the given id.
    pub fn point_index(&self, id: PointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        if self.points.is_empty() {
            0
        } else {
            (self.points.len() + 2) / 3
        }
    }

    /// Vertex positions in path order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.points
            .iter()
            .filter(|p| p.is_vertex())
            .map(|p| p.position)
    }

    pub fn last_vertex(&self) -> Option<Point> {
        self.points.last().map(|p| p.position)
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Selects or deselects the path. Deselecting also empties the moveable set.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        if !selected {
            self.clear_point_selection();
        }
    }

    pub fn is_closed(&self) -> bool {
        match self.kind {
            PathKind::Line => false,
            PathKind::Closed => self.vertex_count() >= 2,
            PathKind::Open => self.closes_by_coincidence(),
        }
    }

    fn closes_by_coincidence(&self) -> bool {
        if self.vertex_count() < 3 {
            return false;
        }
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => {
                first.position.distance(last.position) <= self.closing_threshold
            }
            _ => false,
        }
    }

    /// Vertex a control point hangs off, by index.
    pub fn control_owner(&self, index: usize) -> Option<usize> {
        if !self.points.get(index)?.is_control() {
            return None;
        }
        let owner = match index % 3 {
            1 => index - 1,
            2 => index + 1,
            _ => return None,
        };
        self.points
            .get(owner)
            .filter(|p| p.is_vertex())
            .map(|_| owner)
    }

    /// Indices of the handles on either side of `vertex`.
    pub fn adjacent_controls(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        [vertex.checked_sub(1), vertex.checked_add(1)]
            .into_iter()
            .flatten()
            .filter(move |&i| self.points.get(i).is_some_and(CanvasPoint::is_control))
    }

    /// Vertices are always visible. Handles are visible unless they sit on
    /// their anchor or the path is a polyline.
    pub fn is_point_visible(&self, index: usize) -> bool {
        match self.points.get(index) {
            Some(p) if p.is_control() => {
                self.kind != PathKind::Line
                    && self
                        .control_owner(index)
                        .is_some_and(|owner| self.points[owner].position != p.position)
            }
            Some(_) => true,
            None => false,
        }
    }

    /// For a path closed by coincidence, maps the first vertex to the last and back.
    pub fn coincident_counterpart(&self, index: usize) -> Option<usize> {
        if self.kind != PathKind::Open || !self.closes_by_coincidence() {
            return None;
        }
        let last = self.points.len() - 1;
        match index {
            0 => Some(last),
            i if i == last => Some(0),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Appends a vertex, first adding two handles coincident with the previous
    /// and the new vertex.
    pub fn add_vertex(&mut self, pos: Point) -> PointId {
        if let Some(prev) = self.last_vertex() {
            self.points.push(CanvasPoint::control(prev));
            self.points.push(CanvasPoint::control(pos));
        }
        let vertex = CanvasPoint::vertex(pos);
        let id = vertex.id;
        self.points.push(vertex);
        id
    }

    /// Removes the vertex at `index` with its handles.
    ///
    /// Refused unless more than two vertices remain.
    pub fn remove_vertex(&mut self, index: usize) -> bool {
        if !self.points.get(index).is_some_and(CanvasPoint::is_vertex) || self.vertex_count() <= 2 {
            return false;
        }
        let start = index.saturating_sub(1);
        let end = (index + 1).min(self.points.len() - 1);
        self.points.drain(start..=end);
        self.trim_orphaned_controls();
        true
    }

    fn trim_orphaned_controls(&mut self) {
        while self.points.first().is_some_and(CanvasPoint::is_control) {
            self.points.remove(0);
        }
        while self.points.last().is_some_and(CanvasPoint::is_control) {
            self.points.pop();
        }
    }

    /// Deletes a vertex, or collapses a handle back onto its anchor.
    pub fn delete_point(&mut self, index: usize) -> bool {
        match self.points.get(index).map(|p| p.kind) {
            Some(PointKind::Vertex) => self.remove_vertex(index),
            Some(PointKind::Control) => self.reset_control(index),
            _ => false,
        }
    }

    pub fn reset_control(&mut self, index: usize) -> bool {
        let Some(owner) = self.control_owner(index) else {
            return false;
        };
        self.points[index].position = self.points[owner].position;
        true
    }

    /// Inserts a vertex at `pos` on the first segment whose outline it hits.
    ///
    /// Returns the index of the new vertex.
    pub fn try_add_vertex(&mut self, pos: Point, settings: &EditSettings) -> Option<usize> {
        let n = self.vertex_count();
        if n < 2 {
            return None;
        }
        let segment = self.hit_segment(pos, self.outline_tolerance(settings))?;

        if segment == n - 1 {
            // straight closing edge of a Closed path
            self.add_vertex(pos);
            log::debug!("Appended vertex ({}, {}) on closing edge of {}", pos.x, pos.y, self.id);
            return Some(self.points.len() - 1);
        }

        let at = 3 * segment + 2;
        self.points.splice(
            at..at,
            [
                CanvasPoint::control(pos),
                CanvasPoint::vertex(pos),
                CanvasPoint::control(pos),
            ],
        );
        log::debug!(
            "Inserted vertex ({}, {}) into segment {segment} of {}",
            pos.x,
            pos.y,
            self.id
        );
        Some(at + 1)
    }

    // ------------------------------------------------------------------
    // Moveable set
    // ------------------------------------------------------------------

    /// Clears the visible point selection and disarms every point.
    pub fn clear_point_selection(&mut self) {
        for p in &mut self.points {
            p.selected = false;
        }
        self.moveable.clear();
    }

    /// Arms every vertex for a whole-path drag without marking any selected.
    pub fn arm_all_vertices(&mut self) {
        self.moveable = self
            .points
            .iter()
            .filter(|p| p.is_vertex())
            .map(|p| p.id)
            .collect();
    }

    fn arm_selected_points(&mut self) {
        self.moveable = self
            .points
            .iter()
            .filter(|p| p.selected)
            .map(|p| p.id)
            .collect();
    }

    pub fn select_all_vertices(&mut self) {
        for p in &mut self.points {
            p.selected = p.is_vertex();
        }
        self.arm_selected_points();
    }

    pub fn select_only(&mut self, index: usize) {
        for p in &mut self.points {
            p.selected = false;
        }
        if let Some(p) = self.points.get_mut(index) {
            p.selected = true;
        }
        self.arm_selected_points();
    }

    /// Selects only the vertex and its coincident counterpart.
    pub fn select_vertex_only(&mut self, index: usize) {
        self.select_only(index);
        if let Some(other) = self.coincident_counterpart(index) {
            self.points[other].selected = true;
        }
        self.arm_selected_points();
    }

    pub fn toggle_vertex(&mut self, index: usize) {
        let Some(selected) = self
            .points
            .get(index)
            .filter(|p| p.is_vertex())
            .map(|p| !p.selected)
        else {
            return;
        };
        self.points[index].selected = selected;
        if let Some(other) = self.coincident_counterpart(index) {
            self.points[other].selected = selected;
        }
        self.arm_selected_points();
    }

    pub fn selected_points(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.selected)
            .map(|(i, _)| i)
            .collect()
    }

    /// Armed points, minus handles whose anchor is also armed
    /// (those follow their anchor).
    pub fn moveable_points(&self) -> Vec<usize> {
        let armed: Vec<usize> = self
            .points
            .iter()
            .enumerate()
            .filter(|(_, p)| self.moveable.contains(&p.id))
            .map(|(i, _)| i)
            .collect();
        armed
            .iter()
            .copied()
            .filter(|&i| {
                !(self.points[i].is_control()
                    && self.control_owner(i).is_some_and(|owner| armed.contains(&owner)))
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Tangent mirroring
    // ------------------------------------------------------------------

    /// Cascade run after a point at `index` moved by `(dx, dy)`.
    pub fn on_point_moved(&mut self, index: usize, dx: i32, dy: i32, modifiers: Modifiers) {
        match self.points.get(index).map(|p| p.kind) {
            Some(PointKind::Vertex) => {
                let handles: Vec<usize> = self.adjacent_controls(index).collect();
                for h in handles {
                    self.points[h].position = self.points[h].position.offset(dx, dy);
                }
            }
            Some(PointKind::Control) if modifiers.shift() => {
                self.mirror_control(index);
            }
            _ => {}
        }
    }

    /// Reflects the handle opposite `index` through their shared anchor.
    pub fn mirror_control(&mut self, index: usize) -> bool {
        if self.kind == PathKind::Line {
            return false;
        }
        let Some(owner) = self.control_owner(index) else {
            log::trace!("Handle {index} of {} has no anchor; mirror skipped", self.id);
            return false;
        };
        let Some(opposite) = self.opposite_control(index, owner) else {
            log::trace!("Handle {index} of {} has no opposite; mirror skipped", self.id);
            return false;
        };
        let anchor = self.points[owner].position;
        let moved = self.points[index].position;
        self.points[opposite].position =
            Point::new(2 * anchor.x - moved.x, 2 * anchor.y - moved.y);
        true
    }

    fn opposite_control(&self, index: usize, owner: usize) -> Option<usize> {
        let last = self.points.len().checked_sub(1)?;
        let candidate = if index > owner {
            match owner.checked_sub(1) {
                Some(i) => i,
                None => self.coincident_counterpart(owner)?.checked_sub(1)?,
            }
        } else if owner < last {
            owner + 1
        } else {
            self.coincident_counterpart(owner)? + 1
        };
        self.points
            .get(candidate)
            .filter(|p| p.is_control())
            .map(|_| candidate)
    }

    /// Places a single point directly, without cascades.
    pub fn set_point_position(&mut self, index: usize, pos: Point) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                p.position = pos;
                true
            }
            None => false,
        }
    }

    /// Moves every point, without cascades.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for p in &mut self.points {
            p.position = p.position.offset(dx, dy);
        }
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    fn curve_segments(&self) -> Vec<PathSeg> {
        let n = self.vertex_count();
        if n < 2 {
            return Vec::new();
        }
        (0..n - 1)
            .map(|k| {
                let w = 3 * k;
                let p0 = self.points[w].position.to_kurbo();
                let p3 = self.points[w + 3].position.to_kurbo();
                if self.kind == PathKind::Line {
                    PathSeg::Line(Line::new(p0, p3))
                } else {
                    PathSeg::Cubic(CubicBez::new(
                        p0,
                        self.points[w + 1].position.to_kurbo(),
                        self.points[w + 2].position.to_kurbo(),
                        p3,
                    ))
                }
            })
            .collect()
    }

    /// All drawn segments, including the closing edge of a Closed path.
    pub fn segments(&self) -> Vec<PathSeg> {
        let mut segments = self.curve_segments();
        if self.kind == PathKind::Closed && !segments.is_empty() {
            if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
                segments.push(PathSeg::Line(Line::new(
                    last.position.to_kurbo(),
                    first.position.to_kurbo(),
                )));
            }
        }
        segments
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.points.first() else {
            return path;
        };
        path.move_to(first.position.to_kurbo());
        for segment in self.curve_segments() {
            match segment {
                PathSeg::Line(l) => path.line_to(l.p1),
                PathSeg::Quad(q) => path.quad_to(q.p1, q.p2),
                PathSeg::Cubic(c) => path.curve_to(c.p1, c.p2, c.p3),
            }
        }
        if self.is_closed() {
            path.close_path();
        }
        path
    }

    /// Distance from the centerline that still counts as an outline hit.
    pub fn outline_tolerance(&self, settings: &EditSettings) -> f64 {
        self.style.line_width / 2.0 + settings.outline_tolerance
    }

    /// Index of the first segment passing within `tolerance` of `pos`.
    pub fn hit_segment(&self, pos: Point, tolerance: f64) -> Option<usize> {
        let p = pos.to_kurbo();
        let limit = tolerance * tolerance;
        self.segments()
            .iter()
            .position(|seg| seg.nearest(p, NEAREST_ACCURACY).distance_sq <= limit)
    }

    /// Nearest visible point within `radius`, first one winning ties.
    pub fn hit_point(&self, pos: Point, radius: f64) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(i, p)| p.hit(pos, radius) && self.is_point_visible(*i))
            .min_by(|(_, a), (_, b)| a.position.distance(pos).total_cmp(&b.position.distance(pos)))
            .map(|(i, _)| i)
    }

    pub fn point_hit(&self, index: usize) -> Option<HitObject> {
        let p = self.points.get(index)?;
        Some(HitObject::Point {
            object: self.id,
            point: p.id,
            index,
            kind: p.kind,
        })
    }

    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.points.iter().map(|p| p.position))
    }

    /// Copy with fresh ids for the path and all of its points.
    pub fn duplicate(&self) -> Self {
        Self {
            id: ObjectId::next(),
            kind: self.kind,
            points: self.points.iter().map(CanvasPoint::duplicate).collect(),
            style: self.style,
            selected: self.selected,
            closing_threshold: self.closing_threshold,
            moveable: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    /// Resolves what a press on this path targets and updates the moveable set.
    pub fn on_mouse_down(
        &mut self,
        pos: Point,
        modifiers: Modifiers,
        settings: &EditSettings,
    ) -> MouseDownResponse {
        let own = Some(HitObject::Object(self.id));

        if !self.selected {
            self.clear_point_selection();
            self.arm_all_vertices();
            return MouseDownResponse {
                hit_object: own,
                child_hit_object: None,
                allow_move: true,
            };
        }

        let add_delete = modifiers.contains_all(&[Modifier::Control, Modifier::Shift]);
        let hit = self.hit_point(pos, settings.hit_radius);
        let hit_kind = hit.and_then(|i| self.points.get(i)).map(|p| p.kind);
        let hit_selected = hit
            .and_then(|i| self.points.get(i))
            .is_some_and(|p| p.selected);

        let (child, allow_move) = match (hit, hit_kind) {
            (None, _) if add_delete => {
                self.try_add_vertex(pos, settings);
                self.clear_point_selection();
                self.arm_all_vertices();
                (None, false)
            }
            (Some(i), _) if add_delete => {
                if self.delete_point(i) {
                    log::debug!("Deleted point {i} of {}", self.id);
                }
                self.clear_point_selection();
                self.arm_all_vertices();
                (None, false)
            }
            (Some(i), Some(PointKind::Vertex)) if modifiers.only(&[Modifier::Control]) => {
                self.toggle_vertex(i);
                (self.point_hit(i), false)
            }
            (Some(i), Some(PointKind::Control)) if modifiers.only(&[Modifier::Shift]) => {
                self.select_only(i);
                (self.point_hit(i), true)
            }
            (Some(i), Some(PointKind::Vertex)) if !hit_selected => {
                self.select_vertex_only(i);
                (self.point_hit(i), true)
            }
            (Some(i), _) if !hit_selected => {
                self.select_only(i);
                (self.point_hit(i), true)
            }
            (Some(i), _) => {
                self.arm_selected_points();
                (self.point_hit(i), true)
            }
            (None, _) => {
                self.arm_all_vertices();
                (None, true)
            }
        };

        log::debug!(
            "Mouse down on {} at ({}, {}): child={child:?} allow_move={allow_move}",
            self.id,
            pos.x,
            pos.y
        );

        MouseDownResponse {
            hit_object: own,
            child_hit_object: child,
            allow_move,
        }
    }

    pub fn on_mouse_up(
        &mut self,
        pos: Point,
        _modifiers: Modifiers,
        settings: &EditSettings,
    ) -> MouseUpResponse {
        let inner = if self.selected {
            self.hit_point(pos, settings.hit_radius)
                .and_then(|i| self.point_hit(i))
        } else {
            None
        };
        MouseUpResponse {
            hit_object: Some(HitObject::Object(self.id)),
            inner_hit_object: inner,
            allow_move: true,
        }
    }

    /// Cursor and hint for the given hit target on this path.
    pub fn feedback(&self, hit: Option<&HitObject>, modifiers: Modifiers) -> Feedback {
        let add_delete = modifiers.contains_all(&[Modifier::Control, Modifier::Shift]);
        match hit.and_then(HitObject::point_kind) {
            Some(PointKind::Vertex) if add_delete => {
                Feedback::new(CursorKind::RemovePoint, "Click to delete point")
            }
            Some(PointKind::Vertex) if modifiers.only(&[Modifier::Control]) => {
                Feedback::new(CursorKind::MovePoint, "Click to toggle point selection")
            }
            Some(PointKind::Vertex) => Feedback::new(
                CursorKind::MovePoint,
                "Drag to move point, Ctrl to toggle, Ctrl+Shift to delete",
            ),
            Some(PointKind::Control) if add_delete => {
                Feedback::new(CursorKind::RemovePoint, "Click to collapse handle")
            }
            Some(PointKind::Control) if modifiers.shift() => {
                Feedback::new(CursorKind::MovePoint, "Drag to move handle symmetrically")
            }
            Some(PointKind::Control) => {
                Feedback::new(CursorKind::MovePoint, "Drag to move handle, Shift to mirror")
            }
            _ if !self.selected => Feedback::new(CursorKind::Move, "Click to select path"),
            _ if add_delete => Feedback::new(CursorKind::AddPoint, "Click to add point"),
            _ => Feedback::new(
                CursorKind::Move,
                "Drag to move path, Ctrl+Shift to add point",
            ),
        }
    }

    fn draw_handles(&self, surface: &mut dyn DrawSurface) {
        for (i, p) in self.points.iter().enumerate() {
            if p.is_control() && self.is_point_visible(i) {
                if let Some(owner) = self.control_owner(i) {
                    render_control_handle(surface, self.points[owner].position, p.position, p.selected);
                }
            }
        }
        for p in self.points.iter().filter(|p| p.is_vertex()) {
            render_vertex_handle(surface, p.position, p.selected);
        }
    }
}

impl Drawable for BezierPath {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        if self.vertex_count() < 2 {
            return;
        }
        let outline = self.to_bez_path();
        if self.is_closed() && self.style.has_fill() {
            surface.fill_path(&outline, self.style.fill_color);
        }
        surface.stroke_path(&outline, &self.style.stroke());
        if self.selected {
            self.draw_handles(surface);
        }
    }
}

impl HitTestable for BezierPath {
    fn mouse_over(
        &self,
        pos: Point,
        _modifiers: Modifiers,
        settings: &EditSettings,
    ) -> Option<HitObject> {
        if self.selected {
            if let Some(i) = self.hit_point(pos, settings.hit_radius) {
                return self.point_hit(i);
            }
        }
        let on_outline = self
            .hit_segment(pos, self.outline_tolerance(settings))
            .is_some();
        let in_fill = self.is_closed()
            && self.style.has_fill()
            && self.to_bez_path().contains(pos.to_kurbo());
        (on_outline || in_fill).then_some(HitObject::Object(self.id))
    }
}

impl Movable for BezierPath {
    /// Moves the moveable set. An empty set moves the whole path.
    fn move_by(&mut self, dx: i32, dy: i32, modifiers: Modifiers, suppress_callback: bool) {
        let moving = self.moveable_points();
        if moving.is_empty() {
            self.translate(dx, dy);
            return;
        }
        for index in moving {
            self.points[index].move_by(dx, dy, modifiers, suppress_callback);
            if !suppress_callback {
                self.on_point_moved(index, dx, dy, modifiers);
            }
        }
    }

    fn align(&mut self, interval: i32) {
        for p in &mut self.points {
            p.align(interval);
        }
    }
}

impl Rotatable for BezierPath {
    fn rotate(&mut self, degrees: f64, center: kurbo::Point) {
        let c = center.to_vec2();
        let affine =
            Affine::translate(c) * Affine::rotate(degrees.to_radians()) * Affine::translate(-c);
        for p in &mut self.points {
            p.position = Point::from_kurbo(affine * p.position.to_kurbo());
        }
    }

    /// Mean of the distinct vertices; a coincident closing vertex counts once.
    fn centroid(&self) -> Option<kurbo::Point> {
        let mut vertices: Vec<Point> = self.vertices().collect();
        if self.coincident_counterpart(0).is_some() {
            vertices.pop();
        }
        if vertices.is_empty() {
            return None;
        }
        let n = vertices.len() as f64;
        let (sx, sy) = vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x as f64, sy + p.y as f64));
        Some(kurbo::Point::new(sx / n, sy / n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(vertices: &[(i32, i32)]) -> BezierPath {
        let vs: Vec<Point> = vertices.iter().map(|&v| v.into()).collect();
        BezierPath::from_vertices(PathKind::Open, Style::default(), &vs)
    }

    fn shift() -> Modifiers {
        Modifiers::new().with(Modifier::Shift)
    }

    fn ctrl_shift() -> Modifiers {
        shift().with(Modifier::Control)
    }

    #[test]
    fn point_count_is_three_n_minus_two() {
        let mut path = BezierPath::new(PathKind::Open, Style::default());
        for n in 1..=6 {
            path.add_vertex(Point::new(n * 10, 0));
            assert_eq!(path.len(), 3 * n as usize - 2);
            assert_eq!(path.vertex_count(), n as usize);
        }
    }

    #[test]
    fn add_then_remove_restores_count() {
        let mut path = open(&[(0, 0), (50, 0), (100, 0)]);
        let before = path.len();
        path.add_vertex(Point::new(150, 0));
        let last = path.len() - 1;
        assert!(path.remove_vertex(last));
        assert_eq!(path.len(), before);
    }

    #[test]
    fn removal_never_drops_below_two_vertices() {
        let mut path = open(&[(0, 0), (50, 0)]);
        assert!(!path.remove_vertex(0));
        assert!(!path.remove_vertex(3));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn removing_boundary_vertices_trims_orphans() {
        let mut path = open(&[(0, 0), (50, 0), (100, 0), (150, 0)]);
        assert!(path.remove_vertex(0));
        assert_eq!(path.len(), 7);
        assert!(path.points()[0].is_vertex());
        assert_eq!(path.points()[0].position, Point::new(50, 0));

        let last = path.len() - 1;
        assert!(path.remove_vertex(last));
        assert_eq!(path.len(), 4);
        assert!(path.points()[3].is_vertex());
        assert_eq!(path.points()[3].position, Point::new(100, 0));
    }

    #[test]
    fn removing_interior_vertex_keeps_layout() {
        let mut path = open(&[(0, 0), (50, 0), (100, 0)]);
        assert!(path.remove_vertex(3));
        assert_eq!(path.len(), 4);
        assert_eq!(path.control_owner(1), Some(0));
        assert_eq!(path.control_owner(2), Some(3));
    }

    #[test]
    fn coincident_endpoints_close_the_path() {
        let closed = open(&[(0, 0), (100, 0), (100, 100), (0, 0)]);
        assert!(closed.is_closed());
        assert_eq!(closed.coincident_counterpart(0), Some(closed.len() - 1));

        let near = open(&[(0, 0), (100, 0), (100, 100), (5, 5)]);
        assert!(near.is_closed());

        let far = open(&[(0, 0), (100, 0), (100, 100), (20, 20)]);
        assert!(!far.is_closed());
        assert_eq!(far.coincident_counterpart(0), None);
    }

    #[test]
    fn two_coincident_vertices_are_not_closed() {
        assert!(!open(&[(0, 0), (0, 0)]).is_closed());
    }

    #[test]
    fn line_paths_never_close_and_hide_handles() {
        let line = BezierPath::from_vertices(
            PathKind::Line,
            Style::default(),
            &[Point::new(0, 0), Point::new(100, 0), Point::new(100, 100), Point::new(0, 0)],
        );
        assert!(!line.is_closed());
        assert!(!line.is_point_visible(1));
    }

    #[test]
    fn moving_vertex_drags_its_handles() {
        let mut path = open(&[(0, 0), (100, 0), (200, 0)]);
        path.select_only(3);
        path.move_by(5, 7, Modifiers::new(), false);
        assert_eq!(path.points()[3].position, Point::new(105, 7));
        assert_eq!(path.points()[2].position, Point::new(105, 7));
        assert_eq!(path.points()[4].position, Point::new(105, 7));
        assert_eq!(path.points()[1].position, Point::new(0, 0));
        assert_eq!(path.points()[5].position, Point::new(200, 0));
    }

    #[test]
    fn suppressed_move_skips_cascade() {
        let mut path = open(&[(0, 0), (100, 0), (200, 0)]);
        path.select_only(3);
        path.move_by(5, 7, Modifiers::new(), true);
        assert_eq!(path.points()[3].position, Point::new(105, 7));
        assert_eq!(path.points()[2].position, Point::new(100, 0));
    }

    #[test]
    fn shift_moving_handle_mirrors_opposite() {
        let mut path = open(&[(0, 0), (100, 0), (200, 0)]);
        path.select_only(4);
        path.move_by(10, 20, shift(), false);
        assert_eq!(path.points()[4].position, Point::new(110, 20));
        assert_eq!(path.points()[2].position, Point::new(90, -20));
    }

    #[test]
    fn plain_handle_move_is_a_cusp() {
        let mut path = open(&[(0, 0), (100, 0), (200, 0)]);
        path.select_only(4);
        path.move_by(10, 20, Modifiers::new(), false);
        assert_eq!(path.points()[4].position, Point::new(110, 20));
        assert_eq!(path.points()[2].position, Point::new(100, 0));
    }

    #[test]
    fn mirror_wraps_around_coincident_closure() {
        let mut path = open(&[(0, 0), (100, 0), (100, 100), (0, 0)]);
        path.select_only(1);
        path.move_by(10, 10, shift(), false);
        let inner = path.len() - 2;
        assert_eq!(path.points()[inner].position, Point::new(-10, -10));
    }

    #[test]
    fn mirror_without_opposite_is_skipped() {
        let mut path = open(&[(0, 0), (100, 0)]);
        path.select_only(1);
        path.move_by(10, 10, shift(), false);
        assert_eq!(path.points()[1].position, Point::new(10, 10));
        assert_eq!(path.points()[2].position, Point::new(100, 0));
    }

    #[test]
    fn deleting_handle_collapses_it() {
        let mut path = open(&[(0, 0), (100, 0)]);
        path.select_only(2);
        path.move_by(30, 30, Modifiers::new(), false);
        assert!(path.is_point_visible(2));
        assert!(path.delete_point(2));
        assert_eq!(path.points()[2].position, Point::new(100, 0));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn insert_on_segment_splices_triple() {
        let mut path = open(&[(0, 0), (100, 0)]);
        let index = path.try_add_vertex(Point::new(50, 1), &EditSettings::default());
        assert_eq!(index, Some(3));
        assert_eq!(path.len(), 7);
        assert_eq!(path.points()[3].position, Point::new(50, 1));
        assert_eq!(path.control_owner(2), Some(3));
        assert_eq!(path.control_owner(4), Some(3));
        assert_eq!(path.points()[6].position, Point::new(100, 0));
    }

    #[test]
    fn insert_misses_far_from_outline() {
        let mut path = open(&[(0, 0), (100, 0)]);
        assert_eq!(path.try_add_vertex(Point::new(50, 40), &EditSettings::default()), None);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn insert_on_closing_edge_appends() {
        let mut rect = BezierPath::from_vertices(
            PathKind::Closed,
            Style::default(),
            &[Point::new(0, 0), Point::new(100, 0), Point::new(100, 50), Point::new(0, 50)],
        );
        let index = rect.try_add_vertex(Point::new(0, 25), &EditSettings::default());
        assert_eq!(index, Some(rect.len() - 1));
        assert_eq!(rect.vertex_count(), 5);
        assert_eq!(rect.last_vertex(), Some(Point::new(0, 25)));
    }

    #[test]
    fn align_snaps_every_point() {
        let mut path = open(&[(14, 16), (15, 15)]);
        path.align(10);
        assert_eq!(path.points()[0].position, Point::new(10, 20));
        assert_eq!(path.points()[3].position, Point::new(20, 20));
        assert_eq!(path.points()[1].position, Point::new(10, 20));
    }

    #[test]
    fn quarter_turn_maps_square_onto_itself() {
        let mut square = BezierPath::from_vertices(
            PathKind::Closed,
            Style::default(),
            &[Point::new(0, 0), Point::new(100, 0), Point::new(100, 100), Point::new(0, 100)],
        );
        let center = square.centroid().unwrap();
        assert_eq!(center, kurbo::Point::new(50.0, 50.0));
        square.rotate(90.0, center);
        let mut vertices: Vec<Point> = square.vertices().collect();
        vertices.sort_by_key(|p| (p.x, p.y));
        assert_eq!(
            vertices,
            vec![Point::new(0, 0), Point::new(0, 100), Point::new(100, 0), Point::new(100, 100)]
        );
    }

    #[test]
    fn unselected_press_arms_all_vertices() {
        let mut path = open(&[(0, 0), (100, 0), (200, 0)]);
        let response = path.on_mouse_down(Point::new(0, 0), Modifiers::new(), &EditSettings::default());
        assert!(response.allow_move);
        assert!(response.child_hit_object.is_none());
        assert_eq!(path.moveable_points(), vec![0, 3, 6]);
        assert!(path.selected_points().is_empty());
    }

    #[test]
    fn armed_path_press_on_vertex_moves_only_that_vertex() {
        let mut path = open(&[(0, 0), (100, 0), (200, 0)]);
        path.set_selected(true);
        path.arm_all_vertices();
        let response = path.on_mouse_down(Point::new(100, 0), Modifiers::new(), &EditSettings::default());
        assert!(response.allow_move);
        assert_eq!(path.selected_points(), vec![3]);
        assert_eq!(path.moveable_points(), vec![3]);

        path.move_by(0, 50, Modifiers::new(), false);
        assert_eq!(
            path.vertices().collect::<Vec<_>>(),
            vec![Point::new(0, 0), Point::new(100, 50), Point::new(200, 0)]
        );
    }

    #[test]
    fn ctrl_shift_press_on_outline_inserts() {
        let mut path = open(&[(0, 0), (100, 0)]);
        path.set_selected(true);
        let response = path.on_mouse_down(Point::new(50, 0), ctrl_shift(), &EditSettings::default());
        assert!(!response.allow_move);
        assert_eq!(path.vertex_count(), 3);
        assert_eq!(path.moveable_points(), vec![0, 3, 6]);
    }

    #[test]
    fn ctrl_shift_press_on_vertex_deletes() {
        let mut path = open(&[(0, 0), (100, 0), (200, 0)]);
        path.set_selected(true);
        let response = path.on_mouse_down(Point::new(100, 0), ctrl_shift(), &EditSettings::default());
        assert!(!response.allow_move);
        assert_eq!(path.vertex_count(), 2);
    }

    #[test]
    fn ctrl_press_toggles_vertex_and_counterpart() {
        let mut path = open(&[(0, 0), (100, 0), (100, 100), (0, 0)]);
        path.set_selected(true);
        let ctrl = Modifiers::new().with(Modifier::Control);
        let response = path.on_mouse_down(Point::new(100, 0), ctrl, &EditSettings::default());
        assert!(!response.allow_move);
        assert!(response.child_hit_object.is_some());
        assert!(path.points()[3].selected);

        path.clear_point_selection();
        path.toggle_vertex(0);
        assert!(path.points()[0].selected);
        assert!(path.points()[path.len() - 1].selected);
    }

    #[test]
    fn press_on_unselected_vertex_selects_only_it() {
        let mut path = open(&[(0, 0), (100, 0), (200, 0)]);
        path.set_selected(true);
        path.select_all_vertices();
        path.points[3].selected = false;
        let response = path.on_mouse_down(Point::new(101, 1), Modifiers::new(), &EditSettings::default());
        assert!(response.allow_move);
        assert_eq!(path.selected_points(), vec![3]);
    }

    #[test]
    fn press_on_selected_point_keeps_set() {
        let mut path = open(&[(0, 0), (100, 0), (200, 0)]);
        path.set_selected(true);
        path.select_all_vertices();
        path.on_mouse_down(Point::new(100, 0), Modifiers::new(), &EditSettings::default());
        assert_eq!(path.selected_points(), vec![0, 3, 6]);
        assert_eq!(path.moveable_points(), vec![0, 3, 6]);
    }

    #[test]
    fn shift_press_on_handle_selects_only_handle() {
        let mut path = open(&[(0, 0), (100, 0), (200, 0)]);
        path.set_selected(true);
        path.select_only(4);
        path.move_by(0, 30, Modifiers::new(), false);
        path.select_all_vertices();
        let response = path.on_mouse_down(Point::new(100, 30), shift(), &EditSettings::default());
        assert!(response.allow_move);
        assert_eq!(path.selected_points(), vec![4]);
    }

    #[test]
    fn filled_closed_path_hits_inside() {
        let mut style = Style::default();
        style.fill_color = crate::draw::RED;
        let rect = BezierPath::from_vertices(
            PathKind::Closed,
            style,
            &[Point::new(0, 0), Point::new(100, 0), Point::new(100, 50), Point::new(0, 50)],
        );
        let settings = EditSettings::default();
        assert!(rect.mouse_over(Point::new(50, 25), Modifiers::new(), &settings).is_some());

        let hollow = BezierPath::from_vertices(
            PathKind::Closed,
            Style::default(),
            &[Point::new(0, 0), Point::new(100, 0), Point::new(100, 50), Point::new(0, 50)],
        );
        assert!(hollow.mouse_over(Point::new(50, 25), Modifiers::new(), &settings).is_none());
        assert!(hollow.mouse_over(Point::new(0, 25), Modifiers::new(), &settings).is_some());
    }

    #[test]
    fn handles_only_hit_when_selected() {
        let mut path = open(&[(0, 0), (100, 0)]);
        let settings = EditSettings::default();
        assert!(matches!(
            path.mouse_over(Point::new(0, 0), Modifiers::new(), &settings),
            Some(HitObject::Object(_))
        ));
        path.set_selected(true);
        assert!(matches!(
            path.mouse_over(Point::new(0, 0), Modifiers::new(), &settings),
            Some(HitObject::Point { index: 0, kind: PointKind::Vertex, .. })
        ));
    }

    #[test]
    fn duplicate_assigns_fresh_ids() {
        let path = open(&[(0, 0), (100, 0)]);
        let copy = path.duplicate();
        assert_ne!(copy.id(), path.id());
        assert_ne!(copy.points()[0].id, path.points()[0].id);
        assert_eq!(copy.vertices().collect::<Vec<_>>(), path.vertices().collect::<Vec<_>>());
    }

    #[test]
    fn feedback_depends_on_target_and_modifiers() {
        let mut path = open(&[(0, 0), (100, 0)]);
        path.set_selected(true);
        let vertex = path.point_hit(0);
        assert_eq!(
            path.feedback(vertex.as_ref(), ctrl_shift()).cursor,
            CursorKind::RemovePoint
        );
        let whole = HitObject::Object(path.id());
        assert_eq!(path.feedback(Some(&whole), ctrl_shift()).cursor, CursorKind::AddPoint);
        assert_eq!(path.feedback(Some(&whole), Modifiers::new()).cursor, CursorKind::Move);
    }
}
