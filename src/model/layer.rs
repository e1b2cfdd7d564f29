//! Ordered collection of canvas objects.

use super::id::ObjectId;
use super::object::{CanvasObject, HitTestable, Movable};
use super::response::{HitObject, MouseOverResponse};
use super::settings::EditSettings;
use crate::draw::{Color, DrawSurface, TRANSPARENT, render_layer};
use crate::input::Modifiers;
use crate::util::Point;
use serde::Serialize;

/// A drawing layer.
///
/// Objects are kept in z-order (first = bottom, last = top). Selection lives
/// on the objects themselves; the layer only queries and updates it.
#[derive(Debug, Clone, Serialize)]
pub struct Layer {
    pub name: String,
    objects: Vec<CanvasObject>,
    pub background: Color,
    pub width: i32,
    pub height: i32,
    pub visible: bool,
}

impl Layer {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            background: TRANSPARENT,
            width,
            height,
            visible: true,
        }
    }

    pub fn objects(&self) -> &[CanvasObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> std::slice::IterMut<'_, CanvasObject> {
        self.objects.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Adds an object on top of the stack.
    pub fn add(&mut self, object: impl Into<CanvasObject>) -> ObjectId {
        let object = object.into();
        let id = object.id();
        self.objects.push(object);
        log::info!("Added {id} to layer '{}' ({} objects)", self.name, self.objects.len());
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<CanvasObject> {
        let index = self.index_of(id)?;
        Some(self.objects.remove(index))
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id() == id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&CanvasObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut CanvasObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn selected_ids(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|o| o.is_selected())
            .map(CanvasObject::id)
            .collect()
    }

    pub fn has_selection(&self) -> bool {
        self.objects.iter().any(CanvasObject::is_selected)
    }

    /// Deselects everything. Returns true if anything changed.
    pub fn deselect_all(&mut self) -> bool {
        let mut changed = false;
        for object in &mut self.objects {
            if object.is_selected() {
                object.set_selected(false);
                changed = true;
            }
        }
        changed
    }

    /// Selects `id` and deselects everything else.
    pub fn select_only(&mut self, id: ObjectId) -> bool {
        let mut found = false;
        for object in &mut self.objects {
            let hit = object.id() == id;
            found |= hit;
            if object.is_selected() != hit {
                object.set_selected(hit);
            }
        }
        found
    }

    /// Flips the selection of `id`, returning its new state.
    pub fn toggle(&mut self, id: ObjectId) -> Option<bool> {
        let object = self.get_mut(id)?;
        let selected = !object.is_selected();
        object.set_selected(selected);
        Some(selected)
    }

    pub fn select_all(&mut self) {
        for object in &mut self.objects {
            object.set_selected(true);
        }
    }

    // ------------------------------------------------------------------
    // Hit-testing
    // ------------------------------------------------------------------

    /// Most specific hit under `pos`.
    ///
    /// Selected objects are tested first so an already-selected object wins
    /// over one stacked above it; within each group the topmost wins.
    pub fn hit_test(
        &self,
        pos: Point,
        modifiers: Modifiers,
        settings: &EditSettings,
    ) -> Option<HitObject> {
        let selected = self.objects.iter().rev().filter(|o| o.is_selected());
        let others = self.objects.iter().rev().filter(|o| !o.is_selected());
        selected
            .chain(others)
            .find_map(|o| o.mouse_over(pos, modifiers, settings))
    }

    pub fn mouse_over(
        &self,
        pos: Point,
        modifiers: Modifiers,
        settings: &EditSettings,
    ) -> MouseOverResponse {
        MouseOverResponse {
            hit_object: self.hit_test(pos, modifiers, settings),
        }
    }

    // ------------------------------------------------------------------
    // Z-order and bulk edits
    // ------------------------------------------------------------------

    pub fn bring_to_front(&mut self, id: ObjectId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let object = self.objects.remove(index);
        self.objects.push(object);
        true
    }

    pub fn send_to_back(&mut self, id: ObjectId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let object = self.objects.remove(index);
        self.objects.insert(0, object);
        true
    }

    /// Raises every selected object, keeping their relative order.
    pub fn bring_selected_to_front(&mut self) -> bool {
        let (selected, rest): (Vec<_>, Vec<_>) = self
            .objects
            .drain(..)
            .partition(CanvasObject::is_selected);
        let changed = !selected.is_empty();
        self.objects = rest;
        self.objects.extend(selected);
        changed
    }

    /// Lowers every selected object, keeping their relative order.
    pub fn send_selected_to_back(&mut self) -> bool {
        let (mut selected, rest): (Vec<_>, Vec<_>) = self
            .objects
            .drain(..)
            .partition(CanvasObject::is_selected);
        let changed = !selected.is_empty();
        selected.extend(rest);
        self.objects = selected;
        changed
    }

    /// Makes every selected path fully moveable for a group drag.
    pub fn arm_selection(&mut self) {
        for object in self.objects.iter_mut().filter(|o| o.is_selected()) {
            if let Some(path) = object.as_path_mut() {
                path.arm_all_vertices();
            }
        }
    }

    pub fn move_selected(&mut self, dx: i32, dy: i32, modifiers: Modifiers, suppress_callback: bool) {
        for object in self.objects.iter_mut().filter(|o| o.is_selected()) {
            object.move_by(dx, dy, modifiers, suppress_callback);
        }
    }

    /// Snaps the selected objects to the grid. Returns how many were aligned.
    pub fn align_selected(&mut self, interval: i32) -> usize {
        let mut count = 0;
        for object in self.objects.iter_mut().filter(|o| o.is_selected()) {
            object.align(interval);
            count += 1;
        }
        count
    }

    pub fn delete_selected(&mut self) -> usize {
        let before = self.objects.len();
        self.objects.retain(|o| !o.is_selected());
        before - self.objects.len()
    }

    /// Copies the selection, offset by `(dx, dy)`, and selects the copies.
    pub fn duplicate_selected(&mut self, dx: i32, dy: i32) -> Vec<ObjectId> {
        let mut copies: Vec<CanvasObject> = self
            .objects
            .iter()
            .filter(|o| o.is_selected())
            .map(CanvasObject::duplicate)
            .collect();
        self.deselect_all();
        let mut ids = Vec::with_capacity(copies.len());
        for copy in &mut copies {
            copy.set_selected(false);
            copy.move_by(dx, dy, Modifiers::new(), true);
            copy.set_selected(true);
            ids.push(copy.id());
        }
        self.objects.extend(copies);
        ids
    }

    /// Replaces selected primitives with equivalent editable paths.
    pub fn convert_selected_to_paths(&mut self) -> usize {
        let mut count = 0;
        for object in &mut self.objects {
            if let CanvasObject::Primitive(rect) = object {
                if rect.is_selected() {
                    let mut path = rect.to_path();
                    path.set_selected(true);
                    *object = CanvasObject::Path(path);
                    count += 1;
                }
            }
        }
        count
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        render_layer(surface, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Style;
    use crate::model::{BezierPath, PathKind, RectanglePrimitive};
    use crate::util::Rect;

    fn segment(y: i32) -> BezierPath {
        BezierPath::from_vertices(
            PathKind::Line,
            Style::default(),
            &[Point::new(0, y), Point::new(100, y)],
        )
    }

    #[test]
    fn hit_test_prefers_selection_over_topmost() {
        let mut layer = Layer::new("test", 200, 200);
        let bottom = layer.add(segment(10));
        let top = layer.add(segment(10));
        let settings = EditSettings::default();

        let hit = layer.hit_test(Point::new(50, 10), Modifiers::new(), &settings);
        assert_eq!(hit.map(|h| h.object_id()), Some(top));

        layer.select_only(bottom);
        let hit = layer.hit_test(Point::new(50, 10), Modifiers::new(), &settings);
        assert_eq!(hit.map(|h| h.object_id()), Some(bottom));
    }

    #[test]
    fn empty_layer_has_no_hit() {
        let layer = Layer::new("empty", 10, 10);
        assert!(layer.hit_test(Point::new(0, 0), Modifiers::new(), &EditSettings::default()).is_none());
    }

    #[test]
    fn z_order_moves() {
        let mut layer = Layer::new("z", 100, 100);
        let a = layer.add(segment(0));
        let b = layer.add(segment(10));
        assert!(layer.bring_to_front(a));
        assert_eq!(layer.objects()[1].id(), a);
        assert!(layer.send_to_back(a));
        assert_eq!(layer.objects()[0].id(), a);
        assert_eq!(layer.objects()[1].id(), b);

        layer.select_only(a);
        assert!(layer.bring_selected_to_front());
        assert_eq!(layer.objects()[1].id(), a);
    }

    #[test]
    fn toggle_and_select_only() {
        let mut layer = Layer::new("sel", 100, 100);
        let a = layer.add(segment(0));
        let b = layer.add(segment(10));
        layer.select_only(a);
        assert_eq!(layer.toggle(b), Some(true));
        assert_eq!(layer.selected_ids(), vec![a, b]);
        assert_eq!(layer.toggle(a), Some(false));
        assert_eq!(layer.selected_ids(), vec![b]);
        assert!(layer.deselect_all());
        assert!(!layer.has_selection());
    }

    #[test]
    fn duplicate_selects_offset_copies() {
        let mut layer = Layer::new("dup", 100, 100);
        let a = layer.add(segment(0));
        layer.select_only(a);
        let copies = layer.duplicate_selected(10, 10);
        assert_eq!(copies.len(), 1);
        assert_eq!(layer.len(), 2);
        assert_eq!(layer.selected_ids(), copies);
        let copy = layer.get(copies[0]).and_then(CanvasObject::as_path).unwrap();
        assert_eq!(copy.vertices().next(), Some(Point::new(10, 10)));
    }

    #[test]
    fn convert_and_delete_selection() {
        let mut layer = Layer::new("conv", 100, 100);
        let rect = layer.add(RectanglePrimitive::new(Rect::new(0, 0, 10, 10).unwrap(), Style::default()));
        layer.select_only(rect);
        assert_eq!(layer.convert_selected_to_paths(), 1);
        assert!(layer.objects()[0].as_path().is_some());
        assert_eq!(layer.delete_selected(), 1);
        assert!(layer.is_empty());
    }
}
