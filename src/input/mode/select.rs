//! Selection, dragging and in-place path editing.

use super::{InteractionMode, ModeContext, Outcome};
use crate::input::Modifiers;
use crate::model::{CursorKind, EditSettings, Feedback, Layer, Movable, ObjectId};
use crate::util::Point;

/// What a drag translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragTarget {
    /// Every selected object
    Selection,
    /// One object's moveable points (drag started on a child point)
    Object(ObjectId),
}

#[derive(Debug)]
struct Drag {
    target: DragTarget,
    last: Point,
    moved: bool,
    /// Collapse the selection to this object if the press ends without a drag
    select_on_release: Option<ObjectId>,
}

/// Selects objects and moves them; delegates point edits to the hit path.
#[derive(Debug, Default)]
pub struct SelectMode {
    drag: Option<Drag>,
}

impl SelectMode {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn drag_point(pos: Point, modifiers: Modifiers, settings: &EditSettings) -> Point {
        if modifiers.ctrl() {
            pos
        } else {
            settings.snap(pos)
        }
    }
}

impl InteractionMode for SelectMode {
    fn on_mouse_down(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        modifiers: Modifiers,
    ) -> Outcome {
        self.drag = None;
        let start = Self::drag_point(pos, modifiers, ctx.settings);

        let Some(hit) = ctx.layer.hit_test(pos, modifiers, ctx.settings) else {
            if modifiers.shift() {
                return Outcome::handled();
            }
            return Outcome::selection(ctx.layer.deselect_all());
        };

        let id = hit.object_id();
        let Some(object) = ctx.layer.get_mut(id) else {
            return Outcome::handled();
        };
        let was_selected = object.is_selected();

        if was_selected && object.as_path().is_some() && (hit.is_point() || modifiers.ctrl()) {
            let response = object.on_mouse_down(pos, modifiers, ctx.settings);
            self.drag = response.allow_move.then_some(Drag {
                target: DragTarget::Object(id),
                last: start,
                moved: false,
                select_on_release: None,
            });
            return Outcome::redraw();
        }
        if !was_selected {
            object.on_mouse_down(pos, modifiers, ctx.settings);
        }

        if modifiers.shift() {
            if ctx.layer.toggle(id) != Some(true) {
                return Outcome::selection(true);
            }
        } else if !was_selected {
            ctx.layer.select_only(id);
        }

        ctx.layer.arm_selection();
        self.drag = Some(Drag {
            target: DragTarget::Selection,
            last: start,
            moved: false,
            select_on_release: (was_selected && !modifiers.shift()).then_some(id),
        });
        Outcome::selection(modifiers.shift() || !was_selected)
    }

    fn on_mouse_move(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        modifiers: Modifiers,
    ) -> Outcome {
        let Some(drag) = self.drag.as_mut() else {
            return Outcome::default();
        };
        let target = Self::drag_point(pos, modifiers, ctx.settings);
        let (dx, dy) = (target.x - drag.last.x, target.y - drag.last.y);
        if dx == 0 && dy == 0 {
            return Outcome::handled();
        }
        match drag.target {
            DragTarget::Selection => ctx.layer.move_selected(dx, dy, modifiers, false),
            DragTarget::Object(id) => {
                if let Some(object) = ctx.layer.get_mut(id) {
                    object.move_by(dx, dy, modifiers, false);
                }
            }
        }
        drag.last = target;
        drag.moved = true;
        Outcome::redraw()
    }

    fn on_mouse_up(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        modifiers: Modifiers,
    ) -> Outcome {
        let Some(drag) = self.drag.take() else {
            return Outcome::default();
        };

        if let DragTarget::Object(id) = drag.target {
            if let Some(object) = ctx.layer.get_mut(id) {
                let response = object.on_mouse_up(pos, modifiers, ctx.settings);
                log::debug!("Released on {id}: inner={:?}", response.inner_hit_object);
            }
        }

        match drag.select_on_release {
            Some(id) if !drag.moved => {
                let changed = ctx.layer.selected_ids() != vec![id];
                ctx.layer.select_only(id);
                Outcome::selection(changed)
            }
            _ => Outcome {
                redraw: drag.moved,
                selection_changed: false,
                handled: true,
            },
        }
    }

    /// Inserts a vertex on a selected path's outline away from its points,
    /// else behaves like a press.
    fn on_double_click(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        modifiers: Modifiers,
    ) -> Outcome {
        self.drag = None;
        let settings = ctx.settings;
        for object in ctx.layer.objects_mut().rev() {
            if !object.is_selected() {
                continue;
            }
            if let Some(path) = object.as_path_mut() {
                if path.hit_point(pos, settings.hit_radius).is_some() {
                    continue;
                }
                if let Some(index) = path.try_add_vertex(pos, settings) {
                    path.select_vertex_only(index);
                    return Outcome::redraw();
                }
            }
        }
        self.on_mouse_down(ctx, pos, modifiers)
    }

    fn reset(&mut self, layer: &mut Layer) -> Outcome {
        self.drag = None;
        Outcome::selection(layer.deselect_all())
    }

    fn feedback(
        &self,
        layer: &Layer,
        settings: &EditSettings,
        pos: Point,
        modifiers: Modifiers,
    ) -> Feedback {
        if self.drag.is_some() {
            let hint = if modifiers.ctrl() {
                "Release to drop"
            } else {
                "Release to drop, Ctrl to move off-grid"
            };
            return Feedback::new(CursorKind::Move, hint);
        }
        match layer.hit_test(pos, modifiers, settings) {
            Some(hit) => layer
                .get(hit.object_id())
                .map(|o| o.feedback(Some(&hit), modifiers))
                .unwrap_or_default(),
            None => Feedback::new(
                CursorKind::Default,
                "Click to select, Shift+click to extend selection",
            ),
        }
    }
}
