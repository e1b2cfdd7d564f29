use crate::config::Action;
use crate::input::modifiers::Modifier;
use crate::input::{Key, Modifiers, Outcome, Tool};

use super::EditorState;

fn modifier_for(key: Key) -> Option<Modifier> {
    match key {
        Key::Shift => Some(Modifier::Shift),
        Key::Ctrl => Some(Modifier::Control),
        Key::Alt => Some(Modifier::Alt),
        _ => None,
    }
}

impl EditorState {
    /// Processes a key press event.
    ///
    /// Modifier keys update the modifier set. Other keys go to the active
    /// mode first (finishing or trimming a construction), then to the key
    /// binding table.
    pub fn on_key_press(&mut self, key: Key) {
        if let Some(modifier) = modifier_for(key) {
            self.modifiers.set(modifier.into(), true);
            self.refresh_feedback();
            return;
        }

        let modifiers = self.modifiers;
        let outcome = self.dispatch(|mode, ctx| mode.on_key_down(ctx, key, modifiers));
        if !outcome.handled {
            if let Some(action) = key.binding_name().and_then(|name| self.find_action(&name)) {
                self.handle_action(action);
            }
        }
        self.refresh_feedback();
    }

    /// Processes a key release event.
    pub fn on_key_release(&mut self, key: Key) {
        if let Some(modifier) = modifier_for(key) {
            self.modifiers.set(modifier.into(), false);
        } else {
            let modifiers = self.modifiers;
            self.dispatch(|mode, ctx| mode.on_key_up(ctx, key, modifiers));
        }
        self.refresh_feedback();
    }

    /// Runs a bound editor action.
    pub fn handle_action(&mut self, action: Action) {
        log::debug!("Handling action {:?}", action);
        match action {
            Action::SelectTool => self.set_tool(Tool::Select),
            Action::RotateTool => self.set_tool(Tool::Rotate),
            Action::LineTool => self.set_tool(Tool::Line),
            Action::BezierTool => self.set_tool(Tool::Bezier),
            Action::RectangleTool => self.set_tool(Tool::Rectangle),
            Action::Cancel => self.reset_mode(),
            Action::DeleteSelection => {
                let removed = self.scene.active_layer_mut().delete_selected();
                if removed > 0 {
                    log::info!("Deleted {removed} objects");
                    self.mark_selection_edit();
                }
            }
            Action::SelectAll => {
                let layer = self.scene.active_layer_mut();
                let before = layer.selected_ids().len();
                layer.select_all();
                if layer.selected_ids().len() != before {
                    self.mark_selection_edit();
                }
            }
            Action::Duplicate => {
                let offset = self.duplicate_offset;
                let copies = self
                    .scene
                    .active_layer_mut()
                    .duplicate_selected(offset, offset);
                if !copies.is_empty() {
                    log::info!("Duplicated {} objects", copies.len());
                    self.mark_selection_edit();
                }
            }
            Action::AlignToGrid => {
                let interval = self.settings.grid_size;
                let aligned = self.scene.active_layer_mut().align_selected(interval);
                if aligned > 0 {
                    log::info!("Aligned {aligned} objects to a {interval} grid");
                    self.needs_redraw = true;
                }
            }
            Action::BringToFront => {
                self.needs_redraw |= self.scene.active_layer_mut().bring_selected_to_front();
            }
            Action::SendToBack => {
                self.needs_redraw |= self.scene.active_layer_mut().send_selected_to_back();
            }
            Action::ConvertToPath => {
                let converted = self.scene.active_layer_mut().convert_selected_to_paths();
                if converted > 0 {
                    log::info!("Converted {converted} primitives to paths");
                    self.mark_selection_edit();
                }
            }
            Action::NudgeUp => self.nudge(0, -1),
            Action::NudgeDown => self.nudge(0, 1),
            Action::NudgeLeft => self.nudge(-1, 0),
            Action::NudgeRight => self.nudge(1, 0),
            Action::ToggleSnap => {
                self.settings.snap_to_grid = !self.settings.snap_to_grid;
                log::info!(
                    "Grid snapping {}",
                    if self.settings.snap_to_grid { "enabled" } else { "disabled" }
                );
                self.needs_redraw = true;
            }
        }
    }

    /// Moves the selection by one grid step along `(sx, sy)`.
    fn nudge(&mut self, sx: i32, sy: i32) {
        let step = self.settings.grid_size.max(1);
        let layer = self.scene.active_layer_mut();
        if !layer.has_selection() {
            return;
        }
        layer.arm_selection();
        layer.move_selected(sx * step, sy * step, Modifiers::new(), false);
        self.needs_redraw = true;
    }

    fn mark_selection_edit(&mut self) {
        self.apply(Outcome::selection(true));
    }
}
