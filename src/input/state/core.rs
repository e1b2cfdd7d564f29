//! Editor state shared by the pointer, keyboard and render handlers.

use crate::config::{Action, Config, KeyBinding, KeybindingsConfig};
use crate::draw::Style;
use crate::input::mode::{InteractionMode, Mode, ModeContext, Outcome};
use crate::input::{Modifiers, Tool};
use crate::model::{EditSettings, Feedback, ObjectId, Scene};
use crate::util::{GridTransform, Point};
use std::collections::HashMap;

/// Host-facing editor state.
///
/// Owns the scene, the active interaction mode and everything needed to turn
/// raw host events into model edits. The host forwards pointer and key
/// events, polls `needs_redraw` and calls [`EditorState::draw`].
pub struct EditorState {
    /// Layers and their objects
    pub scene: Scene,
    /// Tolerances and snapping parameters
    pub settings: EditSettings,
    /// Style copied onto newly constructed objects
    pub template: Style,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Page to model coordinate mapping (pan and zoom)
    pub transform: GridTransform,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Offset applied when duplicating the selection
    pub duplicate_offset: i32,
    /// Active gesture state machine
    mode: Mode,
    /// Last pointer position in model coordinates
    pointer: Point,
    /// Cursor and hint for the last pointer position
    feedback: Feedback,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
    /// Set when the layer selection changed since the last poll
    pending_selection: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl EditorState {
    /// Creates an editor for a fresh scene built from `config`.
    pub fn new(config: &Config) -> Self {
        let action_map = config.keybindings.build_action_map().unwrap_or_else(|err| {
            log::warn!("Invalid keybindings ({err}), using defaults");
            KeybindingsConfig::default()
                .build_action_map()
                .unwrap_or_default()
        });

        let scene = Scene::with_canvas(
            config.canvas.width,
            config.canvas.height,
            config.canvas.background.to_color(),
        );
        let mut state = Self {
            scene,
            settings: EditSettings::from_config(config),
            template: config.style.to_style(),
            modifiers: Modifiers::new(),
            transform: GridTransform::identity(),
            needs_redraw: true,
            duplicate_offset: config.editing.duplicate_offset,
            mode: Mode::for_tool(config.editing.default_tool),
            pointer: Point::default(),
            feedback: Feedback::default(),
            action_map,
            pending_selection: false,
        };
        state.refresh_feedback();
        state
    }

    pub fn tool(&self) -> Tool {
        self.mode.tool()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Switches the active tool, discarding the old mode's gesture state.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.mode.tool() == tool {
            return;
        }
        self.reset_mode();
        self.mode = Mode::for_tool(tool);
        log::info!("Switched to {tool} tool");
        self.needs_redraw = true;
        self.refresh_feedback();
    }

    /// Drops the active mode's transient state and deselects the layer.
    pub fn reset_mode(&mut self) {
        let outcome = self.mode.as_mode_mut().reset(self.scene.active_layer_mut());
        self.apply(outcome);
    }

    /// Cursor and hint for the current pointer position.
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Last pointer position, in model coordinates.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Returns the selected object ids if the selection changed since the
    /// last call.
    pub fn take_selection_change(&mut self) -> Option<Vec<ObjectId>> {
        if !std::mem::take(&mut self.pending_selection) {
            return None;
        }
        Some(self.scene.active_layer().selected_ids())
    }

    /// Replaces the modifier state, e.g. after the host regains focus.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        if self.modifiers != modifiers {
            self.modifiers = modifiers;
            self.refresh_feedback();
        }
    }

    /// Makes `index` the active layer. The active mode is reset first.
    pub fn switch_layer(&mut self, index: usize) -> bool {
        if index >= self.scene.layer_count() || index == self.scene.active_index() {
            return false;
        }
        self.reset_mode();
        let switched = self.scene.switch_layer(index);
        self.needs_redraw |= switched;
        self.refresh_feedback();
        switched
    }

    /// Adds a layer on top and makes it active. The active mode is reset first.
    pub fn add_layer(&mut self, name: impl Into<String>) -> usize {
        self.reset_mode();
        let index = self.scene.add_layer(name);
        self.needs_redraw = true;
        self.refresh_feedback();
        index
    }

    /// Runs `handler` against the active mode and layer, then records the outcome.
    pub(super) fn dispatch(
        &mut self,
        handler: impl FnOnce(&mut dyn InteractionMode, &mut ModeContext<'_>) -> Outcome,
    ) -> Outcome {
        let mut ctx = ModeContext {
            layer: self.scene.active_layer_mut(),
            settings: &self.settings,
            template: &self.template,
        };
        let outcome = handler(self.mode.as_mode_mut(), &mut ctx);
        self.apply(outcome);
        outcome
    }

    pub(super) fn apply(&mut self, outcome: Outcome) {
        self.needs_redraw |= outcome.redraw;
        self.pending_selection |= outcome.selection_changed;
    }

    /// Recomputes feedback from current geometry.
    pub(super) fn refresh_feedback(&mut self) {
        self.feedback = self.mode.as_mode().feedback(
            self.scene.active_layer(),
            &self.settings,
            self.pointer,
            self.modifiers,
        );
    }

    pub(super) fn set_pointer(&mut self, x: f64, y: f64) -> Point {
        self.pointer = self.transform.page_to_world(x, y);
        self.pointer
    }

    /// Looks up the action bound to `key_name` under the current modifiers.
    pub(super) fn find_action(&self, key_name: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| binding.matches(key_name, self.modifiers))
            .map(|(_, action)| *action)
    }
}
