use crate::input::MouseButton;

use super::EditorState;

impl EditorState {
    /// Processes a pointer press at page coordinates `(x, y)`.
    ///
    /// `clicks` is the host's click count; a second click at the same spot
    /// arrives as a double-click instead of another press. The right button
    /// cancels the current gesture.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64, clicks: u32) {
        let pos = self.set_pointer(x, y);
        let modifiers = self.modifiers;

        match button {
            MouseButton::Left if clicks >= 2 => {
                log::debug!("Double-click at ({}, {}) in {} mode", pos.x, pos.y, self.tool());
                self.dispatch(|mode, ctx| mode.on_double_click(ctx, pos, modifiers));
            }
            MouseButton::Left => {
                self.dispatch(|mode, ctx| mode.on_mouse_down(ctx, pos, modifiers));
            }
            MouseButton::Right => {
                log::debug!("Right click cancels {} mode", self.tool());
                self.reset_mode();
            }
            MouseButton::Middle => {}
        }
        self.refresh_feedback();
    }

    /// Processes pointer motion; modes track drags and previews themselves.
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        let pos = self.set_pointer(x, y);
        let modifiers = self.modifiers;
        self.dispatch(|mode, ctx| mode.on_mouse_move(ctx, pos, modifiers));
        self.refresh_feedback();
    }

    /// Processes a pointer release at page coordinates `(x, y)`.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: f64, y: f64) {
        let pos = self.set_pointer(x, y);
        if button == MouseButton::Left {
            let modifiers = self.modifiers;
            self.dispatch(|mode, ctx| mode.on_mouse_up(ctx, pos, modifiers));
        }
        self.refresh_feedback();
    }
}
