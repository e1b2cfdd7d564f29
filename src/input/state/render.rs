use crate::draw::DrawSurface;

use super::EditorState;

impl EditorState {
    /// Renders the scene followed by the active mode's construction overlay,
    /// then clears the redraw flag.
    pub fn draw(&mut self, surface: &mut dyn DrawSurface) {
        self.scene.draw(surface);
        self.mode().as_mode().draw(surface, &self.template, &self.settings);
        self.needs_redraw = false;
    }
}
