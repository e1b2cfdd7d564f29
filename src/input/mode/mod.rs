//! Interaction modes: per-tool gesture state machines.
//!
//! Exactly one mode is active at a time. Each receives pointer and key events
//! in model coordinates through a [`ModeContext`] and reports what changed
//! through an [`Outcome`].

mod construct;
mod rectangle;
mod rotate;
mod select;

pub use construct::{ConstructionKind, ConstructionMode};
pub use rectangle::RectangleMode;
pub use rotate::RotationMode;
pub use select::SelectMode;

use crate::draw::{DrawSurface, Style};
use crate::input::{Key, Modifiers, Tool};
use crate::model::{EditSettings, Feedback, Layer};
use crate::util::Point;

/// Everything a mode may touch while handling one event.
pub struct ModeContext<'a> {
    /// Active layer
    pub layer: &'a mut Layer,
    pub settings: &'a EditSettings,
    /// Style copied onto newly created objects
    pub template: &'a Style,
}

/// What a handler did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// The model or the mode overlay changed
    pub redraw: bool,
    /// The layer's object selection changed
    pub selection_changed: bool,
    /// The event was consumed
    pub handled: bool,
}

impl Outcome {
    pub fn handled() -> Self {
        Self {
            handled: true,
            ..Self::default()
        }
    }

    pub fn redraw() -> Self {
        Self {
            redraw: true,
            handled: true,
            ..Self::default()
        }
    }

    pub fn selection(changed: bool) -> Self {
        Self {
            redraw: changed,
            selection_changed: changed,
            handled: true,
        }
    }
}

/// Gesture state machine behind a tool.
pub trait InteractionMode {
    fn on_mouse_down(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        modifiers: Modifiers,
    ) -> Outcome;

    fn on_mouse_move(
        &mut self,
        ctx: &mut ModeContext<'_>,
        pos: Point,
        modifiers: Modifiers,
    ) -> Outcome;

    fn on_mouse_up(&mut self, ctx: &mut ModeContext<'_>, pos: Point, modifiers: Modifiers)
    -> Outcome;

    fn on_double_click(
        &mut self,
        _ctx: &mut ModeContext<'_>,
        _pos: Point,
        _modifiers: Modifiers,
    ) -> Outcome {
        Outcome::default()
    }

    fn on_key_down(&mut self, _ctx: &mut ModeContext<'_>, _key: Key, _modifiers: Modifiers) -> Outcome {
        Outcome::default()
    }

    fn on_key_up(&mut self, _ctx: &mut ModeContext<'_>, _key: Key, _modifiers: Modifiers) -> Outcome {
        Outcome::default()
    }

    /// Drops transient gesture state and deselects the layer.
    fn reset(&mut self, layer: &mut Layer) -> Outcome;

    /// Renders in-progress construction feedback above the scene.
    fn draw(&self, _surface: &mut dyn DrawSurface, _template: &Style, _settings: &EditSettings) {}

    /// Cursor and hint for the given position, computed from current geometry.
    fn feedback(
        &self,
        layer: &Layer,
        settings: &EditSettings,
        pos: Point,
        modifiers: Modifiers,
    ) -> Feedback;
}

/// The active mode, one variant per tool.
#[derive(Debug)]
pub enum Mode {
    Select(SelectMode),
    Rotate(RotationMode),
    Line(ConstructionMode),
    Bezier(ConstructionMode),
    Rectangle(RectangleMode),
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Select(SelectMode::default())
    }
}

impl Mode {
    pub fn for_tool(tool: Tool) -> Self {
        match tool {
            Tool::Select => Mode::Select(SelectMode::default()),
            Tool::Rotate => Mode::Rotate(RotationMode::default()),
            Tool::Line => Mode::Line(ConstructionMode::new(ConstructionKind::Line)),
            Tool::Bezier => Mode::Bezier(ConstructionMode::new(ConstructionKind::Bezier)),
            Tool::Rectangle => Mode::Rectangle(RectangleMode::default()),
        }
    }

    pub fn tool(&self) -> Tool {
        match self {
            Mode::Select(_) => Tool::Select,
            Mode::Rotate(_) => Tool::Rotate,
            Mode::Line(_) => Tool::Line,
            Mode::Bezier(_) => Tool::Bezier,
            Mode::Rectangle(_) => Tool::Rectangle,
        }
    }

    pub fn as_mode(&self) -> &dyn InteractionMode {
        match self {
            Mode::Select(m) => m,
            Mode::Rotate(m) => m,
            Mode::Line(m) | Mode::Bezier(m) => m,
            Mode::Rectangle(m) => m,
        }
    }

    pub fn as_mode_mut(&mut self) -> &mut dyn InteractionMode {
        match self {
            Mode::Select(m) => m,
            Mode::Rotate(m) => m,
            Mode::Line(m) | Mode::Bezier(m) => m,
            Mode::Rectangle(m) => m,
        }
    }
}

/// Grid-snaps a construction click unless Alt is held.
pub(crate) fn place(pos: Point, modifiers: Modifiers, settings: &EditSettings) -> Point {
    if modifiers.alt() {
        pos
    } else {
        settings.snap(pos)
    }
}
