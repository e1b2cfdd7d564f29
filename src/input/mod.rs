//! Input handling and interaction modes.
//!
//! This module translates host keyboard and pointer events into model edits.
//! It tracks modifier keys, the active tool and its gesture state machine, and
//! maps key bindings onto editor actions.

pub mod events;
pub mod mode;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use mode::{InteractionMode, Mode, ModeContext, Outcome};
pub use modifiers::{Modifier, Modifiers};
pub use state::EditorState;
pub use tool::Tool;
