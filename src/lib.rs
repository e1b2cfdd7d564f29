//! Library exports for the vectorscribe editor core.
//!
//! The crate holds a scene of layered, editable vector shapes and turns host
//! pointer and keyboard events into edits on it. Hosts drive an
//! [`EditorState`], poll its redraw flag and render through a [`DrawSurface`].

pub mod config;
pub mod draw;
pub mod input;
pub mod model;
pub mod replay;
pub mod util;

pub use config::Config;
pub use draw::{DrawSurface, RecordingSurface};
pub use input::EditorState;
pub use model::{BezierPath, CanvasObject, Layer, PathKind, Scene};
pub use replay::{ReplayError, ReplayScript};
