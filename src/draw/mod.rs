//! Drawing contract, styles and render helpers.
//!
//! This module defines the visual side of the editor:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Style`]: line width, colors and dash pattern of a shape
//! - [`DrawSurface`]: the opaque sink a host backend implements
//! - Rendering functions that walk a scene or layer onto a surface

pub mod color;
pub mod render;
pub mod style;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use render::{render_layer, render_scene};
pub use style::{DashStyle, StrokeStyle, Style};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
