//! Editable object model: points, paths, primitives, layers and scenes.
//!
//! Objects expose their abilities through small capability traits
//! ([`Drawable`], [`HitTestable`], [`Movable`], [`Rotatable`]) and are stored
//! in a [`Layer`] as the closed [`CanvasObject`] enum.

pub mod id;
pub mod layer;
pub mod object;
pub mod path;
pub mod point;
pub mod primitive;
pub mod response;
pub mod scene;
pub mod settings;

pub use id::{ObjectId, PointId};
pub use layer::Layer;
pub use object::{CanvasObject, Drawable, HitTestable, Movable, Rotatable};
pub use path::{BezierPath, PathKind};
pub use point::{CanvasPoint, PointKind};
pub use primitive::RectanglePrimitive;
pub use response::{
    CursorKind, Feedback, HitObject, MouseDownResponse, MouseOverResponse, MouseUpResponse,
};
pub use scene::Scene;
pub use settings::EditSettings;
