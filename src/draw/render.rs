//! Rendering helpers shared by objects, layers and modes.

use super::color::{Color, HANDLE, RED, SELECTION, WHITE};
use super::style::StrokeStyle;
use super::surface::DrawSurface;
use crate::model::{Drawable, Layer, Scene};
use crate::util::Point;
use kurbo::BezPath;

/// Radius of the dot drawn for a vertex handle.
pub const VERTEX_HANDLE_RADIUS: f64 = 4.0;
/// Radius of the ring drawn for a tangent handle.
pub const CONTROL_HANDLE_RADIUS: f64 = 3.0;

/// Renders every visible layer of the scene, bottom layer first.
pub fn render_scene(surface: &mut dyn DrawSurface, scene: &Scene) {
    for layer in scene.layers() {
        render_layer(surface, layer);
    }
}

/// Renders a layer's background and its objects in z-order.
///
/// Hidden layers draw nothing.
pub fn render_layer(surface: &mut dyn DrawSurface, layer: &Layer) {
    if !layer.visible {
        return;
    }
    render_background(surface, layer);
    for object in layer.objects() {
        object.draw(surface);
    }
}

/// Fills the layer extent with its background color, if it has one.
pub fn render_background(surface: &mut dyn DrawSurface, layer: &Layer) {
    if layer.background.is_transparent() || layer.width <= 0 || layer.height <= 0 {
        return;
    }
    let mut path = BezPath::new();
    let w = layer.width as f64;
    let h = layer.height as f64;
    path.move_to((0.0, 0.0));
    path.line_to((w, 0.0));
    path.line_to((w, h));
    path.line_to((0.0, h));
    path.close_path();
    surface.fill_path(&path, layer.background);
}

/// Draws an anchor handle: filled dot, highlighted when selected.
pub fn render_vertex_handle(surface: &mut dyn DrawSurface, at: Point, selected: bool) {
    let fill = if selected { SELECTION } else { WHITE };
    surface.fill_ellipse(at.to_kurbo(), VERTEX_HANDLE_RADIUS, VERTEX_HANDLE_RADIUS, fill);
    surface.stroke_ellipse(
        at.to_kurbo(),
        VERTEX_HANDLE_RADIUS,
        VERTEX_HANDLE_RADIUS,
        &StrokeStyle::solid(SELECTION, 1.0),
    );
}

/// Draws a tangent handle with its line back to the owning anchor.
pub fn render_control_handle(surface: &mut dyn DrawSurface, anchor: Point, at: Point, selected: bool) {
    let color = if selected { SELECTION } else { HANDLE };
    surface.draw_line(anchor.to_kurbo(), at.to_kurbo(), &StrokeStyle::solid(HANDLE, 1.0));
    surface.stroke_ellipse(
        at.to_kurbo(),
        CONTROL_HANDLE_RADIUS,
        CONTROL_HANDLE_RADIUS,
        &StrokeStyle::solid(color, 1.0),
    );
}

/// Draws the ring that marks a snap/close target during construction.
pub fn render_marker(surface: &mut dyn DrawSurface, at: Point, radius: f64) {
    surface.stroke_ellipse(at.to_kurbo(), radius, radius, &StrokeStyle::solid(RED, 1.5));
}

/// Outline used for a selection frame around an object's bounds.
pub fn render_selection_frame(surface: &mut dyn DrawSurface, rect: kurbo::Rect, color: Color) {
    let mut path = BezPath::new();
    path.move_to((rect.x0, rect.y0));
    path.line_to((rect.x1, rect.y0));
    path.line_to((rect.x1, rect.y1));
    path.line_to((rect.x0, rect.y1));
    path.close_path();
    surface.stroke_path(
        &path,
        &StrokeStyle {
            color,
            width: 1.0,
            dash: super::style::DashStyle::Dash,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawCommand, RecordingSurface};

    #[test]
    fn hidden_layer_renders_nothing() {
        let mut layer = Layer::new("hidden", 100, 100);
        layer.background = WHITE;
        layer.visible = false;
        let mut surface = RecordingSurface::new();
        render_layer(&mut surface, &layer);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn background_fills_layer_extent() {
        let mut layer = Layer::new("paper", 40, 20);
        layer.background = WHITE;
        let mut surface = RecordingSurface::new();
        render_layer(&mut surface, &layer);
        assert!(matches!(
            surface.commands().first(),
            Some(DrawCommand::FillPath { color, .. }) if *color == WHITE
        ));
    }
}
