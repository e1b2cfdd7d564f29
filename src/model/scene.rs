//! Multi-layer document with one active layer.

use super::layer::Layer;
use crate::draw::{Color, DrawSurface, render_scene};
use serde::Serialize;

/// Stack of layers, bottom first. There is always at least one layer.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    layers: Vec<Layer>,
    active: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Layer::new("Layer 1", 0, 0))
    }
}

impl Scene {
    /// Creates a scene whose only layer is `base`.
    pub fn new(base: Layer) -> Self {
        Self {
            layers: vec![base],
            active: 0,
        }
    }

    /// Creates a scene with a single sized layer on the given background.
    pub fn with_canvas(width: i32, height: i32, background: Color) -> Self {
        let mut base = Layer::new("Layer 1", width, height);
        base.background = background;
        Self::new(base)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_layer(&self) -> &Layer {
        &self.layers[self.active]
    }

    pub fn active_layer_mut(&mut self) -> &mut Layer {
        &mut self.layers[self.active]
    }

    /// Adds a transparent layer sized like the active one and makes it active.
    pub fn add_layer(&mut self, name: impl Into<String>) -> usize {
        let (width, height) = {
            let current = self.active_layer();
            (current.width, current.height)
        };
        self.layers.push(Layer::new(name, width, height));
        self.active = self.layers.len() - 1;
        log::info!("Added layer {} of {}", self.active + 1, self.layers.len());
        self.active
    }

    /// Makes `index` the active layer. Out-of-range indices are ignored.
    pub fn switch_layer(&mut self, index: usize) -> bool {
        if index >= self.layers.len() || index == self.active {
            return false;
        }
        self.layers[self.active].deselect_all();
        self.active = index;
        log::info!("Switched to layer '{}'", self.layers[index].name);
        true
    }

    /// Removes a layer, refusing to remove the last one.
    pub fn remove_layer(&mut self, index: usize) -> Option<Layer> {
        if self.layers.len() <= 1 || index >= self.layers.len() {
            return None;
        }
        let removed = self.layers.remove(index);
        if self.active >= self.layers.len() || self.active > index {
            self.active = self.active.saturating_sub(1);
        }
        Some(removed)
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        render_scene(surface, self);
    }
}
