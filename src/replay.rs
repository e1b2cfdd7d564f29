//! Scripted gesture replay.
//!
//! A replay script is a TOML file with an ordered list of `[[event]]` tables,
//! each naming a host event in page coordinates:
//!
//! ```toml
//! [[event]]
//! kind = "tool"
//! tool = "line"
//!
//! [[event]]
//! kind = "click"
//! x = 10.0
//! y = 10.0
//!
//! [[event]]
//! kind = "key"
//! key = "Return"
//! ```
//!
//! Events are fed through [`EditorState`] exactly as a host would send them.

use crate::config::Action;
use crate::input::{EditorState, Key, MouseButton, Tool};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read replay script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid replay script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Event {index}: unknown key '{name}'")]
    UnknownKey { index: usize, name: String },

    #[error("Event {index}: no layer {layer}")]
    UnknownLayer { index: usize, layer: usize },
}

fn default_clicks() -> u32 {
    1
}

/// One host event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReplayEvent {
    /// Select a tool directly
    Tool { tool: Tool },
    Press {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
        #[serde(default = "default_clicks")]
        clicks: u32,
    },
    Move { x: f64, y: f64 },
    Release {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Press and release at the same spot
    Click {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Second click of a double-click; the first is a plain `click`
    DoubleClick { x: f64, y: f64 },
    /// Press at `from`, move to `to`, release
    Drag { from: [f64; 2], to: [f64; 2] },
    /// Press and release a key
    Key { key: String },
    KeyDown { key: String },
    KeyUp { key: String },
    /// Run a bound action without going through the key map
    Action { action: Action },
    AddLayer { name: String },
    SwitchLayer { layer: usize },
}

/// Parsed replay script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayScript {
    #[serde(default, rename = "event")]
    pub events: Vec<ReplayEvent>,
}

/// Counters collected while replaying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub events: usize,
    pub selection_changes: usize,
}

fn resolve_key(index: usize, name: &str) -> Result<Key, ReplayError> {
    Key::from_name(name).ok_or_else(|| ReplayError::UnknownKey {
        index,
        name: name.to_string(),
    })
}

impl ReplayScript {
    pub fn parse(source: &str) -> Result<Self, ReplayError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let source = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::parse(&source)?;
        log::info!("Loaded {} replay events from {}", script.events.len(), path.display());
        Ok(script)
    }

    /// Feeds every event to `state`, stopping at the first invalid one.
    pub fn run(&self, state: &mut EditorState) -> Result<ReplaySummary, ReplayError> {
        let mut summary = ReplaySummary::default();
        for (index, event) in self.events.iter().enumerate() {
            log::debug!("Replaying event {index}: {event:?}");
            apply_event(state, index, event)?;
            summary.events += 1;
            if state.take_selection_change().is_some() {
                summary.selection_changes += 1;
            }
        }
        Ok(summary)
    }
}

fn apply_event(state: &mut EditorState, index: usize, event: &ReplayEvent) -> Result<(), ReplayError> {
    match event {
        ReplayEvent::Tool { tool } => state.set_tool(*tool),
        ReplayEvent::Press {
            x,
            y,
            button,
            clicks,
        } => state.on_mouse_press(*button, *x, *y, *clicks),
        ReplayEvent::Move { x, y } => state.on_mouse_motion(*x, *y),
        ReplayEvent::Release { x, y, button } => state.on_mouse_release(*button, *x, *y),
        ReplayEvent::Click { x, y, button } => {
            state.on_mouse_press(*button, *x, *y, 1);
            state.on_mouse_release(*button, *x, *y);
        }
        ReplayEvent::DoubleClick { x, y } => {
            state.on_mouse_press(MouseButton::Left, *x, *y, 2);
            state.on_mouse_release(MouseButton::Left, *x, *y);
        }
        ReplayEvent::Drag { from, to } => {
            state.on_mouse_press(MouseButton::Left, from[0], from[1], 1);
            state.on_mouse_motion(to[0], to[1]);
            state.on_mouse_release(MouseButton::Left, to[0], to[1]);
        }
        ReplayEvent::Key { key } => {
            let key = resolve_key(index, key)?;
            state.on_key_press(key);
            state.on_key_release(key);
        }
        ReplayEvent::KeyDown { key } => state.on_key_press(resolve_key(index, key)?),
        ReplayEvent::KeyUp { key } => state.on_key_release(resolve_key(index, key)?),
        ReplayEvent::Action { action } => state.handle_action(*action),
        ReplayEvent::AddLayer { name } => {
            state.add_layer(name.as_str());
        }
        ReplayEvent::SwitchLayer { layer } => {
            if *layer >= state.scene.layer_count() {
                return Err(ReplayError::UnknownLayer { index, layer: *layer });
            }
            state.switch_layer(*layer);
        }
    }
    Ok(())
}
