//! Keybinding configuration types and parsing.
//!
//! Every editor action can be bound to one or more key combinations in the
//! `[keybindings]` section of the config file.

use crate::input::Modifiers;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Tool selection
    SelectTool,
    RotateTool,
    LineTool,
    BezierTool,
    RectangleTool,

    // Cancellation
    Cancel,

    // Selection edits
    DeleteSelection,
    SelectAll,
    Duplicate,
    AlignToGrid,
    BringToFront,
    SendToBack,
    ConvertToPath,

    // Nudging by one grid step
    NudgeUp,
    NudgeDown,
    NudgeLeft,
    NudgeRight,

    ToggleSnap,
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+G" or "Escape".
    ///
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into trailing empty parts; the key is '+'
        let key = key_parts.join("+");
        let key = if key.is_empty() { "+".to_string() } else { key };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches a key name under the given modifiers.
    pub fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == modifiers.ctrl()
            && self.shift == modifiers.shift()
            && self.alt == modifiers.alt()
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings:
/// ```toml
/// [keybindings]
/// cancel = ["Escape"]
/// delete_selection = ["Delete", "Backspace"]
/// duplicate = ["Ctrl+D"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_select_tool")]
    pub select_tool: Vec<String>,

    #[serde(default = "default_rotate_tool")]
    pub rotate_tool: Vec<String>,

    #[serde(default = "default_line_tool")]
    pub line_tool: Vec<String>,

    #[serde(default = "default_bezier_tool")]
    pub bezier_tool: Vec<String>,

    #[serde(default = "default_rectangle_tool")]
    pub rectangle_tool: Vec<String>,

    #[serde(default = "default_cancel")]
    pub cancel: Vec<String>,

    #[serde(default = "default_delete_selection")]
    pub delete_selection: Vec<String>,

    #[serde(default = "default_select_all")]
    pub select_all: Vec<String>,

    #[serde(default = "default_duplicate")]
    pub duplicate: Vec<String>,

    #[serde(default = "default_align_to_grid")]
    pub align_to_grid: Vec<String>,

    #[serde(default = "default_bring_to_front")]
    pub bring_to_front: Vec<String>,

    #[serde(default = "default_send_to_back")]
    pub send_to_back: Vec<String>,

    #[serde(default = "default_convert_to_path")]
    pub convert_to_path: Vec<String>,

    #[serde(default = "default_nudge_up")]
    pub nudge_up: Vec<String>,

    #[serde(default = "default_nudge_down")]
    pub nudge_down: Vec<String>,

    #[serde(default = "default_nudge_left")]
    pub nudge_left: Vec<String>,

    #[serde(default = "default_nudge_right")]
    pub nudge_right: Vec<String>,

    #[serde(default = "default_toggle_snap")]
    pub toggle_snap: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            select_tool: default_select_tool(),
            rotate_tool: default_rotate_tool(),
            line_tool: default_line_tool(),
            bezier_tool: default_bezier_tool(),
            rectangle_tool: default_rectangle_tool(),
            cancel: default_cancel(),
            delete_selection: default_delete_selection(),
            select_all: default_select_all(),
            duplicate: default_duplicate(),
            align_to_grid: default_align_to_grid(),
            bring_to_front: default_bring_to_front(),
            send_to_back: default_send_to_back(),
            convert_to_path: default_convert_to_path(),
            nudge_up: default_nudge_up(),
            nudge_down: default_nudge_down(),
            nudge_left: default_nudge_left(),
            nudge_right: default_nudge_right(),
            toggle_snap: default_toggle_snap(),
        }
    }
}

impl KeybindingsConfig {
    fn entries(&self) -> [(&[String], Action); 18] {
        [
            (&self.select_tool[..], Action::SelectTool),
            (&self.rotate_tool[..], Action::RotateTool),
            (&self.line_tool[..], Action::LineTool),
            (&self.bezier_tool[..], Action::BezierTool),
            (&self.rectangle_tool[..], Action::RectangleTool),
            (&self.cancel[..], Action::Cancel),
            (&self.delete_selection[..], Action::DeleteSelection),
            (&self.select_all[..], Action::SelectAll),
            (&self.duplicate[..], Action::Duplicate),
            (&self.align_to_grid[..], Action::AlignToGrid),
            (&self.bring_to_front[..], Action::BringToFront),
            (&self.send_to_back[..], Action::SendToBack),
            (&self.convert_to_path[..], Action::ConvertToPath),
            (&self.nudge_up[..], Action::NudgeUp),
            (&self.nudge_down[..], Action::NudgeDown),
            (&self.nudge_left[..], Action::NudgeLeft),
            (&self.nudge_right[..], Action::NudgeRight),
            (&self.toggle_snap[..], Action::ToggleSnap),
        ]
    }

    /// Build a lookup map from keybindings to actions.
    ///
    /// Returns an error if any keybinding string is invalid or if the same
    /// combination is bound twice.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        for (bindings, action) in self.entries() {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_select_tool() -> Vec<String> {
    vec!["S".to_string()]
}

fn default_rotate_tool() -> Vec<String> {
    vec!["O".to_string()]
}

fn default_line_tool() -> Vec<String> {
    vec!["L".to_string()]
}

fn default_bezier_tool() -> Vec<String> {
    vec!["B".to_string()]
}

fn default_rectangle_tool() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_cancel() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_delete_selection() -> Vec<String> {
    vec!["Delete".to_string(), "Backspace".to_string()]
}

fn default_select_all() -> Vec<String> {
    vec!["Ctrl+A".to_string()]
}

fn default_duplicate() -> Vec<String> {
    vec!["Ctrl+D".to_string()]
}

fn default_align_to_grid() -> Vec<String> {
    vec!["Ctrl+G".to_string()]
}

fn default_bring_to_front() -> Vec<String> {
    vec!["Ctrl+Up".to_string()]
}

fn default_send_to_back() -> Vec<String> {
    vec!["Ctrl+Down".to_string()]
}

fn default_convert_to_path() -> Vec<String> {
    vec!["Ctrl+P".to_string()]
}

fn default_nudge_up() -> Vec<String> {
    vec!["Up".to_string()]
}

fn default_nudge_down() -> Vec<String> {
    vec!["Down".to_string()]
}

fn default_nudge_left() -> Vec<String> {
    vec!["Left".to_string()]
}

fn default_nudge_right() -> Vec<String> {
    vec!["Right".to_string()]
}

fn default_toggle_snap() -> Vec<String> {
    vec!["G".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::modifiers::Modifier;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_modifiers_any_order() {
        let a = KeyBinding::parse("Ctrl+Shift+G").unwrap();
        let b = KeyBinding::parse("Shift + Ctrl + G").unwrap();
        assert_eq!(a, b);
        assert!(a.ctrl && a.shift && !a.alt);
        assert_eq!(a.key, "G");
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
    }

    #[test]
    fn test_parse_rejects_modifier_only() {
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
        assert!(KeyBinding::parse("   ").is_err());
    }

    #[test]
    fn test_matches_requires_exact_modifiers() {
        let binding = KeyBinding::parse("Ctrl+D").unwrap();
        let ctrl = Modifiers::new().with(Modifier::Control);
        assert!(binding.matches("d", ctrl));
        assert!(!binding.matches("d", Modifiers::new()));
        assert!(!binding.matches("d", ctrl.with(Modifier::Shift)));
    }

    #[test]
    fn test_default_map_builds() {
        let map = KeybindingsConfig::default().build_action_map().unwrap();
        let delete = KeyBinding::parse("Delete").unwrap();
        assert_eq!(map.get(&delete), Some(&Action::DeleteSelection));
        assert_eq!(map.len(), 19);
    }

    #[test]
    fn test_duplicate_binding_detected() {
        let config = KeybindingsConfig {
            duplicate: vec!["Ctrl+A".to_string()],
            ..KeybindingsConfig::default()
        };
        let err = config.build_action_map().unwrap_err();
        assert!(err.contains("Duplicate keybinding 'Ctrl+A'"));
    }
}
