//! Configuration file support for vectorscribe.
//!
//! Settings are read from `~/.config/vectorscribe/config.toml`. They cover the
//! canvas, the snap grid, hit-testing tolerances, the template style for new
//! objects and the key bindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, EditingConfig, GridConfig, StyleConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1024
/// height = 768
/// background = "white"
///
/// [grid]
/// size = 10
/// snap = true
///
/// [editing]
/// hit_radius = 6.0
/// rectangle_primitive = false
///
/// [style]
/// line_width = 2.0
/// line_color = "black"
/// fill_color = "none"
/// dash = "solid"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Snap grid
    #[serde(default)]
    pub grid: GridConfig,

    /// Hit-testing tolerances and gesture behavior
    #[serde(default)]
    pub editing: EditingConfig,

    /// Template style for new objects
    #[serde(default)]
    pub style: StyleConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

fn clamp_f64(value: &mut f64, min: f64, max: f64, name: &str) {
    if !(min..=max).contains(value) {
        warn!("Invalid {name} {value:.2}, clamping to {min}-{max} range");
        *value = if value.is_nan() { min } else { value.clamp(min, max) };
    }
}

fn clamp_i32(value: &mut i32, min: i32, max: i32, name: &str) {
    if !(min..=max).contains(value) {
        warn!("Invalid {name} {value}, clamping to {min}-{max} range");
        *value = (*value).clamp(min, max);
    }
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are replaced with the nearest valid value and a warning
    /// is logged. Unknown color names and broken key bindings fall back to
    /// their defaults.
    pub fn validate_and_clamp(&mut self) {
        clamp_i32(&mut self.canvas.width, 1, 20_000, "canvas width");
        clamp_i32(&mut self.canvas.height, 1, 20_000, "canvas height");
        clamp_i32(&mut self.grid.size, 1, 500, "grid size");

        clamp_f64(&mut self.editing.hit_radius, 1.0, 50.0, "hit_radius");
        clamp_f64(&mut self.editing.outline_tolerance, 0.0, 20.0, "outline_tolerance");
        clamp_f64(
            &mut self.editing.coincidence_threshold,
            1.0,
            50.0,
            "coincidence_threshold",
        );
        clamp_f64(&mut self.editing.angle_step_degrees, 1.0, 90.0, "angle_step_degrees");
        clamp_f64(
            &mut self.editing.min_rotation_degrees,
            0.0,
            10.0,
            "min_rotation_degrees",
        );
        clamp_i32(&mut self.editing.duplicate_offset, 0, 500, "duplicate_offset");
        clamp_f64(&mut self.style.line_width, 0.5, 50.0, "line_width");

        let defaults = StyleConfig::default();
        if !self.style.line_color.is_known() {
            warn!("Unknown line_color {:?}, falling back to black", self.style.line_color);
            self.style.line_color = defaults.line_color;
        }
        if !self.style.fill_color.is_known() {
            warn!("Unknown fill_color {:?}, falling back to none", self.style.fill_color);
            self.style.fill_color = defaults.fill_color;
        }
        if !self.canvas.background.is_known() {
            warn!(
                "Unknown canvas background {:?}, falling back to white",
                self.canvas.background
            );
            self.canvas.background = CanvasConfig::default().background;
        }

        if let Err(err) = self.keybindings.build_action_map() {
            warn!("Invalid keybindings ({err}), using defaults");
            self.keybindings = KeybindingsConfig::default();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("vectorscribe");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// no file exists there.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads, validates and clamps the configuration at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Serializes the configuration to TOML at `path`, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DashStyle, TRANSPARENT, WHITE};
    use crate::input::Tool;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.grid.size, 10);
        assert!(config.grid.snap);
        assert_eq!(config.editing.hit_radius, 6.0);
        assert_eq!(config.editing.default_tool, Tool::Select);
        assert_eq!(config.style.to_style().fill_color, TRANSPARENT);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [grid]
            size = 0

            [editing]
            hit_radius = 500.0
            min_rotation_degrees = -1.0

            [style]
            line_width = 0.0
            line_color = "mauve"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.grid.size, 1);
        assert_eq!(config.editing.hit_radius, 50.0);
        assert_eq!(config.editing.min_rotation_degrees, 0.0);
        assert_eq!(config.style.line_width, 0.5);
        assert_eq!(config.style.line_color, ColorSpec::named("black"));
    }

    #[test]
    fn broken_keybindings_fall_back_to_defaults() {
        let mut config = Config::default();
        config.keybindings.cancel = vec!["Ctrl+A".to_string()];
        config.validate_and_clamp();
        assert_eq!(config.keybindings.cancel, vec!["Escape".to_string()]);
    }

    #[test]
    fn load_from_parses_sections() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [canvas]
            width = 640
            height = 480
            background = [255, 255, 255]

            [editing]
            rectangle_primitive = true
            default_tool = "bezier"

            [style]
            dash = "dash-dot"

            [keybindings]
            line_tool = ["Ctrl+L"]
            "#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.canvas.background.to_color(), WHITE);
        assert!(config.editing.rectangle_primitive);
        assert_eq!(config.editing.default_tool, Tool::Bezier);
        assert_eq!(config.style.dash, DashStyle::DashDot);
        assert_eq!(config.keybindings.line_tool, vec!["Ctrl+L".to_string()]);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[grid\nsize = ").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn save_to_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.grid.size = 25;
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.grid.size, 25);
    }

    #[test]
    fn example_config_parses() {
        let config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        assert!(config.keybindings.build_action_map().is_ok());
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["canvas", "grid", "editing", "style", "keybindings"] {
            assert!(schema.contains(section), "missing {section}");
        }
    }
}
