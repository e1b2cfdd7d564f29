//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color value: either a named color or RGB(A) components.
///
/// # Examples
/// ```toml
/// # Named color
/// line_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// fill_color = [255, 128, 0]
///
/// # With alpha
/// background = [255, 255, 255, 128]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black, none
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
    /// RGBA color as [red, green, blue, alpha]
    Rgba([u8; 4]),
}

impl ColorSpec {
    pub fn named(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }

    /// Converts the color value to a [`Color`].
    ///
    /// Unknown names fall back to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using fallback", name);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::new(
                *r as f64 / 255.0,
                *g as f64 / 255.0,
                *b as f64 / 255.0,
                1.0,
            ),
            ColorSpec::Rgba([r, g, b, a]) => Color::new(
                *r as f64 / 255.0,
                *g as f64 / 255.0,
                *b as f64 / 255.0,
                *a as f64 / 255.0,
            ),
        }
    }

    pub fn to_color(&self) -> Color {
        self.to_color_or(BLACK)
    }

    pub fn is_known(&self) -> bool {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).is_some(),
            ColorSpec::Rgb(_) | ColorSpec::Rgba(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_resolve() {
        assert_eq!(ColorSpec::named("Red").to_color(), RED);
        assert_eq!(ColorSpec::named("none").to_color(), TRANSPARENT);
    }

    #[test]
    fn unknown_name_uses_fallback() {
        let spec = ColorSpec::named("chartreuse");
        assert!(!spec.is_known());
        assert_eq!(spec.to_color_or(WHITE), WHITE);
    }

    #[test]
    fn rgba_scales_components() {
        let color = ColorSpec::Rgba([255, 0, 0, 51]).to_color();
        assert_eq!(color.r, 1.0);
        assert!((color.a - 0.2).abs() < 1e-9);
    }
}
