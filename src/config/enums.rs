//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// text = "black"
///
/// # Hex color, with or without '#'
/// accent = "#ff8000"
///
/// # RGB color (0-255 per component)
/// background = [250, 250, 240]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (black, white, red, green, blue, yellow, orange, gray) or hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the specification to a [`Color`].
    ///
    /// Names are looked up with `util::name_to_color()` first, then parsed as
    /// hex. Anything else falls back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name)
                .or_else(|| Color::from_hex(name.trim()).ok())
                .unwrap_or_else(|| {
                    warn!("Unknown color '{}', using black", name);
                    BLACK
                }),
            ColorSpec::Rgb([r, g, b]) => Color::rgb(*r, *g, *b),
        }
    }

    /// Whether [`ColorSpec::to_color`] resolves without falling back.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => {
                crate::util::name_to_color(name).is_some() || Color::from_hex(name.trim()).is_ok()
            }
            ColorSpec::Rgb(_) => true,
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Name(color.to_string())
    }
}
