//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{Color, FontDescriptor};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Text rendering settings.
///
/// Font selection plus the pixel offset used for shadowed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Font family name (e.g., "Sans", "Monospace", "DejaVu Serif")
    /// Falls back to Pango's default if the family is not installed
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", or numeric 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Font size in pixels; also the line height (valid range: 6.0 - 200.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Diagonal offset of text shadows in pixels (valid range: 0.0 - 20.0)
    #[serde(default = "default_shadow_shift")]
    pub shadow_shift: f64,
}

impl TextConfig {
    /// Font descriptor built from the family/weight/style fields.
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.font_family.clone(),
            self.font_weight.clone(),
            self.font_style.clone(),
        )
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            font_size: default_font_size(),
            shadow_shift: default_shadow_shift(),
        }
    }
}

/// Named default colors.
///
/// Each entry is either a color name (black, white, red, green, blue, yellow,
/// orange, gray), a hex string like `"#336699"`, or an RGB array like
/// `[51, 102, 153]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    /// Paragraph and label text
    #[serde(default = "default_text_color")]
    pub text: ColorSpec,

    /// Shadow behind justified labels
    #[serde(default = "default_shadow_color")]
    pub shadow: ColorSpec,

    /// Surface clear color
    #[serde(default = "default_background_color")]
    pub background: ColorSpec,

    /// Image frame drawn by `--border`
    #[serde(default = "default_accent_color")]
    pub accent: ColorSpec,
}

impl PaletteConfig {
    /// Resolves every entry to a concrete color.
    pub fn resolve(&self) -> Palette {
        Palette {
            text: self.text.to_color(),
            shadow: self.shadow.to_color(),
            background: self.background.to_color(),
            accent: self.accent.to_color(),
        }
    }
}

/// Palette with every entry resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub shadow: Color,
    pub background: Color,
    pub accent: Color,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            text: default_text_color(),
            shadow: default_shadow_color(),
            background: default_background_color(),
            accent: default_accent_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    16.0
}

fn default_shadow_shift() -> f64 {
    2.0
}

fn default_text_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_shadow_color() -> ColorSpec {
    ColorSpec::Name("gray".to_string())
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_accent_color() -> ColorSpec {
    ColorSpec::Name("orange".to_string())
}
