//! Configuration file support for paintbox.
//!
//! Settings live in `~/.config/paintbox/config.toml` and are passed explicitly
//! to the drawing and layout entry points; there is no global configuration
//! state. If no config file exists, defaults are used.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{Palette, PaletteConfig, TextConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Font sizes outside this range are clamped.
const FONT_SIZE_RANGE: (f64, f64) = (6.0, 200.0);
/// Shadow offsets outside this range are clamped.
const SHADOW_SHIFT_RANGE: (f64, f64) = (0.0, 20.0);

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [text]
/// font_family = "Sans"
/// font_size = 18.0
/// shadow_shift = 2.0
///
/// [colors]
/// text = "white"
/// shadow = "#202020"
/// background = [16, 24, 48]
/// accent = "orange"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Font and shadow settings
    #[serde(default)]
    pub text: TextConfig,

    /// Default color palette
    #[serde(default)]
    pub colors: PaletteConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are replaced by the nearest valid value (or a default)
    /// and a warning is logged.
    ///
    /// Validated ranges:
    /// - `text.font_size`: 6.0 - 200.0
    /// - `text.shadow_shift`: 0.0 - 20.0
    fn validate_and_clamp(&mut self) {
        let (min, max) = FONT_SIZE_RANGE;
        if !(min..=max).contains(&self.text.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to {:.1}-{:.1} range",
                self.text.font_size,
                min,
                max
            );
            self.text.font_size = if self.text.font_size.is_nan() {
                TextConfig::default().font_size
            } else {
                self.text.font_size.clamp(min, max)
            };
        }

        let (min, max) = SHADOW_SHIFT_RANGE;
        if !(min..=max).contains(&self.text.shadow_shift) {
            log::warn!(
                "Invalid shadow_shift {:.1}, clamping to {:.1}-{:.1} range",
                self.text.shadow_shift,
                min,
                max
            );
            self.text.shadow_shift = if self.text.shadow_shift.is_nan() {
                TextConfig::default().shadow_shift
            } else {
                self.text.shadow_shift.clamp(min, max)
            };
        }

        let valid_weight = matches!(
            self.text.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .text
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.text.font_weight
            );
            self.text.font_weight = "normal".to_string();
        }

        if !matches!(
            self.text.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.text.font_style
            );
            self.text.font_style = "normal".to_string();
        }

        let defaults = PaletteConfig::default();
        let entries = [
            ("text", &mut self.colors.text, defaults.text),
            ("shadow", &mut self.colors.shadow, defaults.shadow),
            ("background", &mut self.colors.background, defaults.background),
            ("accent", &mut self.colors.accent, defaults.accent),
        ];
        for (name, spec, fallback) in entries {
            if !spec.is_valid() {
                log::warn!(
                    "Invalid colors.{} {:?}, falling back to {:?}",
                    name,
                    spec,
                    fallback
                );
                *spec = fallback;
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/paintbox/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintbox");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if
    /// the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the
    /// file does not exist. Loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Applies command-line overrides and re-validates, so overridden values
    /// obey the same ranges as values read from the file.
    pub fn apply_overrides(&mut self, font_size: Option<f64>, font_family: Option<String>) {
        if let Some(size) = font_size {
            self.text.font_size = size;
        }
        if let Some(family) = font_family {
            self.text.font_family = family;
        }
        self.validate_and_clamp();
    }

    /// Saves the configuration to the default path.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot
    /// be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Serializes the configuration to TOML at `config_path`, creating the
    /// parent directory if needed.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the documented example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if a file already exists there, or if the directory
    /// or file cannot be written.
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON Schema describing the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, GRAY, ORANGE, WHITE};
    use crate::draw::Color;
    use tempfile::TempDir;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.text.font_size, 16.0);
        assert_eq!(config.text.shadow_shift, 2.0);
        let palette = config.colors.resolve();
        assert_eq!(palette.text, BLACK);
        assert_eq!(palette.shadow, GRAY);
        assert_eq!(palette.background, WHITE);
        assert_eq!(palette.accent, ORANGE);
    }

    #[test]
    fn parses_all_color_forms() {
        let config = Config::from_toml(
            r##"
            [colors]
            text = "white"
            shadow = "#202020"
            background = [16, 24, 48]
            "##,
        )
        .unwrap();
        let palette = config.colors.resolve();
        assert_eq!(palette.text, WHITE);
        assert_eq!(palette.shadow, Color::rgb(0x20, 0x20, 0x20));
        assert_eq!(palette.background, Color::rgb(16, 24, 48));
        assert_eq!(palette.accent, ORANGE);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [text]
            font_size = 1000.0
            shadow_shift = -4.0
            font_weight = "extra-chunky"
            font_style = "wavy"

            [colors]
            accent = "not-a-color"
            "#,
        )
        .unwrap();
        assert_eq!(config.text.font_size, 200.0);
        assert_eq!(config.text.shadow_shift, 0.0);
        assert_eq!(config.text.font_weight, "normal");
        assert_eq!(config.text.font_style, "normal");
        assert_eq!(config.colors.accent, PaletteConfig::default().accent);
    }

    #[test]
    fn overrides_are_clamped_like_file_values() {
        let mut config = Config::default();
        config.apply_overrides(Some(0.0), Some("Serif".into()));
        assert_eq!(config.text.font_size, 6.0);
        assert_eq!(config.text.font_family, "Serif");

        config.apply_overrides(Some(f64::NAN), None);
        assert_eq!(config.text.font_size, 16.0);
        assert_eq!(config.text.font_family, "Serif");

        config.apply_overrides(Some(24.0), None);
        assert_eq!(config.text.font_size, 24.0);
    }

    #[test]
    fn numeric_font_weight_is_accepted() {
        let config = Config::from_toml("[text]\nfont_weight = \"700\"\n").unwrap();
        assert_eq!(config.text.font_weight, "700");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_toml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[text\nfont_size = ").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.text.font_size = 22.0;
        config.colors.text = ColorSpec::Rgb([1, 2, 3]);
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn example_file_is_valid_and_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        Config::create_default_file(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.text.font_family, "Sans");
        assert!(Config::create_default_file(&path).is_err());
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("shadow_shift"));
        assert!(schema.contains("colors"));
    }
}
