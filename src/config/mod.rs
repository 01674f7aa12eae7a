// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo's configuration, loading and saving user
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[slider]` - Range, initial value and label precision
//! - `[popup]` - Value bubble metrics and fade-in timing
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `VALUE_TRACKING_SLIDER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use value_tracking_slider::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let range = config.slider.range();
//! let metrics = config.popup.metrics();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::value_tracking_slider::{DefaultFormat, PopupMetrics};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Slider range and label settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderConfig {
    #[serde(default = "default_min")]
    pub min: f32,

    #[serde(default = "default_max")]
    pub max: f32,

    /// Initial value, clamped into `[min, max]`.
    #[serde(default = "default_value")]
    pub value: f32,

    /// Fraction digits shown by the default label format.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            value: DEFAULT_VALUE,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl SliderConfig {
    /// Returns the configured range, swapping reversed bounds and replacing
    /// non-finite ones with the defaults.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<f32> {
        let min = if self.min.is_finite() { self.min } else { DEFAULT_MIN };
        let max = if self.max.is_finite() { self.max } else { DEFAULT_MAX };
        if min <= max {
            min..=max
        } else {
            max..=min
        }
    }

    /// Returns the initial value clamped into [`Self::range`].
    #[must_use]
    pub fn initial_value(&self) -> f32 {
        let range = self.range();
        if self.value.is_nan() {
            return *range.start();
        }
        self.value.clamp(*range.start(), *range.end())
    }

    /// Returns the label precision, capped at [`MAX_PRECISION`].
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision.min(MAX_PRECISION)
    }

    /// Builds the default label format using the given decimal separator.
    #[must_use]
    pub fn format(&self, decimal_separator: char) -> DefaultFormat {
        DefaultFormat::default()
            .with_precision(self.precision())
            .with_decimal_separator(decimal_separator)
    }
}

/// Value popup appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopupConfig {
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    #[serde(default = "default_padding_x")]
    pub padding_x: f32,

    #[serde(default = "default_padding_y")]
    pub padding_y: f32,

    #[serde(default = "default_corner_radius")]
    pub corner_radius: f32,

    #[serde(default = "default_tail_width")]
    pub tail_width: f32,

    #[serde(default = "default_tail_height")]
    pub tail_height: f32,

    /// Space between the tail tip and the thumb.
    #[serde(default = "default_gap")]
    pub gap: f32,

    /// Fade-in duration in milliseconds; 0 shows the popup at full opacity.
    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: u64,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            padding_x: DEFAULT_PADDING_X,
            padding_y: DEFAULT_PADDING_Y,
            corner_radius: DEFAULT_CORNER_RADIUS,
            tail_width: DEFAULT_TAIL_WIDTH,
            tail_height: DEFAULT_TAIL_HEIGHT,
            gap: DEFAULT_GAP,
            fade_in_ms: DEFAULT_FADE_IN_MS,
        }
    }
}

impl PopupConfig {
    /// Converts the section into widget metrics, clamping every length to a
    /// usable value.
    #[must_use]
    pub fn metrics(&self) -> PopupMetrics {
        PopupMetrics {
            font_size: sanitize(self.font_size, DEFAULT_FONT_SIZE)
                .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            padding_x: sanitize(self.padding_x, DEFAULT_PADDING_X),
            padding_y: sanitize(self.padding_y, DEFAULT_PADDING_Y),
            corner_radius: sanitize(self.corner_radius, DEFAULT_CORNER_RADIUS),
            tail_width: sanitize(self.tail_width, DEFAULT_TAIL_WIDTH),
            tail_height: sanitize(self.tail_height, DEFAULT_TAIL_HEIGHT),
            gap: sanitize(self.gap, DEFAULT_GAP),
            fade_in: Duration::from_millis(self.fade_in_ms.min(MAX_FADE_IN_MS)),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Demo configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Slider range and label settings.
    #[serde(default)]
    pub slider: SliderConfig,

    /// Value popup appearance.
    #[serde(default)]
    pub popup: PopupConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_min() -> f32 {
    DEFAULT_MIN
}

fn default_max() -> f32 {
    DEFAULT_MAX
}

fn default_value() -> f32 {
    DEFAULT_VALUE
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

fn default_padding_x() -> f32 {
    DEFAULT_PADDING_X
}

fn default_padding_y() -> f32 {
    DEFAULT_PADDING_Y
}

fn default_corner_radius() -> f32 {
    DEFAULT_CORNER_RADIUS
}

fn default_tail_width() -> f32 {
    DEFAULT_TAIL_WIDTH
}

fn default_tail_height() -> f32 {
    DEFAULT_TAIL_HEIGHT
}

fn default_gap() -> f32 {
    DEFAULT_GAP
}

fn default_fade_in_ms() -> u64 {
    DEFAULT_FADE_IN_MS
}

/// Negative and non-finite lengths fall back to `fallback`.
fn sanitize(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "falling back to default settings"
                    );
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path, e.g. to seed a `--config-dir`.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            slider: SliderConfig {
                min: -10.0,
                max: 10.0,
                value: 2.5,
                precision: 1,
            },
            popup: PopupConfig {
                fade_in_ms: 0,
                ..PopupConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[slider\nmin = ").expect("failed to write file");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"de\"\n").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("de"));
        assert_eq!(config.slider, SliderConfig::default());
        assert_eq!(config.popup, PopupConfig::default());
    }

    #[test]
    fn partial_slider_section_fills_remaining_fields() {
        let config: Config = toml::from_str("[slider]\nmax = 10.0\n").expect("parse");
        assert_eq!(config.slider.min, DEFAULT_MIN);
        assert_eq!(config.slider.max, 10.0);
        assert_eq!(config.slider.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn reversed_range_is_swapped() {
        let slider = SliderConfig {
            min: 10.0,
            max: -10.0,
            ..SliderConfig::default()
        };
        assert_eq!(slider.range(), -10.0..=10.0);
    }

    #[test]
    fn initial_value_is_clamped_into_range() {
        let slider = SliderConfig {
            min: 0.0,
            max: 1.0,
            value: 5.0,
            precision: 2,
        };
        assert_eq!(slider.initial_value(), 1.0);

        let slider = SliderConfig {
            value: f32::NAN,
            ..slider
        };
        assert_eq!(slider.initial_value(), 0.0);
    }

    #[test]
    fn precision_is_capped() {
        let slider = SliderConfig {
            precision: 40,
            ..SliderConfig::default()
        };
        assert_eq!(slider.precision(), MAX_PRECISION);
    }

    #[test]
    fn popup_metrics_replace_invalid_lengths() {
        let popup = PopupConfig {
            font_size: 500.0,
            padding_x: -3.0,
            corner_radius: f32::INFINITY,
            fade_in_ms: 60_000,
            ..PopupConfig::default()
        };
        let metrics = popup.metrics();
        assert_eq!(metrics.font_size, MAX_FONT_SIZE);
        assert_eq!(metrics.padding_x, DEFAULT_PADDING_X);
        assert_eq!(metrics.corner_radius, DEFAULT_CORNER_RADIUS);
        assert_eq!(metrics.fade_in, Duration::from_millis(MAX_FADE_IN_MS));
    }

    #[test]
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = [valid").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
