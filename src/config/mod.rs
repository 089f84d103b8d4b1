// SPDX-License-Identifier: MPL-2.0
//! User settings read from `settings.toml` at startup.
//!
//! The file is hand-edited; the application never writes it. Every key is
//! optional and out-of-range values are clamped by the domain newtypes.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[swipe]` - Swipe card timing and motion
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set the `SWIPE_CARD_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use swipe_card::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let timing = config.swipe.timing();
//! println!("notify after {:?}", timing.notify.as_duration());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::swipe::{SwipeDelay, SwipeTiming};
use crate::domain::ui::{SlideDistance, SwipeThreshold};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Swipe card settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SwipeConfig {
    /// Delay from gesture completion to the parent notification (ms).
    #[serde(default = "default_notify_delay_ms")]
    pub notify_delay_ms: Option<u64>,

    /// Delay from the parent notification to the visual reset (ms).
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: Option<u64>,

    /// Horizontal slide-out distance (px).
    #[serde(default = "default_slide_distance")]
    pub slide_distance: Option<f32>,

    /// Minimum drag distance recognised as a swipe (px).
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: Option<f32>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            notify_delay_ms: default_notify_delay_ms(),
            reset_delay_ms: default_reset_delay_ms(),
            slide_distance: default_slide_distance(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl SwipeConfig {
    /// Resolved cycle timing, clamped to valid delays.
    #[must_use]
    pub fn timing(&self) -> SwipeTiming {
        SwipeTiming::new(
            SwipeDelay::from_millis(self.notify_delay_ms.unwrap_or(DEFAULT_NOTIFY_DELAY_MS)),
            SwipeDelay::from_millis(self.reset_delay_ms.unwrap_or(DEFAULT_RESET_DELAY_MS)),
        )
    }

    #[must_use]
    pub fn slide_distance(&self) -> SlideDistance {
        SlideDistance::new(self.slide_distance.unwrap_or(DEFAULT_SLIDE_DISTANCE))
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        SwipeThreshold::new(self.swipe_threshold.unwrap_or(DEFAULT_SWIPE_THRESHOLD))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub swipe: SwipeConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_notify_delay_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFY_DELAY_MS)
}

fn default_reset_delay_ms() -> Option<u64> {
    Some(DEFAULT_RESET_DELAY_MS)
}

fn default_slide_distance() -> Option<f32> {
    Some(DEFAULT_SLIDE_DISTANCE)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|mut path| {
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
/// default config with the i18n key of a warning explaining what went wrong.
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
                        error = %err,
                        "falling back to default config"
                    );
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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
// Tests
// =============================================================================
