// SPDX-License-Identifier: MPL-2.0
//! This module handles the provider configuration, including loading and saving
//! it to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[provider]` - Queue capacity and the provider-level defaults that every
//!   enqueued snackbar falls back to
//! - `[diagnostics]` - Diagnostic event buffer sizing
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_SNACK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_snack::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.provider.max_snack = 5;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::snackbar::{AnchorOrigin, AutoHideDuration, IconVariant, TransitionDuration, Variant};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSnack";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SNACK_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Provider-level settings: the weakest-precedence tier of option resolution.
///
/// `None` fields are "not set" and defer to the global defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProviderConfig {
    /// Maximum number of admitted snackbars. `0` means the default.
    pub max_snack: usize,

    /// Compact layout hint for the view.
    pub dense: bool,

    /// Hide the variant glyph in front of the message.
    pub hide_icon_variant: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_origin: Option<AnchorOrigin>,

    /// Either a number of milliseconds or `"never"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_hide_duration: Option<AutoHideDuration>,

    /// Timer duration used after a pause ends (hover leave, window focus).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_hide_duration_ms: Option<u64>,

    /// Suppress enqueues that duplicate a queued or visible snackbar.
    pub prevent_duplicate: bool,

    /// Keep timers running while the window is unfocused.
    pub disable_window_blur_listener: bool,

    /// Enter/exit animation durations for every snackbar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<TransitionDuration>,

    /// Glyphs replacing the built-in variant icons.
    pub icon_variant: IconVariant,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            max_snack: DEFAULT_MAX_SNACK,
            dense: false,
            hide_icon_variant: false,
            variant: None,
            anchor_origin: None,
            auto_hide_duration: None,
            resume_hide_duration_ms: None,
            prevent_duplicate: false,
            disable_window_blur_listener: false,
            transition_duration: None,
            icon_variant: IconVariant::default(),
        }
    }
}

impl ProviderConfig {
    /// Returns the configured resume duration, if any.
    #[must_use]
    pub fn resume_hide_duration(&self) -> Option<Duration> {
        self.resume_hide_duration_ms.map(Duration::from_millis)
    }
}

/// Diagnostic collection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_capacity: Option<usize>,
}

/// Root configuration structure with sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring an explicit override first and the
/// environment variable second.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
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
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {}", path.display(), err)),
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
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
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
