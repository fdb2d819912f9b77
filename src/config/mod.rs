// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[gallery]` - Media directory and catalog entries
//! - `[viewer]` - Settle delay and mute behavior
//! - `[embed]` - Buy-button script, widget identifiers, load budget
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `SHOWREEL_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use showreel::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings.toml ignored ({key})");
//! }
//! println!("settle delay: {:?}", config.settle_delay());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::embed::EmbedWidget;
use crate::domain::gallery::Catalog;
use crate::domain::viewer::MutePolicy;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Buy-button identifier of the storefront's test account.
const DEFAULT_BUY_BUTTON_ID: &str = "buy_btn_1RqNNQLaDNozqJeSk8ZpYjnQ";

/// Publishable key of the storefront's test account.
const DEFAULT_PUBLISHABLE_KEY: &str = "pk_test_51RRNGqLaDNozqJeS4pqNrfv4leVcW7lb7vgnmwGNDnZ4qyGQX7Ljx04zrUZHU9W7qfGCAWgnuuSqgsHtxZb4G43c00lPYHXmL1";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryEntry {
    /// Local path (relative to `media_dir`) or `http(s)` URL.
    pub source: String,
    /// Optional poster frame shown on the tile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Directory local sources are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_dir: Option<PathBuf>,

    /// Catalog entries, in display order.
    #[serde(default = "default_gallery_items")]
    pub items: Vec<GalleryEntry>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            media_dir: None,
            items: default_gallery_items(),
        }
    }
}

/// Modal player settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Delay between navigation and loading the new item (milliseconds).
    #[serde(
        default = "default_settle_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub settle_delay_ms: Option<u64>,

    /// Whether a fresh session starts muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_muted: Option<bool>,

    /// Whether the last mute choice carries into the next session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember_mute: Option<bool>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            start_muted: Some(DEFAULT_START_MUTED),
            remember_mute: Some(DEFAULT_REMEMBER_MUTE),
        }
    }
}

/// Buy-button embed settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedConfig {
    /// Script location.
    #[serde(default = "default_script_url")]
    pub script_url: String,

    /// Opaque buy-button identifier passed to the widget.
    #[serde(default = "default_buy_button_id")]
    pub buy_button_id: String,

    /// Opaque publishable key passed to the widget.
    #[serde(default = "default_publishable_key")]
    pub publishable_key: String,

    /// Load budget per attempt (seconds, clamped to 1-120).
    #[serde(
        default = "default_embed_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,

    /// Contact shown when the widget cannot load.
    #[serde(default = "default_fallback_contact")]
    pub fallback_contact: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            script_url: default_script_url(),
            buy_button_id: default_buy_button_id(),
            publishable_key: default_publishable_key(),
            timeout_secs: default_embed_timeout_secs(),
            fallback_contact: default_fallback_contact(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Modal player settings.
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// Buy-button embed settings.
    #[serde(default)]
    pub embed: EmbedConfig,
}

impl Config {
    /// Builds the gallery catalog from the configured entries.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog::from_entries(
            self.gallery
                .items
                .iter()
                .map(|entry| (entry.source.clone(), entry.poster.clone())),
        )
    }

    /// Directory local media sources are resolved against.
    #[must_use]
    pub fn media_dir(&self) -> PathBuf {
        self.gallery
            .media_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_DIR))
    }

    /// Settle delay after navigation, capped to [`MAX_SETTLE_DELAY_MS`].
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        clamp_settle_delay(
            self.viewer
                .settle_delay_ms
                .unwrap_or(DEFAULT_SETTLE_DELAY_MS),
        )
    }

    #[must_use]
    pub fn mute_policy(&self) -> MutePolicy {
        MutePolicy {
            start_muted: self.viewer.start_muted.unwrap_or(DEFAULT_START_MUTED),
            remember_choice: self.viewer.remember_mute.unwrap_or(DEFAULT_REMEMBER_MUTE),
        }
    }

    /// Embed load budget, clamped to the accepted range.
    #[must_use]
    pub fn embed_timeout(&self) -> Duration {
        Duration::from_secs(clamp_embed_timeout_secs(
            self.embed
                .timeout_secs
                .unwrap_or(DEFAULT_EMBED_TIMEOUT_SECS),
        ))
    }

    #[must_use]
    pub fn embed_widget(&self) -> EmbedWidget {
        EmbedWidget::new(
            self.embed.buy_button_id.clone(),
            self.embed.publishable_key.clone(),
        )
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_gallery_items() -> Vec<GalleryEntry> {
    DEFAULT_GALLERY_SOURCES
        .iter()
        .map(|source| GalleryEntry {
            source: (*source).to_string(),
            poster: None,
        })
        .collect()
}

fn default_settle_delay_ms() -> Option<u64> {
    Some(DEFAULT_SETTLE_DELAY_MS)
}

fn default_script_url() -> String {
    DEFAULT_EMBED_SCRIPT_URL.to_string()
}

fn default_buy_button_id() -> String {
    DEFAULT_BUY_BUTTON_ID.to_string()
}

fn default_publishable_key() -> String {
    DEFAULT_PUBLISHABLE_KEY.to_string()
}

fn default_embed_timeout_secs() -> Option<u64> {
    Some(DEFAULT_EMBED_TIMEOUT_SECS)
}

fn default_fallback_contact() -> String {
    DEFAULT_FALLBACK_CONTACT.to_string()
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
                    log::warn!("Ignoring {}: {}", path.display(), err);
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
