// SPDX-License-Identifier: MPL-2.0
//! User preferences, read from and written to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Thumbnail sizing and featured-view hover affordance
//! - `[access]` - Merchant privilege flag feeding the gallery's
//!   authorization predicate
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `ICED_VITRINE_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_vitrine::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

// Re-export all default constants so call sites read `config::DEFAULT_*`
pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Edge length of thumbnail strip entries, in pixels.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<u16>,

    /// Whether hovering the featured view may show a zoom affordance.
    /// Only takes effect when an explicit featured media is set.
    #[serde(
        default = "default_allow_featured_hover",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_featured_hover: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnail_size: default_thumbnail_size(),
            allow_featured_hover: default_allow_featured_hover(),
        }
    }
}

/// Caller privilege settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessConfig {
    /// Whether the current user has elevated merchant privileges.
    #[serde(default = "default_admin", skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            admin: default_admin(),
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

    /// Gallery presentation settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Caller privilege settings.
    #[serde(default)]
    pub access: AccessConfig,
}

impl Config {
    /// Effective thumbnail size, clamped into the allowed range.
    #[must_use]
    pub fn thumbnail_size(&self) -> u16 {
        self.gallery
            .thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    /// Effective featured-hover flag.
    #[must_use]
    pub fn allow_featured_hover(&self) -> bool {
        self.gallery
            .allow_featured_hover
            .unwrap_or(DEFAULT_ALLOW_FEATURED_HOVER)
    }

    /// Effective merchant privilege flag.
    #[must_use]
    pub fn admin_access(&self) -> bool {
        self.access.admin.unwrap_or(DEFAULT_ADMIN_ACCESS)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_thumbnail_size() -> Option<u16> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

fn default_allow_featured_hover() -> Option<bool> {
    Some(DEFAULT_ALLOW_FEATURED_HOVER)
}

fn default_admin() -> Option<bool> {
    Some(DEFAULT_ADMIN_ACCESS)
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
/// the default config with a notification key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
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
            gallery: GalleryConfig {
                thumbnail_size: Some(128),
                allow_featured_hover: Some(true),
            },
            access: AccessConfig { admin: Some(true) },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language, config.general.language);
        assert_eq!(loaded.general.theme_mode, config.general.theme_mode);
        assert_eq!(loaded.gallery.thumbnail_size, config.gallery.thumbnail_size);
        assert_eq!(
            loaded.gallery.allow_featured_hover,
            config.gallery.allow_featured_hover
        );
        assert_eq!(loaded.access.admin, config.access.admin);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery.thumbnail_size, Some(DEFAULT_THUMBNAIL_SIZE));
        assert_eq!(
            config.gallery.allow_featured_hover,
            Some(DEFAULT_ALLOW_FEATURED_HOVER)
        );
        assert_eq!(config.access.admin, Some(DEFAULT_ADMIN_ACCESS));
    }

    #[test]
    fn thumbnail_size_accessor_clamps_out_of_range_values() {
        let config = Config {
            gallery: GalleryConfig {
                thumbnail_size: Some(1000),
                ..GalleryConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.thumbnail_size(), MAX_THUMBNAIL_SIZE);

        let config = Config {
            gallery: GalleryConfig {
                thumbnail_size: Some(1),
                ..GalleryConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.thumbnail_size(), MIN_THUMBNAIL_SIZE);
    }

    #[test]
    fn accessors_fall_back_to_defaults_when_unset() {
        let config = Config {
            gallery: GalleryConfig {
                thumbnail_size: None,
                allow_featured_hover: None,
            },
            access: AccessConfig { admin: None },
            ..Config::default()
        };
        assert_eq!(config.thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);
        assert_eq!(config.allow_featured_hover(), DEFAULT_ALLOW_FEATURED_HOVER);
        assert_eq!(config.admin_access(), DEFAULT_ADMIN_ACCESS);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            gallery: GalleryConfig {
                thumbnail_size: Some(64),
                allow_featured_hover: Some(true),
            },
            access: AccessConfig { admin: Some(true) },
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let expected_path = base_dir.join("settings.toml");
        assert!(expected_path.exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("de".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.gallery.thumbnail_size, Some(64));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config_path = base_dir.join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(
            warning,
            Some("notification-config-load-error".to_string()),
            "should warn about parse error"
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn multiple_isolated_config_tests_dont_interfere() {
        let temp_dir_a = tempdir().expect("create temp dir A");
        let config_a = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        save_with_override(&config_a, Some(temp_dir_a.path().to_path_buf()))
            .expect("save A should succeed");

        let temp_dir_b = tempdir().expect("create temp dir B");
        let config_b = Config {
            general: GeneralConfig {
                language: Some("es".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        save_with_override(&config_b, Some(temp_dir_b.path().to_path_buf()))
            .expect("save B should succeed");

        let (loaded_a, _) = load_with_override(Some(temp_dir_a.path().to_path_buf()));
        let (loaded_b, _) = load_with_override(Some(temp_dir_b.path().to_path_buf()));

        assert_eq!(loaded_a.general.language, Some("fr".to_string()));
        assert_eq!(loaded_b.general.language, Some("es".to_string()));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");

        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(
            content.contains("[general]"),
            "should have [general] section"
        );
        assert!(
            content.contains("[gallery]"),
            "should have [gallery] section"
        );
        assert!(content.contains("[access]"), "should have [access] section");
    }

    #[test]
    fn sectioned_format_loads_correctly() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        let sectioned_content = r#"
[general]
language = "fr"
theme_mode = "light"

[gallery]
thumbnail_size = 128
allow_featured_hover = true

[access]
admin = true
"#;
        fs::write(&config_path, sectioned_content).expect("write sectioned config");

        let loaded = load_from_path(&config_path).expect("should load sectioned config");
        assert_eq!(loaded.general.language, Some("fr".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.gallery.thumbnail_size, Some(128));
        assert_eq!(loaded.gallery.allow_featured_hover, Some(true));
        assert_eq!(loaded.access.admin, Some(true));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("should load partial config");
        assert_eq!(loaded.general.language, Some("fr".to_string()));
        assert_eq!(loaded.gallery, GalleryConfig::default());
        assert_eq!(loaded.access, AccessConfig::default());
    }

    #[test]
    fn theme_mode_parsing_is_case_insensitive() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        fs::write(&config_path, "[general]\ntheme_mode = \"DARK\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("should load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn invalid_theme_mode_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").expect("write config");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("invalid theme_mode")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }
}
