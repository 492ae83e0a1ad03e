// SPDX-License-Identifier: MPL-2.0
//! Centralized path resolution for application directories.
//!
//! Config (user preferences) and data (session state) directories resolve
//! through the same priority chain:
//! 1. **Explicit override** - parameter to the `_with_override()` functions (tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_VITRINE_DATA_DIR`, `ICED_VITRINE_CONFIG_DIR`)
//! 4. **Platform default** - via the `dirs` crate, with [`APP_NAME`] appended
//!
//! CLI overrides are initialized once at startup, before any resolution:
//! ```ignore
//! paths::init_cli_overrides(flags.data_dir, flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedVitrine";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_VITRINE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_VITRINE_CONFIG_DIR";

/// Global CLI override for the data directory (set once at startup).
static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Serializes tests that mutate the override environment variables. The
/// variables are process-wide, so every test module touching them must
/// hold this one lock.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Initializes CLI overrides for the data and config directories.
///
/// Call once at application startup, before any resolution function.
///
/// # Panics
///
/// Panics if called more than once (the overrides are process-wide).
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let already_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        | CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err();
    assert!(!already_set, "CLI path overrides already initialized");
}

/// Walks the priority chain shared by both directories.
fn resolve(
    explicit: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }

    if let Some(Some(dir)) = cli.get() {
        return Some(dir.clone());
    }

    // An empty environment variable counts as unset.
    match std::env::var(env_var) {
        Ok(value) if !value.is_empty() => return Some(value.into()),
        _ => {}
    }

    platform().map(|base| base.join(APP_NAME))
}

/// Returns the application data directory, where session state lives.
///
/// Returns `None` if no platform data directory can be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory with an optional explicit override.
///
/// The override parameter takes priority over CLI, environment, and platform
/// defaults; an empty environment variable falls through to the default.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Returns the application config directory, where `settings.toml` lives.
///
/// Returns `None` if no platform config directory can be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory with an optional explicit override.
///
/// The override parameter takes priority over CLI, environment, and platform
/// defaults; an empty environment variable falls through to the default.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends_with_app_name(path: &std::path::Path) -> bool {
        path.file_name().is_some_and(|name| name == APP_NAME)
    }

    #[test]
    fn platform_data_dir_ends_with_app_name() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        // dirs::data_dir() can legitimately be None on stripped-down systems.
        if let Some(resolved) = get_app_data_dir() {
            assert!(ends_with_app_name(&resolved), "got {resolved:?}");
            assert!(resolved.is_absolute());
        }
    }

    #[test]
    fn platform_config_dir_ends_with_app_name() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(resolved) = get_app_config_dir() {
            assert!(ends_with_app_name(&resolved), "got {resolved:?}");
            assert!(resolved.is_absolute());
        }
    }

    #[test]
    fn explicit_override_wins_for_both_directories() {
        let data = PathBuf::from("/elsewhere/data");
        let config = PathBuf::from("/elsewhere/config");

        assert_eq!(
            get_app_data_dir_with_override(Some(data.clone())),
            Some(data)
        );
        assert_eq!(
            get_app_config_dir_with_override(Some(config.clone())),
            Some(config)
        );
    }

    #[test]
    fn env_var_redirects_data_dir() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/mnt/vitrine-data");

        assert_eq!(get_app_data_dir(), Some("/mnt/vitrine-data".into()));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn env_var_redirects_config_dir() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/mnt/vitrine-config");

        assert_eq!(get_app_config_dir(), Some("/mnt/vitrine-config".into()));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_counts_as_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(resolved) = get_app_data_dir() {
            assert!(ends_with_app_name(&resolved));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn explicit_override_beats_env_var() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/mnt/from-env");

        let explicit = PathBuf::from("/mnt/explicit");
        assert_eq!(
            get_app_data_dir_with_override(Some(explicit.clone())),
            Some(explicit)
        );

        std::env::remove_var(ENV_DATA_DIR);
    }
}
