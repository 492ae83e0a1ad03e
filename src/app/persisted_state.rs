// SPDX-License-Identifier: MPL-2.0
//! Session state persisted between runs, stored as CBOR.
//!
//! Everything in here is application-managed rather than user-edited, which
//! is why it lives in a binary `state.cbor` in the data directory instead of
//! inside `settings.toml`: the file is not meant to be opened in an editor,
//! and CBOR keeps reads and writes cheap.
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from()`/`save_to()` with an explicit path override
//! 2. Pass `--data-dir` on the command line
//! 3. Set the `ICED_VITRINE_DATA_DIR` environment variable
//! 4. Falls back to the platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Session state restored on the next launch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last directory used for importing media.
    /// Used as the initial directory when opening the import file dialog.
    #[serde(default)]
    pub last_import_directory: Option<PathBuf>,

    /// Whether the gallery was left in editable mode.
    /// Restored on the next launch so a merchant resumes where they stopped.
    #[serde(default)]
    pub editable_mode: bool,
}

impl AppState {
    /// Loads the session state from the default location.
    ///
    /// On failure the default state is returned together with a notification
    /// key describing what went wrong.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the session state from a custom directory.
    ///
    /// A missing file is not an error; corruption or unreadable files fall
    /// back to the default state with a warning key.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path(base_dir) else {
            return (Self::default(), None);
        };

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return (Self::default(), None);
            }
            Err(_) => {
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                );
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(_) => (
                Self::default(),
                Some("notification-state-parse-error".to_string()),
            ),
        }
    }

    /// Saves the session state to the default location.
    ///
    /// Creates the parent directory if it does not exist yet. Returns a
    /// warning key when the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the session state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        let parent_ready = path
            .parent()
            .is_none_or(|dir| fs::create_dir_all(dir).is_ok());
        if !parent_ready {
            return Some("notification-state-dir-error".to_string());
        }

        let Ok(file) = fs::File::create(&path) else {
            return Some("notification-state-create-error".to_string());
        };

        ciborium::into_writer(self, BufWriter::new(file))
            .is_err()
            .then(|| "notification-state-write-error".to_string())
    }

    /// Resolves the state file location, honoring an explicit base override.
    fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE))
    }

    /// Remembers the directory a file was imported from.
    ///
    /// Paths without a parent (e.g. a bare root) leave the stored directory
    /// untouched.
    pub fn set_last_import_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_import_directory = Some(parent.to_path_buf());
        }
    }
}
