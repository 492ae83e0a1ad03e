// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::import::ImportedMedia;
use crate::error::MediaError;
use crate::ui::gallery;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// Switch between the editable admin surface and the display storefront.
    SetEditable(bool),
    /// Trigger the import file dialog from the toolbar.
    OpenImportDialog,
    /// Result from the toolbar import dialog.
    ImportPicked(Option<Vec<PathBuf>>),
    /// Result from decoding a single file of an import batch.
    ImportFinished(Result<ImportedMedia, (PathBuf, MediaError)>),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image paths to import into the catalog on startup.
    pub paths: Vec<PathBuf>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `ICED_VITRINE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_VITRINE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
