// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The handlers here fold gallery effects into the catalog, drive the
//! import pipeline, and keep the persisted session state in sync. They
//! operate on an `UpdateContext` of borrowed app fields so the logic
//! stays testable without constructing a full `App`.

use super::{persisted_state, Message};
use crate::catalog::import::{self, ImportedMedia};
use crate::catalog::{accept, Catalog, MediaId};
use crate::config::Config;
use crate::error::MediaError;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, Collaborators, DropTarget, Effect, MoveDirection, Props};
use crate::ui::notifications::{self, Notification};
use iced::{window, Task};
use std::path::{Path, PathBuf};

/// Key prefix shared by every import feedback notification. Starting a new
/// batch dismisses leftovers from the previous one by this prefix.
const IMPORT_NOTIFICATION_PREFIX: &str = "notification-import-";

/// Bookkeeping for an in-flight import batch.
///
/// Decode tasks resolve one by one; the batch counts them down so a single
/// summary notification appears once the whole drop has settled.
#[derive(Debug, Default)]
pub struct ImportBatch {
    /// Files still being decoded.
    remaining: usize,
    /// Files that made it into the catalog.
    succeeded: usize,
    /// Most recently imported file name, used for single-file summaries.
    last_file: Option<String>,
}

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub editable: &'a mut bool,
    pub catalog: &'a mut Catalog,
    pub featured_media: &'a mut Option<MediaId>,
    pub gallery: &'a mut gallery::State,
    pub notifications: &'a mut notifications::Manager,
    pub persisted: &'a mut persisted_state::AppState,
    pub import_batch: &'a mut Option<ImportBatch>,
}

/// Human-readable label for a path in notifications.
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Routes a gallery message through the component and applies the resulting
/// effect to the catalog and surrounding state.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let drop_target = DropTarget::new(
        ctx.i18n.tr("picker-dialog-title"),
        ctx.i18n.tr("picker-filter-images"),
    );
    let admin = ctx.config.admin_access();
    let authorize = move || admin;

    let (effect, task) = {
        let featured = ctx
            .featured_media
            .and_then(|id| ctx.catalog.get(id));
        let props = Props::new(
            ctx.catalog.records(),
            Collaborators::standard(Some(&drop_target), &authorize),
        )
        .editable(*ctx.editable)
        .featured(featured)
        .allow_featured_media_hover(ctx.config.allow_featured_hover());

        ctx.gallery.handle_message(message, &props)
    };

    let follow_up = apply_gallery_effect(ctx, effect);
    Task::batch([task.map(Message::Gallery), follow_up])
}

/// Applies a gallery effect to application state.
pub fn apply_gallery_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Dropped { accepted, rejected } => begin_import(ctx, accepted, rejected),
        // Hover effects exist for embedders that react to them. The
        // standalone app has no such reaction.
        Effect::MediaEntered(_) | Effect::MediaExited(_) => Task::none(),
        Effect::MoveMedia(id, direction) => {
            // Edge positions make the move a silent no-op.
            let _ = match direction {
                MoveDirection::Earlier => ctx.catalog.move_toward_front(id),
                MoveDirection::Later => ctx.catalog.move_toward_back(id),
            };
            Task::none()
        }
        Effect::RemoveMedia(id) => {
            if let Some(record) = ctx.catalog.remove(id) {
                // A removed media cannot stay pinned as featured.
                if *ctx.featured_media == Some(id) {
                    *ctx.featured_media = None;
                }
                ctx.notifications.push(
                    Notification::info("notification-media-removed")
                        .with_arg("file", record.file_name()),
                );
            }
            Task::none()
        }
        Effect::FeatureMedia(choice) => {
            // Stale pins pointing at removed media are dropped.
            *ctx.featured_media = choice.filter(|id| ctx.catalog.get(*id).is_some());
            Task::none()
        }
    }
}

/// Starts decode tasks for an accepted batch and reports rejected files.
///
/// Window drops, picker results, and CLI paths all funnel through here so
/// every entry point produces the same feedback.
pub fn begin_import(
    ctx: &mut UpdateContext<'_>,
    accepted: Vec<PathBuf>,
    rejected: Vec<PathBuf>,
) -> Task<Message> {
    if accepted.is_empty() && rejected.is_empty() {
        return Task::none();
    }

    // Feedback from the previous batch is superseded by this one.
    ctx.notifications.dismiss_by_prefix(IMPORT_NOTIFICATION_PREFIX);

    for path in &rejected {
        ctx.notifications.push(
            Notification::warning("notification-import-rejected")
                .with_arg("file", file_label(path)),
        );
    }

    if accepted.is_empty() {
        return Task::none();
    }

    match ctx.import_batch.as_mut() {
        // A drop while decodes are still in flight merges into the batch.
        Some(batch) => batch.remaining += accepted.len(),
        None => {
            *ctx.import_batch = Some(ImportBatch {
                remaining: accepted.len(),
                ..ImportBatch::default()
            });
        }
    }

    let tasks = accepted.into_iter().map(|path| {
        Task::perform(decode_off_thread(path), Message::ImportFinished)
    });
    Task::batch(tasks)
}

/// Runs one file decode on the blocking pool, keeping the UI thread free.
async fn decode_off_thread(path: PathBuf) -> Result<ImportedMedia, (PathBuf, MediaError)> {
    let source = path.clone();
    match tokio::task::spawn_blocking(move || import::import_file(path)).await {
        Ok(result) => result,
        // The decode task panicked or was cancelled before finishing.
        Err(join_error) => Err((source, MediaError::DecodeFailed(join_error.to_string()))),
    }
}

/// Folds one decode result into the catalog and batch bookkeeping.
pub fn handle_import_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<ImportedMedia, (PathBuf, MediaError)>,
) -> Task<Message> {
    match result {
        Ok(media) => {
            ctx.persisted
                .set_last_import_directory_from_file(media.source());
            let file_name = media.file_name().to_string();
            ctx.catalog.push(media.into_record());
            if let Some(batch) = ctx.import_batch.as_mut() {
                batch.succeeded += 1;
                batch.last_file = Some(file_name);
            }
        }
        Err((path, error)) => {
            ctx.notifications.push(
                Notification::error(error.i18n_key()).with_arg("file", file_label(&path)),
            );
        }
    }

    let batch_done = match ctx.import_batch.as_mut() {
        Some(batch) => {
            batch.remaining = batch.remaining.saturating_sub(1);
            batch.remaining == 0
        }
        None => false,
    };

    if batch_done {
        if let Some(batch) = ctx.import_batch.take() {
            push_batch_summary(ctx, &batch);
        }
    }

    Task::none()
}

/// Pushes the summary notification for a settled batch.
fn push_batch_summary(ctx: &mut UpdateContext<'_>, batch: &ImportBatch) {
    match batch.succeeded {
        // Every file failed; the per-file errors already tell the story.
        0 => {}
        1 => {
            let file = batch.last_file.clone().unwrap_or_default();
            ctx.notifications.push(
                Notification::success("notification-import-success").with_arg("file", file),
            );
        }
        count => {
            ctx.notifications.push(
                Notification::success("notification-import-success-many")
                    .with_arg("count", count.to_string()),
            );
        }
    }
}

/// Switches between the editable and display surfaces.
pub fn handle_set_editable(ctx: &mut UpdateContext<'_>, editable: bool) -> Task<Message> {
    *ctx.editable = editable;
    ctx.persisted.editable_mode = editable;
    Task::none()
}

/// Opens the toolbar import dialog, starting from the last used directory.
pub fn handle_open_import_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let title = ctx.i18n.tr("picker-dialog-title");
    let filter = ctx.i18n.tr("picker-filter-images");
    let start_dir = ctx.persisted.last_import_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter, accept::ACCEPTED_EXTENSIONS);
            if let Some(dir) = start_dir {
                dialog = dialog.set_directory(dir);
            }
            dialog.pick_files().await.map(|files| {
                files
                    .into_iter()
                    .map(|file| file.path().to_path_buf())
                    .collect()
            })
        },
        Message::ImportPicked,
    )
}

/// Folds the toolbar dialog result into the shared import pipeline.
pub fn handle_import_picked(
    ctx: &mut UpdateContext<'_>,
    choice: Option<Vec<PathBuf>>,
) -> Task<Message> {
    let Some(paths) = choice else {
        // Cancelled dialog.
        return Task::none();
    };
    if paths.is_empty() {
        return Task::none();
    }

    let (accepted, rejected) = accept::partition_uploads(paths);
    begin_import(ctx, accepted, rejected)
}

/// Persists session state, then closes the window.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    ctx.persisted.editable_mode = *ctx.editable;
    if let Some(key) = ctx.persisted.save() {
        // The window is about to close, so a toast would never be seen.
        eprintln!("Failed to save application state: {key}");
    }
    window::close(id)
}
