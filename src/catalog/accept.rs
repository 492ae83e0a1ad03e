// SPDX-License-Identifier: MPL-2.0
//! Upload accept filter for gallery media.
//!
//! Single source of truth for which files may enter the catalog. The gallery
//! drop target, the file picker, and the import pipeline all consult this
//! module so every entry point agrees on the accepted set.

use std::path::{Path, PathBuf};

/// File extensions accepted by the gallery drop target and file picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// MIME types advertised to pickers, matching [`ACCEPTED_EXTENSIONS`].
pub const ACCEPTED_MIME_TYPES: &[&str] = &["image/jpg", "image/png", "image/jpeg"];

/// Returns `true` if the path names a file the gallery accepts.
///
/// Matching is case-insensitive on the extension; files without an extension
/// are rejected.
#[must_use]
pub fn is_accepted_upload<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Splits a dropped file list into accepted and rejected paths, preserving
/// the order of the input list within each half.
#[must_use]
pub fn partition_uploads(paths: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<PathBuf>) {
    paths.into_iter().partition(|path| is_accepted_upload(path))
}
