// SPDX-License-Identifier: MPL-2.0
//! Decoding dropped or picked files into catalog-ready media.
//!
//! Import runs off the UI thread, one task per file, so a slow or corrupt
//! file never stalls the rest of its batch.

use super::accept;
use super::MediaRecord;
use crate::error::MediaError;
use iced::widget::image::Handle;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

/// A successfully decoded import, ready to enter the catalog.
#[derive(Debug, Clone)]
pub struct ImportedMedia {
    source: PathBuf,
    handle: Handle,
}

impl ImportedMedia {
    /// Path the media was imported from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// File name component of the source path.
    pub fn file_name(&self) -> &str {
        self.source
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
    }

    /// Converts the import into a catalog record.
    #[must_use]
    pub fn into_record(self) -> MediaRecord {
        MediaRecord::new(self.source, self.handle)
    }

    /// Builds an import from parts, bypassing the decode pipeline.
    #[cfg(test)]
    pub fn for_tests(source: PathBuf, handle: Handle) -> Self {
        Self { source, handle }
    }
}

/// Reads and decodes a single file.
///
/// The accept filter runs first so unsupported types fail without touching
/// the disk. Errors carry the offending path for rejection feedback.
///
/// # Errors
///
/// Returns [`MediaError::UnsupportedType`] for extensions outside the accept
/// list, [`MediaError::Unreadable`] when the file cannot be read, and
/// [`MediaError::DecodeFailed`] when the bytes are not a valid image.
pub fn import_file<P: AsRef<Path>>(path: P) -> Result<ImportedMedia, (PathBuf, MediaError)> {
    let path = path.as_ref();

    if !accept::is_accepted_upload(path) {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        return Err((path.to_path_buf(), MediaError::UnsupportedType(extension)));
    }

    let bytes = fs::read(path)
        .map_err(|err| (path.to_path_buf(), MediaError::Unreadable(err.to_string())))?;

    let img = image_rs::load_from_memory(&bytes)
        .map_err(|err| (path.to_path_buf(), MediaError::DecodeFailed(err.to_string())))?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImportedMedia {
        source: path.to_path_buf(),
        handle: Handle::from_rgba(width, height, pixels),
    })
}
