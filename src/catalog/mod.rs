// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types for product media.
//!
//! A [`Catalog`] holds the ordered media records attached to one storefront
//! product. Ordering is significant: the first record is the storefront
//! featured default, and thumbnail strips render records in catalog order.

pub mod accept;
pub mod import;

use chrono::{DateTime, Utc};
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_MEDIA_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identifier for a media record within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(u64);

impl MediaId {
    /// Mints a fresh identifier from a process-wide counter.
    #[must_use]
    pub fn mint() -> Self {
        Self(NEXT_MEDIA_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// One media asset attached to a catalog product.
///
/// Records are passed through the gallery unmodified; the gallery only reads
/// identity and hands the record to the injected item renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRecord {
    id: MediaId,
    source: PathBuf,
    handle: Handle,
    file_name: String,
    imported_at: DateTime<Utc>,
    priority: u32,
}

impl MediaRecord {
    /// Creates a record for a freshly imported file.
    ///
    /// The display name is the file name component of `source`; the priority
    /// is provisional until the record joins a [`Catalog`].
    #[must_use]
    pub fn new(source: PathBuf, handle: Handle) -> Self {
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| source.display().to_string());
        Self {
            id: MediaId::mint(),
            source,
            handle,
            file_name,
            imported_at: Utc::now(),
            priority: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> MediaId {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn imported_at(&self) -> DateTime<Utc> {
        self.imported_at
    }

    /// Position-derived ordering weight, maintained by the owning [`Catalog`].
    #[must_use]
    pub fn priority(&self) -> u32 {
        self.priority
    }
}

/// Ordered collection of media records for a single product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<MediaRecord>,
}

impl Catalog {
    /// Creates a new empty `Catalog`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns the records in catalog order.
    #[must_use]
    pub fn records(&self) -> &[MediaRecord] {
        &self.records
    }

    /// Returns the first record, the storefront featured default.
    #[must_use]
    pub fn first(&self) -> Option<&MediaRecord> {
        self.records.first()
    }

    /// Returns the record with the given id, if present.
    #[must_use]
    pub fn get(&self, id: MediaId) -> Option<&MediaRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Appends a record at the end of the catalog.
    pub fn push(&mut self, record: MediaRecord) {
        self.records.push(record);
        self.reassign_priorities();
    }

    /// Removes the record with the given id.
    ///
    /// Returns the removed record, or `None` if the id is not in the catalog.
    pub fn remove(&mut self, id: MediaId) -> Option<MediaRecord> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);
        self.reassign_priorities();
        Some(removed)
    }

    /// Moves the record one position toward the front of the catalog.
    ///
    /// Returns `false` without changes when the id is absent or already first.
    pub fn move_toward_front(&mut self, id: MediaId) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                self.records.swap(index, index - 1);
                self.reassign_priorities();
                true
            }
            _ => false,
        }
    }

    /// Moves the record one position toward the back of the catalog.
    ///
    /// Returns `false` without changes when the id is absent or already last.
    pub fn move_toward_back(&mut self, id: MediaId) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.records.len() => {
                self.records.swap(index, index + 1);
                self.reassign_priorities();
                true
            }
            _ => false,
        }
    }

    fn position(&self, id: MediaId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    // Priority always mirrors position so persisted ordering survives
    // round trips through stores that sort by priority.
    fn reassign_priorities(&mut self) {
        for (index, record) in self.records.iter_mut().enumerate() {
            record.priority = index as u32;
        }
    }
}
