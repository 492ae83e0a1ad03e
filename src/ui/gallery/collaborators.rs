// SPDX-License-Identifier: MPL-2.0
//! Rendering and platform collaborators for the gallery component.
//!
//! The component owns layout and interaction; everything it cannot decide
//! alone is injected here. Embedders swap in their own renderers to change
//! how media looks without touching gallery logic, and tests substitute
//! recording fakes to observe exactly what the component asked for.

use super::component::{Message, ViewEnv};
use crate::catalog::accept::ACCEPTED_EXTENSIONS;
use crate::catalog::MediaRecord;
use crate::ui::widgets::SizeProbe;
use iced::{Element, Size, Task};

/// Everything the item renderer gets to draw the featured surface.
pub struct FeaturedContext<'a> {
    /// The media record occupying the featured slot.
    pub record: &'a MediaRecord,
    /// Width most recently granted to the featured surface, or `-1.0`
    /// before the first measurement arrives.
    pub media_width: f32,
    /// Height most recently granted to the featured surface, or `-1.0`
    /// before the first measurement arrives.
    pub media_height: f32,
    /// Whether hover zoom is active for this render.
    pub zoom_on_hover: bool,
    /// Shared view environment.
    pub env: ViewEnv<'a>,
}

/// Everything the item renderer gets to draw one strip thumbnail.
pub struct ThumbnailContext<'a> {
    /// The media record this thumbnail represents.
    pub record: &'a MediaRecord,
    /// Whether this record currently occupies the featured slot.
    pub is_featured: bool,
    /// Shared view environment.
    pub env: ViewEnv<'a>,
}

/// Renders media content into the slots the gallery lays out.
pub trait ItemRenderer {
    /// Renders the featured surface for `context.record`.
    fn featured<'a>(&self, context: FeaturedContext<'a>) -> Element<'a, Message>;

    /// Renders a single thumbnail in the strip.
    fn thumbnail<'a>(&self, context: ThumbnailContext<'a>) -> Element<'a, Message>;

    /// Renders the display-mode surface shown when the media list is empty.
    fn empty<'a>(&self, env: ViewEnv<'a>) -> Element<'a, Message>;
}

/// Renders the editable-mode "add media" placeholder.
pub trait PlaceholderRenderer {
    /// Renders the placeholder that opens the file picker when pressed.
    fn add_media<'a>(&self, env: ViewEnv<'a>) -> Element<'a, Message>;
}

/// Wraps an element so its laid-out size is reported back to the component.
pub trait BoundsMeasurer {
    /// Wraps `content`; `on_resize` is published whenever the granted
    /// bounds change.
    fn measure<'a>(
        &self,
        content: Element<'a, Message>,
        on_resize: fn(Size) -> Message,
    ) -> Element<'a, Message>;
}

/// Production measurer backed by the [`SizeProbe`] widget.
pub struct ProbeMeasurer;

impl BoundsMeasurer for ProbeMeasurer {
    fn measure<'a>(
        &self,
        content: Element<'a, Message>,
        on_resize: fn(Size) -> Message,
    ) -> Element<'a, Message> {
        SizeProbe::new(content, on_resize).into()
    }
}

/// File-picker mount point for the editable gallery.
///
/// When absent, the add-media placeholder silently does nothing; there is
/// no dialog to open and nowhere for picked files to land.
#[derive(Debug, Clone)]
pub struct DropTarget {
    dialog_title: String,
    filter_name: String,
}

impl DropTarget {
    /// Creates a drop target with localized picker strings.
    pub fn new(dialog_title: impl Into<String>, filter_name: impl Into<String>) -> Self {
        Self {
            dialog_title: dialog_title.into(),
            filter_name: filter_name.into(),
        }
    }

    /// Returns a one-shot handle for opening the file picker.
    #[must_use]
    pub fn picker(&self) -> PickerHandle {
        PickerHandle {
            dialog_title: self.dialog_title.clone(),
            filter_name: self.filter_name.clone(),
        }
    }
}

/// One-shot handle that opens the native file picker.
#[derive(Debug, Clone)]
pub struct PickerHandle {
    dialog_title: String,
    filter_name: String,
}

impl PickerHandle {
    /// Extensions offered by the picker filter.
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        ACCEPTED_EXTENSIONS
    }

    /// Opens the native picker; resolves with the chosen paths or `None`
    /// when the dialog is cancelled.
    pub fn open(self) -> Task<Message> {
        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .set_title(&self.dialog_title)
                    .add_filter(&self.filter_name, ACCEPTED_EXTENSIONS)
                    .pick_files()
                    .await
                    .map(|files| {
                        files
                            .into_iter()
                            .map(|file| file.path().to_path_buf())
                            .collect()
                    })
            },
            Message::PickerResolved,
        )
    }
}

/// The full set of collaborators the gallery renders through.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    /// Draws featured, thumbnail and empty-state media content.
    pub items: &'a dyn ItemRenderer,
    /// Draws the editable add-media placeholder.
    pub placeholder: &'a dyn PlaceholderRenderer,
    /// Reports the featured surface's granted bounds.
    pub measurer: &'a dyn BoundsMeasurer,
    /// File-picker mount point; `None` disables the picker.
    pub drop_target: Option<&'a DropTarget>,
    /// Grants or denies the admin frame around the featured surface.
    pub authorize: &'a dyn Fn() -> bool,
}

impl<'a> Collaborators<'a> {
    /// Collaborator set using the built-in renderers and measurer.
    pub fn standard(drop_target: Option<&'a DropTarget>, authorize: &'a dyn Fn() -> bool) -> Self {
        Self {
            items: &super::item::DefaultItemRenderer,
            placeholder: &super::placeholder::DefaultPlaceholder,
            measurer: &ProbeMeasurer,
            drop_target,
            authorize,
        }
    }
}
