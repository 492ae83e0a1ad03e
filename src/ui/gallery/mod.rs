// SPDX-License-Identifier: MPL-2.0
//! Media gallery component.
//!
//! The gallery renders a featured surface above a reorderable thumbnail
//! strip and comes in two modes: an editable mode for curating the media
//! list (drag-and-drop import, reordering, removal, featuring) and a
//! display mode that presents the same list read-only.
//!
//! Rendering of the actual media is delegated to [`collaborators`]: the
//! component decides *what* appears where, collaborators decide *how* each
//! slot looks. This keeps the layout logic testable without a renderer.

pub mod collaborators;
pub mod component;
pub mod item;
pub mod placeholder;

pub use collaborators::{
    BoundsMeasurer, Collaborators, DropTarget, FeaturedContext, ItemRenderer, PickerHandle,
    PlaceholderRenderer, ProbeMeasurer, ThumbnailContext,
};
pub use component::{
    Dimensions, Effect, FeaturedSlot, Hooks, Message, MoveDirection, Props, RenderPlan, State,
    ViewEnv,
};
pub use item::DefaultItemRenderer;
pub use placeholder::DefaultPlaceholder;
