// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state, update logic and layout.
//!
//! The component is deliberately thin on state: the media list itself lives
//! in the application's catalog and arrives each frame through [`Props`].
//! What the component owns is interaction plumbing (upload routing, picker
//! dispatch, hover tracking) and the measured size of the featured surface.

use super::collaborators::{Collaborators, FeaturedContext, ThumbnailContext};
use crate::catalog::{accept, MediaId, MediaRecord};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::svg::Svg;
use iced::widget::{button, mouse_area, tooltip, Column, Container, Row, Scrollable, Stack, Text};
use iced::{alignment, Color, Element, Length, Size, Task, Theme};
use std::path::PathBuf;

/// Width hint used when the embedder does not provide one.
pub const DEFAULT_GALLERY_WIDTH: f32 = 640.0;

/// Height hint used when the embedder does not provide one.
pub const DEFAULT_GALLERY_HEIGHT: f32 = 480.0;

/// Size most recently granted to the featured surface.
///
/// Starts at the `(-1.0, -1.0)` sentinel so item renderers can distinguish
/// "not measured yet" from a degenerate zero-size layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    /// Sentinel value reported before the first layout pass completes.
    pub const UNMEASURED: Self = Self {
        width: -1.0,
        height: -1.0,
    };

    /// Returns whether a real measurement has been recorded.
    #[must_use]
    pub fn is_measured(self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::UNMEASURED
    }
}

impl From<Size> for Dimensions {
    fn from(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

/// Messages emitted by gallery widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The featured surface was granted a new size by layout.
    FeaturedResized(Size),
    /// Files were dropped onto the gallery window.
    FilesDropped(Vec<PathBuf>),
    /// The native file picker resolved; `None` means it was cancelled.
    PickerResolved(Option<Vec<PathBuf>>),
    /// The add-media placeholder was pressed.
    AddMediaPressed,
    /// The cursor entered the featured surface.
    FeaturedEntered,
    /// The cursor left the featured surface.
    FeaturedExited,
    /// Move a strip item one position toward the front.
    MoveEarlierPressed(MediaId),
    /// Move a strip item one position toward the back.
    MoveLaterPressed(MediaId),
    /// Remove a strip item from the list.
    RemovePressed(MediaId),
    /// Pin a strip item as the explicit featured media.
    FeaturePressed(MediaId),
    /// Clear the explicit featured media pin.
    UnfeaturePressed,
}

/// Direction of a strip reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Toward the front of the list (index decreases).
    Earlier,
    /// Toward the back of the list (index increases).
    Later,
}

/// Side effects the application should perform after handling a gallery message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Files arrived via drop or picker, already filtered by extension.
    /// `rejected` holds the paths that failed the filter so the embedder
    /// can surface feedback.
    Dropped {
        accepted: Vec<PathBuf>,
        rejected: Vec<PathBuf>,
    },
    /// The cursor entered the effective featured media.
    MediaEntered(MediaId),
    /// The cursor left the effective featured media.
    MediaExited(MediaId),
    /// Reorder request for a strip item.
    MoveMedia(MediaId, MoveDirection),
    /// Removal request for a strip item.
    RemoveMedia(MediaId),
    /// Pin request: `Some` pins an explicit featured media, `None` clears
    /// the pin and falls back to the first list element.
    FeatureMedia(Option<MediaId>),
}

/// Embedder callbacks invoked when dispatching an [`Effect`].
///
/// Every callback defaults to a no-op, so embedders only wire up the
/// reactions they care about.
pub struct Hooks<'a> {
    pub on_drop: Box<dyn FnMut(&[PathBuf]) + 'a>,
    pub on_mouse_enter_media: Box<dyn FnMut(MediaId) + 'a>,
    pub on_mouse_leave_media: Box<dyn FnMut(MediaId) + 'a>,
    pub on_move_media: Box<dyn FnMut(MediaId, MoveDirection) + 'a>,
    pub on_remove_media: Box<dyn FnMut(MediaId) + 'a>,
    pub on_feature_media: Box<dyn FnMut(Option<MediaId>) + 'a>,
}

impl Default for Hooks<'_> {
    fn default() -> Self {
        Self {
            on_drop: Box::new(|_| {}),
            on_mouse_enter_media: Box::new(|_| {}),
            on_mouse_leave_media: Box::new(|_| {}),
            on_move_media: Box::new(|_, _| {}),
            on_remove_media: Box::new(|_| {}),
            on_feature_media: Box::new(|_| {}),
        }
    }
}

impl Effect {
    /// Routes this effect into the matching embedder callback.
    pub fn dispatch(self, hooks: &mut Hooks<'_>) {
        match self {
            Effect::None => {}
            Effect::Dropped { accepted, .. } => {
                // A batch the filter rejected wholesale reports through the
                // rejected side only; the drop callback never sees an empty
                // list.
                if !accepted.is_empty() {
                    (hooks.on_drop)(&accepted);
                }
            }
            Effect::MediaEntered(id) => (hooks.on_mouse_enter_media)(id),
            Effect::MediaExited(id) => (hooks.on_mouse_leave_media)(id),
            Effect::MoveMedia(id, direction) => (hooks.on_move_media)(id, direction),
            Effect::RemoveMedia(id) => (hooks.on_remove_media)(id),
            Effect::FeatureMedia(id) => (hooks.on_feature_media)(id),
        }
    }
}

/// Environment information required to render the gallery.
#[derive(Clone, Copy)]
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    /// Edge length of strip thumbnails in logical pixels.
    pub thumbnail_size: u16,
}

/// Per-frame inputs the embedder feeds into the gallery.
pub struct Props<'a> {
    /// Editable (curation) mode when `true`, display mode otherwise.
    pub editable: bool,
    /// The media list, in presentation order.
    pub media: &'a [MediaRecord],
    /// Explicitly pinned featured media, if any.
    pub featured_media: Option<&'a MediaRecord>,
    /// Whether hovering the featured surface should trigger zoom affordances.
    pub allow_featured_media_hover: bool,
    /// Overall width hint for the gallery block.
    pub gallery_width: f32,
    /// Height hint for the featured surface.
    pub gallery_height: f32,
    /// Renderers and platform hooks.
    pub collaborators: Collaborators<'a>,
}

impl<'a> Props<'a> {
    /// Display-mode props with default sizing.
    pub fn new(media: &'a [MediaRecord], collaborators: Collaborators<'a>) -> Self {
        Self {
            editable: false,
            media,
            featured_media: None,
            allow_featured_media_hover: false,
            gallery_width: DEFAULT_GALLERY_WIDTH,
            gallery_height: DEFAULT_GALLERY_HEIGHT,
            collaborators,
        }
    }

    /// Switches between editable and display mode.
    #[must_use]
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Pins an explicit featured media.
    #[must_use]
    pub fn featured(mut self, featured: Option<&'a MediaRecord>) -> Self {
        self.featured_media = featured;
        self
    }

    /// Enables hover zoom affordances on the featured surface.
    #[must_use]
    pub fn allow_featured_media_hover(mut self, allow: bool) -> Self {
        self.allow_featured_media_hover = allow;
        self
    }

    /// Overrides the gallery size hints.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.gallery_width = width;
        self.gallery_height = height;
        self
    }

    /// Returns whether the media list holds at least one record.
    #[must_use]
    pub fn has_media(&self) -> bool {
        !self.media.is_empty()
    }

    /// The media occupying the featured slot: the explicit pin when set,
    /// otherwise the first list element.
    #[must_use]
    pub fn effective_featured(&self) -> Option<&'a MediaRecord> {
        self.featured_media.or_else(|| self.media.first())
    }

    /// Hover zoom requires both the flag and an explicit featured media;
    /// the first-element fallback never zooms.
    #[must_use]
    pub fn hover_zoom_enabled(&self) -> bool {
        self.allow_featured_media_hover && self.featured_media.is_some()
    }
}

/// What occupies the featured slot in a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeaturedSlot {
    /// A media record.
    Media(MediaId),
    /// The editable add-media placeholder.
    AddPlaceholder,
    /// The display-mode empty state.
    EmptyState,
}

/// Pure description of what [`State::view`] will lay out for some props.
///
/// Computing the plan separately keeps the mode rules assertable without
/// instantiating widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Whether the gallery is wrapped in the drop-accepting surface.
    pub drop_surface: bool,
    /// Content of the featured slot.
    pub featured: FeaturedSlot,
    /// Whether the admin frame is drawn around the featured surface.
    pub admin_frame: bool,
    /// Whether hover zoom is wired up this frame.
    pub hover_zoom: bool,
    /// Strip contents, mirroring list order.
    pub strip_items: Vec<MediaId>,
    /// Whether the strip ends with an add-media placeholder.
    pub strip_placeholder: bool,
}

impl RenderPlan {
    /// Computes the plan for the given props.
    #[must_use]
    pub fn of(props: &Props<'_>) -> Self {
        let featured = match props.effective_featured() {
            Some(record) => FeaturedSlot::Media(record.id()),
            None if props.editable => FeaturedSlot::AddPlaceholder,
            None => FeaturedSlot::EmptyState,
        };

        Self {
            drop_surface: props.editable,
            featured,
            admin_frame: props.editable && (props.collaborators.authorize)(),
            hover_zoom: props.hover_zoom_enabled(),
            strip_items: props.media.iter().map(MediaRecord::id).collect(),
            // The strip keeps its own add control in editable mode, even
            // while an empty list puts another one in the featured slot.
            strip_placeholder: props.editable,
        }
    }
}

/// Gallery component state.
#[derive(Debug, Default)]
pub struct State {
    dimensions: Dimensions,
}

impl State {
    /// Creates gallery state with unmeasured dimensions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Size most recently granted to the featured surface.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        props: &Props<'_>,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::FeaturedResized(size) => {
                self.dimensions = Dimensions::from(size);
                (Effect::None, Task::none())
            }
            Message::FilesDropped(paths) => (Self::route_upload(paths), Task::none()),
            Message::PickerResolved(choice) => match choice {
                Some(paths) => (Self::route_upload(paths), Task::none()),
                // Cancelled dialog
                None => (Effect::None, Task::none()),
            },
            Message::AddMediaPressed => match props.collaborators.drop_target {
                Some(target) => (Effect::None, target.picker().open()),
                // Without a mounted drop target there is nowhere to send
                // picked files, so the press falls through silently.
                None => (Effect::None, Task::none()),
            },
            Message::FeaturedEntered => {
                let effect = props
                    .effective_featured()
                    .map(|record| Effect::MediaEntered(record.id()))
                    .unwrap_or(Effect::None);
                (effect, Task::none())
            }
            Message::FeaturedExited => {
                let effect = props
                    .effective_featured()
                    .map(|record| Effect::MediaExited(record.id()))
                    .unwrap_or(Effect::None);
                (effect, Task::none())
            }
            Message::MoveEarlierPressed(id) => {
                (Effect::MoveMedia(id, MoveDirection::Earlier), Task::none())
            }
            Message::MoveLaterPressed(id) => {
                (Effect::MoveMedia(id, MoveDirection::Later), Task::none())
            }
            Message::RemovePressed(id) => (Effect::RemoveMedia(id), Task::none()),
            Message::FeaturePressed(id) => (Effect::FeatureMedia(Some(id)), Task::none()),
            Message::UnfeaturePressed => (Effect::FeatureMedia(None), Task::none()),
        }
    }

    /// Filters an incoming batch of paths into an upload effect.
    fn route_upload(paths: Vec<PathBuf>) -> Effect {
        if paths.is_empty() {
            // Dropping nothing is a no-op, not an empty batch.
            return Effect::None;
        }

        let (accepted, rejected) = accept::partition_uploads(paths);
        Effect::Dropped { accepted, rejected }
    }

    pub fn view<'a>(&'a self, props: Props<'a>, env: ViewEnv<'a>) -> Element<'a, Message> {
        let plan = RenderPlan::of(&props);

        let featured = self.featured_surface(&props, env, &plan);
        let strip = Self::strip(&props, env, &plan);

        let layout = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fixed(props.gallery_width))
            .push(featured)
            .push(strip);

        if plan.drop_surface {
            let hint = Text::new(env.i18n.tr("gallery-drop-hint")).size(typography::BODY_SM);

            let surface = Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(layout)
                .push(hint);

            Container::new(surface)
                .padding(spacing::SM)
                .style(styles::container::drop_zone)
                .into()
        } else {
            layout.into()
        }
    }

    /// Builds the featured slot: media, add placeholder or empty state.
    fn featured_surface<'a>(
        &'a self,
        props: &Props<'a>,
        env: ViewEnv<'a>,
        plan: &RenderPlan,
    ) -> Element<'a, Message> {
        let content: Element<'a, Message> = match props.effective_featured() {
            Some(record) => {
                let media = props.collaborators.items.featured(FeaturedContext {
                    record,
                    media_width: self.dimensions.width,
                    media_height: self.dimensions.height,
                    zoom_on_hover: plan.hover_zoom,
                    env,
                });
                let measured = props
                    .collaborators
                    .measurer
                    .measure(media, Message::FeaturedResized);

                if plan.hover_zoom {
                    mouse_area(measured)
                        .on_enter(Message::FeaturedEntered)
                        .on_exit(Message::FeaturedExited)
                        .into()
                } else {
                    measured
                }
            }
            // The placeholder is a transient control, not media content,
            // so its bounds are not worth measuring.
            None if props.editable => props.collaborators.placeholder.add_media(env),
            None => {
                let empty = props.collaborators.items.empty(env);
                props
                    .collaborators
                    .measurer
                    .measure(empty, Message::FeaturedResized)
            }
        };

        let admin_frame = plan.admin_frame;
        let height = props.gallery_height.max(sizing::FEATURED_MIN_HEIGHT);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |theme: &Theme| styles::container::featured_frame(theme, admin_frame))
            .into()
    }

    /// Builds the thumbnail strip.
    ///
    /// The strip container is part of every render; without media or a
    /// placeholder it simply holds no cells.
    fn strip<'a>(props: &Props<'a>, env: ViewEnv<'a>, plan: &RenderPlan) -> Element<'a, Message> {
        let featured_id = props.effective_featured().map(MediaRecord::id);

        let mut cells = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);

        for record in props.media {
            let is_featured = featured_id == Some(record.id());
            let thumb = props.collaborators.items.thumbnail(ThumbnailContext {
                record,
                is_featured,
                env,
            });

            let cell: Element<'a, Message> = if props.editable {
                Self::editable_cell(record, props, thumb, env)
            } else {
                thumb
            };

            let framed = Container::new(cell)
                .padding(spacing::XXS)
                .style(move |theme: &Theme| styles::container::thumbnail_cell(theme, is_featured));

            cells = cells.push(framed);
        }

        if plan.strip_placeholder {
            cells = cells.push(props.collaborators.placeholder.add_media(env));
        }

        Scrollable::new(cells.padding(spacing::XXS))
            .direction(Direction::Horizontal(Scrollbar::new()))
            .width(Length::Fill)
            .into()
    }

    /// Overlays reorder, feature and remove controls on a thumbnail.
    fn editable_cell<'a>(
        record: &'a MediaRecord,
        props: &Props<'a>,
        thumb: Element<'a, Message>,
        env: ViewEnv<'a>,
    ) -> Element<'a, Message> {
        let id = record.id();
        let explicitly_featured = props.featured_media.map(MediaRecord::id) == Some(id);

        let (star_tip, star_message) = if explicitly_featured {
            ("item-unfeature-tooltip", Message::UnfeaturePressed)
        } else {
            ("item-feature-tooltip", Message::FeaturePressed(id))
        };

        let controls = Row::new()
            .spacing(spacing::XXS)
            .push(strip_control_button(
                icons::arrow_left(),
                env.i18n.tr("item-move-earlier-tooltip"),
                Message::MoveEarlierPressed(id),
            ))
            .push(strip_control_button(
                icons::arrow_right(),
                env.i18n.tr("item-move-later-tooltip"),
                Message::MoveLaterPressed(id),
            ))
            .push(strip_control_button(
                icons::star(),
                env.i18n.tr(star_tip),
                star_message,
            ))
            .push(strip_control_button(
                icons::cross(),
                env.i18n.tr("item-remove-tooltip"),
                Message::RemovePressed(id),
            ));

        Stack::new()
            .push(thumb)
            .push(
                Container::new(controls)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Bottom)
                    .padding(spacing::XXS),
            )
            .into()
    }
}

/// One small overlay control sitting on a thumbnail cell.
fn strip_control_button<'a>(
    icon: Svg<'static>,
    tip: String,
    message: Message,
) -> Element<'a, Message> {
    let control = button(icons::sized(
        icons::tinted(icon, Color::WHITE),
        sizing::ICON_SM,
    ))
    .width(Length::Fixed(sizing::STRIP_CONTROL))
    .height(Length::Fixed(sizing::STRIP_CONTROL))
    .padding(spacing::XXS / 2.0)
    .style(styles::button::strip_control(
        Color::WHITE,
        opacity::OVERLAY_STRONG,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(message);

    styles::tooltip::with_tip(control, tip, tooltip::Position::Bottom).into()
}
