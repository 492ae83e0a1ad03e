// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the toolbar, the gallery surface, and the toast overlay. All
//! state arrives borrowed through `ViewContext` so rendering stays a pure
//! function of application state.

use super::Message;
use crate::catalog::MediaRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery::{self, Collaborators, DropTarget, Props, ViewEnv};
use crate::ui::icons;
use crate::ui::notifications::{self, toast};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub editable: bool,
    pub media: &'a [MediaRecord],
    pub featured_media: Option<&'a MediaRecord>,
    pub gallery: &'a gallery::State,
    pub drop_target: &'a DropTarget,
    pub admin_access: bool,
    pub allow_featured_media_hover: bool,
    pub thumbnail_size: u16,
    pub notifications: &'a notifications::Manager,
}

fn grant_admin() -> bool {
    true
}

fn deny_admin() -> bool {
    false
}

/// Renders the application: toolbar above the gallery, toasts on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toolbar = build_toolbar(&ctx);
    let gallery = build_gallery(&ctx);

    let content = Column::new()
        .push(toolbar)
        .push(
            Container::new(gallery)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .padding(spacing::MD),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = toast::overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(content).push(toasts).into()
}

/// Builds the top bar: title, media count, mode toggle, and import button.
fn build_toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let count = ctx.media.len().to_string();
    let media_count = Text::new(
        ctx.i18n
            .tr_with_args("toolbar-media-count", &[("count", &count)]),
    )
    .size(typography::BODY_SM);

    let display_label = Text::new(ctx.i18n.tr("toolbar-mode-display")).size(typography::BODY);
    let display_button = if ctx.editable {
        button(display_label)
            .on_press(Message::SetEditable(false))
            .style(styles::button::toggle(false))
    } else {
        button(display_label).style(styles::button::toggle(true))
    };

    let editable_label = Text::new(ctx.i18n.tr("toolbar-mode-editable")).size(typography::BODY);
    let editable_button = if ctx.editable {
        button(editable_label).style(styles::button::toggle(true))
    } else {
        button(editable_label)
            .on_press(Message::SetEditable(true))
            .style(styles::button::toggle(false))
    };

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(media_count)
        .push(iced::widget::space().width(Length::Fill))
        .push(display_button)
        .push(editable_button);

    // Curation tools only exist on the editable surface.
    if ctx.editable {
        let import_button = button(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(alignment::Vertical::Center)
                .push(icons::sized(icons::upload(), sizing::ICON_SM))
                .push(Text::new(ctx.i18n.tr("toolbar-import-button")).size(typography::BODY)),
        )
        .on_press(Message::OpenImportDialog)
        .style(styles::button::primary);

        row = row.push(import_button);
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Builds the gallery surface with the standard collaborator set.
fn build_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // Zero-sized fn items promote to 'static, so the admin gate outlives
    // the frame without the app owning a closure.
    let authorize: &'static dyn Fn() -> bool = if ctx.admin_access {
        &grant_admin
    } else {
        &deny_admin
    };

    let props = Props::new(
        ctx.media,
        Collaborators::standard(Some(ctx.drop_target), authorize),
    )
    .editable(ctx.editable)
    .featured(ctx.featured_media)
    .allow_featured_media_hover(ctx.allow_featured_media_hover);

    let env = ViewEnv {
        i18n: ctx.i18n,
        colors: &ctx.theme.colors,
        thumbnail_size: ctx.thumbnail_size,
    };

    ctx.gallery.view(props, env).map(Message::Gallery)
}
