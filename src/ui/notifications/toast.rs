// SPDX-License-Identifier: MPL-2.0
//! Toast cards for queued notifications.
//!
//! Each visible notification renders as an opaque card with a
//! severity-colored accent bar, stacked above the gallery in the
//! bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use iced::widget::svg::Svg;
use iced::widget::{button, container, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Width of the accent bar along the card's left edge.
const ACCENT_BAR_WIDTH: f32 = 4.0;

/// Renders every visible notification, stacked bottom-right.
///
/// With nothing visible this returns a zero-size element, so the overlay
/// never obscures the surface beneath it.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let mut cards = manager.visible().peekable();
    if cards.peek().is_none() {
        return Column::new().into();
    }

    let stacked = cards.fold(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
        |column, notification| column.push(card(notification, i18n)),
    );

    Container::new(stacked)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

/// One notification card: accent bar, severity icon, text, dismiss control.
fn card<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let icon = icons::sized(
        icons::tinted(severity_icon(notification.severity()), accent),
        sizing::ICON_MD,
    );

    let message = Text::new(notification.resolve(i18n)).size(typography::BODY);

    let dismiss = button(icons::sized(
        icons::text_tint(icons::cross()),
        sizing::ICON_SM,
    ))
    .on_press(Message::Dismiss(notification.id()))
    .padding(spacing::XXS)
    .style(dismiss_style);

    let body = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(Container::new(message).width(Length::Fill))
        .push(dismiss);

    let base = Container::new(body)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(card_style);

    // The bar is overlaid rather than laid out inline, so it always spans
    // the card's full height regardless of how the text wraps.
    let bar = Container::new(Space::new())
        .width(Length::Fixed(ACCENT_BAR_WIDTH))
        .height(Length::Fill)
        .style(move |_theme: &Theme| accent_bar_style(accent));

    Stack::new().push(base).push(bar).into()
}

fn severity_icon(severity: Severity) -> Svg<'static> {
    match severity {
        Severity::Success => icons::checkmark(),
        Severity::Info => icons::info(),
        // Warnings and errors share the glyph; the accent tint tells them apart.
        Severity::Warning | Severity::Error => icons::warning(),
    }
}

/// Opaque card surface with a hairline outline; the accent lives in the bar.
fn card_style(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette_ext.background.base.color)),
        border: Border {
            color: palette_ext.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette_ext.background.base.text),
        ..Default::default()
    }
}

fn accent_bar_style(accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(accent)),
        border: Border {
            radius: iced::border::Radius {
                top_left: radius::MD,
                bottom_left: radius::MD,
                top_right: 0.0,
                bottom_right: 0.0,
            },
            ..Border::default()
        },
        ..Default::default()
    }
}

fn dismiss_style(theme: &Theme, status: button::Status) -> button::Style {
    let wash = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: wash.map(|alpha| {
            Background::Color(Color {
                a: alpha,
                ..palette::GRAY_400
            })
        }),
        text_color: theme.extended_palette().background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
