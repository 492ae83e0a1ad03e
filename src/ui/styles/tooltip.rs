// SPDX-License-Identifier: MPL-2.0
//! Tooltip bubble styling for the strip controls.

use crate::ui::design_tokens::{border, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Style for the tooltip bubble: inverted contrast against the active theme.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    // Light bubble over a dark theme and vice versa, so the tip never
    // blends into the surface it annotates.
    let (bubble, ink) = if theme.extended_palette().is_dark {
        (
            Color::from_rgba(0.94, 0.94, 0.95, 0.98),
            Color::from_rgb(0.12, 0.12, 0.13),
        )
    } else {
        (
            Color::from_rgba(0.14, 0.14, 0.16, 0.98),
            Color::from_rgb(0.94, 0.94, 0.95),
        )
    };

    container::Style {
        background: Some(Background::Color(bubble)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color { a: 0.3, ..ink },
        },
        shadow: shadow::SM,
        text_color: Some(ink),
        ..Default::default()
    }
}

/// Wraps `content` with a styled tooltip.
pub fn with_tip<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let bubble = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, bubble, position).gap(spacing::XS)
}
