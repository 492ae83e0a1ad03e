// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the toolbar and gallery shell.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Drop surface wrapped around the editable gallery.
///
/// A visible brand-colored outline marks the region that accepts dragged
/// image files.
pub fn drop_zone(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            },
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Frame around the featured slot.
///
/// With `admin` set, the frame carries the merchant accent so elevated
/// privileges are visible at a glance.
pub fn featured_frame(theme: &Theme, admin: bool) -> container::Style {
    let palette_ext = theme.extended_palette();

    let (color, width) = if admin {
        (palette::ADMIN_500, border::WIDTH_LG)
    } else {
        (palette_ext.background.strong.color, border::WIDTH_SM)
    };

    container::Style {
        background: Some(Background::Color(palette_ext.background.weak.color)),
        border: Border {
            color,
            width,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Cell around one thumbnail in the strip; the effective featured entry
/// gets a brand-colored border.
pub fn thumbnail_cell(theme: &Theme, is_featured: bool) -> container::Style {
    let palette_ext = theme.extended_palette();

    let (color, width) = if is_featured {
        (palette::PRIMARY_500, border::WIDTH_MD)
    } else {
        (palette_ext.background.strong.color, border::WIDTH_SM)
    };

    container::Style {
        background: Some(Background::Color(palette_ext.background.weak.color)),
        border: Border {
            color,
            width,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
