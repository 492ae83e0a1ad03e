// SPDX-License-Identifier: MPL-2.0
//! Button styles for the toolbar and gallery surfaces.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (import, confirm).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    if matches!(status, button::Status::Disabled) {
        return disabled(matches!(theme, Theme::Light));
    }

    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        _ => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Toolbar mode toggle (display / editable).
///
/// The active side carries the brand color; the inactive side stays neutral
/// and only picks up a brand-colored outline on hover.
pub fn toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);

        if matches!(status, button::Status::Disabled) {
            return disabled(is_light);
        }

        if active {
            return primary(theme, status);
        }

        let hovered = matches!(status, button::Status::Hovered);
        let background = match (hovered, is_light) {
            (false, true) => palette::GRAY_100,
            (false, false) => palette::GRAY_700,
            (true, true) => palette::GRAY_200,
            (true, false) => palette::GRAY_400,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: if is_light { palette::GRAY_900 } else { WHITE },
            border: Border {
                color: if hovered {
                    palette::PRIMARY_500
                } else {
                    palette::GRAY_400
                },
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: if hovered { shadow::SM } else { shadow::NONE },
            snap: true,
        }
    }
}

fn disabled(is_light: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the "add media" placeholder: an outlined surface that picks up
/// the brand color on hover to invite a click.
pub fn placeholder(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let text_color = if is_light {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_400
            })),
            text_color: palette::PRIMARY_500,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Small icon buttons layered over thumbnail cells (move, feature, remove).
pub fn strip_control(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
