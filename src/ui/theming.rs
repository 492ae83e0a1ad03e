// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme resolution and the color scheme drawn by views.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Colors handed to gallery renderers for marks painted on top of media.
///
/// Widget chrome follows the built-in iced [`Theme`](iced::Theme); this scheme
/// covers only paint that must keep contrast against arbitrary media content,
/// where the theme palette gives no guarantee.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Scrim behind badges and hints drawn over media.
    pub overlay_background: Color,
    /// Text and icon color on top of the scrim.
    pub overlay_text: Color,
}

impl ColorScheme {
    /// White-on-black-scrim at the given scrim opacity.
    fn with_scrim(alpha: f32) -> Self {
        Self {
            overlay_background: Color {
                a: alpha,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Overlay colors for the light theme.
    #[must_use]
    pub fn light() -> Self {
        Self::with_scrim(opacity::OVERLAY_STRONG)
    }

    /// Overlay colors for the dark theme, with a softer scrim.
    #[must_use]
    pub fn dark() -> Self {
        Self::with_scrim(opacity::OVERLAY_MEDIUM)
    }

    /// Picks the scheme matching the detected system theme.
    #[must_use]
    pub fn from_system() -> Self {
        if ThemeMode::System.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Theme configuration resolved once at startup and kept on the app.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the mode resolves to a dark appearance. `System` asks the
    /// desktop and treats a failed detection as dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::System)
    }
}
