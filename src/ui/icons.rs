// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons shared by the toolbar, gallery, and toasts.
//!
//! Every icon is compiled into the binary with `include_bytes!`; its
//! `svg::Handle` is built on first use and kept in a `OnceLock`. SVG keeps
//! the binary small and renders crisply at every thumbnail scale.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let add_button = button(icons::sized(icons::plus(), sizing::ICON_MD));
//! ```
//!
//! # Naming Convention
//!
//! Names describe what the glyph looks like, not where it is used
//! (e.g., `cross` not `remove_media`).

use iced::widget::svg::{self, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

// =============================================================================
// Icon definition macro
// =============================================================================

/// Defines an icon accessor backed by a lazily built, process-wide handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| svg::Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Gallery Icons
// =============================================================================

define_icon!(plus, "plus.svg", "Plus icon: two crossed bars.");
define_icon!(cross, "cross.svg", "Cross icon: X mark shape.");
define_icon!(
    arrow_left,
    "arrow_left.svg",
    "Arrow pointing left: move toward the front of the strip."
);
define_icon!(
    arrow_right,
    "arrow_right.svg",
    "Arrow pointing right: move toward the back of the strip."
);
define_icon!(star, "star.svg", "Star icon: five-pointed, filled.");
define_icon!(
    image,
    "image.svg",
    "Image icon: framed landscape with sun."
);
define_icon!(
    upload,
    "upload.svg",
    "Upload icon: arrow rising from a tray."
);

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(
    warning,
    "warning.svg",
    "Warning icon: exclamation mark inside a triangle."
);
define_icon!(
    checkmark,
    "checkmark.svg",
    "Checkmark icon: single tick stroke."
);
define_icon!(info, "info.svg", "Info icon: circle with letter i.");

// =============================================================================
// Helper Functions
// =============================================================================

/// Constrains an icon to a square of the given edge length.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Applies a fixed tint color to an icon.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme, _status| svg::Style { color: Some(color) })
}

/// Tints an icon with the active theme's text color.
pub fn text_tint(icon: Svg<'static>) -> Svg<'static> {
    icon.style(|theme: &Theme, _status| svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_embedded_icon_resolves() {
        // Exercises each include_bytes! path once.
        let _ = plus();
        let _ = cross();
        let _ = arrow_left();
        let _ = arrow_right();
        let _ = star();
        let _ = image();
        let _ = upload();
        let _ = warning();
        let _ = checkmark();
        let _ = info();
    }

    #[test]
    fn sized_and_tinted_compose() {
        let _ = sized(plus(), 32.0);
        let _ = tinted(star(), Color::WHITE);
        let _ = text_tint(info());
    }
}
