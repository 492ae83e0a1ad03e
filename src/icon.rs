// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//!
//! The branding SVG is embedded and rasterized at startup so packaging never
//! has to locate assets on disk. Any parse or render failure yields `None`
//! and the window simply keeps the platform default icon.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Title bar icon edge length in pixels.
const ICON_EDGE: u32 = 128;

/// Rasterizes the embedded branding SVG to an RGBA window icon.
pub fn load_window_icon() -> Option<Icon> {
    const SVG_SOURCE: &[u8] = include_bytes!("../assets/branding/iced_vitrine.svg");

    let tree = usvg::Tree::from_data(SVG_SOURCE, &usvg::Options::default()).ok()?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_EDGE as f32 / size.width(),
        ICON_EDGE as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_EDGE, ICON_EDGE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.take(), ICON_EDGE, ICON_EDGE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_branding_svg_rasterizes() {
        assert!(load_window_icon().is_some());
    }
}
