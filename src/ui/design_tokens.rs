// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
Design tokens shared by every view: palette, opacity, spacing, sizing,
typography, borders, radii, and shadows.

Styles compose tokens instead of hard-coding values, so a scale change
lands everywhere at once:

```
use iced_vitrine::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};
let padding = spacing::MD; // 16px
```

The ordering relations between tokens (MD above SM and so on) are asserted
at compile time at the bottom of this file.
"#]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.12, 0.13);
    pub const GRAY_700: Color = Color::from_rgb(0.32, 0.32, 0.34);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.47);
    pub const GRAY_200: Color = Color::from_rgb(0.72, 0.72, 0.74);
    pub const GRAY_100: Color = Color::from_rgb(0.87, 0.87, 0.88);

    // Brand teal, three steps from hover-light to pressed-dark
    pub const PRIMARY_400: Color = Color::from_rgb(0.36, 0.76, 0.72);
    pub const PRIMARY_500: Color = Color::from_rgb(0.25, 0.65, 0.60);
    pub const PRIMARY_600: Color = Color::from_rgb(0.18, 0.52, 0.48);

    // Merchant accent, used for the elevated-privilege featured frame
    pub const ADMIN_500: Color = Color::from_rgb(0.58, 0.38, 0.82);

    // Status colors
    pub const ERROR_500: Color = Color::from_rgb(0.87, 0.25, 0.22);
    pub const WARNING_500: Color = Color::from_rgb(0.93, 0.62, 0.14);
    pub const SUCCESS_500: Color = Color::from_rgb(0.28, 0.68, 0.38);
    pub const INFO_500: Color = Color::from_rgb(0.36, 0.56, 0.95);
}

// ============================================================================
// Opacity Levels
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    // Panel surfaces keep a slight translucency over the window background
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // half step
    pub const XS: f32 = 8.0; // base unit
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Component Sizing
// ============================================================================

pub mod sizing {
    // Icons
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Overlay controls on thumbnail cells
    pub const STRIP_CONTROL: f32 = 22.0;

    // Layout
    pub const FEATURED_MIN_HEIGHT: f32 = 240.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Section headings
    pub const TITLE_MD: f32 = 20.0;

    /// Sub-headings
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body text
    pub const BODY: f32 = 14.0;

    /// Secondary body text
    pub const BODY_SM: f32 = 13.0;

    /// Captions and annotations
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Widths
// ============================================================================

pub mod border {
    /// Hairline separation
    pub const WIDTH_SM: f32 = 1.0;

    /// Accents and toast edges
    pub const WIDTH_MD: f32 = 2.0;

    /// Drop surface and admin frame
    pub const WIDTH_LG: f32 = 3.0;
}

// ============================================================================
// Border Radii
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing keeps a strictly increasing scale
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Overlay opacities stay inside (0, 1) and ordered
    assert!(opacity::OVERLAY_SUBTLE > 0.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_PRESSED < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Icon steps grow monotonically
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::STRIP_CONTROL > sizing::ICON_SM);

    // Type scale orders titles above body above caption
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border widths grow from hairline to heavy
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_LG > border::WIDTH_MD);

    // Brand color channels stay normalized
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
    assert!(palette::PRIMARY_500.g >= 0.0 && palette::PRIMARY_500.g <= 1.0);
    assert!(palette::PRIMARY_500.b >= 0.0 && palette::PRIMARY_500.b <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn admin_accent_is_distinct_from_brand() {
        assert_ne!(palette::ADMIN_500, palette::PRIMARY_500);
    }

    #[test]
    fn brand_steps_darken_toward_pressed() {
        assert!(palette::PRIMARY_400.g > palette::PRIMARY_500.g);
        assert!(palette::PRIMARY_500.g > palette::PRIMARY_600.g);
    }
}
