// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Page**: Fixed landing-page geometry (section heights and widths)

## Examples

```
use iced_landing::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests

The `page` tokens additionally feed the viewport intersection math: every
section is laid out at a fixed height so visibility can be computed from the
scroll offset alone. Changing a height here changes both the rendered layout
and the observer geometry, always in lockstep.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (green scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.87, 0.97, 0.89);
    pub const PRIMARY_200: Color = Color::from_rgb(0.73, 0.93, 0.78);
    pub const PRIMARY_400: Color = Color::from_rgb(0.45, 0.83, 0.55);
    pub const PRIMARY_500: Color = Color::from_rgb(0.36, 0.77, 0.47);
    pub const PRIMARY_600: Color = Color::from_rgb(0.28, 0.67, 0.39);
    pub const PRIMARY_700: Color = Color::from_rgb(0.2, 0.55, 0.31);
    pub const PRIMARY_800: Color = Color::from_rgb(0.13, 0.42, 0.23);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Opacity applied to nav links and logo not currently hovered.
    pub const NAV_FADED: f32 = 0.5;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Diameter of a carousel pagination dot.
    pub const DOT_SIZE: f32 = 12.0;

    /// Diameter of the carousel previous/next buttons.
    pub const SLIDER_BUTTON_SIZE: f32 = 44.0;

    /// Width of the modal dialog card.
    pub const MODAL_WIDTH: f32 = 460.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 44.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Feature and tab-content titles
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Logo, testimonial quotes
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Footnotes, testimonial locations
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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
// Page Geometry
// ============================================================================

pub mod page {
    //! Fixed vertical geometry of the landing page, in logical pixels.
    //!
    //! The scrollable content is a single column: hero, then the four
    //! sections, then the footer. All heights are fixed so the observer
    //! registry can treat each region as a static vertical span.

    /// Height of the navigation bar (also the sticky sentinel margin).
    pub const NAV_HEIGHT: f32 = 64.0;

    /// Height of the hero/header area, including the cookie notice slot.
    pub const HERO_HEIGHT: f32 = 620.0;

    pub const FEATURES_HEIGHT: f32 = 4.0 * FEATURE_ROW_HEIGHT + SECTION_HEADER_HEIGHT;
    pub const OPERATIONS_HEIGHT: f32 = 560.0;
    pub const TESTIMONIALS_HEIGHT: f32 = 560.0;
    pub const SIGNUP_HEIGHT: f32 = 360.0;
    pub const FOOTER_HEIGHT: f32 = 220.0;

    /// Height reserved at the top of each section for heading + subheading.
    pub const SECTION_HEADER_HEIGHT: f32 = 140.0;

    /// Height of one feature row (text beside its illustration).
    pub const FEATURE_ROW_HEIGHT: f32 = 300.0;

    /// Rendered size of a feature illustration.
    pub const FEATURE_IMAGE_WIDTH: f32 = 420.0;
    pub const FEATURE_IMAGE_HEIGHT: f32 = 260.0;

    /// Maximum width of section content; wider windows center it.
    pub const CONTENT_MAX_WIDTH: f32 = 920.0;

    /// Visible fraction of a section required to reveal it.
    pub const REVEAL_THRESHOLD: f32 = 0.15;

    /// Viewport inflation for lazy image loading, in pixels.
    pub const LAZY_LOAD_MARGIN: f32 = 200.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::NAV_FADED > 0.0 && opacity::NAV_FADED < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    // Page geometry validation
    assert!(page::NAV_HEIGHT > 0.0);
    assert!(page::HERO_HEIGHT > page::NAV_HEIGHT);
    assert!(page::FEATURE_IMAGE_HEIGHT < page::FEATURE_ROW_HEIGHT);
    assert!(page::REVEAL_THRESHOLD > 0.0 && page::REVEAL_THRESHOLD < 1.0);
    assert!(page::LAZY_LOAD_MARGIN > 0.0);

    // Color validation
    assert!(palette::PRIMARY_500.g >= 0.0 && palette::PRIMARY_500.g <= 1.0);
};
