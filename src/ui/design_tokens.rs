// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the illustration scenes.
//!
//! - **Palette**: base colors, including the scene accent hues
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes (nodes, connectors, pills)
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions
//!
//! Tokens are designed to stay consistent; the `const` block at the bottom
//! validates the scale relationships at compile time.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.09);
    pub const GRAY_700: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.9);

    // Scene accents
    /// Active-selection borders.
    pub const INDIGO_400: Color = Color::from_rgb(0.51, 0.55, 0.97);
    /// Traveling connector pulse.
    pub const CYAN_400: Color = Color::from_rgb(0.13, 0.83, 0.93);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Resting connector line and node borders.
    pub const LINE_FAINT: f32 = 0.2;
    /// Resting node surface tint.
    pub const SURFACE_FAINT: f32 = 0.05;
    /// Active node surface tint.
    pub const SURFACE_ACTIVE: f32 = 0.12;
    /// Traveling connector pulse at its brightest.
    pub const PULSE_PEAK: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed width of a node card in flow layouts.
    pub const NODE_WIDTH: f32 = 224.0;
    /// Square bounding box of a connector arrow.
    pub const CONNECTOR: f32 = 40.0;
    /// Connector line thickness.
    pub const CONNECTOR_LINE: f32 = 2.0;
    /// Connector arrow-head edge length.
    pub const CONNECTOR_HEAD: f32 = 10.0;
    /// Fraction of the connector length the pulse travels before fading.
    pub const PULSE_SPAN: f32 = 0.75;

    /// Maximum width of the centered scene column.
    pub const SCENE_MAX_WIDTH: f32 = 960.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App header title.
    pub const TITLE_LG: f32 = 22.0;

    /// Scene card title.
    pub const TITLE_MD: f32 = 18.0;

    /// Node title.
    pub const TITLE_SM: f32 = 15.0;

    /// Standard body - subtitles, descriptions.
    pub const BODY: f32 = 14.0;

    /// Small body - node descriptions, group items.
    pub const BODY_SM: f32 = 13.0;

    /// Caption - badges, pills, captions.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 20.0;
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
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::LINE_FAINT < opacity::PULSE_PEAK);
    assert!(opacity::SURFACE_FAINT < opacity::SURFACE_ACTIVE);

    // Sizing validation
    assert!(sizing::CONNECTOR_HEAD < sizing::CONNECTOR);
    assert!(sizing::PULSE_SPAN > 0.0 && sizing::PULSE_SPAN <= 1.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
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
    fn accents_are_distinct_hues() {
        assert_ne!(palette::INDIGO_400, palette::CYAN_400);
    }
}
