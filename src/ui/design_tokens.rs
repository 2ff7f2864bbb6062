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
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Animation durations

## Examples

```
use agentcore_showcase::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a hero overlay color
let overlay = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::WHITE
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
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
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.09, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.24, 0.26, 0.32);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.47, 0.54);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.8, 0.85);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.94, 0.96);

    // Brand colors (indigo scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.88, 0.89, 1.0); // Very light indigo
    pub const PRIMARY_200: Color = Color::from_rgb(0.76, 0.78, 0.99); // Light indigo
    pub const PRIMARY_400: Color = Color::from_rgb(0.51, 0.55, 0.96); // Medium light indigo
    pub const PRIMARY_500: Color = Color::from_rgb(0.42, 0.45, 0.93); // Primary indigo
    pub const PRIMARY_600: Color = Color::from_rgb(0.34, 0.37, 0.84); // Medium dark indigo
    pub const PRIMARY_700: Color = Color::from_rgb(0.27, 0.29, 0.7); // Dark indigo
    pub const PRIMARY_800: Color = Color::from_rgb(0.19, 0.21, 0.53); // Very dark indigo

    // Hero gradient endpoint (violet)
    pub const ACCENT_500: Color = Color::from_rgb(0.56, 0.36, 0.96);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
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

    /// Header background once the page is scrolled past the hero top.
    pub const SURFACE: f32 = 0.95;

    /// Floating hero particles at full brightness.
    pub const PARTICLE: f32 = 0.6;
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
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const INPUT_HEIGHT: f32 = 44.0;

    // Fixed chrome
    pub const HEADER_HEIGHT: f32 = 64.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    // Decorative glyphs
    pub const FEATURE_GLYPH: f32 = 40.0;
    pub const STEP_BADGE: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.
    //!
    //! The scale provides semantic sizes for consistent text hierarchy:
    //! - Display: Hero headline
    //! - Titles: Section and card headings
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Display - Hero headline
    pub const DISPLAY: f32 = 48.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Card headings, plan names
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Plan prices, emphasized labels
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Hero subtitle, form inputs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Footer note, plan periods
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Featured plan outline, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
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

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Motion Durations
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Frame interval for animation ticks (roughly 60fps).
    pub const TICK: Duration = Duration::from_millis(16);

    /// Card entrance transition once a reveal fires.
    pub const ENTRANCE: Duration = Duration::from_millis(600);

    /// Entrance delay added per card index within a grid row sweep.
    pub const STAGGER_STEP: Duration = Duration::from_millis(100);

    /// Programmatic smooth scroll to a section anchor.
    pub const SCROLL: Duration = Duration::from_millis(500);
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
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Motion validation
    assert!(motion::STAGGER_STEP.as_millis() < motion::ENTRANCE.as_millis());
    assert!(motion::TICK.as_millis() > 0);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
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
    fn stagger_never_outlasts_the_entrance() {
        assert!(motion::STAGGER_STEP * 5 < motion::ENTRANCE + motion::SCROLL);
    }
}
