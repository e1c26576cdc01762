//! Color definitions and palette management
//!
//! Colors are RGB565, the 16-bit format of the target displays.
//!
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Primary background color - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Border/stroke color - medium gray
pub const COLOR_STROKE: Rgb565 = Rgb565::new(43 >> 3, 55 >> 2, 57 >> 3);

/// Accent for selected buttons - bright teal-green
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(95 >> 3, 185 >> 2, 141 >> 3);

/// Accent for pressed buttons - dark teal
pub const COLOR_ACCENT_DIM: Rgb565 = Rgb565::new(29 >> 3, 95 >> 2, 73 >> 3);

// ============================================================================
// Text Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Light gray - for secondary text
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Dark gray - for subtle text
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 20, 10);

// ============================================================================
// Color Palette
// ============================================================================

/// A cohesive color palette for consistent UI theming.
///
/// ```ignore
/// let palette = ColorPalette::default();
/// let light_palette = ColorPalette::light();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Accent for the selected button
    pub primary: Rgb565,

    /// Accent for a pressed button
    pub secondary: Rgb565,

    /// Main background color
    pub background: Rgb565,

    /// Resting button fill
    pub surface: Rgb565,

    /// Primary text color - high contrast
    pub text_primary: Rgb565,

    /// Secondary text color - lower contrast
    pub text_secondary: Rgb565,
}

impl Default for ColorPalette {
    /// Returns the default dark theme palette
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Light text on dark backgrounds
    pub fn dark() -> Self {
        Self {
            primary: COLOR_ACCENT,
            secondary: COLOR_ACCENT_DIM,
            background: COLOR_BACKGROUND,
            surface: COLOR_STROKE,
            text_primary: WHITE,
            text_secondary: LIGHT_GRAY,
        }
    }

    /// Dark text on light backgrounds
    pub fn light() -> Self {
        Self {
            primary: COLOR_ACCENT,
            secondary: COLOR_ACCENT_DIM,
            background: WHITE,
            surface: LIGHT_GRAY,
            text_primary: COLOR_BACKGROUND,
            text_secondary: DARK_GRAY,
        }
    }
}
