//! Color definitions and palette management
//!
//! All colors are RGB565, the 16-bit format of the displays this crate
//! targets.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// ============================================================================
// Base Colors
// ============================================================================

/// Window background - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Panel/surface color - slightly lighter than background
pub const COLOR_SURFACE: Rgb565 = Rgb565::new(26 >> 3, 32 >> 2, 33 >> 3);

/// Border/stroke color - medium gray
pub const COLOR_STROKE: Rgb565 = Rgb565::new(43 >> 3, 55 >> 2, 57 >> 3);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary accent - teal-green, resting button background
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(76 >> 3, 154 >> 2, 113 >> 3);

/// Highlight accent - brighter teal, hovered button background
pub const COLOR_ACCENT_BRIGHT: Rgb565 = Rgb565::new(95 >> 3, 185 >> 2, 141 >> 3);

/// Error accent - muted red
pub const COLOR_ERROR: Rgb565 = Rgb565::new(190 >> 3, 95 >> 2, 95 >> 3);

// ============================================================================
// Text Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Light gray - for secondary text
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Dark gray - for subtle text
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 20, 10);

/// Darken a color by a fixed step per channel, saturating at black.
///
/// Green has one more bit than red and blue, so it steps twice as far.
pub fn darken(color: Rgb565) -> Rgb565 {
    Rgb565::new(
        color.r().saturating_sub(4),
        color.g().saturating_sub(8),
        color.b().saturating_sub(4),
    )
}

/// Lighten a color by the same step `darken` uses, saturating at white.
pub fn lighten(color: Rgb565) -> Rgb565 {
    Rgb565::new(
        (color.r() + 4).min(Rgb565::MAX_R),
        (color.g() + 8).min(Rgb565::MAX_G),
        (color.b() + 4).min(Rgb565::MAX_B),
    )
}

// ============================================================================
// Color Palette
// ============================================================================

/// A cohesive color palette for consistent UI theming.
///
/// # Examples
///
/// ```ignore
/// // Use the default dark theme
/// let palette = ColorPalette::default();
///
/// // Or create a light theme
/// let light_palette = ColorPalette::light();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Primary accent color - used for interactive elements at rest
    pub primary: Rgb565,

    /// Secondary accent color - used for hover feedback
    pub secondary: Rgb565,

    /// Main background color
    pub background: Rgb565,

    /// Surface color for panels and elevated elements
    pub surface: Rgb565,

    /// Error and alert color
    pub error: Rgb565,

    /// Primary text color - high contrast
    pub text_primary: Rgb565,

    /// Secondary text color - lower contrast for less important information
    pub text_secondary: Rgb565,

    /// Border color for separators and outlines
    pub border: Rgb565,
}

impl Default for ColorPalette {
    /// Returns the default dark theme palette
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Light text on dark backgrounds (default)
    pub fn dark() -> Self {
        Self {
            primary: COLOR_ACCENT,
            secondary: COLOR_ACCENT_BRIGHT,
            background: COLOR_BACKGROUND,
            surface: COLOR_SURFACE,
            error: COLOR_ERROR,
            text_primary: WHITE,
            text_secondary: LIGHT_GRAY,
            border: COLOR_STROKE,
        }
    }

    /// Dark text on light backgrounds
    pub fn light() -> Self {
        Self {
            primary: COLOR_ACCENT,
            secondary: COLOR_ACCENT_BRIGHT,
            background: WHITE,
            surface: LIGHT_GRAY,
            error: COLOR_ERROR,
            text_primary: COLOR_BACKGROUND,
            text_secondary: DARK_GRAY,
            border: COLOR_STROKE,
        }
    }
}
