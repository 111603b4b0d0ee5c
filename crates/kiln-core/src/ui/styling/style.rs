//! Button styles
//!
//! The colors a button paints for each interaction state live here rather
//! than in the widget, so a different look only needs a different
//! [`ButtonStyle`] value.

use embedded_graphics::pixelcolor::Rgb565;

use super::colors::{ColorPalette, WHITE, darken, lighten};
use crate::ui::components::ButtonState;

// ============================================================================
// ButtonStyle
// ============================================================================

/// Colors used by a button for each of its states.
///
/// # Examples
///
/// ```ignore
/// let style = ButtonStyle::from_palette(&ColorPalette::dark());
/// let button = Button::new("OK").with_style(style);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    /// Background while the pointer is elsewhere
    pub normal: Rgb565,

    /// Background while the pointer is over the button
    pub hovered: Rgb565,

    /// Background while the primary pointer button is held on the button
    pub pressed: Rgb565,

    /// Caption color
    pub text: Rgb565,

    /// Color of any border bars
    pub border: Rgb565,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self::from_palette(&ColorPalette::default())
    }
}

impl ButtonStyle {
    /// Derive the state colors from a palette.
    ///
    /// Resting uses the primary accent, hover the secondary accent, and
    /// pressed a darkened primary.
    pub fn from_palette(palette: &ColorPalette) -> Self {
        Self {
            normal: palette.primary,
            hovered: palette.secondary,
            pressed: darken(palette.primary),
            text: WHITE,
            border: palette.border,
        }
    }

    /// Background color for a state.
    pub fn background(&self, state: ButtonState) -> Rgb565 {
        match state {
            ButtonState::Normal => self.normal,
            ButtonState::Hovered => self.hovered,
            ButtonState::Pressed => self.pressed,
        }
    }
}

// ============================================================================
// Button Variants
// ============================================================================

/// Predefined button looks that adapt to the active palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Accent-colored button for the main action
    Primary,

    /// Surface-colored button for less prominent actions
    Secondary,

    /// Error-colored button for destructive actions
    Danger,
}

impl ButtonVariant {
    /// Converts the variant to a concrete style based on a color palette
    pub fn to_style(&self, palette: &ColorPalette) -> ButtonStyle {
        match self {
            ButtonVariant::Primary => ButtonStyle::from_palette(palette),

            ButtonVariant::Secondary => ButtonStyle {
                normal: palette.surface,
                hovered: palette.border,
                pressed: darken(palette.surface),
                text: palette.text_primary,
                border: palette.border,
            },

            ButtonVariant::Danger => ButtonStyle {
                normal: palette.error,
                hovered: lighten(palette.error),
                pressed: darken(palette.error),
                text: WHITE,
                border: palette.border,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_follows_state() {
        let style = ButtonStyle::from_palette(&ColorPalette::dark());
        assert_eq!(style.background(ButtonState::Normal), style.normal);
        assert_eq!(style.background(ButtonState::Hovered), style.hovered);
        assert_eq!(style.background(ButtonState::Pressed), style.pressed);
    }

    #[test]
    fn test_state_colors_are_distinct() {
        let style = ButtonStyle::default();
        assert_ne!(style.normal, style.hovered);
        assert_ne!(style.normal, style.pressed);
        assert_ne!(style.hovered, style.pressed);
    }

    #[test]
    fn test_every_variant_shows_hover_and_press() {
        for palette in [ColorPalette::dark(), ColorPalette::light()] {
            for variant in [
                ButtonVariant::Primary,
                ButtonVariant::Secondary,
                ButtonVariant::Danger,
            ] {
                let style = variant.to_style(&palette);
                assert_ne!(style.hovered, style.normal, "{:?}", variant);
                assert_ne!(style.pressed, style.normal, "{:?}", variant);
            }
        }
    }

    #[test]
    fn test_secondary_variant_uses_surface() {
        let palette = ColorPalette::light();
        let style = ButtonVariant::Secondary.to_style(&palette);
        assert_eq!(style.normal, palette.surface);
        assert_eq!(style.text, palette.text_primary);
    }
}
