//! Global theme management
//!
//! Combines the color palette and spacing scale into one value that can be
//! handed to every widget constructor.

use super::colors::ColorPalette;
use super::layout::Spacing;
use super::style::{ButtonStyle, ButtonVariant};

// ============================================================================
// Theme
// ============================================================================

/// Global theme configuration
///
/// # Examples
///
/// ```ignore
/// // Use the default dark theme
/// let theme = Theme::default();
///
/// // Access theme properties
/// let padding = theme.spacing.medium;
/// let color = theme.palette.primary;
///
/// // Or create a light theme
/// let light_theme = Theme::light();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// The active color palette (dark or light)
    pub palette: ColorPalette,

    /// Spacing scale for consistent layout
    pub spacing: Spacing,
}

impl Default for Theme {
    /// Returns the default theme (dark mode)
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Creates a dark theme
    pub fn dark() -> Self {
        Self {
            palette: ColorPalette::dark(),
            spacing: Spacing::default(),
        }
    }

    /// Creates a light theme
    pub fn light() -> Self {
        Self {
            palette: ColorPalette::light(),
            spacing: Spacing::default(),
        }
    }

    /// Button style for a variant under this theme's palette.
    pub fn button_style(&self, variant: ButtonVariant) -> ButtonStyle {
        variant.to_style(&self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_style_follows_palette() {
        let theme = Theme::light();
        let style = theme.button_style(ButtonVariant::Danger);
        assert_eq!(style.normal, theme.palette.error);
        assert_eq!(
            theme.button_style(ButtonVariant::Primary),
            ButtonStyle::from_palette(&theme.palette)
        );
    }
}
