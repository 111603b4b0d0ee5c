//! Styling system for UI elements
//!
//! This module provides:
//! - Color definitions and palettes
//! - Layout primitives (spacing scale, four-sided edges)
//! - Per-state button styles
//! - Global theme management
//!
//! # Organization
//!
//! - [`colors`] - Color constants and palette management
//! - [`layout`] - Spacing and [`Edges`]
//! - [`style`] - Button styles and variants
//! - [`theme`] - Global theme combining all styling parameters
//!
//! # Examples
//!
//! ```ignore
//! use ui::styling::*;
//!
//! let theme = Theme::default();
//! let style = theme.button_style(ButtonVariant::Primary);
//! let padding = Edges::all(theme.spacing.medium);
//! ```

// Module declarations
pub mod colors;
pub mod layout;
pub mod style;
pub mod theme;

// Re-export commonly used items for convenience
pub use colors::{
    COLOR_ACCENT, COLOR_ACCENT_BRIGHT, COLOR_BACKGROUND, COLOR_ERROR, COLOR_STROKE,
    COLOR_SURFACE, ColorPalette, DARK_GRAY, LIGHT_GRAY, WHITE, darken, lighten,
};
pub use layout::{Edges, Spacing};
pub use style::{ButtonStyle, ButtonVariant};
pub use theme::Theme;
