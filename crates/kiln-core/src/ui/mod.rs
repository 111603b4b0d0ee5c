// src/ui/mod.rs
//! Kiln UI system - a small retained-mode widget tree for embedded displays
//!
//! This module provides:
//! - Core capability traits for drawable, touchable, and sized elements
//! - A box model with padding, border, and margin
//! - Panels, labels, and buttons with a hover/press state machine
//! - The widget tree that owns them and drives update/draw each frame

pub mod components;
pub mod core;
pub mod layouts;
pub mod styling;
pub mod tree;

// Re-export commonly used items
pub use components::{Button, ButtonState, Label, Panel, TextElement, Widget};
pub use self::core::{Drawable, PointerState, Sizable, Touchable, UpdateContext};
pub use layouts::BoxModel;
pub use styling::{ButtonStyle, ButtonVariant, ColorPalette, Edges, Spacing, Theme};
pub use tree::{Node, TreeError, TreeResult, WidgetId, WidgetTree};
