// src/ui/core.rs
//! Core UI traits and types for the kiln widget tree
//!
//! Widgets opt into capabilities by implementing the traits here:
//! [`Drawable`] for painting, [`Touchable`] for per-frame pointer handling,
//! and [`Sizable`] for anything with a box model. Positions are not part of
//! any widget; the tree owns them and hands each widget its world origin.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::layouts::BoxModel;
use crate::ui::styling::Edges;

/// Snapshot of the pointer for a single update tick.
///
/// `primary_pressed` and `primary_released` are edges: they are true only on
/// the tick where the primary button changed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    /// Cursor position in screen (world) coordinates
    pub position: Point,
    /// Primary button is currently held
    pub primary_down: bool,
    /// Primary button went down this tick
    pub primary_pressed: bool,
    /// Primary button went up this tick
    pub primary_released: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::at(Point::zero())
    }
}

impl PointerState {
    /// Idle pointer at a position, no button held.
    pub fn at(position: Point) -> Self {
        Self {
            position,
            primary_down: false,
            primary_pressed: false,
            primary_released: false,
        }
    }

    /// Next snapshot from a raw position and button level.
    ///
    /// Edges are derived against `self`, so hosts that only poll the button
    /// level get correct press/release ticks.
    pub fn advance(&self, position: Point, primary_down: bool) -> Self {
        Self {
            position,
            primary_down,
            primary_pressed: primary_down && !self.primary_down,
            primary_released: !primary_down && self.primary_down,
        }
    }
}

/// Per-widget input for one update tick.
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext<'a> {
    /// World position of the widget
    pub origin: Point,
    /// The widget and all of its ancestors are visible
    pub visible: bool,
    /// The widget and all of its ancestors are enabled
    pub enabled: bool,
    /// Pointer snapshot shared by every widget this tick
    pub pointer: &'a PointerState,
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element with its top-left corner at `origin` (world coordinates)
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error>;
}

/// Trait for UI elements that react to the pointer each frame
pub trait Touchable {
    /// Check if a screen point lies within this element when placed at `origin`
    fn contains_point(&self, origin: Point, point: Point) -> bool;

    /// Recompute interaction state from the tick's pointer snapshot
    fn update(&mut self, ctx: &UpdateContext<'_>);
}

/// Trait for elements with a size and padding/border/margin edges
///
/// All rectangles are derived on demand from the current box model and the
/// origin passed in; nothing is cached.
pub trait Sizable {
    fn box_model(&self) -> &BoxModel;

    fn size(&self) -> Size {
        self.box_model().size
    }

    fn padding(&self) -> Edges {
        self.box_model().padding
    }

    fn border(&self) -> Edges {
        self.box_model().border
    }

    fn margin(&self) -> Edges {
        self.box_model().margin
    }

    /// Position + size.
    fn outer_rect(&self, origin: Point) -> Rectangle {
        self.box_model().outer_rect(origin)
    }

    /// Outer rect grown by the margin.
    fn layout_rect(&self, origin: Point) -> Rectangle {
        self.box_model().layout_rect(origin)
    }

    /// Outer rect shrunk by padding and border, never negative.
    fn content_rect(&self, origin: Point) -> Rectangle {
        self.box_model().content_rect(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_detects_press_edge() {
        let idle = PointerState::at(Point::new(3, 4));
        let down = idle.advance(Point::new(3, 4), true);

        assert!(down.primary_down);
        assert!(down.primary_pressed);
        assert!(!down.primary_released);
    }

    #[test]
    fn test_advance_held_has_no_edges() {
        let down = PointerState::default().advance(Point::zero(), true);
        let held = down.advance(Point::new(1, 1), true);

        assert!(held.primary_down);
        assert!(!held.primary_pressed);
        assert!(!held.primary_released);
        assert_eq!(held.position, Point::new(1, 1));
    }

    #[test]
    fn test_advance_detects_release_edge() {
        let down = PointerState::default().advance(Point::zero(), true);
        let up = down.advance(Point::zero(), false);

        assert!(!up.primary_down);
        assert!(!up.primary_pressed);
        assert!(up.primary_released);

        let idle = up.advance(Point::zero(), false);
        assert_eq!(idle, PointerState::default());
    }
}
