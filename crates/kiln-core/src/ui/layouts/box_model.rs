// src/ui/layouts/box_model.rs
//! Box model shared by every sized control

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::styling::Edges;

/// Pixel count as a coordinate delta, clamped to `i32::MAX`.
fn delta(pixels: u32) -> i32 {
    i32::try_from(pixels).unwrap_or(i32::MAX)
}

/// Move `origin` right and down by unsigned pixel counts, saturating at the
/// coordinate range instead of wrapping.
pub(crate) fn offset(origin: Point, dx: u32, dy: u32) -> Point {
    Point::new(
        origin.x.saturating_add(delta(dx)),
        origin.y.saturating_add(delta(dy)),
    )
}

/// Size plus padding, border, and margin edges
///
/// The three derived rectangles nest as follows:
///
/// ```text
/// layout rect   = outer rect grown by margin
/// outer rect    = origin + size
/// content rect  = outer rect shrunk by border + padding
/// ```
///
/// The box model stores no position. Callers pass the world origin in,
/// which keeps every rectangle consistent with the latest position and
/// edge setters without invalidation.
///
/// # Examples
/// ```ignore
/// let model = BoxModel::new(Size::new(100, 40)).with_padding(Edges::all(4));
/// let content = model.content_rect(Point::new(10, 10));
/// assert_eq!(content.size, Size::new(92, 32));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxModel {
    pub size: Size,
    pub padding: Edges,
    pub border: Edges,
    pub margin: Edges,
}

impl BoxModel {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_border(mut self, border: Edges) -> Self {
        self.border = border;
        self
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    /// Combined inset of border and padding from the outer edge.
    pub fn inset(&self) -> Edges {
        self.border.combine(self.padding)
    }

    pub fn outer_rect(&self, origin: Point) -> Rectangle {
        Rectangle::new(origin, self.size)
    }

    pub fn layout_rect(&self, origin: Point) -> Rectangle {
        let m = self.margin;
        Rectangle::new(
            Point::new(
                origin.x.saturating_sub(delta(m.left)),
                origin.y.saturating_sub(delta(m.top)),
            ),
            Size::new(
                self.size.width.saturating_add(m.horizontal()),
                self.size.height.saturating_add(m.vertical()),
            ),
        )
    }

    pub fn content_rect(&self, origin: Point) -> Rectangle {
        let inset = self.inset();
        Rectangle::new(
            offset(origin, inset.left, inset.top),
            Size::new(
                self.size.width.saturating_sub(inset.horizontal()),
                self.size.height.saturating_sub(inset.vertical()),
            ),
        )
    }

    /// Smallest outer size whose content rect holds `content`.
    pub fn outer_size_for(&self, content: Size) -> Size {
        let inset = self.inset();
        Size::new(
            content.width.saturating_add(inset.horizontal()),
            content.height.saturating_add(inset.vertical()),
        )
    }
}
