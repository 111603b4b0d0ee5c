// src/ui/components/panel.rs
//! Filled, optionally bordered rectangle used as backdrop and container

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::ui::core::{Drawable, Sizable};
use crate::ui::layouts::BoxModel;
use crate::ui::layouts::box_model::offset;
use crate::ui::styling::{COLOR_STROKE, COLOR_SURFACE, Edges};

/// Panel component
///
/// Paints its content rect with `color`, then one bar per non-zero border
/// edge inside the outer rect with `border_color`. Children attached to a
/// panel's node are painted afterwards, on top.
///
/// # Examples
/// ```ignore
/// let panel = Panel::new(Size::new(200, 120))
///     .with_color(COLOR_SURFACE)
///     .with_border(COLOR_STROKE, Edges::all(2))
///     .with_padding(Edges::all(8));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    box_model: BoxModel,
    color: Rgb565,
    border_color: Rgb565,
}

impl Panel {
    pub fn new(size: Size) -> Self {
        Self {
            box_model: BoxModel::new(size),
            color: COLOR_SURFACE,
            border_color: COLOR_STROKE,
        }
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    /// Set both border color and border widths.
    pub fn with_border(mut self, color: Rgb565, border: Edges) -> Self {
        self.border_color = color;
        self.box_model.border = border;
        self
    }

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.box_model.padding = padding;
        self
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.box_model.margin = margin;
        self
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    pub fn border_color(&self) -> Rgb565 {
        self.border_color
    }

    pub fn set_border_color(&mut self, color: Rgb565) {
        self.border_color = color;
    }

    pub fn set_size(&mut self, size: Size) {
        self.box_model.size = size;
    }

    pub fn set_padding(&mut self, padding: Edges) {
        self.box_model.padding = padding;
    }

    pub fn set_border(&mut self, border: Edges) {
        self.box_model.border = border;
    }

    pub fn set_margin(&mut self, margin: Edges) {
        self.box_model.margin = margin;
    }

    /// The four border bars inside the outer rect, skipping zero-width edges.
    ///
    /// Order is left, right, top, bottom.
    pub fn border_bars(&self, origin: Point) -> impl Iterator<Item = Rectangle> {
        let outer = self.outer_rect(origin);
        let b = self.box_model.border;
        let Size { width, height } = outer.size;
        let top_left = outer.top_left;

        let bars = [
            (
                b.left,
                Rectangle::new(top_left, Size::new(b.left.min(width), height)),
            ),
            (
                b.right,
                Rectangle::new(
                    offset(top_left, width.saturating_sub(b.right), 0),
                    Size::new(b.right.min(width), height),
                ),
            ),
            (
                b.top,
                Rectangle::new(top_left, Size::new(width, b.top.min(height))),
            ),
            (
                b.bottom,
                Rectangle::new(
                    offset(top_left, 0, height.saturating_sub(b.bottom)),
                    Size::new(width, b.bottom.min(height)),
                ),
            ),
        ];

        bars.into_iter()
            .filter(|(edge, _)| *edge > 0)
            .map(|(_, bar)| bar)
    }

    /// Stroke the border bars only.
    pub(crate) fn draw_border<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        if self.box_model.border.is_zero() {
            return Ok(());
        }

        let style = PrimitiveStyle::with_fill(self.border_color);
        for bar in self.border_bars(origin) {
            bar.into_styled(style).draw(display)?;
        }
        Ok(())
    }
}

impl Sizable for Panel {
    fn box_model(&self) -> &BoxModel {
        &self.box_model
    }
}

impl Drawable for Panel {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.content_rect(origin)
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(display)?;

        self.draw_border(origin, display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use alloc::vec::Vec;

    #[test]
    fn test_no_border_bars_without_border() {
        let panel = Panel::new(Size::new(50, 20));
        assert_eq!(panel.border_bars(Point::zero()).count(), 0);
    }

    #[test]
    fn test_border_bars_follow_edges() {
        let panel = Panel::new(Size::new(50, 20)).with_border(COLOR_STROKE, Edges::new(1, 0, 3, 2));
        let bars: Vec<Rectangle> = panel.border_bars(Point::new(10, 10)).collect();

        assert_eq!(
            bars,
            [
                Rectangle::new(Point::new(10, 10), Size::new(2, 20)),
                Rectangle::new(Point::new(10, 10), Size::new(50, 1)),
                Rectangle::new(Point::new(10, 27), Size::new(50, 3)),
            ]
        );
    }

    #[test]
    fn test_border_bars_stay_inside_outer_rect() {
        let panel = Panel::new(Size::new(4, 4)).with_border(COLOR_STROKE, Edges::all(9));
        let outer = panel.outer_rect(Point::zero());
        for bar in panel.border_bars(Point::zero()) {
            assert_eq!(bar.intersection(&outer), bar);
        }
    }

    #[test]
    fn test_border_bars_with_huge_edges_stay_inside() {
        let panel = Panel::new(Size::new(8, 8))
            .with_border(COLOR_STROKE, Edges::all(u32::MAX / 2 + 1));
        let outer = panel.outer_rect(Point::new(3, 3));
        for bar in panel.border_bars(Point::new(3, 3)) {
            assert_eq!(bar.intersection(&outer), bar);
        }
    }

    #[test]
    fn test_draw_fills_content_then_border() {
        let mut fb = FrameBuffer::new(Size::new(40, 40));
        let panel = Panel::new(Size::new(20, 20))
            .with_color(Rgb565::RED)
            .with_border(Rgb565::BLUE, Edges::all(2))
            .with_padding(Edges::all(3));
        panel.draw(Point::new(5, 5), &mut fb).unwrap();

        // Border bars: 5..=6 and 23..=24 on each axis.
        assert_eq!(fb.pixel(Point::new(5, 5)), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(Point::new(6, 15)), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(Point::new(24, 24)), Some(Rgb565::BLUE));

        // Padding keeps whatever was underneath.
        assert_eq!(fb.pixel(Point::new(8, 8)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(20, 15)), Some(Rgb565::BLACK));

        // Content rect: 10..=19 on each axis.
        assert_eq!(fb.pixel(Point::new(10, 10)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(19, 19)), Some(Rgb565::RED));

        // Nothing outside the outer rect.
        assert_eq!(fb.pixel(Point::new(4, 4)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(25, 25)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_setters_update_box_model() {
        let mut panel = Panel::new(Size::new(10, 10));
        panel.set_size(Size::new(30, 20));
        panel.set_padding(Edges::all(2));
        panel.set_border(Edges::all(1));
        panel.set_margin(Edges::all(5));

        assert_eq!(panel.size(), Size::new(30, 20));
        assert_eq!(panel.content_rect(Point::zero()).size, Size::new(24, 14));
        assert_eq!(panel.layout_rect(Point::zero()).size, Size::new(40, 30));
    }
}
