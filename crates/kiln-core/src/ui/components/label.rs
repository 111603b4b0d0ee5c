// src/ui/components/label.rs
//! Single-line text label and the text accessor trait for composite widgets

use alloc::string::String;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text as EgText};

use crate::ui::core::Drawable;
use crate::ui::styling::WHITE;

/// Mono fonts available to labels, ordered by glyph height.
const FONTS: [&MonoFont<'static>; 8] = [
    &ascii::FONT_4X6,
    &ascii::FONT_5X8,
    &ascii::FONT_6X10,
    &ascii::FONT_6X13,
    &ascii::FONT_7X14,
    &ascii::FONT_9X15,
    &ascii::FONT_9X18,
    &ascii::FONT_10X20,
];

/// Font size used when none is given.
pub const DEFAULT_FONT_SIZE: u32 = 14;

/// Pick the font for a requested pixel size.
///
/// Returns the tallest font whose glyph height does not exceed `font_size`,
/// or the smallest font when every font is taller.
pub fn font_for_size(font_size: u32) -> &'static MonoFont<'static> {
    FONTS
        .iter()
        .rev()
        .find(|font| font.character_size.height <= font_size)
        .copied()
        .unwrap_or(FONTS[0])
}

/// Pixel extent of `text` rendered at `font_size`.
pub fn measure_text(text: &str, font_size: u32) -> Size {
    let style = MonoTextStyle::new(font_for_size(font_size), WHITE);
    style
        .measure_string(text, Point::zero(), Baseline::Top)
        .bounding_box
        .size
}

/// Text label
///
/// Holds a single line of text, a font size, and a color. The measured
/// extent is refreshed on every text or font-size change and read back from
/// the cache, so callers never pay for measurement during drawing.
///
/// # Examples
/// ```ignore
/// let mut label = Label::new("Temperature", 14).with_color(LIGHT_GRAY);
/// label.set_text("Humidity");
/// let width = label.extent().width;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    font_size: u32,
    color: Rgb565,
    extent: Size,
}

impl Label {
    pub fn new(text: &str, font_size: u32) -> Self {
        Self {
            text: String::from(text),
            font_size,
            color: WHITE,
            extent: measure_text(text, font_size),
        }
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and re-measure.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.extent = measure_text(&self.text, self.font_size);
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Change the font size and re-measure.
    pub fn set_font_size(&mut self, font_size: u32) {
        self.font_size = font_size;
        self.extent = measure_text(&self.text, self.font_size);
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    /// Measured width/height of the current text, as of the last mutation.
    pub fn extent(&self) -> Size {
        self.extent
    }

    pub fn font(&self) -> &'static MonoFont<'static> {
        font_for_size(self.font_size)
    }
}

impl Drawable for Label {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let style = MonoTextStyle::new(self.font(), self.color);
        EgText::with_baseline(&self.text, origin, style, Baseline::Top).draw(display)?;
        Ok(())
    }
}

/// Delegated text accessors for widgets that embed a [`Label`]
///
/// Implementors hand out their label; the provided methods forward to it and
/// call [`TextElement::on_text_changed`] after anything that changes the
/// measured extent, so the widget can redo its layout.
pub trait TextElement {
    fn label(&self) -> &Label;

    fn label_mut(&mut self) -> &mut Label;

    /// Called after the text or font size changed.
    fn on_text_changed(&mut self) {}

    fn text(&self) -> &str {
        self.label().text()
    }

    fn set_text(&mut self, text: &str) {
        self.label_mut().set_text(text);
        self.on_text_changed();
    }

    fn font_size(&self) -> u32 {
        self.label().font_size()
    }

    fn set_font_size(&mut self, font_size: u32) {
        self.label_mut().set_font_size(font_size);
        self.on_text_changed();
    }

    fn text_color(&self) -> Rgb565 {
        self.label().color()
    }

    fn set_text_color(&mut self, color: Rgb565) {
        self.label_mut().set_color(color);
    }

    fn text_extent(&self) -> Size {
        self.label().extent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use embedded_graphics::primitives::Rectangle;

    #[test]
    fn test_font_for_size_picks_tallest_fitting_font() {
        assert_eq!(font_for_size(20).character_size, Size::new(10, 20));
        assert_eq!(font_for_size(14).character_size, Size::new(7, 14));
        assert_eq!(font_for_size(16).character_size, Size::new(9, 15));
        assert_eq!(font_for_size(100).character_size, Size::new(10, 20));
    }

    #[test]
    fn test_font_for_size_falls_back_to_smallest() {
        assert_eq!(font_for_size(0).character_size, Size::new(4, 6));
        assert_eq!(font_for_size(3).character_size, Size::new(4, 6));
    }

    #[test]
    fn test_new_measures_text() {
        let label = Label::new("ABCDEFGHIJ", 20);
        assert_eq!(label.extent(), Size::new(100, 20));
    }

    #[test]
    fn test_set_text_remeasures() {
        let mut label = Label::new("OK", 14);
        assert_eq!(label.extent(), Size::new(14, 14));

        label.set_text("Cancel");
        assert_eq!(label.text(), "Cancel");
        assert_eq!(label.extent(), Size::new(42, 14));
    }

    #[test]
    fn test_set_font_size_remeasures() {
        let mut label = Label::new("OK", 14);
        label.set_font_size(20);
        assert_eq!(label.font_size(), 20);
        assert_eq!(label.extent(), Size::new(20, 20));
    }

    #[test]
    fn test_draw_renders_text_at_origin() {
        let label = Label::new("Hi!", 10).with_color(Rgb565::YELLOW);
        let origin = Point::new(13, 7);

        let mut drawn = FrameBuffer::new(Size::new(64, 32));
        label.draw(origin, &mut drawn).unwrap();

        let mut expected = FrameBuffer::new(Size::new(64, 32));
        let style = MonoTextStyle::new(&ascii::FONT_6X10, Rgb565::YELLOW);
        EgText::with_baseline("Hi!", origin, style, Baseline::Top)
            .draw(&mut expected)
            .unwrap();

        assert_eq!(drawn.pixels(), expected.pixels());

        // Ink stays inside the measured extent at the origin.
        let bounds = Rectangle::new(origin, label.extent());
        let dirty = drawn.dirty_region().unwrap();
        assert_eq!(dirty.intersection(&bounds), dirty);
    }

    #[test]
    fn test_same_value_setters_are_idempotent() {
        let mut label = Label::new("Hello", 10);
        let before = label.clone();

        label.set_text("Hello");
        label.set_font_size(10);
        label.set_color(WHITE);

        assert_eq!(label, before);
    }
}
