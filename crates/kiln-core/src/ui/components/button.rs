// src/ui/components/button.rs
//! Button component with a hover/press state machine

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PrimitiveStyle;
use log::trace;

use crate::config::ButtonConfig;
use crate::ui::components::label::{DEFAULT_FONT_SIZE, Label, TextElement};
use crate::ui::components::panel::Panel;
use crate::ui::core::{Drawable, Sizable, Touchable, UpdateContext};
use crate::ui::layouts::BoxModel;
use crate::ui::layouts::box_model::offset;
use crate::ui::styling::{ButtonStyle, ColorPalette, Edges};

/// Smallest size a button shrinks to, whatever its caption.
pub const DEFAULT_MIN_SIZE: Size = Size::new(60, 30);

/// Padding applied when none is given.
pub const DEFAULT_PADDING: Edges = Edges::symmetric(6, 6);

/// Button state
///
/// Derived from the `hovered`/`pressed` flags with `Pressed` taking
/// precedence over `Hovered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Hovered,
    Pressed,
}

/// Button component with a centred caption
///
/// Composes a [`Panel`] for its box model and background and a [`Label`]
/// for the caption. The button sizes itself to fit the caption plus
/// padding and border, never below its minimum size, and keeps the caption
/// centred in the content rect.
///
/// # Touch Behavior
/// The state is polled once per update tick:
/// - pointer outside the outer rect: `Normal`, and any press is forgotten
/// - pointer inside: `Hovered`
/// - primary button goes down while inside: `Pressed`
/// - primary button released: back to `Hovered`
///
/// There is no click callback; hosts read [`Button::state`].
///
/// # Examples
/// ```ignore
/// let button = Button::new("Settings")
///     .with_padding(Edges::symmetric(8, 16))
///     .with_style(ButtonVariant::Secondary.to_style(&palette));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    panel: Panel,
    label: Label,
    label_offset: Point,
    style: ButtonStyle,
    min_size: Size,
    hovered: bool,
    pressed: bool,
}

impl Button {
    /// Create a button with the default font size, padding, and style.
    pub fn new(caption: &str) -> Self {
        Self::with_font_size(caption, DEFAULT_FONT_SIZE)
    }

    /// Create a button whose caption uses `font_size`.
    pub fn with_font_size(caption: &str, font_size: u32) -> Self {
        let style = ButtonStyle::default();
        let mut button = Self {
            panel: Panel::new(DEFAULT_MIN_SIZE)
                .with_color(style.normal)
                .with_border(style.border, Edges::ZERO)
                .with_padding(DEFAULT_PADDING),
            label: Label::new(caption, font_size).with_color(style.text),
            label_offset: Point::zero(),
            style,
            min_size: DEFAULT_MIN_SIZE,
            hovered: false,
            pressed: false,
        };
        button.layout();
        button
    }

    /// Create a button from configured defaults and a palette.
    pub fn from_config(caption: &str, config: &ButtonConfig, palette: &ColorPalette) -> Self {
        Self::with_font_size(caption, config.font_size)
            .with_min_size(Size::new(config.min_width, config.min_height))
            .with_padding(config.padding)
            .with_style(ButtonStyle::from_palette(palette))
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.set_style(style);
        self
    }

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.set_padding(padding);
        self
    }

    pub fn with_border(mut self, border: Edges) -> Self {
        self.set_border(border);
        self
    }

    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.set_min_size(min_size);
        self
    }

    /// Outer size needed for a caption extent under the given edges.
    ///
    /// Each axis is `max(min_size, text + padding + border)`, saturating.
    pub fn fit_size(min_size: Size, text: Size, padding: Edges, border: Edges) -> Size {
        BoxModel::default()
            .with_padding(padding)
            .with_border(border)
            .outer_size_for(text)
            .component_max(min_size)
    }

    /// Recompute size and caption placement from the current caption and edges.
    fn layout(&mut self) {
        let model = *self.panel.box_model();
        let text = self.label.extent();
        self.panel
            .set_size(Self::fit_size(self.min_size, text, model.padding, model.border));

        let content = self.panel.content_rect(Point::zero());
        self.label_offset = offset(
            content.top_left,
            content.size.width.saturating_sub(text.width) / 2,
            content.size.height.saturating_sub(text.height) / 2,
        );
    }

    pub fn state(&self) -> ButtonState {
        if self.pressed {
            ButtonState::Pressed
        } else if self.hovered {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
        self.label.set_color(style.text);
        self.panel.set_border_color(style.border);
        self.panel.set_color(style.background(self.state()));
    }

    /// Background color for the current state.
    pub fn background(&self) -> Rgb565 {
        self.panel.color()
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn set_min_size(&mut self, min_size: Size) {
        self.min_size = min_size;
        self.layout();
    }

    pub fn set_padding(&mut self, padding: Edges) {
        self.panel.set_padding(padding);
        self.layout();
    }

    pub fn set_border(&mut self, border: Edges) {
        self.panel.set_border(border);
        self.layout();
    }

    /// Margins only affect the layout rect, not the button's own size.
    pub fn set_margin(&mut self, margin: Edges) {
        self.panel.set_margin(margin);
    }

    /// Caption position relative to the button origin.
    pub fn label_offset(&self) -> Point {
        self.label_offset
    }

    /// Drop hover and press, e.g. when hidden or disabled.
    fn reset(&mut self) {
        self.hovered = false;
        self.pressed = false;
    }
}

impl TextElement for Button {
    fn label(&self) -> &Label {
        &self.label
    }

    fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    fn on_text_changed(&mut self) {
        self.layout();
    }
}

impl Sizable for Button {
    fn box_model(&self) -> &BoxModel {
        self.panel.box_model()
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.outer_rect(origin)
            .into_styled(PrimitiveStyle::with_fill(self.panel.color()))
            .draw(display)?;
        self.panel.draw_border(origin, display)?;
        self.label.draw(origin + self.label_offset, display)
    }
}

impl Touchable for Button {
    fn contains_point(&self, origin: Point, point: Point) -> bool {
        self.outer_rect(origin).contains(point)
    }

    fn update(&mut self, ctx: &UpdateContext<'_>) {
        let previous = self.state();

        if !ctx.visible || !ctx.enabled {
            self.reset();
        } else {
            let pointer = ctx.pointer;
            self.hovered = self.contains_point(ctx.origin, pointer.position);

            // Leaving the rect is checked first and always cancels a press.
            self.pressed = if !self.hovered {
                false
            } else if pointer.primary_pressed {
                true
            } else if pointer.primary_released {
                false
            } else {
                self.pressed && pointer.primary_down
            };
        }

        let state = self.state();
        if state != previous {
            trace!("Button '{}': {:?} -> {:?}", self.label.text(), previous, state);
            self.panel.set_color(self.style.background(state));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::core::PointerState;

    fn ctx(pointer: &PointerState) -> UpdateContext<'_> {
        UpdateContext {
            origin: Point::new(10, 10),
            visible: true,
            enabled: true,
            pointer,
        }
    }

    /// Feed a sequence of (position, primary_down) samples and return the final state.
    fn drive(button: &mut Button, samples: &[(Point, bool)]) -> ButtonState {
        let mut pointer = PointerState::default();
        for &(position, down) in samples {
            pointer = pointer.advance(position, down);
            button.update(&ctx(&pointer));
        }
        button.state()
    }

    const INSIDE: Point = Point::new(20, 20);
    const OUTSIDE: Point = Point::new(200, 200);

    #[test]
    fn test_fit_size_minimum_wins() {
        let size = Button::fit_size(
            DEFAULT_MIN_SIZE,
            Size::new(20, 14),
            Edges::symmetric(6, 6),
            Edges::ZERO,
        );
        assert_eq!(size, Size::new(60, 30));
    }

    #[test]
    fn test_fit_size_grows_with_text() {
        let size = Button::fit_size(
            DEFAULT_MIN_SIZE,
            Size::new(100, 20),
            Edges::symmetric(6, 6),
            Edges::ZERO,
        );
        assert_eq!(size, Size::new(112, 32));
    }

    #[test]
    fn test_new_sizes_from_measured_caption() {
        // FONT_10X20: ten glyphs measure 100x20.
        let button = Button::with_font_size("ABCDEFGHIJ", 20);
        assert_eq!(button.size(), Size::new(112, 32));

        // "OK" at 14px measures 14x14, so the minimum applies.
        let button = Button::new("OK");
        assert_eq!(button.size(), Size::new(60, 30));
    }

    #[test]
    fn test_caption_is_centred_in_content_rect() {
        let button = Button::new("OK");
        // Content rect is (6,6) 48x18, text 14x14.
        assert_eq!(button.label_offset(), Point::new(6 + 17, 6 + 2));

        let button = Button::with_font_size("ABCDEFGHIJ", 20);
        assert_eq!(button.label_offset(), Point::new(6, 6));
    }

    #[test]
    fn test_set_text_relayouts() {
        let mut button = Button::new("OK");
        button.set_text("A much longer caption");
        assert_eq!(button.text_extent(), Size::new(21 * 7, 14));
        assert_eq!(button.size(), Size::new(21 * 7 + 12, 30));

        button.set_text("OK");
        assert_eq!(button.size(), Size::new(60, 30));
    }

    #[test]
    fn test_padding_and_border_relayout() {
        let mut button = Button::with_font_size("ABCDEFGHIJ", 20);
        button.set_padding(Edges::all(10));
        assert_eq!(button.size(), Size::new(120, 40));

        button.set_border(Edges::all(2));
        assert_eq!(button.size(), Size::new(124, 44));
        assert_eq!(button.label_offset(), Point::new(12, 12));
    }

    #[test]
    fn test_huge_padding_saturates_size() {
        let button = Button::new("OK").with_padding(Edges::all(u32::MAX / 2 + 1));
        assert_eq!(button.size(), Size::new(u32::MAX, u32::MAX));
        assert_eq!(button.label_offset(), Point::new(i32::MAX, i32::MAX));

        let size = Button::fit_size(
            DEFAULT_MIN_SIZE,
            Size::new(20, 14),
            Edges::all(u32::MAX / 2 + 1),
            Edges::all(1),
        );
        assert_eq!(size, Size::new(u32::MAX, u32::MAX));
    }

    #[test]
    fn test_margin_does_not_resize() {
        let mut button = Button::new("OK");
        button.set_margin(Edges::all(4));
        assert_eq!(button.size(), Size::new(60, 30));
        assert_eq!(button.layout_rect(Point::zero()).size, Size::new(68, 38));
    }

    #[test]
    fn test_idle_pointer_outside_is_normal() {
        let mut button = Button::new("OK");
        assert_eq!(drive(&mut button, &[(OUTSIDE, false)]), ButtonState::Normal);
    }

    #[test]
    fn test_pointer_inside_is_hovered() {
        let mut button = Button::new("OK");
        assert_eq!(drive(&mut button, &[(INSIDE, false)]), ButtonState::Hovered);
        assert_eq!(button.background(), button.style().hovered);
    }

    #[test]
    fn test_press_inside_is_pressed() {
        let mut button = Button::new("OK");
        let state = drive(&mut button, &[(INSIDE, false), (INSIDE, true)]);
        assert_eq!(state, ButtonState::Pressed);
        assert_eq!(button.background(), button.style().pressed);
    }

    #[test]
    fn test_press_stays_while_held() {
        let mut button = Button::new("OK");
        let state = drive(
            &mut button,
            &[(INSIDE, false), (INSIDE, true), (Point::new(25, 22), true)],
        );
        assert_eq!(state, ButtonState::Pressed);
    }

    #[test]
    fn test_release_inside_returns_to_hovered() {
        let mut button = Button::new("OK");
        let state = drive(
            &mut button,
            &[(INSIDE, false), (INSIDE, true), (INSIDE, false)],
        );
        assert_eq!(state, ButtonState::Hovered);
    }

    #[test]
    fn test_leaving_while_pressed_is_normal() {
        let mut button = Button::new("OK");
        let state = drive(
            &mut button,
            &[(INSIDE, true), (OUTSIDE, true)],
        );
        assert_eq!(state, ButtonState::Normal);
        assert_eq!(button.background(), button.style().normal);

        // Returning while still held does not resurrect the press.
        let mut pointer = PointerState::default().advance(OUTSIDE, true);
        pointer = pointer.advance(INSIDE, true);
        button.update(&ctx(&pointer));
        assert_eq!(button.state(), ButtonState::Hovered);
    }

    #[test]
    fn test_held_elsewhere_then_entering_is_hovered() {
        let mut button = Button::new("OK");
        let state = drive(&mut button, &[(OUTSIDE, true), (INSIDE, true)]);
        assert_eq!(state, ButtonState::Hovered);
    }

    #[test]
    fn test_hidden_or_disabled_resets() {
        let mut button = Button::new("OK");
        drive(&mut button, &[(INSIDE, true)]);
        assert_eq!(button.state(), ButtonState::Pressed);

        let pointer = PointerState::default().advance(INSIDE, true);
        button.update(&UpdateContext {
            enabled: false,
            ..ctx(&pointer)
        });
        assert_eq!(button.state(), ButtonState::Normal);

        drive(&mut button, &[(INSIDE, false)]);
        button.update(&UpdateContext {
            visible: false,
            ..ctx(&pointer)
        });
        assert_eq!(button.state(), ButtonState::Normal);
    }

    #[test]
    fn test_from_config_applies_defaults() {
        let config = ButtonConfig {
            min_width: 80,
            min_height: 40,
            padding: Edges::symmetric(4, 8),
            font_size: 20,
        };
        let palette = ColorPalette::light();
        let button = Button::from_config("OK", &config, &palette);

        assert_eq!(button.size(), Size::new(80, 40));
        assert_eq!(button.font_size(), 20);
        assert_eq!(button.padding(), Edges::symmetric(4, 8));
        assert_eq!(button.background(), palette.primary);
    }

    #[test]
    fn test_same_value_setters_are_idempotent() {
        let mut button = Button::with_font_size("Apply", 13);
        let before = button.clone();

        button.set_text("Apply");
        button.set_font_size(13);
        button.set_padding(DEFAULT_PADDING);
        button.set_min_size(DEFAULT_MIN_SIZE);

        assert_eq!(button, before);
    }
}
