// src/ui/components/widget.rs
//! Widget payload stored in each tree node

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::components::{Button, Label, Panel};
use crate::ui::core::{Drawable, Sizable, Touchable, UpdateContext};

/// Everything a tree node can hold
///
/// Capabilities are selective: only panels and buttons have a box model,
/// only buttons react to the pointer, and a bare control paints nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// Bare control: a position and children, nothing painted
    Control,
    Panel(Panel),
    Label(Label),
    Button(Button),
}

impl Widget {
    /// Box model view, for widgets that have one.
    pub fn as_sizable(&self) -> Option<&dyn Sizable> {
        match self {
            Widget::Panel(panel) => Some(panel),
            Widget::Button(button) => Some(button),
            Widget::Control | Widget::Label(_) => None,
        }
    }

    pub fn as_panel(&self) -> Option<&Panel> {
        match self {
            Widget::Panel(panel) => Some(panel),
            _ => None,
        }
    }

    pub fn as_panel_mut(&mut self) -> Option<&mut Panel> {
        match self {
            Widget::Panel(panel) => Some(panel),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Widget::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match self {
            Widget::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Widget::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match self {
            Widget::Button(button) => Some(button),
            _ => None,
        }
    }

    /// Run the per-tick update of widgets that have one.
    pub fn update(&mut self, ctx: &UpdateContext<'_>) {
        if let Widget::Button(button) = self {
            button.update(ctx);
        }
    }
}

impl Drawable for Widget {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self {
            Widget::Control => Ok(()),
            Widget::Panel(panel) => panel.draw(origin, display),
            Widget::Label(label) => label.draw(origin, display),
            Widget::Button(button) => button.draw(origin, display),
        }
    }
}

impl From<Panel> for Widget {
    fn from(panel: Panel) -> Self {
        Widget::Panel(panel)
    }
}

impl From<Label> for Widget {
    fn from(label: Label) -> Self {
        Widget::Label(label)
    }
}

impl From<Button> for Widget {
    fn from(button: Button) -> Self {
        Widget::Button(button)
    }
}
