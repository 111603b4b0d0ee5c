// src/ui/components/mod.rs
//! UI components library

pub mod button;
pub mod label;
pub mod panel;
pub mod widget;

pub use button::{Button, ButtonState};
pub use label::{Label, TextElement, font_for_size, measure_text};
pub use panel::Panel;
pub use widget::Widget;
