//! Hardware-independent core library for kiln
//!
//! This crate contains the retained-mode widget tree: controls with
//! parent-relative positions, a padding/border/margin box model, panels,
//! labels, and buttons with a hover/press state machine. Rendering goes
//! through any `embedded-graphics` draw target.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod framebuffer;
pub mod ui;
