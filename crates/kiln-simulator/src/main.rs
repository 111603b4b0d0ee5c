//! Desktop simulator for the kiln widget tree.
//!
//! Builds a small demo tree and renders it in an SDL2 window via
//! `embedded-graphics-simulator`. The mouse drives the pointer snapshot that
//! buttons poll each frame.
//!
//! # Key bindings
//!
//! | Key | Action                          |
//! |-----|---------------------------------|
//! | H   | Hide / show the button panel    |
//! | D   | Disable / enable the buttons    |
//! | R   | Rebuild the buttons             |
//! | Q   | Quit                            |
//!
//! If a `kiln.cfg` file (postcard-encoded [`Config`]) exists in the working
//! directory it replaces the built-in defaults.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
    sdl2::{Keycode, MouseButton},
};
use log::{info, warn};

use kiln_core::config::Config;
use kiln_core::framebuffer::FrameBuffer;
use kiln_core::ui::{
    Button, ButtonState, ButtonVariant, Edges, Label, Panel, PointerState, Sizable, TextElement,
    Theme, TreeResult, WidgetId, WidgetTree,
};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 320;
const DISPLAY_HEIGHT_PX: u32 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

const CONFIG_PATH: &str = "kiln.cfg";

const BUTTONS: [(&str, ButtonVariant); 3] = [
    ("OK", ButtonVariant::Primary),
    ("Cancel", ButtonVariant::Secondary),
    ("Delete", ButtonVariant::Danger),
];

// ---------------------------------------------------------------------------
// Demo tree
// ---------------------------------------------------------------------------

/// Widget handles the main loop reads or mutates.
struct Demo {
    tree: WidgetTree,
    buttons_panel: WidgetId,
    buttons: Vec<WidgetId>,
    status: WidgetId,
}

fn load_config() -> Config {
    match std::fs::read(CONFIG_PATH) {
        Ok(bytes) => match Config::from_bytes(&bytes) {
            Ok(config) => {
                info!("Loaded {}", CONFIG_PATH);
                config
            }
            Err(e) => {
                warn!("Ignoring {}: {}", CONFIG_PATH, e);
                Config::default()
            }
        },
        Err(_) => Config::default(),
    }
}

fn build_demo(config: &Config) -> TreeResult<Demo> {
    let theme = config.theme();
    let palette = theme.palette;

    let mut tree = WidgetTree::new(
        Panel::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX)).with_color(palette.background),
    );
    let root = tree.root();

    tree.attach_at(
        root,
        Point::new(theme.spacing.large as i32, theme.spacing.large as i32),
        Label::new("kiln widget demo", 20).with_color(palette.text_primary),
    )?;

    let buttons_panel = tree.attach_at(
        root,
        Point::new(theme.spacing.large as i32, 56),
        Panel::new(Size::new(DISPLAY_WIDTH_PX - 2 * theme.spacing.large, 120))
            .with_color(palette.surface)
            .with_border(palette.border, Edges::all(2))
            .with_padding(Edges::all(theme.spacing.medium)),
    )?;

    let buttons = attach_buttons(&mut tree, buttons_panel, config, &theme)?;

    let status = tree.attach_at(
        root,
        Point::new(theme.spacing.large as i32, 196),
        Label::new("", config.label.font_size).with_color(palette.text_secondary),
    )?;

    Ok(Demo {
        tree,
        buttons_panel,
        buttons,
        status,
    })
}

/// Lay one button per caption left to right inside the panel.
fn attach_buttons(
    tree: &mut WidgetTree,
    parent: WidgetId,
    config: &Config,
    theme: &Theme,
) -> TreeResult<Vec<WidgetId>> {
    let inset = theme.spacing.medium as i32 + 2;
    let mut x = inset;
    let mut ids = Vec::with_capacity(BUTTONS.len());

    for (caption, variant) in BUTTONS {
        let button = Button::from_config(caption, &config.button, &theme.palette)
            .with_style(theme.button_style(variant));
        let width = button.size().width as i32;
        ids.push(tree.attach_at(parent, Point::new(x, inset), button)?);
        x += width + theme.spacing.medium as i32;
    }

    Ok(ids)
}

fn state_name(state: ButtonState) -> &'static str {
    match state {
        ButtonState::Normal => "normal",
        ButtonState::Hovered => "hovered",
        ButtonState::Pressed => "pressed",
    }
}

/// One-line summary of the button states for the status label.
fn status_text(demo: &Demo) -> String {
    demo.buttons
        .iter()
        .filter_map(|&id| demo.tree.button(id))
        .map(|button| format!("{}: {}", button.text(), state_name(button.state())))
        .collect::<Vec<_>>()
        .join("  ")
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting kiln simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: H=Hide buttons  D=Disable buttons  R=Rebuild  Q=Quit");

    let config = load_config();
    let mut demo = match build_demo(&config) {
        Ok(demo) => demo,
        Err(e) => {
            log::error!("Failed to build demo tree: {}", e);
            return;
        }
    };

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let mut framebuffer = FrameBuffer::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Kiln Simulator", &output_settings);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = demo.tree.draw(&mut framebuffer);
    let _ = framebuffer.flush(&mut display);
    window.update(&display);

    // Raw mouse level; edges are derived by `PointerState::advance`.
    let mut cursor = Point::zero();
    let mut mouse_down = false;
    let mut pointer = PointerState::default();

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::H => {
                        let panel = demo.buttons_panel;
                        let visible = demo.tree.is_visible(panel).unwrap_or(true);
                        if let Err(e) = demo.tree.set_visible(panel, !visible) {
                            warn!("Toggle visibility failed: {}", e);
                        }
                        info!("Buttons {}", if visible { "hidden" } else { "shown" });
                    }
                    Keycode::D => {
                        let panel = demo.buttons_panel;
                        let enabled = demo.tree.is_enabled(panel).unwrap_or(true);
                        if let Err(e) = demo.tree.set_enabled(panel, !enabled) {
                            warn!("Toggle enabled failed: {}", e);
                        }
                        info!("Buttons {}", if enabled { "disabled" } else { "enabled" });
                    }
                    Keycode::R => {
                        let theme = config.theme();
                        let rebuilt = demo.tree.clear(demo.buttons_panel).and_then(|dropped| {
                            info!("Dropped {} widgets", dropped);
                            attach_buttons(&mut demo.tree, demo.buttons_panel, &config, &theme)
                        });
                        match rebuilt {
                            Ok(ids) => demo.buttons = ids,
                            Err(e) => warn!("Rebuild failed: {}", e),
                        }
                    }
                    _ => {}
                },

                SimulatorEvent::MouseMove { point } => cursor = point,

                SimulatorEvent::MouseButtonDown { mouse_btn, point } => {
                    cursor = point;
                    if mouse_btn == MouseButton::Left {
                        mouse_down = true;
                    }
                }

                SimulatorEvent::MouseButtonUp { mouse_btn, point } => {
                    cursor = point;
                    if mouse_btn == MouseButton::Left {
                        mouse_down = false;
                    }
                }

                _ => {}
            }
        }

        // --- Update -------------------------------------------------------
        pointer = pointer.advance(cursor, mouse_down);
        demo.tree.update(&pointer);

        let status = status_text(&demo);
        if let Some(label) = demo.tree.label_mut(demo.status)
            && label.text() != status
        {
            label.set_text(&status);
        }

        // --- Render -------------------------------------------------------
        if let Err(e) = demo.tree.draw(&mut framebuffer) {
            log::error!("Draw error: {:?}", e);
        }
        let _ = framebuffer.flush(&mut display);
        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
