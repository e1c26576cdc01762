//! Desktop simulator for the tristack triangle button widget.
//!
//! Renders a [`TriangleButtonStack`] in an SDL2 window via
//! `embedded-graphics-simulator`. Mouse input is forwarded as touch events
//! and clicks select the clicked button.
//!
//! An optional first argument replaces the default labels with a
//! comma-separated list: `tristack-simulator "One,Two,Three"`.
//!
//! # Key bindings
//!
//! | Key   | Action                          |
//! |-------|---------------------------------|
//! | 1-9   | Select button 1-9               |
//! | 0     | Clear the selection             |
//! | L     | Toggle light/dark theme         |
//! | Q/Esc | Quit                            |

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info};

use tristack_core::config::StackConfig;
use tristack_core::error::ConfigError;
use tristack_core::ui::{
    Action, ColorPalette, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable,
    TriangleButtonStack,
};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 160;
const DISPLAY_HEIGHT_PX: u32 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Where the stack's top-left corner sits on screen.
const STACK_ORIGIN: Point = Point::new(30, 30);

const DEFAULT_LABELS: &str = "Brand,Price,Model,Engine,Other";

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

fn to_touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(
        point.x.clamp(0, u16::MAX as i32) as u16,
        point.y.clamp(0, u16::MAX as i32) as u16,
    )
}

/// Map a number key to a selection request. `Some(None)` clears it.
fn keycode_to_selection(keycode: Keycode) -> Option<Option<usize>> {
    match keycode {
        Keycode::Num0 | Keycode::Kp0 => Some(None),
        Keycode::Num1 | Keycode::Kp1 => Some(Some(0)),
        Keycode::Num2 | Keycode::Kp2 => Some(Some(1)),
        Keycode::Num3 | Keycode::Kp3 => Some(Some(2)),
        Keycode::Num4 | Keycode::Kp4 => Some(Some(3)),
        Keycode::Num5 | Keycode::Kp5 => Some(Some(4)),
        Keycode::Num6 | Keycode::Kp6 => Some(Some(5)),
        Keycode::Num7 | Keycode::Kp7 => Some(Some(6)),
        Keycode::Num8 | Keycode::Kp8 => Some(Some(7)),
        Keycode::Num9 | Keycode::Kp9 => Some(Some(8)),
        _ => None,
    }
}

/// Build the stack with colors from `palette`, keeping the current selection.
fn build_stack(
    labels: &str,
    palette: &ColorPalette,
    selected: Option<usize>,
) -> Result<TriangleButtonStack, ConfigError> {
    let config = StackConfig::with_palette(palette).with_label_list(labels);
    let mut stack = TriangleButtonStack::new(STACK_ORIGIN, &config)?;
    stack.set_selected(selected);
    Ok(stack)
}

/// Apply a touch result from the stack, selecting clicked buttons.
fn on_touch_result(stack: &mut TriangleButtonStack, result: TouchResult) {
    if let TouchResult::Action(Action::ItemClicked(index)) = result {
        stack.set_selected(Some(index));
        info!(
            "Clicked button {}: {}",
            index,
            stack.label(index).unwrap_or_default()
        );
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting tristack simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: 1-9=Select  0=Clear  L=Theme  Q=Quit");

    let labels = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LABELS.to_string());
    let mut light_theme = false;
    let mut palette = ColorPalette::dark();

    let mut stack = match build_stack(&labels, &palette, None) {
        Ok(stack) => stack,
        Err(e) => {
            error!("Invalid stack configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("{} buttons, bounds {:?}", stack.len(), stack.bounds());

    // SDL2 display and window
    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Tristack Simulator", &output_settings);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(palette.background);
    let _ = stack.draw(&mut display);
    stack.mark_clean();
    window.update(&display);

    let mut mouse_down = false;

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }

                    if keycode == Keycode::L {
                        light_theme = !light_theme;
                        palette = if light_theme {
                            ColorPalette::light()
                        } else {
                            ColorPalette::dark()
                        };
                        info!("Theme: {}", if light_theme { "light" } else { "dark" });

                        match build_stack(&labels, &palette, stack.selected()) {
                            Ok(rebuilt) => stack = rebuilt,
                            Err(e) => error!("Failed to rebuild stack: {}", e),
                        }
                        let _ = display.clear(palette.background);
                    }

                    if let Some(selection) = keycode_to_selection(keycode) {
                        info!("Select {:?}", selection);
                        stack.set_selected(selection);
                    }
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    mouse_down = true;
                    let result = stack.handle_touch(TouchEvent::Press(to_touch_point(point)));
                    on_touch_result(&mut stack, result);
                }

                SimulatorEvent::MouseMove { point } if mouse_down => {
                    let result = stack.handle_touch(TouchEvent::Drag(to_touch_point(point)));
                    on_touch_result(&mut stack, result);
                }

                SimulatorEvent::MouseButtonUp { point, .. } => {
                    mouse_down = false;
                    let result = stack.handle_touch(TouchEvent::Release(to_touch_point(point)));
                    on_touch_result(&mut stack, result);
                }

                _ => {}
            }
        }

        // --- Render -------------------------------------------------------
        if let Some(region) = stack.dirty_region() {
            let _ = display.fill_solid(&region.bounds, palette.background);
            if let Err(e) = stack.draw(&mut display) {
                error!("Draw error: {:?}", e);
            }
            stack.mark_clean();
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
