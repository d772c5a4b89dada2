//! Dice shape viewer.
//!
//! Loads shapes `4` to `20` from the working directory (bare files first,
//! then `<id>.obj`) and draws them side by side.
//!
//! Controls:
//! - digit keys select a shape (`0` is 10, `1` is 12)
//! - Up/Down scale the selected shape by 1.1
//! - `S` saves every shape in the point/edge format at its current scale
//! - `O` exports every shape as OBJ at its current scale
//! - Escape quits

mod render;

use dice_shapes::app::{handle_event, AppState, Control, Event};
use dice_shapes::view::ViewConfig;
use dice_shapes::{ShapeStore, StoreConfig};
use macroquad::prelude::*;

const DIGIT_KEYS: [(KeyCode, u8); 10] = [
    (KeyCode::Key0, 0),
    (KeyCode::Key1, 1),
    (KeyCode::Key2, 2),
    (KeyCode::Key3, 3),
    (KeyCode::Key4, 4),
    (KeyCode::Key5, 5),
    (KeyCode::Key6, 6),
    (KeyCode::Key7, 7),
    (KeyCode::Key8, 8),
    (KeyCode::Key9, 9),
];

fn window_conf() -> Conf {
    let view = ViewConfig::default();
    Conf {
        window_title: "Dice Shape Comparison".to_owned(),
        window_width: view.width,
        window_height: view.height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Decodes this frame's key presses into events, in a fixed order.
fn poll_events() -> Vec<Event> {
    let mut events = Vec::new();
    if is_key_pressed(KeyCode::Escape) {
        events.push(Event::Quit);
    }
    for (key, digit) in DIGIT_KEYS {
        if is_key_pressed(key) {
            events.push(Event::SelectDigit(digit));
        }
    }
    if is_key_pressed(KeyCode::Up) {
        events.push(Event::ScaleUp);
    }
    if is_key_pressed(KeyCode::Down) {
        events.push(Event::ScaleDown);
    }
    if is_key_pressed(KeyCode::S) {
        events.push(Event::SaveCustom);
    }
    if is_key_pressed(KeyCode::O) {
        events.push(Event::ExportObj);
    }
    events
}

#[macroquad::main(window_conf)]
async fn main() {
    // Default: WARN for everything, INFO for this crate.
    // Override with RUST_LOG env var (e.g. RUST_LOG=dice_shapes=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("dice_shapes=info".parse().unwrap_or_default())
        .add_directive("dice_viewer=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = ShapeStore::new(StoreConfig::default());
    if store.load_all() == 0 {
        tracing::warn!("no shape files found in the working directory");
    }
    let mut state = AppState::new(store, ViewConfig::default());

    'frames: loop {
        for event in poll_events() {
            if handle_event(&mut state, event) == Control::Quit {
                break 'frames;
            }
        }

        render::draw_frame(&state);
        next_frame().await;
    }
}
