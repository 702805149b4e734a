//! Keyboard mapping

use macroquad::input::{KeyCode, is_key_pressed, is_quit_requested};

use crate::app::Key;

/// Default bindings
pub const BINDINGS: [(KeyCode, Key); 4] = [
    (KeyCode::Space, Key::Jump),
    (KeyCode::P, Key::Pause),
    (KeyCode::R, Key::Restart),
    (KeyCode::Q, Key::Quit),
];

/// Key-down events since the last frame, window close last
pub fn poll_keys() -> Vec<Key> {
    let mut keys: Vec<Key> = BINDINGS
        .iter()
        .filter(|(code, _)| is_key_pressed(*code))
        .map(|(_, key)| *key)
        .collect();
    if is_quit_requested() {
        keys.push(Key::Close);
    }
    keys
}
