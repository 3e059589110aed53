//! Keyboard input model.
//!
//! Input polling is an external collaborator: the embedding app fills a
//! boolean array indexed by key code and hands it to the engine each
//! frame. The simulation only reads the five logical keys.

use crate::constants::MAX_KEYBOARD_KEYS;

/// Boolean-indexed keyboard state, one flag per key code.
#[derive(Debug, Clone)]
pub struct KeyState {
    keys: [bool; MAX_KEYBOARD_KEYS],
}

impl Default for KeyState {
    fn default() -> Self {
        Self {
            keys: [false; MAX_KEYBOARD_KEYS],
        }
    }
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the key with the given code is held. Out-of-range
    /// codes read as released.
    pub fn pressed(&self, code: usize) -> bool {
        self.keys.get(code).copied().unwrap_or(false)
    }

    /// Set a key's held state. Out-of-range codes are ignored.
    pub fn set(&mut self, code: usize, down: bool) {
        if let Some(key) = self.keys.get_mut(code) {
            *key = down;
        }
    }
}

/// Key codes for the five logical actions. Defaults match the usual
/// SDL scancode numbers so an SDL-backed frontend can pass its
/// keyboard array through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    pub up: usize,
    pub down: usize,
    pub left: usize,
    pub right: usize,
    pub fire: usize,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: 82,
            down: 81,
            left: 80,
            right: 79,
            fire: 22,
        }
    }
}
