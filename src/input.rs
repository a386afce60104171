//! Input sampling
//!
//! The host's key events arrive asynchronously; they mutate the key-state
//! map here and are only observed at the start of the next tick, when the
//! driver takes one `Intent` snapshot. This keeps event arrival decoupled
//! from simulation consumption.

use std::collections::HashMap;

/// Keys that mean move-left
const LEFT_KEYS: [&str; 2] = ["arrowleft", "a"];
/// Keys that mean move-right
const RIGHT_KEYS: [&str; 2] = ["arrowright", "d"];
/// Keys that mean jump
const JUMP_KEYS: [&str; 3] = ["arrowup", "w", " "];

/// Held-state map from lowercase key identifier to pressed flag
#[derive(Debug, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Identifiers are normalized to lowercase;
    /// keys outside the recognized aliases are stored but never queried.
    pub fn set_key(&mut self, key: &str, pressed: bool) {
        self.keys.insert(key.to_lowercase(), pressed);
    }

    fn is_down(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    fn any_down(&self, aliases: &[&str]) -> bool {
        aliases.iter().any(|k| self.is_down(k))
    }

    /// Snapshot the current intent. Called exactly once per tick.
    pub fn sample(&self) -> Intent {
        Intent {
            move_left: self.any_down(&LEFT_KEYS),
            move_right: self.any_down(&RIGHT_KEYS),
            jump: self.any_down(&JUMP_KEYS),
        }
    }
}

/// Derived movement intent for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Intent {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}
