//! Press-once edge extraction.
//!
//! The tracker remembers the previous tick's level of every debounced key and
//! reports a key only on the tick it goes from released to pressed. Movement
//! keys are not debounced; callers read their held level directly.

use crate::types::{Key, KeyEdges, KeyboardState};

/// Keys that trigger one action per physical press.
pub const DEBOUNCED_KEYS: [Key; 5] = [Key::Pause, Key::Confirm, Key::Up, Key::Down, Key::Bomb];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEdgeTracker {
    previous: KeyboardState,
    mask: KeyboardState,
}

impl InputEdgeTracker {
    pub fn new() -> Self {
        Self {
            previous: KeyboardState::new(),
            mask: DEBOUNCED_KEYS.into_iter().collect(),
        }
    }

    /// Compare `current` with the previous sample and store it as the new baseline.
    pub fn sample(&mut self, current: KeyboardState) -> KeyEdges {
        self.sample_resumed(current, KeyboardState::new())
    }

    /// Like [`sample`](Self::sample), but keys in `resumed` continue a hold that
    /// was already reported and never fire, even after a low sample.
    pub fn sample_resumed(&mut self, current: KeyboardState, resumed: KeyboardState) -> KeyEdges {
        let edges = current.without(resumed).rising_since(self.previous, self.mask);
        self.previous = current.masked(self.mask);
        edges
    }

    /// Level recorded for `key` on the last sample.
    pub fn was_down(&self, key: Key) -> bool {
        self.previous.pressed(key)
    }
}

impl Default for InputEdgeTracker {
    fn default() -> Self {
        Self::new()
    }
}
