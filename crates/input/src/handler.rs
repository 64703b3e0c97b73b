//! Held-key tracking for terminal environments.
//!
//! Terminals report key presses, not key levels. With keyboard enhancement the
//! terminal also sends release events and a key is held from press to release.
//! Without it, a key counts as held while press/repeat events keep arriving
//! within a short timeout.
//!
//! The OS waits longer before the first repeat than the timeout, so a held key
//! drops for a moment and then comes back on repeat. Such keys are reported by
//! [`KeyboardTracker::resumed`] until the next fresh press, so edge detection
//! can treat the whole physical hold as one press.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{implies_focus, is_quit_event, map_key};
use crate::types::{InputEvent, Key, KeyboardState};

// Long enough to bridge the gap between OS key-repeat events, short enough that a
// tap does not read as a hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

const KEY_COUNT: usize = Key::ALL.len();

/// Reconstructs key levels from terminal key events.
#[derive(Debug, Clone)]
pub struct KeyboardTracker {
    last_seen: [Option<Instant>; KEY_COUNT],
    held: KeyboardState,
    lapsed: KeyboardState,
    release_events: bool,
    key_release_timeout_ms: u32,
}

impl KeyboardTracker {
    pub fn new() -> Self {
        Self {
            last_seen: [None; KEY_COUNT],
            held: KeyboardState::new(),
            lapsed: KeyboardState::new(),
            release_events: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    /// Trust release events instead of timing keys out.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Feed one terminal key event.
    ///
    /// Returns the discrete event for fresh presses: `Quit` for Ctrl+C, otherwise
    /// `KeyDown` for mapped keys. Repeats and releases only update levels.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> Option<InputEvent> {
        if key.kind == KeyEventKind::Press && is_quit_event(key) {
            return Some(InputEvent::Quit);
        }

        let mapped = map_key(key.code);
        match key.kind {
            KeyEventKind::Press => {
                if let Some(k) = mapped {
                    self.press(k, now);
                }
                if implies_focus(key) {
                    self.press(Key::Focus, now);
                }
            }
            KeyEventKind::Repeat => {
                if let Some(k) = mapped {
                    self.repeat(k, now);
                }
                if implies_focus(key) {
                    self.repeat(Key::Focus, now);
                }
            }
            KeyEventKind::Release => {
                if let Some(k) = mapped {
                    self.release(k);
                }
            }
        }

        match (key.kind, mapped) {
            (KeyEventKind::Press, Some(k)) => Some(InputEvent::KeyDown(k)),
            _ => None,
        }
    }

    /// A fresh physical press.
    pub fn press(&mut self, key: Key, now: Instant) {
        self.lapsed.set(key, false);
        self.last_seen[key as usize] = Some(now);
        self.held.set(key, true);
    }

    /// OS key repeat: keeps the key held, or brings back one that timed out.
    pub fn repeat(&mut self, key: Key, now: Instant) {
        self.last_seen[key as usize] = Some(now);
        self.held.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.lapsed.set(key, false);
        self.last_seen[key as usize] = None;
        self.held.set(key, false);
    }

    fn expire(&mut self, key: Key) {
        if self.held.pressed(key) {
            self.lapsed.set(key, true);
        }
        self.last_seen[key as usize] = None;
        self.held.set(key, false);
    }

    /// Key levels at `now`.
    pub fn snapshot(&mut self, now: Instant) -> KeyboardState {
        if !self.release_events {
            let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
            for key in Key::ALL {
                let stale = self.last_seen[key as usize]
                    .map(|seen| now.saturating_duration_since(seen) > timeout)
                    .unwrap_or(true);
                if stale {
                    self.expire(key);
                }
            }
        }
        self.held
    }

    /// Held keys that came back on repeat after timing out.
    ///
    /// Valid for the levels returned by the last [`snapshot`](Self::snapshot).
    pub fn resumed(&self) -> KeyboardState {
        self.held.masked(self.lapsed)
    }

    pub fn reset(&mut self) {
        self.last_seen = [None; KEY_COUNT];
        self.held = KeyboardState::new();
        self.lapsed = KeyboardState::new();
    }
}

impl Default for KeyboardTracker {
    fn default() -> Self {
        Self::new()
    }
}
