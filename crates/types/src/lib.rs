//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, engine, terminal backend).
//!
//! # Coordinates
//!
//! Everything the game logic touches is expressed in window pixels with the
//! origin at the top-left corner. Backends map pixels to whatever their output
//! uses (the terminal backend uses 8x16 pixel cells).
//!
//! # Arena
//!
//! The playable arena occupies the left half of the window:
//!
//! | Edge | Position |
//! |------|----------|
//! | left | `ARENA_MARGIN` |
//! | top | `ARENA_MARGIN` |
//! | right | `width / 2 - ARENA_MARGIN` |
//! | bottom | `height - ARENA_MARGIN` |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Pacing delay at the end of every tick (~60 ticks/s) |
//! | `FPS_WINDOW_MS` | 1000 | Length of one frame-rate sampling window |
//!
//! Movement speed is expressed in pixels per tick, so game speed is tied to the
//! pacing delay.
//!
//! # Examples
//!
//! ```
//! use dangame_types::{Key, KeyboardState, PauseItem};
//!
//! let keys = KeyboardState::new().with(Key::Left).with(Key::Focus);
//! assert!(keys.pressed(Key::Left));
//! assert!(!keys.pressed(Key::Right));
//!
//! assert_eq!(PauseItem::Title.next(), PauseItem::Continue);
//! assert_eq!(PauseItem::Continue.next(), PauseItem::Title);
//! ```

/// Default window title.
pub const DEFAULT_TITLE: &str = "DANGAME33";

/// Default window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 640;

/// Default window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 480;

/// Largest accepted window width or height in pixels.
pub const MAX_WINDOW_DIM: u32 = 16_384;

/// Pacing delay at the end of every tick (16ms ≈ 60 ticks per second).
pub const TICK_MS: u32 = 16;

/// Length of one FPS sampling window.
pub const FPS_WINDOW_MS: u64 = 1000;

/// Inset of the arena from the window edges and from the HUD divider.
pub const ARENA_MARGIN: i32 = 10;

/// Side length of the square player hurtbox.
pub const HURTBOX_SIZE: i32 = 16;

/// Player base speed in pixels per tick.
pub const PLAYER_BASE_SPEED: i32 = 4;

/// Health cap.
pub const MAX_HEALTH: u32 = 5;

/// Health at the start of a run.
pub const START_HEALTH: u32 = 3;

/// Bomb stock cap (bounds the HUD icon row).
pub const MAX_BOMBS: u32 = 9;

/// Bomb stock at the start of a run.
pub const START_BOMBS: u32 = 3;

/// Inset of HUD elements from the window edges.
pub const HUD_INSET: i32 = 10;

/// Horizontal gap between HUD labels and icons, and between icons.
pub const HUD_ICON_GAP: i32 = 8;

/// Width of the divider between arena and HUD.
pub const DIVIDER_WIDTH: i32 = 4;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Rectangle of size `w`x`h` centred on (`cx`, `cy`).
    pub const fn centered_on(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Self::new(cx - w / 2, cy - h / 2, w, h)
    }
}

/// Logical keys the game reacts to.
///
/// Backends map their physical keys onto this set; several physical keys may
/// map to the same logical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Speed modifier (halves movement speed while held).
    Focus,
    Bomb,
    Pause,
    Confirm,
    /// Leave the title screen / quit.
    Back,
}

impl Key {
    pub const ALL: [Key; 9] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Focus,
        Key::Bomb,
        Key::Pause,
        Key::Confirm,
        Key::Back,
    ];

    #[inline]
    const fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

/// Instantaneous pressed/released level of every [`Key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    bits: u16,
}

impl KeyboardState {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    pub const fn pressed(&self, key: Key) -> bool {
        self.bits & key.bit() != 0
    }

    #[inline]
    pub fn set(&mut self, key: Key, down: bool) {
        if down {
            self.bits |= key.bit();
        } else {
            self.bits &= !key.bit();
        }
    }

    #[must_use]
    pub const fn with(self, key: Key) -> Self {
        Self {
            bits: self.bits | key.bit(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Keys pressed in `self` that are not pressed in `previous`, restricted to `mask`.
    pub const fn rising_since(&self, previous: KeyboardState, mask: KeyboardState) -> KeyEdges {
        KeyEdges {
            bits: self.bits & !previous.bits & mask.bits,
        }
    }

    /// Drop the keys pressed in `other`.
    #[must_use]
    pub const fn without(self, other: KeyboardState) -> KeyboardState {
        KeyboardState {
            bits: self.bits & !other.bits,
        }
    }

    /// Keep only the keys also pressed in `mask`.
    pub const fn masked(&self, mask: KeyboardState) -> KeyboardState {
        KeyboardState {
            bits: self.bits & mask.bits,
        }
    }
}

impl FromIterator<Key> for KeyboardState {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        iter.into_iter().fold(KeyboardState::new(), KeyboardState::with)
    }
}

/// Keys that went from released to pressed during the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyEdges {
    bits: u16,
}

impl KeyEdges {
    pub const NONE: KeyEdges = KeyEdges { bits: 0 };

    #[inline]
    pub const fn just_pressed(&self, key: Key) -> bool {
        self.bits & key.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

/// Discrete input event drained once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Quit request / window close.
    Quit,
    KeyDown(Key),
}

/// Entries of the pause menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseItem {
    /// Abandon the run and return to the title screen.
    #[default]
    Title,
    /// Resume the run.
    Continue,
}

impl PauseItem {
    pub const ALL: [PauseItem; 2] = [PauseItem::Title, PauseItem::Continue];

    pub const fn index(self) -> usize {
        match self {
            PauseItem::Title => 0,
            PauseItem::Continue => 1,
        }
    }

    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Move one entry down, wrapping around.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Move one entry up, wrapping around.
    pub const fn prev(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }

    pub const fn label(self) -> &'static str {
        match self {
            PauseItem::Title => "Title",
            PauseItem::Continue => "Continue",
        }
    }
}
