//! Arena bounds and the hurtbox clamp.

use crate::types::{Rect, ARENA_MARGIN};

/// Playable region on the left half of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Arena {
    /// Arena for a window of `width`x`height` pixels.
    ///
    /// The right half of the window is reserved for the HUD.
    pub fn for_window(width: u32, height: u32) -> Self {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        Self {
            left: ARENA_MARGIN,
            top: ARENA_MARGIN,
            right: width / 2 - ARENA_MARGIN,
            bottom: height - ARENA_MARGIN,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width(), self.height())
    }

    /// Clamp a `size`x`size` box anchored at (`x`, `y`) into the arena.
    ///
    /// The far edges are applied last, so in an arena narrower than the box the
    /// right/bottom bound wins.
    pub fn clamp(&self, x: i32, y: i32, size: i32) -> (i32, i32) {
        let mut x = x.max(self.left);
        let mut y = y.max(self.top);
        if x.saturating_add(size) > self.right {
            x = self.right - size;
        }
        if y.saturating_add(size) > self.bottom {
            y = self.bottom - size;
        }
        (x, y)
    }

    /// Start position of a run: horizontally centred, two-thirds down.
    ///
    /// Not clamped; callers clamp after placing the player.
    pub fn spawn_point(&self, size: i32) -> (i32, i32) {
        let x = self.left + self.width() / 2 - size / 2;
        let y = self.top + (i64::from(self.height()) * 2 / 3) as i32;
        (x, y)
    }
}
