//! Frame-rate sampling window.

use crate::types::FPS_WINDOW_MS;

/// Counts ticks and publishes the count once per [`FPS_WINDOW_MS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpsWindow {
    frame_count: u32,
    window_start_ms: u64,
    current_fps: u32,
}

impl FpsWindow {
    pub fn new(now_ms: u64) -> Self {
        Self {
            frame_count: 0,
            window_start_ms: now_ms,
            current_fps: 0,
        }
    }

    /// Count one tick at `now_ms`.
    ///
    /// Returns the new FPS value when the window rolls over; the counter and the
    /// window start are reset at that instant.
    pub fn tick(&mut self, now_ms: u64) -> Option<u32> {
        self.frame_count += 1;
        if now_ms.saturating_sub(self.window_start_ms) < FPS_WINDOW_MS {
            return None;
        }
        self.current_fps = self.frame_count;
        self.frame_count = 0;
        self.window_start_ms = now_ms;
        Some(self.current_fps)
    }

    pub fn current_fps(&self) -> u32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn window_start_ms(&self) -> u64 {
        self.window_start_ms
    }
}
