//! Capability traits implemented by backends.
//!
//! The engine never talks to a window, a terminal or a file directly. It asks a
//! [`Platform`] to open the window, decode assets, draw and pace, which keeps
//! the frame loop testable with a scripted backend.
//!
//! Resource handles are plain owned values: releasing one consumes it, so a
//! handle cannot be released twice.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{InputEvent, KeyboardState, Rect, Rgb};

/// Failure to decode an asset or synthesize a drawable.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {detail}", .path.display())]
    Decode { path: PathBuf, detail: String },
    #[error("cannot render empty text")]
    EmptyText,
}

/// Failure to bring up a backend subsystem.
#[derive(Debug, Error)]
#[error("{subsystem}: {detail}")]
pub struct PlatformError {
    pub subsystem: &'static str,
    pub detail: String,
}

impl PlatformError {
    pub fn new(subsystem: &'static str, detail: impl ToString) -> Self {
        Self {
            subsystem,
            detail: detail.to_string(),
        }
    }
}

/// Drawing primitives on the window, in window pixels.
pub trait RenderSurface {
    type Texture;

    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb);

    /// Draw `texture` stretched to `dst`.
    fn draw_texture(&mut self, texture: &Self::Texture, dst: Rect);

    /// Natural size of `texture` in pixels.
    fn texture_size(&self, texture: &Self::Texture) -> (u32, u32);

    /// Show the frame drawn since the last present.
    fn present(&mut self) -> Result<(), PlatformError>;
}

/// Creation and destruction of drawable resources.
pub trait ResourceLoader: RenderSurface {
    type Font;

    fn load_image(&mut self, path: &Path) -> Result<Self::Texture, AssetError>;

    fn load_font(&mut self, path: &Path) -> Result<Self::Font, AssetError>;

    fn render_text(
        &mut self,
        font: &Self::Font,
        text: &str,
        color: Rgb,
    ) -> Result<Self::Texture, AssetError>;

    fn destroy_texture(&mut self, texture: Self::Texture);

    fn close_font(&mut self, font: Self::Font);
}

/// Keyboard and window events.
pub trait InputSource {
    /// Next pending discrete event, if any. Never blocks.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Level of every key right now.
    fn keyboard(&mut self) -> KeyboardState;

    /// Keys in the last [`keyboard`](Self::keyboard) level that continue a
    /// physical press whose level already dropped once, such as OS key repeat
    /// arriving after a held key timed out. They still count as held but must
    /// not fire a second edge.
    fn resumed_keys(&mut self) -> KeyboardState {
        KeyboardState::new()
    }
}

/// Monotonic time and the pacing delay.
pub trait Clock {
    fn now_ms(&self) -> u64;

    fn sleep_ms(&mut self, ms: u32);
}

/// Everything the frame loop needs from a backend.
pub trait Platform: ResourceLoader + InputSource + Clock {
    /// Bring up the window and its rendering surface.
    fn open_window(&mut self, title: &str, width: u32, height: u32) -> Result<(), PlatformError>;

    /// Tear the window down. Must be safe to call when it is not open.
    fn close_window(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_names_subsystem() {
        let err = PlatformError::new("terminal", "not a tty");
        assert_eq!(err.to_string(), "terminal: not a tty");
    }

    #[test]
    fn decode_error_names_path() {
        let err = AssetError::Decode {
            path: PathBuf::from("assets/player.json"),
            detail: "no rows".to_string(),
        };
        assert_eq!(err.to_string(), "assets/player.json: no rows");
    }
}
