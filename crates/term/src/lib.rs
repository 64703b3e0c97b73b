//! Terminal backend.
//!
//! Implements the engine's capability traits on top of crossterm. The game
//! draws in window pixels into a framebuffer of 8x16 pixel cells, which is
//! diffed and flushed to the terminal on present.
//!
//! Layers:
//! - [`fb`]: character framebuffer and cell styles
//! - [`surface`]: pixel drawing onto the framebuffer, textures
//! - [`assets`]: sprite and font descriptor decoding, text rendering
//! - [`renderer`]: terminal modes and diff flushing
//! - [`platform`]: [`TermPlatform`], the trait implementations

pub mod assets;
pub mod fb;
pub mod platform;
pub mod renderer;
pub mod surface;

pub use dangame_core as core;
pub use dangame_input as input;
pub use dangame_types as types;

pub use assets::TermFont;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use platform::TermPlatform;
pub use renderer::{FrameEncoder, TerminalRenderer};
pub use surface::{TermSurface, TermTexture, TexCell, CELL_PX_H, CELL_PX_W};
