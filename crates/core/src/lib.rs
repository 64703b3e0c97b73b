//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management and the per-tick
//! bookkeeping of the runtime loop. It performs **no I/O**: windows, drawing,
//! asset decoding and keyboard access are reached only through the capability
//! traits in [`platform`], which the engine is generic over.
//!
//! # Module Structure
//!
//! - [`arena`]: arena bounds derived from the window size and the hurtbox clamp
//! - [`player`]: player position, stocks and per-tick movement
//! - [`edge`]: press-once edge extraction from sampled key levels
//! - [`fps`]: one-second frame-rate sampling window
//! - [`hud`]: HUD layout (labels, icon rows, FPS corner)
//! - [`game`]: the Title / Running / Paused state machine
//! - [`platform`]: capability traits implemented by backends
//!
//! # Example
//!
//! ```
//! use dangame_core::{Game, GameMode, InputEdgeTracker};
//! use dangame_types::{InputEvent, Key, KeyboardState};
//!
//! let mut game = Game::new(640, 480);
//! let mut edges = InputEdgeTracker::new();
//!
//! // Title screen reacts to discrete events.
//! game.handle_event(InputEvent::KeyDown(Key::Confirm));
//! assert_eq!(game.mode(), GameMode::Running);
//!
//! // Running reacts to sampled key levels.
//! let keys = KeyboardState::new().with(Key::Pause);
//! game.update(edges.sample(keys), keys);
//! assert!(game.mode().is_paused());
//! ```

pub mod arena;
pub mod edge;
pub mod fps;
pub mod game;
pub mod hud;
pub mod platform;
pub mod player;

pub use dangame_types as types;

// Re-export commonly used types for convenience
pub use arena::Arena;
pub use edge::{InputEdgeTracker, DEBOUNCED_KEYS};
pub use fps::FpsWindow;
pub use game::{Control, Game, GameMode};
pub use hud::{fps_rect, layout_hud, HudLayout, HudMetrics};
pub use platform::{
    AssetError, Clock, InputSource, Platform, PlatformError, RenderSurface, ResourceLoader,
};
pub use player::PlayerState;
