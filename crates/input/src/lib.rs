//! Terminal input module (engine-facing).
//!
//! This module is independent of the game logic. It maps `crossterm` key
//! events onto [`crate::types::Key`] and rebuilds per-key held levels, including
//! on terminals that never send key-release events.

pub mod handler;
pub mod map;

pub use dangame_types as types;

pub use handler::KeyboardTracker;
pub use map::{implies_focus, is_quit_event, map_key};
