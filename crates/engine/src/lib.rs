//! Engine module - the runtime control loop
//!
//! Drives a [`Game`](crate::core::Game) through a [`Platform`](crate::core::Platform)
//! backend: startup and shutdown of every resource, the per-tick
//! poll / update / render / present / pace sequence and the FPS readout.
//!
//! # Module Structure
//!
//! - [`config`]: window and asset configuration, environment overrides
//! - [`error`]: startup failures
//! - [`resources`]: single-release resource slots and the startup texture set
//! - [`hud`]: FPS readout and HUD drawing
//! - [`scene`]: per-state frame rendering
//! - [`engine`]: the [`Engine`] frame loop

pub mod config;
pub mod engine;
pub mod error;
pub mod hud;
pub mod resources;
pub mod scene;

pub use dangame_core as core;
pub use dangame_types as types;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::StartupError;
pub use hud::FpsDisplay;
pub use resources::{ResourceSlot, TextureId, TextureSet};
