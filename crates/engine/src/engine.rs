//! The frame loop driver.
//!
//! Each [`Engine::tick`] runs one frame in a fixed order:
//!
//! 1. drain discrete events (quit, title-screen keys)
//! 2. sample the keyboard once and extract edges
//! 3. update the state machine
//! 4. render the current mode
//! 5. advance the FPS window (refreshing its text on rollover)
//! 6. present
//! 7. sleep the pacing delay
//!
//! Every resource the engine acquires lives in a slot it owns and is released
//! exactly once by [`Engine::shutdown`], which also runs on drop.

use crate::config::EngineConfig;
use crate::core::{Control, Game, GameMode, InputEdgeTracker, Platform};
use crate::error::StartupError;
use crate::hud::FpsDisplay;
use crate::resources::{ResourceSlot, TextureId, TextureSet};
use crate::scene::{self, TEXT};
use crate::types::PauseItem;

const PROMPT: &str = "Press Enter to start";

pub struct Engine<P: Platform> {
    config: EngineConfig,
    platform: P,
    game: Game,
    edges: InputEdgeTracker,
    font: ResourceSlot<P::Font>,
    textures: TextureSet<P::Texture>,
    fps: FpsDisplay<P::Texture>,
    window_open: bool,
    running: bool,
}

impl<P: Platform> Engine<P> {
    pub fn new(config: EngineConfig, platform: P) -> Self {
        let game = Game::new(config.width, config.height);
        let fps = FpsDisplay::new(platform.now_ms());
        Self {
            config,
            platform,
            game,
            edges: InputEdgeTracker::new(),
            font: ResourceSlot::empty(),
            textures: TextureSet::new(),
            fps,
            window_open: false,
            running: false,
        }
    }

    /// Open the window and acquire every startup resource.
    ///
    /// On failure whatever was acquired is released again and the engine
    /// stays stopped.
    pub fn init(&mut self) -> Result<(), StartupError> {
        if self.running {
            return Ok(());
        }
        match self.acquire() {
            Ok(()) => {
                self.fps.restart(self.platform.now_ms());
                self.running = true;
                tracing::info!(
                    title = %self.config.title,
                    width = self.config.width,
                    height = self.config.height,
                    textures = self.textures.loaded(),
                    "engine initialized"
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!(subsystem = err.subsystem(), %err, "startup failed");
                self.shutdown();
                Err(err)
            }
        }
    }

    fn acquire(&mut self) -> Result<(), StartupError> {
        self.platform
            .open_window(&self.config.title, self.config.width, self.config.height)?;
        self.window_open = true;

        let font = self
            .platform
            .load_font(&self.config.font_path())
            .map_err(|e| StartupError::asset("font", e))?;
        let platform = &mut self.platform;
        self.font.replace(font, |old| platform.close_font(old));
        tracing::debug!(path = %self.config.font_path().display(), "font loaded");

        for id in TextureId::IMAGES {
            let path = match id {
                TextureId::Player => self.config.player_path(),
                TextureId::Heart => self.config.heart_path(),
                _ => self.config.bomb_path(),
            };
            let tex = self
                .platform
                .load_image(&path)
                .map_err(|e| StartupError::asset(id.describe(), e))?;
            let platform = &mut self.platform;
            self.textures.insert(id, tex, |old| platform.destroy_texture(old));
            tracing::debug!(path = %path.display(), "image loaded");
        }

        let Some(font) = self.font.get() else {
            return Err(StartupError::Subsystem {
                subsystem: "font",
                detail: "font slot is empty".to_string(),
            });
        };
        for id in TextureId::ALL {
            let text = match id {
                TextureId::TitleText => self.config.title.as_str(),
                TextureId::PromptText => PROMPT,
                TextureId::HpLabel => "HP:",
                TextureId::BombsLabel => "Bombs:",
                TextureId::PausedCaption => "PAUSED",
                TextureId::MenuTitle => PauseItem::Title.label(),
                TextureId::MenuContinue => PauseItem::Continue.label(),
                TextureId::Player | TextureId::Heart | TextureId::Bomb => continue,
            };
            let tex = self
                .platform
                .render_text(font, text, TEXT)
                .map_err(|e| StartupError::asset(id.describe(), e))?;
            let platform = &mut self.platform;
            self.textures.insert(id, tex, |old| platform.destroy_texture(old));
        }
        Ok(())
    }

    /// Run one frame. Returns `false` once the loop should stop.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        while let Some(event) = self.platform.poll_event() {
            let before = self.game.mode();
            if self.game.handle_event(event) == Control::Quit {
                tracing::info!(state = before.name(), "quit requested");
                self.running = false;
                return false;
            }
            self.log_transition(before);
        }

        let keys = self.platform.keyboard();
        let resumed = self.platform.resumed_keys();
        let edges = self.edges.sample_resumed(keys, resumed);
        let before = self.game.mode();
        let bombs_before = self.game.player().bombs();
        self.game.update(edges, keys);
        self.log_transition(before);
        if self.game.player().bombs() < bombs_before {
            tracing::debug!(bombs = self.game.player().bombs(), "bomb used");
        }

        scene::render_frame(
            &mut self.platform,
            &self.game,
            &self.textures,
            &self.fps,
            self.config.width,
            self.config.height,
        );

        let now = self.platform.now_ms();
        if let Some(fps) = self.fps.tick(now, &mut self.platform, self.font.get()) {
            tracing::trace!(fps, "fps window rolled over");
        }

        if let Err(err) = self.platform.present() {
            tracing::error!(%err, "present failed; stopping");
            self.running = false;
            return false;
        }

        self.platform.sleep_ms(self.config.tick_ms);
        true
    }

    /// Tick until quit or a fatal error.
    pub fn run(&mut self) {
        while self.tick() {}
    }

    /// Release every resource and close the window. Idempotent.
    pub fn shutdown(&mut self) {
        self.running = false;

        let platform = &mut self.platform;
        self.fps.release(platform);
        self.textures.release_all(|tex| platform.destroy_texture(tex));
        self.font.release(|font| platform.close_font(font));

        if self.window_open {
            self.window_open = false;
            self.platform.close_window();
            tracing::info!("engine shut down");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn fps(&self) -> &FpsDisplay<P::Texture> {
        &self.fps
    }

    pub fn textures(&self) -> &TextureSet<P::Texture> {
        &self.textures
    }

    fn log_transition(&self, before: GameMode) {
        let after = self.game.mode();
        if before.name() == after.name() {
            return;
        }
        tracing::info!(from = before.name(), to = after.name(), "state transition");
        if before == GameMode::TitleScreen && after == GameMode::Running {
            let p = self.game.player();
            tracing::debug!(x = p.x, y = p.y, "run started");
        }
    }
}

impl<P: Platform> Drop for Engine<P> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
