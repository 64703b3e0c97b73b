//! Game state machine.
//!
//! One [`GameMode`] value is current at a time. Each tick phase has a single
//! dispatch point over it:
//!
//! - [`Game::handle_event`]: discrete events (title screen keys, quit)
//! - [`Game::update`]: sampled key levels and edges (running / paused)
//!
//! Rendering dispatches on [`Game::mode`] in the engine.

use crate::arena::Arena;
use crate::player::PlayerState;
use crate::types::{InputEvent, Key, KeyEdges, KeyboardState, PauseItem, HURTBOX_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    TitleScreen,
    Running,
    /// The selection only exists while paused.
    Paused { selection: PauseItem },
}

impl GameMode {
    pub fn is_paused(&self) -> bool {
        matches!(self, GameMode::Paused { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::TitleScreen => "title",
            GameMode::Running => "running",
            GameMode::Paused { .. } => "paused",
        }
    }
}

/// Whether the run loop should keep going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Game {
    mode: GameMode,
    player: PlayerState,
    arena: Arena,
}

impl Game {
    /// A game on the title screen for a `width`x`height` window.
    pub fn new(width: u32, height: u32) -> Self {
        let arena = Arena::for_window(width, height);
        Self {
            mode: GameMode::TitleScreen,
            player: spawn_player(&arena),
            arena,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Handle one drained event.
    ///
    /// Quit is honoured in every mode; key events only matter on the title screen.
    pub fn handle_event(&mut self, event: InputEvent) -> Control {
        match (event, self.mode) {
            (InputEvent::Quit, _) => Control::Quit,
            (InputEvent::KeyDown(key), GameMode::TitleScreen) => self.title_key(key),
            (InputEvent::KeyDown(_), GameMode::Running | GameMode::Paused { .. }) => {
                Control::Continue
            }
        }
    }

    /// Advance one tick from the sampled keyboard.
    ///
    /// `edges` must come from the same sample as `keys`.
    pub fn update(&mut self, edges: KeyEdges, keys: KeyboardState) {
        self.mode = match self.mode {
            GameMode::TitleScreen => GameMode::TitleScreen,
            GameMode::Running => self.update_running(edges, keys),
            GameMode::Paused { selection } => update_paused(selection, edges),
        };
    }

    /// Begin a fresh run: reset the player, clamp, switch to running.
    pub fn start_run(&mut self) {
        self.player = spawn_player(&self.arena);
        self.mode = GameMode::Running;
    }

    fn title_key(&mut self, key: Key) -> Control {
        match key {
            Key::Confirm => {
                self.start_run();
                Control::Continue
            }
            Key::Back => Control::Quit,
            _ => Control::Continue,
        }
    }

    fn update_running(&mut self, edges: KeyEdges, keys: KeyboardState) -> GameMode {
        if edges.just_pressed(Key::Pause) {
            return GameMode::Paused {
                selection: PauseItem::default(),
            };
        }

        self.player.apply_movement(keys);
        self.player.clamp_to(&self.arena);

        if edges.just_pressed(Key::Bomb) {
            self.player.use_bomb();
        }

        GameMode::Running
    }
}

fn update_paused(selection: PauseItem, edges: KeyEdges) -> GameMode {
    if edges.just_pressed(Key::Pause) {
        return GameMode::Running;
    }

    let mut selection = selection;
    if edges.just_pressed(Key::Up) {
        selection = selection.prev();
    }
    if edges.just_pressed(Key::Down) {
        selection = selection.next();
    }

    if edges.just_pressed(Key::Confirm) {
        return match selection {
            PauseItem::Title => GameMode::TitleScreen,
            PauseItem::Continue => GameMode::Running,
        };
    }

    GameMode::Paused { selection }
}

fn spawn_player(arena: &Arena) -> PlayerState {
    let (x, y) = arena.spawn_point(HURTBOX_SIZE);
    let mut player = PlayerState::new(x, y);
    player.clamp_to(arena);
    player
}
