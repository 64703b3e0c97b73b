//! Player state and per-tick movement.

use crate::arena::Arena;
use crate::types::{
    Key, KeyboardState, HURTBOX_SIZE, MAX_BOMBS, MAX_HEALTH, PLAYER_BASE_SPEED, START_BOMBS,
    START_HEALTH,
};

/// The avatar: hurtbox anchor, speed and stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    /// Hurtbox top-left corner, window pixels.
    pub x: i32,
    pub y: i32,
    base_speed: i32,
    health: u32,
    bombs: u32,
}

impl PlayerState {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            base_speed: PLAYER_BASE_SPEED,
            health: START_HEALTH.min(MAX_HEALTH),
            bombs: START_BOMBS.min(MAX_BOMBS),
        }
    }

    pub fn with_base_speed(mut self, base_speed: i32) -> Self {
        self.base_speed = base_speed;
        self
    }

    pub fn with_stock(mut self, health: u32, bombs: u32) -> Self {
        self.health = health.min(MAX_HEALTH);
        self.bombs = bombs.min(MAX_BOMBS);
        self
    }

    pub fn base_speed(&self) -> i32 {
        self.base_speed
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn bombs(&self) -> u32 {
        self.bombs
    }

    /// Speed for this tick: base speed, halved (truncating) while focusing.
    pub fn effective_speed(&self, focus: bool) -> i32 {
        if focus {
            self.base_speed / 2
        } else {
            self.base_speed
        }
    }

    /// Apply one tick of held movement keys. Diagonals are not normalised.
    pub fn apply_movement(&mut self, keys: KeyboardState) {
        let speed = self.effective_speed(keys.pressed(Key::Focus));
        if keys.pressed(Key::Up) {
            self.y -= speed;
        }
        if keys.pressed(Key::Down) {
            self.y += speed;
        }
        if keys.pressed(Key::Left) {
            self.x -= speed;
        }
        if keys.pressed(Key::Right) {
            self.x += speed;
        }
    }

    pub fn clamp_to(&mut self, arena: &Arena) {
        let (x, y) = arena.clamp(self.x, self.y, HURTBOX_SIZE);
        self.x = x;
        self.y = y;
    }

    /// Spend one bomb. Returns false when the stock is empty.
    pub fn use_bomb(&mut self) -> bool {
        if self.bombs == 0 {
            return false;
        }
        self.bombs -= 1;
        true
    }

    /// Hurtbox centre, window pixels.
    pub fn center(&self) -> (i32, i32) {
        (self.x + HURTBOX_SIZE / 2, self.y + HURTBOX_SIZE / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_halves_speed_truncating() {
        let p = PlayerState::new(0, 0);
        assert_eq!(p.effective_speed(false), 4);
        assert_eq!(p.effective_speed(true), 2);

        let odd = PlayerState::new(0, 0).with_base_speed(5);
        assert_eq!(odd.effective_speed(true), 2);
    }

    #[test]
    fn diagonal_moves_full_speed_on_both_axes() {
        let mut p = PlayerState::new(100, 100);
        let keys = KeyboardState::new().with(Key::Right).with(Key::Down);
        p.apply_movement(keys);
        assert_eq!((p.x, p.y), (104, 104));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut p = PlayerState::new(100, 100);
        let keys = KeyboardState::new().with(Key::Left).with(Key::Right);
        p.apply_movement(keys);
        assert_eq!((p.x, p.y), (100, 100));
    }

    #[test]
    fn focused_movement_uses_half_speed() {
        let mut p = PlayerState::new(100, 100);
        let keys = KeyboardState::new().with(Key::Up).with(Key::Focus);
        p.apply_movement(keys);
        assert_eq!((p.x, p.y), (100, 98));
    }

    #[test]
    fn bombs_stop_at_zero() {
        let mut p = PlayerState::new(0, 0).with_stock(3, 1);
        assert!(p.use_bomb());
        assert_eq!(p.bombs(), 0);
        assert!(!p.use_bomb());
        assert_eq!(p.bombs(), 0);
    }

    #[test]
    fn stock_is_capped() {
        let p = PlayerState::new(0, 0).with_stock(99, 99);
        assert_eq!(p.health(), MAX_HEALTH);
        assert_eq!(p.bombs(), MAX_BOMBS);
    }
}
