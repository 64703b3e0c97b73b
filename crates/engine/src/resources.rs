//! Scoped ownership of drawable and font resources.
//!
//! A [`ResourceSlot`] holds at most one handle. Releasing goes through the
//! backend (handles are consumed by `destroy_texture` / `close_font`), so the
//! slot takes the release function as an argument. Releasing an empty slot is a
//! no-op, which makes every release path idempotent.

use crate::types::PauseItem;

#[derive(Debug)]
pub struct ResourceSlot<T> {
    value: Option<T>,
}

impl<T> ResourceSlot<T> {
    pub const fn empty() -> Self {
        Self { value: None }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.value.is_some()
    }

    /// Install `value`, releasing the previous occupant first.
    pub fn replace(&mut self, value: T, release: impl FnOnce(T)) {
        if let Some(old) = self.value.replace(value) {
            release(old);
        }
    }

    /// Release the occupant, if any.
    pub fn release(&mut self, release: impl FnOnce(T)) {
        if let Some(old) = self.value.take() {
            release(old);
        }
    }
}

impl<T> Default for ResourceSlot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Every texture acquired at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    Player,
    Heart,
    Bomb,
    TitleText,
    PromptText,
    HpLabel,
    BombsLabel,
    PausedCaption,
    MenuTitle,
    MenuContinue,
}

impl TextureId {
    pub const ALL: [TextureId; 10] = [
        TextureId::Player,
        TextureId::Heart,
        TextureId::Bomb,
        TextureId::TitleText,
        TextureId::PromptText,
        TextureId::HpLabel,
        TextureId::BombsLabel,
        TextureId::PausedCaption,
        TextureId::MenuTitle,
        TextureId::MenuContinue,
    ];

    pub const IMAGES: [TextureId; 3] = [TextureId::Player, TextureId::Heart, TextureId::Bomb];

    /// Human-readable name, used in startup errors.
    pub fn describe(self) -> &'static str {
        match self {
            TextureId::Player => "player sprite",
            TextureId::Heart => "heart icon",
            TextureId::Bomb => "bomb icon",
            TextureId::TitleText => "title text",
            TextureId::PromptText => "prompt text",
            TextureId::HpLabel => "HP label",
            TextureId::BombsLabel => "Bombs label",
            TextureId::PausedCaption => "pause caption",
            TextureId::MenuTitle => "menu item 'Title'",
            TextureId::MenuContinue => "menu item 'Continue'",
        }
    }

    pub fn menu_item(item: PauseItem) -> Self {
        match item {
            PauseItem::Title => TextureId::MenuTitle,
            PauseItem::Continue => TextureId::MenuContinue,
        }
    }
}

const TEXTURE_COUNT: usize = TextureId::ALL.len();

/// One slot per [`TextureId`].
#[derive(Debug)]
pub struct TextureSet<T> {
    slots: [ResourceSlot<T>; TEXTURE_COUNT],
}

impl<T> TextureSet<T> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| ResourceSlot::empty()),
        }
    }

    pub fn get(&self, id: TextureId) -> Option<&T> {
        self.slots[id as usize].get()
    }

    pub fn insert(&mut self, id: TextureId, texture: T, release: impl FnOnce(T)) {
        self.slots[id as usize].replace(texture, release);
    }

    pub fn loaded(&self) -> usize {
        self.slots.iter().filter(|s| s.is_loaded()).count()
    }

    /// Release every loaded texture. Safe to call repeatedly.
    pub fn release_all(&mut self, mut release: impl FnMut(T)) {
        for slot in &mut self.slots {
            slot.release(&mut release);
        }
    }
}

impl<T> Default for TextureSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
