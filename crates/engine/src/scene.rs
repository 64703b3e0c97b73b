//! Per-state frame rendering.
//!
//! [`render_frame`] is the single render dispatch over [`GameMode`]:
//!
//! | Mode | Layers (back to front) |
//! |------|------------------------|
//! | TitleScreen | background, title, prompt |
//! | Running | background, arena, divider, player, HUD |
//! | Paused | Running layers, menu panel, highlight bar, menu text |
//!
//! The FPS readout is drawn on top in every mode.

use crate::core::{Game, GameMode, PlayerState, RenderSurface};
use crate::hud::{draw_fps, draw_hud, FpsDisplay};
use crate::resources::{TextureId, TextureSet};
use crate::types::{PauseItem, Rect, Rgb, DIVIDER_WIDTH, HURTBOX_SIZE};

pub const BACKGROUND: Rgb = Rgb::new(16, 16, 32);
pub const ARENA_FILL: Rgb = Rgb::new(0, 0, 0);
pub const DIVIDER: Rgb = Rgb::new(96, 96, 128);
pub const HURTBOX: Rgb = Rgb::new(255, 64, 64);
pub const PANEL: Rgb = Rgb::new(40, 40, 72);
pub const HIGHLIGHT: Rgb = Rgb::new(90, 90, 160);
pub const TEXT: Rgb = Rgb::WHITE;

const MENU_LINE_GAP: i32 = 8;
const PANEL_PADDING: i32 = 16;

pub fn render_frame<S: RenderSurface>(
    surface: &mut S,
    game: &Game,
    textures: &TextureSet<S::Texture>,
    fps: &FpsDisplay<S::Texture>,
    width: u32,
    height: u32,
) {
    match game.mode() {
        GameMode::TitleScreen => draw_title(surface, textures, width, height),
        GameMode::Running => {
            draw_gameplay(surface, game, width, height, textures);
            draw_hud(surface, textures, width, game.player());
        }
        GameMode::Paused { selection } => {
            draw_gameplay(surface, game, width, height, textures);
            draw_hud(surface, textures, width, game.player());
            draw_pause_menu(surface, game, textures, selection);
        }
    }
    draw_fps(surface, fps, width);
}

fn draw_centered<S: RenderSurface>(surface: &mut S, texture: &S::Texture, cx: i32, cy: i32) {
    let (w, h) = surface.texture_size(texture);
    surface.draw_texture(texture, Rect::centered_on(cx, cy, w as i32, h as i32));
}

fn draw_title<S: RenderSurface>(
    surface: &mut S,
    textures: &TextureSet<S::Texture>,
    width: u32,
    height: u32,
) {
    surface.clear(BACKGROUND);
    let cx = width as i32 / 2;
    if let Some(t) = textures.get(TextureId::TitleText) {
        draw_centered(surface, t, cx, height as i32 / 3);
    }
    if let Some(t) = textures.get(TextureId::PromptText) {
        draw_centered(surface, t, cx, height as i32 * 2 / 3);
    }
}

fn draw_gameplay<S: RenderSurface>(
    surface: &mut S,
    game: &Game,
    width: u32,
    height: u32,
    textures: &TextureSet<S::Texture>,
) {
    surface.clear(BACKGROUND);
    surface.fill_rect(game.arena().rect(), ARENA_FILL);
    surface.fill_rect(
        Rect::new(
            width as i32 / 2 - DIVIDER_WIDTH / 2,
            0,
            DIVIDER_WIDTH,
            height as i32,
        ),
        DIVIDER,
    );
    draw_player(surface, game.player(), textures);
}

fn draw_player<S: RenderSurface>(
    surface: &mut S,
    player: &PlayerState,
    textures: &TextureSet<S::Texture>,
) {
    let (cx, cy) = player.center();
    if let Some(t) = textures.get(TextureId::Player) {
        draw_centered(surface, t, cx, cy);
    }
    surface.fill_circle(cx, cy, HURTBOX_SIZE / 2, HURTBOX);
}

fn draw_pause_menu<S: RenderSurface>(
    surface: &mut S,
    game: &Game,
    textures: &TextureSet<S::Texture>,
    selection: PauseItem,
) {
    let size = |id| {
        textures
            .get(id)
            .map(|t| surface.texture_size(t))
            .unwrap_or((0, 0))
    };
    let caption = size(TextureId::PausedCaption);
    let items = PauseItem::ALL.map(|item| size(TextureId::menu_item(item)));

    let content_w = items
        .iter()
        .map(|s| s.0)
        .chain(std::iter::once(caption.0))
        .max()
        .unwrap_or(0) as i32;
    let content_h = caption.1 as i32
        + items
            .iter()
            .map(|s| s.1 as i32 + MENU_LINE_GAP)
            .sum::<i32>();

    let arena = game.arena().rect();
    let (cx, cy) = (arena.x + arena.w / 2, arena.y + arena.h / 2);
    let panel = Rect::centered_on(
        cx,
        cy,
        content_w + PANEL_PADDING * 2,
        content_h + PANEL_PADDING * 2,
    );
    surface.fill_rect(panel, PANEL);

    let mut y = panel.y + PANEL_PADDING;
    if let Some(t) = textures.get(TextureId::PausedCaption) {
        let (w, h) = (caption.0 as i32, caption.1 as i32);
        surface.draw_texture(t, Rect::new(cx - w / 2, y, w, h));
    }
    y += caption.1 as i32 + MENU_LINE_GAP;

    for (item, (w, h)) in PauseItem::ALL.into_iter().zip(items) {
        let row = Rect::new(cx - w as i32 / 2, y, w as i32, h as i32);
        if item == selection {
            let bar = Rect::new(
                panel.x + PANEL_PADDING / 2,
                y,
                panel.w - PANEL_PADDING,
                h as i32,
            );
            surface.fill_rect(bar, HIGHLIGHT);
        }
        if let Some(t) = textures.get(TextureId::menu_item(item)) {
            surface.draw_texture(t, row);
        }
        y += h as i32 + MENU_LINE_GAP;
    }
}
