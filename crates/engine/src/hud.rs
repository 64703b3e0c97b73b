//! HUD drawing and the FPS readout.
//!
//! The FPS text is the only texture created after startup: it is synthesized
//! again on every window rollover and the previous one is released when the new
//! one is installed. If synthesis fails the previous readout stays up.

use crate::core::{
    fps_rect, layout_hud, FpsWindow, HudMetrics, PlayerState, RenderSurface, ResourceLoader,
};
use crate::resources::{ResourceSlot, TextureId, TextureSet};
use crate::types::Rgb;

pub const FPS_COLOR: Rgb = Rgb::new(255, 255, 0);

#[derive(Debug)]
pub struct FpsDisplay<T> {
    window: FpsWindow,
    text: ResourceSlot<T>,
}

impl<T> FpsDisplay<T> {
    pub fn new(now_ms: u64) -> Self {
        Self {
            window: FpsWindow::new(now_ms),
            text: ResourceSlot::empty(),
        }
    }

    /// Start a fresh sampling window, keeping the current readout.
    pub fn restart(&mut self, now_ms: u64) {
        self.window = FpsWindow::new(now_ms);
    }

    pub fn window(&self) -> &FpsWindow {
        &self.window
    }

    pub fn current_fps(&self) -> u32 {
        self.window.current_fps()
    }

    pub fn texture(&self) -> Option<&T> {
        self.text.get()
    }

    /// Count one frame; refresh the readout when the window rolls over.
    ///
    /// Returns the new FPS value on rollover.
    pub fn tick<L>(&mut self, now_ms: u64, loader: &mut L, font: Option<&L::Font>) -> Option<u32>
    where
        L: ResourceLoader<Texture = T>,
    {
        let fps = self.window.tick(now_ms)?;
        let Some(font) = font else {
            return Some(fps);
        };

        match loader.render_text(font, &format!("FPS: {fps}"), FPS_COLOR) {
            Ok(tex) => self.text.replace(tex, |old| loader.destroy_texture(old)),
            Err(err) => {
                tracing::warn!(%err, fps, "could not render FPS text; keeping previous readout");
            }
        }
        Some(fps)
    }

    pub fn release<L>(&mut self, loader: &mut L)
    where
        L: ResourceLoader<Texture = T>,
    {
        self.text.release(|old| loader.destroy_texture(old));
    }
}

/// Draw the health and bomb rows right of the divider.
pub fn draw_hud<S: RenderSurface>(
    surface: &mut S,
    textures: &TextureSet<S::Texture>,
    window_width: u32,
    player: &PlayerState,
) {
    let size = |id| textures.get(id).map(|t| surface.texture_size(t)).unwrap_or((0, 0));
    let metrics = HudMetrics {
        window_width,
        hp_label: size(TextureId::HpLabel),
        bombs_label: size(TextureId::BombsLabel),
        heart: size(TextureId::Heart),
        bomb: size(TextureId::Bomb),
    };
    let layout = layout_hud(&metrics, player.health(), player.bombs());

    if let Some(t) = textures.get(TextureId::HpLabel) {
        surface.draw_texture(t, layout.hp_label);
    }
    if let Some(t) = textures.get(TextureId::Heart) {
        for &dst in &layout.hearts {
            surface.draw_texture(t, dst);
        }
    }
    if let Some(t) = textures.get(TextureId::BombsLabel) {
        surface.draw_texture(t, layout.bombs_label);
    }
    if let Some(t) = textures.get(TextureId::Bomb) {
        for &dst in &layout.bombs {
            surface.draw_texture(t, dst);
        }
    }
}

/// Draw the FPS readout in the top-right corner, if one exists yet.
pub fn draw_fps<S: RenderSurface>(
    surface: &mut S,
    fps: &FpsDisplay<S::Texture>,
    window_width: u32,
) {
    if let Some(t) = fps.texture() {
        let dst = fps_rect(window_width, surface.texture_size(t));
        surface.draw_texture(t, dst);
    }
}
