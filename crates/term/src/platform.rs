//! `TermPlatform`: the crossterm backend behind the engine's capability traits.
//!
//! - Window: raw mode + alternate screen, titled, sized in 8x16 pixel cells.
//! - Input: crossterm events are drained without blocking and fed through a
//!   [`KeyboardTracker`] to rebuild key levels.
//! - Resources: sprite and font descriptors decoded from JSON; live handles are
//!   counted so leaks show up in the log at shutdown.

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use crate::assets::{self, TermFont};
use crate::core::{
    AssetError, Clock, InputSource, Platform, PlatformError, RenderSurface, ResourceLoader,
};
use crate::input::KeyboardTracker;
use crate::renderer::TerminalRenderer;
use crate::surface::{TermSurface, TermTexture, CELL_PX_H, CELL_PX_W};
use crate::types::{InputEvent, KeyboardState, Rect, Rgb};

pub struct TermPlatform {
    renderer: TerminalRenderer,
    surface: TermSurface,
    tracker: KeyboardTracker,
    start: Instant,
    open: bool,
    live_textures: usize,
    live_fonts: usize,
}

impl TermPlatform {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            surface: TermSurface::new(0, 0),
            tracker: KeyboardTracker::new(),
            start: Instant::now(),
            open: false,
            live_textures: 0,
            live_fonts: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Textures created and not yet destroyed.
    pub fn live_textures(&self) -> usize {
        self.live_textures
    }

    /// Fonts loaded and not yet closed.
    pub fn live_fonts(&self) -> usize {
        self.live_fonts
    }

    pub fn surface(&self) -> &TermSurface {
        &self.surface
    }

    /// Size the drawing surface for a `width`x`height` pixel window.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        self.surface = TermSurface::new(width, height);
    }

    fn translate(&mut self, ev: Event) -> Option<InputEvent> {
        match ev {
            Event::Key(key) => {
                let out = self.tracker.handle_key_event(key, Instant::now());
                if key.kind == KeyEventKind::Press && out.is_none() {
                    tracing::trace!(code = ?key.code, "unmapped key");
                }
                out
            }
            Event::Resize(cols, rows) => {
                tracing::debug!(cols, rows, "terminal resized");
                self.renderer.invalidate();
                None
            }
            Event::FocusLost => {
                self.tracker.reset();
                None
            }
            _ => None,
        }
    }
}

impl Default for TermPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TermPlatform {
    fn drop(&mut self) {
        self.close_window();
    }
}

impl RenderSurface for TermPlatform {
    type Texture = TermTexture;

    fn clear(&mut self, color: Rgb) {
        self.surface.clear(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.surface.fill_rect(rect, color);
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
        self.surface.fill_circle(cx, cy, radius, color);
    }

    fn draw_texture(&mut self, texture: &TermTexture, dst: Rect) {
        self.surface.draw_texture(texture, dst);
    }

    fn texture_size(&self, texture: &TermTexture) -> (u32, u32) {
        texture.pixel_size()
    }

    fn present(&mut self) -> Result<(), PlatformError> {
        if !self.open {
            return Err(PlatformError::new("renderer", "window is not open"));
        }
        let cells = self
            .renderer
            .draw_swap(self.surface.framebuffer_mut())
            .map_err(|e| PlatformError::new("renderer", e))?;
        tracing::trace!(cells, "frame presented");
        Ok(())
    }
}

impl ResourceLoader for TermPlatform {
    type Font = TermFont;

    fn load_image(&mut self, path: &Path) -> Result<TermTexture, AssetError> {
        let tex = assets::load_sprite(path)?;
        self.live_textures += 1;
        Ok(tex)
    }

    fn load_font(&mut self, path: &Path) -> Result<TermFont, AssetError> {
        let font = assets::load_font(path)?;
        self.live_fonts += 1;
        Ok(font)
    }

    fn render_text(
        &mut self,
        font: &TermFont,
        text: &str,
        color: Rgb,
    ) -> Result<TermTexture, AssetError> {
        let tex = assets::render_text(font, text, color)?;
        self.live_textures += 1;
        Ok(tex)
    }

    fn destroy_texture(&mut self, texture: TermTexture) {
        drop(texture);
        self.live_textures = self.live_textures.saturating_sub(1);
    }

    fn close_font(&mut self, font: TermFont) {
        drop(font);
        self.live_fonts = self.live_fonts.saturating_sub(1);
    }
}

impl InputSource for TermPlatform {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if !self.open {
            return None;
        }
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(err) => {
                    tracing::warn!(%err, "polling terminal events failed");
                    return None;
                }
            }
            match event::read() {
                Ok(ev) => {
                    if let Some(out) = self.translate(ev) {
                        return Some(out);
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "reading terminal event failed");
                    return None;
                }
            }
        }
    }

    fn keyboard(&mut self) -> KeyboardState {
        self.tracker.snapshot(Instant::now())
    }

    fn resumed_keys(&mut self) -> KeyboardState {
        self.tracker.resumed()
    }
}

impl Clock for TermPlatform {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms as u64));
    }
}

impl Platform for TermPlatform {
    fn open_window(&mut self, title: &str, width: u32, height: u32) -> Result<(), PlatformError> {
        if self.open {
            return Ok(());
        }

        let release_events = match self.renderer.enter(title) {
            Ok(v) => v,
            Err(err) => {
                let _ = self.renderer.exit();
                return Err(PlatformError::new("terminal", err));
            }
        };
        self.open = true;

        self.tracker = KeyboardTracker::new().with_release_events(release_events);
        self.resize_surface(width, height);

        let need_cols = self.surface.framebuffer().width();
        let need_rows = self.surface.framebuffer().height();
        match terminal::size() {
            Ok((cols, rows)) if cols < need_cols || rows < need_rows => {
                tracing::warn!(
                    cols,
                    rows,
                    need_cols,
                    need_rows,
                    "terminal is smaller than the window; output will be clipped"
                );
            }
            Ok(_) => {}
            Err(err) => tracing::debug!(%err, "terminal size unavailable"),
        }

        tracing::info!(
            title,
            width,
            height,
            cell_w = CELL_PX_W,
            cell_h = CELL_PX_H,
            release_events,
            "terminal window opened"
        );
        Ok(())
    }

    fn close_window(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        if let Err(err) = self.renderer.exit() {
            tracing::warn!(%err, "restoring terminal failed");
        }
        if self.live_textures > 0 || self.live_fonts > 0 {
            tracing::warn!(
                textures = self.live_textures,
                fonts = self.live_fonts,
                "resources still alive when the window closed"
            );
        }
        tracing::info!("terminal window closed");
    }
}
