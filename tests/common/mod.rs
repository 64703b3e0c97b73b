//! Headless platform for driving the engine in tests.
//!
//! Records every draw call and every acquire/release, exposes the keyboard
//! level and event queue directly, and advances a fake clock on sleep.

#![allow(dead_code)]

use std::collections::{BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

use dangame::core::{
    AssetError, Clock, InputSource, Platform, PlatformError, RenderSurface, ResourceLoader,
};
use dangame::engine::{Engine, EngineConfig};
use dangame::types::{InputEvent, Key, KeyboardState, Rect, Rgb};

#[derive(Debug, PartialEq, Eq)]
pub struct MockTexture {
    pub id: u32,
    pub label: String,
    pub size: (u32, u32),
}

#[derive(Debug, PartialEq, Eq)]
pub struct MockFont {
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Rgb),
    FillRect(Rect, Rgb),
    FillCircle(i32, i32, i32, Rgb),
    Texture(String, Rect),
}

/// Which acquisitions fail.
#[derive(Debug, Default)]
pub struct Failures {
    pub open_window: bool,
    pub font: bool,
    /// File name of an image that fails to load.
    pub image: Option<&'static str>,
    /// Exact text that fails to render.
    pub text: Option<&'static str>,
    /// Every `FPS: ...` text fails.
    pub fps_text: bool,
    pub present: bool,
}

#[derive(Debug, Default)]
pub struct MockPlatform {
    pub events: VecDeque<InputEvent>,
    pub keys: KeyboardState,
    pub resumed: KeyboardState,
    pub now_ms: u64,
    pub sleeps: Vec<u32>,
    pub fail: Failures,

    pub window_open: bool,
    pub windows_opened: u32,
    pub windows_closed: u32,

    next_id: u32,
    pub live_textures: BTreeSet<u32>,
    pub textures_released: Vec<u32>,
    pub live_fonts: BTreeSet<u32>,
    pub fonts_released: Vec<u32>,
    pub rendered_texts: Vec<String>,

    pub current: Vec<DrawCall>,
    pub last_frame: Vec<DrawCall>,
    pub presents: u32,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn texture(&mut self, label: String, size: (u32, u32)) -> MockTexture {
        let id = self.next_id();
        self.live_textures.insert(id);
        MockTexture { id, label, size }
    }

    pub fn hold(&mut self, keys: &[Key]) {
        self.keys = keys.iter().copied().collect();
    }

    pub fn release_all(&mut self) {
        self.keys = KeyboardState::new();
        self.resumed = KeyboardState::new();
    }

    /// Labels of the textures drawn in the last presented frame.
    pub fn drawn_labels(&self) -> Vec<&str> {
        self.last_frame
            .iter()
            .filter_map(|c| match c {
                DrawCall::Texture(label, _) => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn drawn_rect(&self, label: &str) -> Option<Rect> {
        self.last_frame.iter().find_map(|c| match c {
            DrawCall::Texture(l, r) if l == label => Some(*r),
            _ => None,
        })
    }
}

impl RenderSurface for MockPlatform {
    type Texture = MockTexture;

    fn clear(&mut self, color: Rgb) {
        self.current.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.current.push(DrawCall::FillRect(rect, color));
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
        self.current.push(DrawCall::FillCircle(cx, cy, radius, color));
    }

    fn draw_texture(&mut self, texture: &MockTexture, dst: Rect) {
        assert!(
            self.live_textures.contains(&texture.id),
            "drawing released texture {}",
            texture.label
        );
        self.current.push(DrawCall::Texture(texture.label.clone(), dst));
    }

    fn texture_size(&self, texture: &MockTexture) -> (u32, u32) {
        texture.size
    }

    fn present(&mut self) -> Result<(), PlatformError> {
        if self.fail.present {
            return Err(PlatformError::new("renderer", "broken pipe"));
        }
        self.last_frame = std::mem::take(&mut self.current);
        self.presents += 1;
        Ok(())
    }
}

impl ResourceLoader for MockPlatform {
    type Font = MockFont;

    fn load_image(&mut self, path: &Path) -> Result<MockTexture, AssetError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.fail.image == Some(name.as_str()) {
            return Err(AssetError::Decode {
                path: PathBuf::from(path),
                detail: "corrupt".to_string(),
            });
        }
        let size = if name == "player.json" { (24, 32) } else { (16, 16) };
        Ok(self.texture(name, size))
    }

    fn load_font(&mut self, path: &Path) -> Result<MockFont, AssetError> {
        if self.fail.font {
            return Err(AssetError::Io {
                path: PathBuf::from(path),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            });
        }
        let id = self.next_id();
        self.live_fonts.insert(id);
        Ok(MockFont { id })
    }

    fn render_text(
        &mut self,
        font: &MockFont,
        text: &str,
        _color: Rgb,
    ) -> Result<MockTexture, AssetError> {
        assert!(self.live_fonts.contains(&font.id), "rendering with a closed font");
        if text.is_empty() {
            return Err(AssetError::EmptyText);
        }
        if self.fail.text == Some(text) || (self.fail.fps_text && text.starts_with("FPS:")) {
            return Err(AssetError::Decode {
                path: PathBuf::from("<text>"),
                detail: format!("cannot render {text:?}"),
            });
        }
        self.rendered_texts.push(text.to_string());
        let width = 8 * text.chars().count() as u32;
        Ok(self.texture(text.to_string(), (width, 16)))
    }

    fn destroy_texture(&mut self, texture: MockTexture) {
        assert!(
            self.live_textures.remove(&texture.id),
            "texture {} released twice",
            texture.label
        );
        self.textures_released.push(texture.id);
    }

    fn close_font(&mut self, font: MockFont) {
        assert!(self.live_fonts.remove(&font.id), "font released twice");
        self.fonts_released.push(font.id);
    }
}

impl InputSource for MockPlatform {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    fn keyboard(&mut self) -> KeyboardState {
        self.keys
    }

    fn resumed_keys(&mut self) -> KeyboardState {
        self.resumed
    }
}

impl Clock for MockPlatform {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.sleeps.push(ms);
        self.now_ms += ms as u64;
    }
}

impl Platform for MockPlatform {
    fn open_window(
        &mut self,
        _title: &str,
        _width: u32,
        _height: u32,
    ) -> Result<(), PlatformError> {
        if self.fail.open_window {
            return Err(PlatformError::new("video", "no display"));
        }
        self.window_open = true;
        self.windows_opened += 1;
        Ok(())
    }

    fn close_window(&mut self) {
        if self.window_open {
            self.window_open = false;
            self.windows_closed += 1;
        }
    }
}

pub fn engine_with(platform: MockPlatform) -> Engine<MockPlatform> {
    Engine::new(EngineConfig::default(), platform)
}

/// An initialized engine on the title screen.
pub fn started_engine() -> Engine<MockPlatform> {
    let mut engine = engine_with(MockPlatform::new());
    engine.init().expect("mock init succeeds");
    engine
}

/// An initialized engine already in the Running state.
pub fn running_engine() -> Engine<MockPlatform> {
    let mut engine = started_engine();
    engine
        .platform_mut()
        .events
        .push_back(InputEvent::KeyDown(Key::Confirm));
    assert!(engine.tick());
    engine
}

/// Tick with `keys` held, then with nothing held.
pub fn tap(engine: &mut Engine<MockPlatform>, keys: &[Key]) {
    engine.platform_mut().hold(keys);
    engine.tick();
    engine.platform_mut().release_all();
    engine.tick();
}
