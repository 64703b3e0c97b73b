//! Startup, shutdown and resource accounting of the engine.

mod common;

use common::{engine_with, started_engine, MockPlatform};
use dangame::engine::TextureId;

fn ticks(engine: &mut dangame::engine::Engine<MockPlatform>, n: usize) {
    for _ in 0..n {
        assert!(engine.tick(), "engine stopped unexpectedly");
    }
}

#[test]
fn test_init_acquires_font_images_and_static_text() {
    let engine = started_engine();
    let p = engine.platform();

    assert!(engine.is_running());
    assert_eq!(p.windows_opened, 1);
    assert_eq!(p.live_fonts.len(), 1);
    assert_eq!(p.live_textures.len(), TextureId::ALL.len());
    assert_eq!(engine.textures().loaded(), TextureId::ALL.len());
    for text in ["DANGAME33", "HP:", "Bombs:", "PAUSED", "Title", "Continue"] {
        assert!(p.rendered_texts.iter().any(|t| t == text), "missing {text}");
    }
}

#[test]
fn test_shutdown_releases_everything_once() {
    let mut engine = started_engine();
    engine.shutdown();

    let p = engine.platform();
    assert!(!engine.is_running());
    assert!(p.live_textures.is_empty());
    assert!(p.live_fonts.is_empty());
    assert_eq!(p.textures_released.len(), TextureId::ALL.len());
    assert_eq!(p.fonts_released.len(), 1);
    assert_eq!(p.windows_closed, 1);
}

#[test]
fn test_double_shutdown_is_noop() {
    let mut engine = started_engine();
    engine.shutdown();
    engine.shutdown();

    let p = engine.platform();
    assert_eq!(p.textures_released.len(), TextureId::ALL.len());
    assert_eq!(p.fonts_released.len(), 1);
    assert_eq!(p.windows_closed, 1);
}

#[test]
fn test_tick_after_shutdown_does_nothing() {
    let mut engine = started_engine();
    engine.shutdown();
    assert!(!engine.tick());
    assert_eq!(engine.platform().presents, 0);
}

#[test]
fn test_window_failure_names_subsystem() {
    let mut platform = MockPlatform::new();
    platform.fail.open_window = true;
    let mut engine = engine_with(platform);

    let err = engine.init().unwrap_err();
    assert_eq!(err.subsystem(), "video");
    assert_eq!(err.to_string(), "video could not initialize: no display");
    assert!(!engine.is_running());
    assert!(!engine.tick());
    assert!(engine.platform().live_fonts.is_empty());
}

#[test]
fn test_font_failure_closes_window() {
    let mut platform = MockPlatform::new();
    platform.fail.font = true;
    let mut engine = engine_with(platform);

    let err = engine.init().unwrap_err();
    assert_eq!(err.subsystem(), "font");
    assert!(!engine.is_running());
    assert!(!engine.platform().window_open);
    assert_eq!(engine.platform().windows_closed, 1);
}

#[test]
fn test_image_failure_releases_partial_acquisitions() {
    let mut platform = MockPlatform::new();
    platform.fail.image = Some("heart.json");
    let mut engine = engine_with(platform);

    let err = engine.init().unwrap_err();
    assert_eq!(err.subsystem(), "heart icon");
    assert!(err.to_string().contains("heart.json"));

    let p = engine.platform();
    assert!(p.live_textures.is_empty());
    assert!(p.live_fonts.is_empty());
    assert_eq!(p.textures_released.len(), 1, "the player sprite");
    assert_eq!(p.fonts_released.len(), 1);
    assert!(!p.window_open);
}

#[test]
fn test_text_failure_releases_partial_acquisitions() {
    let mut platform = MockPlatform::new();
    platform.fail.text = Some("PAUSED");
    let mut engine = engine_with(platform);

    let err = engine.init().unwrap_err();
    assert_eq!(err.subsystem(), "pause caption");

    let p = engine.platform();
    assert!(p.live_textures.is_empty());
    assert!(p.live_fonts.is_empty());
    assert!(!engine.is_running());
}

#[test]
fn test_shutdown_after_failed_init_is_noop() {
    let mut platform = MockPlatform::new();
    platform.fail.image = Some("bomb.json");
    let mut engine = engine_with(platform);
    assert!(engine.init().is_err());

    let released = engine.platform().textures_released.len();
    engine.shutdown();
    assert_eq!(engine.platform().textures_released.len(), released);
    assert_eq!(engine.platform().windows_closed, 1);
}

#[test]
fn test_fps_text_replaced_on_rollover() {
    let mut engine = started_engine();

    // Tick k samples the clock at (k - 1) * 16ms; the first window closes at tick 64.
    ticks(&mut engine, 64);
    assert_eq!(engine.fps().current_fps(), 64);
    assert_eq!(
        engine.fps().texture().map(|t| t.label.as_str()),
        Some("FPS: 64")
    );

    ticks(&mut engine, 63);
    assert_eq!(engine.fps().current_fps(), 63);
    assert_eq!(
        engine.fps().texture().map(|t| t.label.as_str()),
        Some("FPS: 63")
    );

    let p = engine.platform();
    assert_eq!(p.live_textures.len(), TextureId::ALL.len() + 1);
    assert_eq!(p.textures_released.len(), 1, "previous FPS text");
}

#[test]
fn test_fps_text_failure_is_not_fatal_and_keeps_previous() {
    let mut platform = MockPlatform::new();
    platform.fail.fps_text = true;
    let mut engine = engine_with(platform);
    engine.init().unwrap();

    ticks(&mut engine, 64);
    assert_eq!(engine.fps().current_fps(), 64);
    assert!(engine.fps().texture().is_none());

    engine.platform_mut().fail.fps_text = false;
    ticks(&mut engine, 63);
    assert_eq!(
        engine.fps().texture().map(|t| t.label.as_str()),
        Some("FPS: 63")
    );

    engine.platform_mut().fail.fps_text = true;
    ticks(&mut engine, 63);
    assert!(engine.is_running());
    assert_eq!(
        engine.fps().texture().map(|t| t.label.as_str()),
        Some("FPS: 63")
    );
    assert!(engine.platform().textures_released.is_empty());
}

#[test]
fn test_fps_text_released_at_shutdown() {
    let mut engine = started_engine();
    ticks(&mut engine, 64);
    engine.shutdown();

    let p = engine.platform();
    assert!(p.live_textures.is_empty());
    assert_eq!(p.textures_released.len(), TextureId::ALL.len() + 1);
}

#[test]
fn test_present_failure_stops_loop() {
    let mut engine = started_engine();
    engine.platform_mut().fail.present = true;

    assert!(!engine.tick());
    assert!(!engine.is_running());
    assert!(engine.platform().sleeps.is_empty());
}

#[test]
fn test_init_twice_does_not_reacquire() {
    let mut engine = started_engine();
    engine.init().unwrap();
    assert_eq!(engine.platform().windows_opened, 1);
    assert_eq!(engine.platform().live_textures.len(), TextureId::ALL.len());
}
