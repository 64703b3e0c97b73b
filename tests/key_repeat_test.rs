//! Terminal key tracking feeding edge detection, without key-release events.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use dangame::core::InputEdgeTracker;
use dangame::input::KeyboardTracker;
use dangame::types::Key;

fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

/// Hold `code` for `hold_ms`: one press, then OS repeats every 32ms after an
/// initial 496ms delay. Samples every 16ms; returns edge count and held ticks.
fn hold_without_release_events(code: KeyCode, key: Key, hold_ms: u64) -> (usize, usize) {
    let mut kt = KeyboardTracker::new();
    let mut edges = InputEdgeTracker::new();
    let t0 = Instant::now();
    kt.handle_key_event(event(code, KeyEventKind::Press), t0);

    let mut next_repeat = 496;
    let mut fired = 0;
    let mut held_ticks = 0;
    for ms in (0..hold_ms).step_by(16) {
        while next_repeat <= ms {
            let at = t0 + Duration::from_millis(next_repeat);
            kt.handle_key_event(event(code, KeyEventKind::Repeat), at);
            next_repeat += 32;
        }
        let now = t0 + Duration::from_millis(ms);
        let keys = kt.snapshot(now);
        if edges.sample_resumed(keys, kt.resumed()).just_pressed(key) {
            fired += 1;
        }
        if keys.pressed(key) {
            held_ticks += 1;
        }
    }
    (fired, held_ticks)
}

#[test]
fn test_one_physical_hold_fires_one_edge() {
    for (code, key) in [
        (KeyCode::Char('p'), Key::Pause),
        (KeyCode::Char('x'), Key::Bomb),
        (KeyCode::Enter, Key::Confirm),
        (KeyCode::Up, Key::Up),
    ] {
        let (fired, _) = hold_without_release_events(code, key, 1000);
        assert_eq!(fired, 1, "{key:?}");
    }
}

#[test]
fn test_held_movement_key_comes_back_on_repeat() {
    let (_, held_ticks) = hold_without_release_events(KeyCode::Up, Key::Up, 1000);
    // Held for the first 150ms and again from the first repeat on.
    assert!(held_ticks > 40, "held for {held_ticks} ticks");
}

#[test]
fn test_second_press_after_repeats_fires_again() {
    let mut kt = KeyboardTracker::new();
    let mut edges = InputEdgeTracker::new();
    let t0 = Instant::now();
    let p = |kind| event(KeyCode::Char('p'), kind);

    kt.handle_key_event(p(KeyEventKind::Press), t0);
    let keys = kt.snapshot(t0);
    assert!(edges.sample_resumed(keys, kt.resumed()).just_pressed(Key::Pause));

    let t1 = t0 + Duration::from_millis(500);
    let keys = kt.snapshot(t1);
    assert!(edges.sample_resumed(keys, kt.resumed()).is_empty());
    kt.handle_key_event(p(KeyEventKind::Repeat), t1);
    let keys = kt.snapshot(t1);
    assert!(edges.sample_resumed(keys, kt.resumed()).is_empty());

    let t2 = t1 + Duration::from_millis(400);
    let keys = kt.snapshot(t2);
    assert!(edges.sample_resumed(keys, kt.resumed()).is_empty());
    kt.handle_key_event(p(KeyEventKind::Press), t2);
    let keys = kt.snapshot(t2);
    assert!(edges.sample_resumed(keys, kt.resumed()).just_pressed(Key::Pause));
}
