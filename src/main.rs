//! DANGAME runner (default binary).
//!
//! Plays in the terminal: the window is the alternate screen, drawn through the
//! framebuffer renderer. Logging goes to the file named by `DANGAME_LOG_PATH`
//! (stdout/stderr belong to the game while it runs).

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::{cursor, execute, terminal};
use tracing_subscriber::EnvFilter;

use dangame::engine::{Engine, EngineConfig};
use dangame::term::TermPlatform;

fn main() -> Result<()> {
    init_tracing()?;
    install_panic_hook();

    let config = EngineConfig::from_env();
    tracing::info!(?config, "starting");

    let mut engine = Engine::new(config, TermPlatform::new());
    let result = engine.init();
    if result.is_ok() {
        engine.run();
    }
    engine.shutdown();

    result.context("startup failed")
}

fn init_tracing() -> Result<()> {
    let Some(path) = std::env::var_os("DANGAME_LOG_PATH").filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.to_string_lossy()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
    Ok(())
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show);
        tracing::error!(%info, "panic");
        default_hook(info);
    }));
}
