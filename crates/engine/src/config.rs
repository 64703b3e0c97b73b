use std::path::PathBuf;

use crate::types::{
    DEFAULT_TITLE, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MAX_WINDOW_DIM, TICK_MS,
};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub asset_dir: PathBuf,
    pub tick_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            asset_dir: PathBuf::from("assets"),
            tick_ms: TICK_MS,
        }
    }
}

impl EngineConfig {
    /// Create from `DANGAME_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create from an arbitrary variable lookup.
    ///
    /// Missing, unparsable or non-positive values keep the default, as do window
    /// dimensions above [`MAX_WINDOW_DIM`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let positive = |name: &str, fallback: u32| {
            var(name)
                .and_then(|s| s.parse::<u32>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(fallback)
        };
        let dimension = |name: &str, fallback: u32| {
            Some(positive(name, fallback))
                .filter(|&v| v <= MAX_WINDOW_DIM)
                .unwrap_or(fallback)
        };

        Self {
            title: var("DANGAME_TITLE").unwrap_or(defaults.title),
            width: dimension("DANGAME_WIDTH", defaults.width),
            height: dimension("DANGAME_HEIGHT", defaults.height),
            asset_dir: var("DANGAME_ASSETS")
                .map(PathBuf::from)
                .unwrap_or(defaults.asset_dir),
            tick_ms: positive("DANGAME_TICK_MS", defaults.tick_ms),
        }
    }

    pub fn font_path(&self) -> PathBuf {
        self.asset_dir.join("font.json")
    }

    pub fn player_path(&self) -> PathBuf {
        self.asset_dir.join("player.json")
    }

    pub fn heart_path(&self) -> PathBuf {
        self.asset_dir.join("heart.json")
    }

    pub fn bomb_path(&self) -> PathBuf {
        self.asset_dir.join("bomb.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        assert_eq!(EngineConfig::from_lookup(lookup(&[])), EngineConfig::default());
    }

    #[test]
    fn test_values_are_read() {
        let cfg = EngineConfig::from_lookup(lookup(&[
            ("DANGAME_TITLE", "demo"),
            ("DANGAME_WIDTH", "800"),
            ("DANGAME_HEIGHT", "600"),
            ("DANGAME_ASSETS", "/tmp/art"),
            ("DANGAME_TICK_MS", "10"),
        ]));
        assert_eq!(cfg.title, "demo");
        assert_eq!((cfg.width, cfg.height), (800, 600));
        assert_eq!(cfg.tick_ms, 10);
        assert_eq!(cfg.player_path(), PathBuf::from("/tmp/art/player.json"));
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let cfg = EngineConfig::from_lookup(lookup(&[
            ("DANGAME_WIDTH", "0"),
            ("DANGAME_HEIGHT", "-5"),
            ("DANGAME_TICK_MS", "fast"),
            ("DANGAME_TITLE", "   "),
        ]));
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn test_oversized_window_falls_back() {
        let cfg = EngineConfig::from_lookup(lookup(&[
            ("DANGAME_WIDTH", "4000000000"),
            ("DANGAME_HEIGHT", "1500000000"),
        ]));
        assert_eq!((cfg.width, cfg.height), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));

        let max = MAX_WINDOW_DIM.to_string();
        let cfg = EngineConfig::from_lookup(lookup(&[("DANGAME_WIDTH", max.as_str())]));
        assert_eq!(cfg.width, MAX_WINDOW_DIM);
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = EngineConfig::from_env();
    }
}
