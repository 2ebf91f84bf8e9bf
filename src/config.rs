//! Runtime configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `SNAKE_TETRIS_SEED` | derived from the clock |
//! | `SNAKE_TETRIS_HIGHSCORE_PATH` | `highscore.json` in the per-user data dir |
//! | `SNAKE_TETRIS_LOG` | unset (no logging) |
//! | `SNAKE_TETRIS_MUTE` | `false` |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use directories::ProjectDirs;

pub const HIGHSCORE_FILE: &str = "highscore.json";

/// Platform data directory for the game, e.g. `~/.local/share/snake-tetris`
/// on Linux. None when no home directory can be resolved.
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "snake-tetris").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Default high-score file. Falls back to the working directory only when
/// the platform has no per-user data directory.
pub fn default_highscore_path() -> PathBuf {
    data_dir()
        .map(|dir| dir.join(HIGHSCORE_FILE))
        .unwrap_or_else(|| PathBuf::from(HIGHSCORE_FILE))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed RNG seed; None picks one from the clock
    pub seed: Option<u32>,
    pub highscore_path: PathBuf,
    /// Log file. The terminal is in raw mode, so logs never go to stderr.
    pub log_path: Option<PathBuf>,
    pub muted: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map instead of the process env)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("SNAKE_TETRIS_SEED").and_then(|s| s.parse().ok());

        let highscore_path = non_empty("SNAKE_TETRIS_HIGHSCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_highscore_path);

        let log_path = non_empty("SNAKE_TETRIS_LOG").map(PathBuf::from);

        let muted = non_empty("SNAKE_TETRIS_MUTE")
            .map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Self {
            seed,
            highscore_path,
            log_path,
            muted,
        }
    }

    /// Seed to use for this run
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u32)
                .unwrap_or(1)
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let c = config(&[]);
        assert_eq!(c.seed, None);
        assert_eq!(c.highscore_path, default_highscore_path());
        assert_eq!(c.log_path, None);
        assert!(!c.muted);
    }

    #[test]
    fn default_highscore_lives_in_project_data_dir() {
        let path = default_highscore_path();
        assert!(path.ends_with(HIGHSCORE_FILE));
        match data_dir() {
            Some(dir) => {
                assert_eq!(path.parent(), Some(dir.as_path()));
                assert!(dir.is_absolute());
            }
            None => assert_eq!(path, PathBuf::from(HIGHSCORE_FILE)),
        }
    }

    #[test]
    fn home_variable_in_lookup_is_not_consulted() {
        let c = config(&[("HOME", "/home/player")]);
        assert_eq!(c.highscore_path, default_highscore_path());
    }

    #[test]
    fn overrides() {
        let c = config(&[
            ("SNAKE_TETRIS_SEED", "42"),
            ("SNAKE_TETRIS_HIGHSCORE_PATH", "/tmp/hs.json"),
            ("SNAKE_TETRIS_LOG", " /tmp/game.log "),
            ("SNAKE_TETRIS_MUTE", "TRUE"),
        ]);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.seed(), 42);
        assert_eq!(c.highscore_path, PathBuf::from("/tmp/hs.json"));
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/game.log")));
        assert!(c.muted);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let c = config(&[
            ("SNAKE_TETRIS_SEED", "abc"),
            ("SNAKE_TETRIS_LOG", "   "),
            ("SNAKE_TETRIS_MUTE", "0"),
        ]);
        assert_eq!(c.seed, None);
        assert_eq!(c.log_path, None);
        assert!(!c.muted);
    }
}
