//! Runner configuration, read from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::FRAME_MS;

/// Default location of the high-score file
pub const DEFAULT_HIGH_SCORE_PATH: &str = "highscores.txt";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub high_score_path: PathBuf,
    /// Piece generator seed; `None` picks one from the clock.
    pub seed: Option<u32>,
    pub frame_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
            seed: None,
            frame_ms: FRAME_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup (unparseable values fall back to defaults)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let high_score_path = non_empty("BLOCKFALL_HIGH_SCORES")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HIGH_SCORE_PATH));

        let seed = non_empty("BLOCKFALL_SEED").and_then(|s| s.parse().ok());

        let frame_ms = non_empty("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(FRAME_MS);

        let log_path = non_empty("BLOCKFALL_LOG_PATH").map(PathBuf::from);

        Self {
            high_score_path,
            seed,
            frame_ms,
            log_path,
        }
    }

    /// The configured seed, or one derived from the system clock
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }
}
