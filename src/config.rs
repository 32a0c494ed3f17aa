//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SNAKE_SCORES_PATH` | `snake_scores.txt` |
//! | `SNAKE_GRID_WIDTH` / `SNAKE_GRID_HEIGHT` | 20 / 20 |
//! | `SNAKE_BASE_FPS` | 10 |
//! | `SNAKE_SEED` | derived from the clock |
//! | `SNAKE_LOG_PATH` | unset (logging off) |
//! | `SNAKE_LOG` | `info` |
//!
//! Values that fail to parse fall back to the default.

use std::path::PathBuf;
use std::str::FromStr;

use chrono::Utc;

use crate::core::{Grid, ValidationError};
use crate::types::{BASE_FPS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

pub const DEFAULT_SCORES_PATH: &str = "snake_scores.txt";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub scores_path: PathBuf,
    pub grid_width: i32,
    pub grid_height: i32,
    /// Ticks per second at speed factor 1.0.
    pub base_fps: u32,
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            base_fps: BASE_FPS,
            seed: clock_seed(),
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing or unparseable values use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            scores_path: non_empty(&lookup, "SNAKE_SCORES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.scores_path),
            grid_width: parsed(&lookup, "SNAKE_GRID_WIDTH").unwrap_or(defaults.grid_width),
            grid_height: parsed(&lookup, "SNAKE_GRID_HEIGHT").unwrap_or(defaults.grid_height),
            base_fps: parsed(&lookup, "SNAKE_BASE_FPS")
                .filter(|&fps: &u32| fps > 0)
                .unwrap_or(defaults.base_fps),
            seed: parsed(&lookup, "SNAKE_SEED").unwrap_or(defaults.seed),
            log_path: non_empty(&lookup, "SNAKE_LOG_PATH").map(PathBuf::from),
            log_filter: non_empty(&lookup, "SNAKE_LOG").unwrap_or(defaults.log_filter),
        }
    }

    /// Validated playfield for these dimensions
    pub fn grid(&self) -> Result<Grid, ValidationError> {
        Grid::new(self.grid_width, self.grid_height)
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    non_empty(lookup, key).and_then(|s| s.parse().ok())
}

fn clock_seed() -> u32 {
    let now = Utc::now();
    (now.timestamp() as u32) ^ now.timestamp_subsec_nanos()
}
