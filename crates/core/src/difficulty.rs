//! Difficulty tiers - tick rate derived from score
//!
//! | Score | Tier | Factor |
//! |-------|------|--------|
//! | 0-49 | `Slow` | 0.5x |
//! | 50-99 | `Steady` | 0.75x |
//! | 100-199 | `Normal` | 1.0x |
//! | 200+ | `Fast` | 2.0x |

use std::time::Duration;

use serde::Serialize;

use crate::types::{BW_MODE_SCORE, OBSTACLE_SCORE, SPEED_UP_SCORE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedTier {
    Slow,
    Steady,
    Normal,
    Fast,
}

impl SpeedTier {
    pub fn from_score(score: u32) -> Self {
        if score < SPEED_UP_SCORE {
            SpeedTier::Slow
        } else if score < BW_MODE_SCORE {
            SpeedTier::Steady
        } else if score < OBSTACLE_SCORE {
            SpeedTier::Normal
        } else {
            SpeedTier::Fast
        }
    }

    /// Multiplier applied to the base tick rate
    pub fn factor(&self) -> f32 {
        match self {
            SpeedTier::Slow => 0.5,
            SpeedTier::Steady => 0.75,
            SpeedTier::Normal => 1.0,
            SpeedTier::Fast => 2.0,
        }
    }

    /// Time between ticks when the base rate is `base_fps` ticks per second
    pub fn tick_interval(&self, base_fps: u32) -> Duration {
        let rate = base_fps.max(1) as f32 * self.factor();
        Duration::from_secs_f32(1.0 / rate)
    }
}
