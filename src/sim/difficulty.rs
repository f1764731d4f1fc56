//! Level → spawn rate and asteroid speed
//!
//! Linear interpolation between the level-1 and max-level endpoints.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty endpoints. Pure: every query depends only on the level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyCurve {
    pub max_level: u32,
    /// Seconds between asteroid spawns at level 1
    pub base_spawn: f32,
    /// Seconds between asteroid spawns at max level
    pub min_spawn: f32,
    pub base_speed_min: f32,
    pub base_speed_max: f32,
    pub max_speed_min: f32,
    pub max_speed_max: f32,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            base_spawn: BASE_ASTEROID_SPAWN_RATE,
            min_spawn: MIN_ASTEROID_SPAWN_RATE,
            base_speed_min: BASE_ASTEROID_SPEED_MIN,
            base_speed_max: BASE_ASTEROID_SPEED_MAX,
            max_speed_min: MAX_ASTEROID_SPEED_MIN,
            max_speed_max: MAX_ASTEROID_SPEED_MAX,
        }
    }
}

impl DifficultyCurve {
    /// Clamp a level into 1..=max_level
    pub fn clamp_level(&self, level: u32) -> u32 {
        level.clamp(1, self.max_level)
    }

    /// Normalized position of `level` between 1 and max_level, in [0, 1]
    pub fn progress(&self, level: u32) -> f32 {
        let level = self.clamp_level(level);
        let span = self.max_level.saturating_sub(1).max(1);
        ((level - 1) as f32 / span as f32).clamp(0.0, 1.0)
    }

    /// Seconds between asteroid spawns
    pub fn spawn_interval(&self, level: u32) -> f32 {
        let p = self.progress(level);
        if p >= 1.0 {
            return self.min_spawn;
        }
        self.base_spawn - (self.base_spawn - self.min_spawn) * p
    }

    /// Integer asteroid speed bounds (floored), inclusive
    pub fn speed_range(&self, level: u32) -> (u32, u32) {
        let p = self.progress(level);
        let min = self.base_speed_min + (self.max_speed_min - self.base_speed_min) * p;
        let max = self.base_speed_max + (self.max_speed_max - self.base_speed_max) * p;
        (min.floor() as u32, max.floor() as u32)
    }
}
