//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads goes through [`Tuning`]. The
//! defaults come from [`crate::consts`]; a JSON file can override any subset.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;
use crate::sim::{DifficultyCurve, ShipParams};

/// Playfield size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl ArenaTuning {
    /// Center of the playfield
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if `pos` is more than `margin` beyond any edge
    pub fn is_outside(&self, pos: Vec2, margin: f32) -> bool {
        pos.x < -margin
            || pos.y < -margin
            || pos.x > self.width + margin
            || pos.y > self.height + margin
    }
}

/// Asteroid size tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTuning {
    /// Radius of a tier-1 asteroid
    pub min_radius: f32,
    /// Number of size tiers
    pub kinds: u32,
}

impl Default for AsteroidTuning {
    fn default() -> Self {
        Self {
            min_radius: ASTEROID_MIN_RADIUS,
            kinds: ASTEROID_KINDS,
        }
    }
}

impl AsteroidTuning {
    /// Radius of the largest tier (spawn offset so nothing appears pre-visible)
    pub fn max_radius(&self) -> f32 {
        self.min_radius * self.kinds as f32
    }
}

/// Power-up spawning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpTuning {
    pub radius: f32,
    /// Seconds between spawns (not difficulty-scaled)
    pub spawn_interval: f32,
}

impl Default for PowerUpTuning {
    fn default() -> Self {
        Self {
            radius: SHAKE_RADIUS,
            spawn_interval: SHAKE_SPAWN_RATE,
        }
    }
}

/// Complete game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena: ArenaTuning,
    pub ship: ShipParams,
    pub asteroids: AsteroidTuning,
    pub difficulty: DifficultyCurve,
    pub power_ups: PowerUpTuning,
    /// Coins credited per level gained
    pub coins_per_level: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena: ArenaTuning::default(),
            ship: ShipParams::default(),
            asteroids: AsteroidTuning::default(),
            difficulty: DifficultyCurve::default(),
            power_ups: PowerUpTuning::default(),
            coins_per_level: COINS_PER_LEVEL,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and validate a tuning file
    pub fn read(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a tuning file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Pretty JSON for writing a starter tuning file
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write this tuning as a starter file that [`Self::read`] accepts
    pub fn write(&self, path: &Path) -> Result<(), TuningError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: &str| Err(TuningError::Invalid(msg.to_string()));

        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            return invalid("arena dimensions must be positive");
        }
        if self.ship.radius <= 0.0 || self.ship.shot_radius <= 0.0 {
            return invalid("ship and shot radius must be positive");
        }
        if self.ship.lives == 0 {
            return invalid("ship must start with at least one life");
        }
        if self.asteroids.min_radius <= 0.0 || self.asteroids.kinds == 0 {
            return invalid("asteroids need a positive radius and at least one kind");
        }
        if self.power_ups.radius <= 0.0 || self.power_ups.spawn_interval <= 0.0 {
            return invalid("power-up radius and spawn interval must be positive");
        }
        // Interior inset of 2r on each side must leave room to spawn
        if self.power_ups.radius * 4.0 > self.arena.width.min(self.arena.height) {
            return invalid("power-up radius too large for the arena");
        }

        let d = &self.difficulty;
        if d.max_level < 2 {
            return invalid("difficulty max_level must be at least 2");
        }
        if d.min_spawn <= 0.0 || d.min_spawn > d.base_spawn {
            return invalid("spawn intervals must satisfy 0 < min_spawn <= base_spawn");
        }
        if d.base_speed_min > d.base_speed_max || d.max_speed_min > d.max_speed_max {
            return invalid("speed ranges must have min <= max");
        }
        if d.base_speed_min < 0.0 || d.max_speed_min < 0.0 {
            return invalid("asteroid speeds must be non-negative");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "coins_per_level": 3, "ship": { "lives": 5 } }"#)
            .unwrap();
        assert_eq!(tuning.coins_per_level, 3);
        assert_eq!(tuning.ship.lives, 5);
        assert_eq!(tuning.ship.radius, PLAYER_RADIUS);
        assert_eq!(tuning.difficulty.max_level, MAX_LEVEL);
    }

    #[test]
    fn test_rejects_inverted_spawn_range() {
        let json = r#"{ "difficulty": { "base_spawn": 0.1, "min_spawn": 0.5 } }"#;
        assert!(matches!(
            Tuning::from_json(json),
            Err(TuningError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let tuning = Tuning::load(&dir.path().join("missing.json"));
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_written_starter_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.json");
        Tuning::default().write(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"arena\""));
        assert_eq!(Tuning::read(&path).unwrap(), Tuning::default());
        assert_eq!(Tuning::load(&path), Tuning::default());
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("tuning.json");
        assert!(matches!(
            Tuning::default().write(&path),
            Err(TuningError::Io(_))
        ));
    }

    #[test]
    fn test_arena_outside() {
        let arena = ArenaTuning::default();
        assert!(!arena.is_outside(arena.center(), 0.0));
        assert!(arena.is_outside(Vec2::new(-10.0, 100.0), 5.0));
        assert!(!arena.is_outside(Vec2::new(-10.0, 100.0), 20.0));
    }
}
