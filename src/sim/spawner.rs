//! Timed spawners for asteroids and power-ups
//!
//! Both use a reset-to-zero timer: when the timer passes the interval it goes
//! back to 0 and exactly one entity spawns. Time beyond the interval is
//! dropped, so a long frame never produces a burst.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyCurve;
use super::entity::{Asteroid, Body, EntityIds, PowerUp, PowerUpKind};
use crate::rotate_degrees;
use crate::tuning::{ArenaTuning, AsteroidTuning, PowerUpTuning};

/// Maximum deviation of an asteroid's heading from straight inward (degrees)
pub const SPAWN_ANGLE_JITTER: f32 = 30.0;

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Left,
        SpawnEdge::Right,
        SpawnEdge::Top,
        SpawnEdge::Bottom,
    ];

    /// Unit direction pointing into the playfield
    pub fn inward(self) -> Vec2 {
        match self {
            SpawnEdge::Left => Vec2::X,
            SpawnEdge::Right => Vec2::NEG_X,
            SpawnEdge::Top => Vec2::Y,
            SpawnEdge::Bottom => Vec2::NEG_Y,
        }
    }

    /// Point just outside this edge, `t` in [0, 1] along it
    pub fn position(self, t: f32, arena: &ArenaTuning, offset: f32) -> Vec2 {
        match self {
            SpawnEdge::Left => Vec2::new(-offset, t * arena.height),
            SpawnEdge::Right => Vec2::new(arena.width + offset, t * arena.height),
            SpawnEdge::Top => Vec2::new(t * arena.width, -offset),
            SpawnEdge::Bottom => Vec2::new(t * arena.width, arena.height + offset),
        }
    }
}

/// Spawns asteroids at the screen edges, faster and quicker as the level rises
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidSpawner {
    timer: f32,
    level: u32,
    curve: DifficultyCurve,
    sizes: AsteroidTuning,
    arena: ArenaTuning,
}

impl AsteroidSpawner {
    pub fn new(curve: DifficultyCurve, sizes: AsteroidTuning, arena: ArenaTuning) -> Self {
        Self {
            timer: 0.0,
            level: 1,
            curve,
            sizes,
            arena,
        }
    }

    /// Set the difficulty level for future spawns (clamped to the curve)
    pub fn set_level(&mut self, level: u32) {
        self.level = self.curve.clamp_level(level);
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Seconds since the last spawn
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Current spawn interval for this spawner's level
    pub fn interval(&self) -> f32 {
        self.curve.spawn_interval(self.level)
    }

    /// Back to level 1 with a fresh timer
    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.level = 1;
    }

    /// Advance the timer; spawns at most one asteroid into `asteroids`.
    ///
    /// Returns true if an asteroid was spawned.
    pub fn update(
        &mut self,
        dt: f32,
        rng: &mut impl Rng,
        ids: &mut EntityIds,
        asteroids: &mut Vec<Asteroid>,
    ) -> bool {
        self.timer += dt;
        if self.timer <= self.interval() {
            return false;
        }
        self.timer = 0.0;

        let asteroid = self.roll_asteroid(rng, ids);
        log::trace!(
            "Asteroid {} tier {} at {} vel {}",
            asteroid.id,
            asteroid.tier,
            asteroid.body.pos,
            asteroid.body.vel
        );
        asteroids.push(asteroid);
        true
    }

    fn roll_asteroid(&self, rng: &mut impl Rng, ids: &mut EntityIds) -> Asteroid {
        let edge = SpawnEdge::ALL[rng.random_range(0..SpawnEdge::ALL.len())];

        let (speed_min, speed_max) = self.curve.speed_range(self.level);
        let speed = rng.random_range(speed_min..=speed_max) as f32;

        let jitter = rng.random_range(-SPAWN_ANGLE_JITTER..=SPAWN_ANGLE_JITTER);
        let vel = rotate_degrees(edge.inward() * speed, jitter);

        let pos = edge.position(rng.random::<f32>(), &self.arena, self.sizes.max_radius());

        let tier = rng.random_range(1..=self.sizes.kinds);
        let radius = self.sizes.min_radius * tier as f32;

        Asteroid {
            id: ids.next_id(),
            body: Body::new(pos, vel, radius),
            tier,
        }
    }
}

/// Spawns power-ups at random fully-visible points on a fixed timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpSpawner {
    timer: f32,
    tuning: PowerUpTuning,
    arena: ArenaTuning,
}

impl PowerUpSpawner {
    pub fn new(tuning: PowerUpTuning, arena: ArenaTuning) -> Self {
        Self {
            timer: 0.0,
            tuning,
            arena,
        }
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    /// Advance the timer; spawns at most one power-up into `power_ups`.
    pub fn update(
        &mut self,
        dt: f32,
        rng: &mut impl Rng,
        ids: &mut EntityIds,
        power_ups: &mut Vec<PowerUp>,
    ) -> bool {
        self.timer += dt;
        if self.timer <= self.tuning.spawn_interval {
            return false;
        }
        self.timer = 0.0;

        let inset = self.tuning.radius * 2.0;
        let pos = Vec2::new(
            rng.random_range(inset..=self.arena.width - inset),
            rng.random_range(inset..=self.arena.height - inset),
        );
        let power_up = PowerUp {
            id: ids.next_id(),
            kind: PowerUpKind::Shake,
            body: Body::new(pos, Vec2::ZERO, self.tuning.radius),
        };
        log::debug!("{:?} power-up spawned at {}", power_up.kind, pos);
        power_ups.push(power_up);
        true
    }
}
