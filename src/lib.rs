//! Asteroid Survival - a 1000-level asteroid survival arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (spawning, physics, collisions, progression)
//! - `economy`: Coin balance and skin ownership, with JSON persistence
//! - `skins`: Static skin catalog and ship paint resolution
//! - `shop`: Skin selection rules for the shop screen
//! - `tuning`: Data-driven game balance

pub mod economy;
pub mod error;
pub mod shop;
pub mod sim;
pub mod skins;
pub mod tuning;

pub use economy::{Economy, SaveRecord, SaveStore, Wallet};
pub use error::{SaveError, TuningError};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Target host frame rate
    pub const FRAME_RATE: f32 = 60.0;
    /// Frame delta at the target rate
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE;

    /// Arena dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Asteroid sizes: radius = ASTEROID_MIN_RADIUS * tier, tier in 1..=ASTEROID_KINDS
    pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
    pub const ASTEROID_KINDS: u32 = 3;

    /// Ship defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Degrees per second
    pub const PLAYER_TURN_SPEED: f32 = 300.0;
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_SHOOT_SPEED: f32 = 500.0;
    pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.3;
    pub const PLAYER_LIVES: u32 = 3;
    pub const SHOT_RADIUS: f32 = 5.0;

    /// Shake power-up
    pub const SHAKE_RADIUS: f32 = 30.0;
    pub const SHAKE_SPAWN_RATE: f32 = 15.0;
    pub const SHAKE_EFFECT_DURATION: f32 = 5.0;

    /// Economy
    pub const COINS_PER_LEVEL: u64 = 1;
    pub const STARTING_COINS: u64 = 0;

    /// Difficulty curve endpoints (level 1 → MAX_LEVEL)
    pub const MAX_LEVEL: u32 = 1000;
    pub const BASE_ASTEROID_SPAWN_RATE: f32 = 1.5;
    pub const MIN_ASTEROID_SPAWN_RATE: f32 = 0.05;
    pub const BASE_ASTEROID_SPEED_MIN: f32 = 20.0;
    pub const BASE_ASTEROID_SPEED_MAX: f32 = 40.0;
    pub const MAX_ASTEROID_SPEED_MIN: f32 = 100.0;
    pub const MAX_ASTEROID_SPEED_MAX: f32 = 200.0;

    /// Rainbow skin phase advance (radians per second)
    pub const RAINBOW_PHASE_RATE: f32 = 6.0;
}

/// Unit vector the ship faces at `heading` degrees.
///
/// Heading 0 points along +Y (screen down); positive headings turn clockwise
/// on screen, matching a y-down coordinate system.
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    rotate_degrees(Vec2::Y, heading)
}

/// Rotate `v` by `degrees`
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}
