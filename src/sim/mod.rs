//! Frame-stepped simulation
//!
//! All gameplay logic lives here. No rendering, no input polling, no file I/O:
//! the host feeds [`TickInput`] and a frame delta, and hands in the
//! [`crate::Economy`] that receives coin rewards.

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod progression;
pub mod ship;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, circles_overlap, resolve_collisions};
pub use difficulty::DifficultyCurve;
pub use entity::{Asteroid, Body, EntityIds, PowerUp, PowerUpKind, Projectile};
pub use progression::{
    GamePhase, ProgressionTracker, RunSummary, asteroids_needed_for_level, format_survival_time,
};
pub use ship::{Ship, ShipParams};
pub use spawner::{AsteroidSpawner, PowerUpSpawner, SPAWN_ANGLE_JITTER, SpawnEdge};
pub use state::GameState;
pub use tick::{FrameReport, TickInput, autopilot, tick};
