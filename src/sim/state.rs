//! Session registry
//!
//! One [`GameState`] owns every live entity in typed containers, the
//! spawners that fill them, and the progression tracker. Nothing registers
//! itself anywhere; systems get explicit references to what they touch.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Asteroid, EntityIds, PowerUp, Projectile};
use super::progression::{GamePhase, ProgressionTracker, RunSummary};
use super::ship::Ship;
use super::spawner::{AsteroidSpawner, PowerUpSpawner};
use crate::economy::Economy;
use crate::tuning::Tuning;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub rng: Pcg32,
    pub ids: EntityIds,
    /// Present from the first run start on
    pub ship: Option<Ship>,
    /// Live asteroids, in spawn order
    pub asteroids: Vec<Asteroid>,
    /// Live projectiles, in fire order
    pub projectiles: Vec<Projectile>,
    pub power_ups: Vec<PowerUp>,
    pub asteroid_spawner: AsteroidSpawner,
    pub power_up_spawner: PowerUpSpawner,
    pub progression: ProgressionTracker,
}

impl GameState {
    /// A session sitting in the menu
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ids: EntityIds::default(),
            ship: None,
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            power_ups: Vec::new(),
            asteroid_spawner: AsteroidSpawner::new(
                tuning.difficulty,
                tuning.asteroids,
                tuning.arena,
            ),
            power_up_spawner: PowerUpSpawner::new(tuning.power_ups, tuning.arena),
            progression: ProgressionTracker::new(
                tuning.difficulty.max_level,
                tuning.coins_per_level,
            ),
            tuning,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.progression.phase()
    }

    /// Begin a fresh run (from the menu or after a game over).
    ///
    /// Clears the field, puts a new ship at the arena center wearing the
    /// economy's equipped skin, and resets spawners and counters.
    pub fn start_run(&mut self, economy: &impl Economy) {
        self.clear_field();
        let skin = economy.current_skin();
        self.ship = Some(Ship::new(
            self.tuning.arena.center(),
            self.tuning.ship,
            skin,
        ));
        self.asteroid_spawner.reset();
        self.power_up_spawner.reset();
        self.progression.start_run();
        log::info!("Run started (seed {}, skin {})", self.seed, skin);
    }

    /// Drop the current run, if any, and go back to the title screen
    pub fn return_to_menu(&mut self) {
        self.clear_field();
        self.ship = None;
        self.progression.return_to_menu();
    }

    /// Summary of the run that just ended
    pub fn summary(&self) -> Option<&RunSummary> {
        self.progression.summary()
    }

    /// Number of live entities, ship included
    pub fn entity_count(&self) -> usize {
        usize::from(self.ship.is_some())
            + self.asteroids.len()
            + self.projectiles.len()
            + self.power_ups.len()
    }

    fn clear_field(&mut self) {
        self.asteroids.clear();
        self.projectiles.clear();
        self.power_ups.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::Wallet;
    use crate::sim::entity::Body;
    use glam::Vec2;

    #[test]
    fn test_new_session_is_empty_menu() {
        let state = GameState::new(7, Tuning::default());
        assert_eq!(state.phase(), GamePhase::Menu);
        assert!(state.ship.is_none());
        assert_eq!(state.entity_count(), 0);
    }

    #[test]
    fn test_start_run_places_ship_with_skin() {
        let mut wallet = Wallet::with_coins(100);
        assert!(wallet.buy_skin("red"));
        assert!(wallet.set_current_skin("red"));

        let mut state = GameState::new(7, Tuning::default());
        state.start_run(&wallet);

        let ship = state.ship.as_ref().unwrap();
        assert_eq!(ship.body.pos, state.tuning.arena.center());
        assert_eq!(ship.skin_id, "red");
        assert_eq!(ship.lives, state.tuning.ship.lives);
        assert_eq!(state.phase(), GamePhase::Running);
    }

    #[test]
    fn test_restart_clears_field() {
        let wallet = Wallet::new();
        let mut state = GameState::new(7, Tuning::default());
        state.start_run(&wallet);

        let id = state.ids.next_id();
        state.asteroids.push(Asteroid {
            id,
            body: Body::new(Vec2::new(10.0, 10.0), Vec2::ZERO, 20.0),
            tier: 1,
        });
        state.asteroid_spawner.set_level(40);

        state.start_run(&wallet);
        assert!(state.asteroids.is_empty());
        assert_eq!(state.asteroid_spawner.level(), 1);
        assert_eq!(state.entity_count(), 1);

        state.return_to_menu();
        assert_eq!(state.phase(), GamePhase::Menu);
        assert_eq!(state.entity_count(), 0);
    }
}
