//! Collision detection and resolution
//!
//! Everything is a circle, so detection is a single distance test. The
//! interesting part is the sweep order: each step removes what it destroys
//! before the next pair is tested, so nothing is counted twice in a frame.

use glam::Vec2;

use super::entity::{Asteroid, PowerUp, PowerUpKind, Projectile};
use super::ship::Ship;

/// Two circles collide iff the distance between centers is strictly less
/// than the sum of their radii. Touching circles do not collide.
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// What one sweep did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Asteroids that hit the ship (each costs a life)
    pub ship_hits: u32,
    /// Ship ran out of lives during this sweep
    pub ship_destroyed: bool,
    /// Power-ups picked up
    pub power_ups_collected: Vec<PowerUpKind>,
    /// Asteroids destroyed by projectiles
    pub asteroids_shot: u32,
}

/// Run one sweep over all live entities, in fixed order:
///
/// 1. ship × asteroids: the asteroid is destroyed and the ship loses a life.
///    Ship death is reported but the sweep keeps going.
/// 2. ship × power-ups: the buff is applied and the power-up destroyed.
/// 3. asteroids × projectiles: both destroyed, one kill counted. The first
///    overlapping projectile (in spawn order) takes the asteroid.
///
/// Destroyed entities are removed immediately and never tested again.
pub fn resolve_collisions(
    ship: &mut Ship,
    asteroids: &mut Vec<Asteroid>,
    projectiles: &mut Vec<Projectile>,
    power_ups: &mut Vec<PowerUp>,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    asteroids.retain(|asteroid| {
        if !ship.body.overlaps(&asteroid.body) {
            return true;
        }
        report.ship_hits += 1;
        if ship.take_damage() {
            report.ship_destroyed = true;
        }
        log::debug!("Ship hit by asteroid {}, {} lives left", asteroid.id, ship.lives);
        false
    });

    power_ups.retain(|power_up| {
        if !ship.body.overlaps(&power_up.body) {
            return true;
        }
        match power_up.kind {
            PowerUpKind::Shake => ship.apply_buff(),
        }
        report.power_ups_collected.push(power_up.kind);
        log::debug!("{:?} power-up collected", power_up.kind);
        false
    });

    asteroids.retain(|asteroid| {
        match projectiles
            .iter()
            .position(|shot| asteroid.body.overlaps(&shot.body))
        {
            Some(idx) => {
                projectiles.remove(idx);
                report.asteroids_shot += 1;
                false
            }
            None => true,
        }
    });

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Body, EntityIds};
    use crate::sim::ship::ShipParams;
    use proptest::prelude::*;

    struct Scene {
        ids: EntityIds,
        ship: Ship,
        asteroids: Vec<Asteroid>,
        projectiles: Vec<Projectile>,
        power_ups: Vec<PowerUp>,
    }

    impl Scene {
        fn new() -> Self {
            Self {
                ids: EntityIds::default(),
                ship: Ship::new(Vec2::new(500.0, 500.0), ShipParams::default(), "white"),
                asteroids: Vec::new(),
                projectiles: Vec::new(),
                power_ups: Vec::new(),
            }
        }

        fn asteroid(&mut self, x: f32, y: f32, radius: f32) -> u32 {
            let id = self.ids.next_id();
            self.asteroids.push(Asteroid {
                id,
                body: Body::new(Vec2::new(x, y), Vec2::ZERO, radius),
                tier: 1,
            });
            id
        }

        fn shot(&mut self, x: f32, y: f32) -> u32 {
            let id = self.ids.next_id();
            self.projectiles.push(Projectile {
                id,
                body: Body::new(Vec2::new(x, y), Vec2::ZERO, 5.0),
            });
            id
        }

        fn power_up(&mut self, x: f32, y: f32) {
            let id = self.ids.next_id();
            self.power_ups.push(PowerUp {
                id,
                kind: PowerUpKind::Shake,
                body: Body::new(Vec2::new(x, y), Vec2::ZERO, 30.0),
            });
        }

        fn sweep(&mut self) -> CollisionReport {
            resolve_collisions(
                &mut self.ship,
                &mut self.asteroids,
                &mut self.projectiles,
                &mut self.power_ups,
            )
        }
    }

    #[test]
    fn test_tangent_circles_do_not_collide() {
        assert!(!circles_overlap(Vec2::ZERO, 3.0, Vec2::new(5.0, 0.0), 2.0));
        assert!(circles_overlap(Vec2::ZERO, 3.0, Vec2::new(4.999, 0.0), 2.0));
        assert!(circles_overlap(Vec2::ZERO, 1.0, Vec2::ZERO, 1.0));
    }

    #[test]
    fn test_ship_asteroid_costs_life_and_destroys_asteroid() {
        let mut scene = Scene::new();
        scene.asteroid(510.0, 500.0, 20.0);
        let far = scene.asteroid(100.0, 100.0, 20.0);

        let report = scene.sweep();
        assert_eq!(report.ship_hits, 1);
        assert!(!report.ship_destroyed);
        assert_eq!(scene.ship.lives, 2);
        assert_eq!(scene.asteroids.len(), 1);
        assert_eq!(scene.asteroids[0].id, far);
    }

    #[test]
    fn test_death_does_not_stop_sweep() {
        let mut scene = Scene::new();
        scene.ship.lives = 1;
        scene.asteroid(505.0, 500.0, 20.0);
        scene.asteroid(495.0, 500.0, 20.0);
        scene.power_up(520.0, 500.0);
        scene.asteroid(100.0, 100.0, 20.0);
        scene.shot(100.0, 110.0);

        let report = scene.sweep();
        assert!(report.ship_destroyed);
        assert_eq!(report.ship_hits, 2);
        assert_eq!(scene.ship.lives, 0);
        assert_eq!(report.power_ups_collected, vec![PowerUpKind::Shake]);
        assert_eq!(report.asteroids_shot, 1);
        assert!(scene.asteroids.is_empty());
        assert!(scene.projectiles.is_empty());
        assert!(scene.power_ups.is_empty());
    }

    #[test]
    fn test_power_up_applies_buff() {
        let mut scene = Scene::new();
        scene.power_up(540.0, 500.0);
        scene.power_up(900.0, 900.0);

        let report = scene.sweep();
        assert_eq!(report.power_ups_collected.len(), 1);
        assert!(scene.ship.has_buff());
        assert_eq!(scene.power_ups.len(), 1);
    }

    #[test]
    fn test_asteroid_ship_hit_removes_before_projectile_step() {
        let mut scene = Scene::new();
        scene.asteroid(510.0, 500.0, 20.0);
        let shot = scene.shot(515.0, 500.0);

        let report = scene.sweep();
        // Asteroid already gone when projectiles are tested
        assert_eq!(report.ship_hits, 1);
        assert_eq!(report.asteroids_shot, 0);
        assert_eq!(scene.projectiles.len(), 1);
        assert_eq!(scene.projectiles[0].id, shot);
    }

    #[test]
    fn test_one_shot_one_kill() {
        let mut scene = Scene::new();
        // Two asteroids overlapping the same shot: only the first dies
        let first = scene.asteroid(100.0, 100.0, 20.0);
        let second = scene.asteroid(120.0, 100.0, 20.0);
        scene.shot(110.0, 100.0);

        let report = scene.sweep();
        assert_eq!(report.asteroids_shot, 1);
        assert!(scene.projectiles.is_empty());
        assert_eq!(scene.asteroids.len(), 1);
        assert_eq!(scene.asteroids[0].id, second);
        assert_ne!(first, second);
    }

    #[test]
    fn test_one_asteroid_absorbs_one_shot() {
        let mut scene = Scene::new();
        scene.asteroid(100.0, 100.0, 40.0);
        let first_shot = scene.shot(90.0, 100.0);
        let second_shot = scene.shot(110.0, 100.0);

        let report = scene.sweep();
        assert_eq!(report.asteroids_shot, 1);
        assert!(scene.asteroids.is_empty());
        assert_eq!(scene.projectiles.len(), 1);
        assert_eq!(scene.projectiles[0].id, second_shot);
        assert_ne!(first_shot, second_shot);
    }

    #[test]
    fn test_many_pairs() {
        let mut scene = Scene::new();
        for i in 0..5 {
            let x = 100.0 + i as f32 * 100.0;
            scene.asteroid(x, 100.0, 20.0);
            scene.shot(x, 105.0);
        }
        scene.shot(900.0, 900.0);

        let report = scene.sweep();
        assert_eq!(report.asteroids_shot, 5);
        assert!(scene.asteroids.is_empty());
        assert_eq!(scene.projectiles.len(), 1);
    }

    proptest! {
        #[test]
        fn overlap_matches_distance(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
            ra in 0.1f32..100.0, rb in 0.1f32..100.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let d = a.distance(b) as f64;
            let reach = (ra + rb) as f64;
            // Skip the float-rounding band right at tangency
            prop_assume!((d - reach).abs() > 1e-3);
            prop_assert_eq!(circles_overlap(a, ra, b, rb), d < reach);
        }

        #[test]
        fn tangent_pairs_never_collide(
            horizontal in any::<bool>(),
            ra in 1u32..50, rb in 1u32..50,
        ) {
            // Axis-aligned integer geometry is exact in f32
            let reach = (ra + rb) as f32;
            let b = if horizontal {
                Vec2::new(reach, 0.0)
            } else {
                Vec2::new(0.0, -reach)
            };
            prop_assert!(!circles_overlap(Vec2::ZERO, ra as f32, b, rb as f32));
        }

        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            ra in 0.1f32..60.0, rb in 0.1f32..60.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(circles_overlap(a, ra, b, rb), circles_overlap(b, rb, a, ra));
        }
    }
}
