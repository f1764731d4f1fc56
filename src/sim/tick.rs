//! Per-frame update
//!
//! One call to [`tick`] is one rendered frame: input, ship, spawners,
//! movement, collisions, then progression. Nothing runs outside `Running`.

use glam::Vec2;

use super::collision::{CollisionReport, resolve_collisions};
use super::progression::RunSummary;
use super::state::GameState;
use crate::economy::Economy;
use crate::heading_vector;

/// Held keys for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust_forward: bool,
    pub thrust_reverse: bool,
    /// Held fire; repeats at the cooldown rate
    pub fire: bool,
    /// Ignore the keys above and let the autopilot fly
    pub idle_mode: bool,
}

/// What happened during one frame
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    pub asteroid_spawned: bool,
    pub power_up_spawned: bool,
    pub fired: bool,
    /// Projectiles removed for leaving the arena
    pub projectiles_culled: usize,
    pub collisions: CollisionReport,
    /// New level, if one was gained
    pub level_up: Option<u32>,
    /// Set on the frame the ship is destroyed
    pub game_over: Option<RunSummary>,
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    economy: &mut impl Economy,
) -> FrameReport {
    let mut report = FrameReport::default();
    if !state.progression.is_running() {
        return report;
    }
    let input = if input.idle_mode {
        autopilot(state)
    } else {
        input.clone()
    };

    state.progression.advance_clock(dt);

    let Some(ship) = state.ship.as_mut() else {
        return report;
    };

    // Ship: held input, then timers
    if input.rotate_left {
        ship.rotate(dt, -1.0);
    }
    if input.rotate_right {
        ship.rotate(dt, 1.0);
    }
    if input.thrust_forward {
        ship.thrust(dt, 1.0);
    }
    if input.thrust_reverse {
        ship.thrust(dt, -1.0);
    }
    if input.fire {
        if let Some(projectile) = ship.try_fire(&mut state.ids) {
            state.projectiles.push(projectile);
            report.fired = true;
        }
    }
    ship.tick(dt);

    // Spawners
    report.asteroid_spawned = state.asteroid_spawner.update(
        dt,
        &mut state.rng,
        &mut state.ids,
        &mut state.asteroids,
    );
    report.power_up_spawned = state.power_up_spawner.update(
        dt,
        &mut state.rng,
        &mut state.ids,
        &mut state.power_ups,
    );

    // Movement
    for asteroid in &mut state.asteroids {
        asteroid.body.advance(dt);
    }
    for projectile in &mut state.projectiles {
        projectile.body.advance(dt);
    }
    for power_up in &mut state.power_ups {
        power_up.body.advance(dt);
    }

    // Shots that left the screen can never come back
    let arena = state.tuning.arena;
    let before = state.projectiles.len();
    state
        .projectiles
        .retain(|p| !arena.is_outside(p.body.pos, p.body.radius));
    report.projectiles_culled = before - state.projectiles.len();

    // Collisions
    report.collisions = resolve_collisions(
        ship,
        &mut state.asteroids,
        &mut state.projectiles,
        &mut state.power_ups,
    );
    state.progression.record_kills(report.collisions.asteroids_shot);

    if report.collisions.ship_destroyed {
        report.game_over = state.progression.end_run(economy);
        return report;
    }

    // Progression
    if let Some(level) = state.progression.check_level_up(economy) {
        state.asteroid_spawner.set_level(level);
        report.level_up = Some(level);
    }

    report
}

/// Simple bot: turn toward the nearest asteroid and hold fire
pub fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };
    let Some(ship) = state.ship.as_ref() else {
        return input;
    };

    let nearest = state.asteroids.iter().min_by(|a, b| {
        let da = a.body.pos.distance_squared(ship.body.pos);
        let db = b.body.pos.distance_squared(ship.body.pos);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });
    let Some(target) = nearest else {
        return input;
    };

    let to_target = target.body.pos - ship.body.pos;
    let delta = heading_delta(ship.heading, heading_of(to_target));
    if delta > 2.0 {
        input.rotate_right = true;
    } else if delta < -2.0 {
        input.rotate_left = true;
    }

    // Back off from anything about to ram us
    let danger = ship.body.radius + target.body.radius + 40.0;
    if to_target.length() < danger && ship.facing().dot(to_target) > 0.0 {
        input.thrust_reverse = true;
    }
    input
}

/// Heading (degrees) whose [`heading_vector`] points along `dir`
fn heading_of(dir: Vec2) -> f32 {
    (-dir.x).atan2(dir.y).to_degrees()
}

/// Signed turn from `from` to `to`, in (-180, 180]
fn heading_delta(from: f32, to: f32) -> f32 {
    let mut delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}
