//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, EntityIds, Projectile};
use crate::consts::*;
use crate::heading_vector;
use crate::skins::{Rgb, ShipPaint};

/// Ship handling constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipParams {
    pub radius: f32,
    /// Degrees per second
    pub turn_speed: f32,
    /// Pixels per second while thrusting
    pub speed: f32,
    pub shoot_speed: f32,
    /// Seconds between shots without a buff
    pub shoot_cooldown: f32,
    pub shot_radius: f32,
    pub lives: u32,
    /// Seconds of cooldown-free firing per power-up
    pub buff_duration: f32,
}

impl Default for ShipParams {
    fn default() -> Self {
        Self {
            radius: PLAYER_RADIUS,
            turn_speed: PLAYER_TURN_SPEED,
            speed: PLAYER_SPEED,
            shoot_speed: PLAYER_SHOOT_SPEED,
            shoot_cooldown: PLAYER_SHOOT_COOLDOWN,
            shot_radius: SHOT_RADIUS,
            lives: PLAYER_LIVES,
            buff_duration: SHAKE_EFFECT_DURATION,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Velocity stays zero; thrust moves the position directly
    pub body: Body,
    /// Degrees; unbounded, only trig reads it
    pub heading: f32,
    pub lives: u32,
    /// Seconds until the next unbuffed shot; may go negative
    pub fire_cooldown: f32,
    /// Seconds of buff left; active while positive
    pub buff_timer: f32,
    pub skin_id: String,
    pub paint: ShipPaint,
    pub params: ShipParams,
}

impl Ship {
    pub fn new(pos: Vec2, params: ShipParams, skin_id: &str) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO, params.radius),
            heading: 0.0,
            lives: params.lives,
            fire_cooldown: 0.0,
            buff_timer: 0.0,
            skin_id: skin_id.to_string(),
            paint: ShipPaint::for_skin(skin_id),
            params,
        }
    }

    /// Turn by `turn_speed * dt` in `direction` (-1 left, +1 right)
    pub fn rotate(&mut self, dt: f32, direction: f32) {
        self.heading += self.params.turn_speed * dt * direction;
    }

    /// Move along the heading (-1 reverse, +1 forward). No inertia.
    pub fn thrust(&mut self, dt: f32, direction: f32) {
        self.body.pos += self.facing() * self.params.speed * dt * direction;
    }

    /// Unit vector the ship points along
    pub fn facing(&self) -> Vec2 {
        heading_vector(self.heading)
    }

    pub fn has_buff(&self) -> bool {
        self.buff_timer > 0.0
    }

    pub fn can_fire(&self) -> bool {
        self.has_buff() || self.fire_cooldown <= 0.0
    }

    /// Fire if the buff is active or the cooldown has run out
    pub fn try_fire(&mut self, ids: &mut EntityIds) -> Option<Projectile> {
        if !self.can_fire() {
            return None;
        }
        self.fire_cooldown = self.params.shoot_cooldown;
        Some(Projectile {
            id: ids.next_id(),
            body: Body::new(
                self.body.pos,
                self.facing() * self.params.shoot_speed,
                self.params.shot_radius,
            ),
        })
    }

    /// Lose a life; true if none are left
    pub fn take_damage(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    /// Start (or restart) cooldown-free firing
    pub fn apply_buff(&mut self) {
        self.buff_timer = self.params.buff_duration;
    }

    /// Count down timers and animate the paint
    pub fn tick(&mut self, dt: f32) {
        self.fire_cooldown -= dt;
        self.buff_timer -= dt;
        self.paint.advance(dt);
    }

    pub fn color(&self) -> Rgb {
        self.paint.color()
    }

    /// Triangle outline (nose, left, right) for renderers
    pub fn outline(&self) -> [Vec2; 3] {
        let forward = self.facing();
        let right = heading_vector(self.heading + 90.0) * self.body.radius / 1.5;
        let pos = self.body.pos;
        let r = self.body.radius;
        [
            pos + forward * r,
            pos - forward * r - right,
            pos - forward * r + right,
        ]
    }
}
