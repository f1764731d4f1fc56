//! Moving collidable circles
//!
//! Every simulated object is a [`Body`]: a circle with a position and a
//! velocity. Asteroids, projectiles and power-ups wrap one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A moving circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Body {
    /// Panics on a non-positive radius or non-finite position; those are bugs.
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        assert!(radius > 0.0, "body radius must be positive, got {radius}");
        assert!(pos.is_finite(), "body position must be finite, got {pos}");
        Self { pos, vel, radius }
    }

    /// Linear motion, no drag
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        debug_assert!(self.pos.is_finite());
    }

    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        super::collision::circles_overlap(self.pos, self.radius, other.pos, other.radius)
    }
}

/// Allocates entity ids, unique within a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// An asteroid; destroyed by any qualifying hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub body: Body,
    /// Size tier, 1..=kinds; radius is proportional
    pub tier: u32,
}

/// A ship shot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub body: Body,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Cooldown-free firing for a while
    #[default]
    Shake,
}

/// A stationary pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub body: Body,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_linear() {
        let mut body = Body::new(Vec2::new(10.0, 10.0), Vec2::new(100.0, -50.0), 5.0);
        body.advance(0.5);
        assert_eq!(body.pos, Vec2::new(60.0, -15.0));
        body.advance(0.5);
        assert_eq!(body.pos, Vec2::new(110.0, -40.0));
        assert_eq!(body.vel, Vec2::new(100.0, -50.0));
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_zero_radius_panics() {
        Body::new(Vec2::ZERO, Vec2::ZERO, 0.0);
    }

    #[test]
    #[should_panic(expected = "position must be finite")]
    fn test_nan_position_panics() {
        Body::new(Vec2::new(f32::NAN, 0.0), Vec2::ZERO, 1.0);
    }
}
