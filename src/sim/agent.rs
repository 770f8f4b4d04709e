//! Mobile agents

use glam::Vec2;
use rand::Rng;

use super::kind::Kind;
use crate::consts::{AGENT_RADIUS, MAX_SPEED};

/// A single agent drifting around the arena
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub(crate) kind: Kind,
    pub(crate) pos: Vec2,
    pub(crate) vel: Vec2,
    radius: f32,
}

impl Agent {
    /// Create an agent at `pos` with a random velocity.
    ///
    /// Each velocity component is drawn independently from
    /// `[-MAX_SPEED, MAX_SPEED)`, x first. The result is not renormalized.
    pub fn new<R: Rng + ?Sized>(kind: Kind, pos: Vec2, rng: &mut R) -> Self {
        let vx = rng.random_range(-MAX_SPEED..MAX_SPEED);
        let vy = rng.random_range(-MAX_SPEED..MAX_SPEED);
        Self::with_velocity(kind, pos, Vec2::new(vx, vy))
    }

    /// Create an agent with a known velocity
    pub fn with_velocity(kind: Kind, pos: Vec2, vel: Vec2) -> Self {
        Self {
            kind,
            pos,
            vel,
            radius: AGENT_RADIUS,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn vx(&self) -> f32 {
        self.vel.x
    }

    pub fn vy(&self) -> f32 {
        self.vel.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Advance position by one tick of velocity. No clamping.
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Bounce off the arena walls.
    ///
    /// An axis whose bounding extent touches or crosses a wall has its
    /// velocity negated and its position clamped so the circle sits inside.
    /// Requires `width > 2 * radius` and `height > 2 * radius`.
    pub fn reflect(&mut self, width: f32, height: f32) {
        let r = self.radius;
        if self.pos.x - r <= 0.0 || self.pos.x + r >= width {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(r, width - r);
        }
        if self.pos.y - r <= 0.0 || self.pos.y + r >= height {
            self.vel.y = -self.vel.y;
            self.pos.y = self.pos.y.clamp(r, height - r);
        }
    }

    /// Strict overlap test: touching circles do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Agent) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }

    /// Returns true if the whole circle lies inside a `width` x `height` arena
    pub fn is_inside(&self, width: f32, height: f32) -> bool {
        let r = self.radius;
        self.pos.x >= r && self.pos.x <= width - r && self.pos.y >= r && self.pos.y <= height - r
    }
}
