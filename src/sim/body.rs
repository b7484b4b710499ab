//! Kinematic player body
//!
//! The body never moves itself. Each tick it proposes a candidate position
//! per axis, and the tick commits each candidate only if the collision check
//! for that axis passes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::zone::Rect;
use crate::tuning::PhysicsTuning;

/// A kinematic, axis-aligned body anchored at its bottom-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    /// Committed position (bottom-left, world units)
    pos: Vec2,
    /// Box size (world units)
    pub size: Vec2,
    /// Vertical velocity (world units/s, positive = up)
    pub velocity_y: f32,
    /// In the air (jumping or falling); cleared only by landing
    pub airborne: bool,
    /// Proposed position for this tick, not yet committed
    candidate: Vec2,
    /// Horizontal displacement requested this tick (candidate.x - x when proposed)
    intent_dx: f32,
}

impl KinematicBody {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            velocity_y: 0.0,
            airborne: false,
            candidate: pos,
            intent_dx: 0.0,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn candidate(&self) -> Vec2 {
        self.candidate
    }

    /// Horizontal displacement the player asked for this tick
    #[inline]
    pub fn intent_dx(&self) -> f32 {
        self.intent_dx
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(self.pos, self.size)
    }

    /// Teleport, resetting candidates to the new position
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
        self.candidate = pos;
        self.intent_dx = 0.0;
    }

    /// Accept the horizontal candidate
    pub fn commit_x(&mut self) {
        self.pos.x = self.candidate.x;
    }

    /// Accept the vertical candidate
    pub fn commit_y(&mut self) {
        self.pos.y = self.candidate.y;
    }

    /// Vertical candidate was blocked.
    ///
    /// Landing only when falling; any blocked move (floor or ceiling) stops
    /// vertical motion.
    pub fn block_y(&mut self) {
        if self.velocity_y < 0.0 {
            self.airborne = false;
        }
        self.velocity_y = 0.0;
    }

    /// Start a jump if grounded. Returns true if the jump happened.
    pub fn try_jump(&mut self, jump_velocity: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.velocity_y = jump_velocity;
        self.airborne = true;
        true
    }

    /// Horizontal candidate from held direction keys.
    ///
    /// Left and right are applied independently, so holding both cancels out.
    pub fn propose_x(&mut self, left: bool, right: bool, move_speed: f32, dt: f32) {
        let mut direction = 0.0;
        if left {
            direction -= 1.0;
        }
        if right {
            direction += 1.0;
        }
        self.intent_dx = direction * move_speed * dt;
        self.candidate.x = self.pos.x + self.intent_dx;
    }

    /// Apply gravity, floor at max fall speed, and produce the vertical candidate
    pub fn integrate(&mut self, physics: &PhysicsTuning, dt: f32) {
        self.velocity_y = (self.velocity_y + physics.gravity * dt).max(physics.max_fall_speed);
        self.candidate.y = self.pos.y + self.velocity_y * dt;
    }

    /// Forget this tick's horizontal intent (used while gameplay is frozen)
    pub fn clear_intent(&mut self) {
        self.intent_dx = 0.0;
        self.candidate.x = self.pos.x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physics() -> PhysicsTuning {
        PhysicsTuning {
            gravity: -20.0,
            jump_velocity: 12.0,
            max_fall_speed: -20.0,
            move_speed: 7.0,
        }
    }

    #[test]
    fn test_integrate_applies_gravity() {
        let mut body = KinematicBody::new(Vec2::new(0.0, 5.0), Vec2::ONE);
        body.velocity_y = -10.0;
        body.integrate(&physics(), 0.1);
        assert!((body.velocity_y - -12.0).abs() < 1e-5);
        assert!((body.candidate().y - 3.8).abs() < 1e-5);
        // Committed position untouched by integration
        assert_eq!(body.pos().y, 5.0);
    }

    #[test]
    fn test_fall_speed_floor() {
        let mut body = KinematicBody::new(Vec2::new(0.0, 50.0), Vec2::ONE);
        body.velocity_y = -19.5;
        body.integrate(&physics(), 0.1);
        assert_eq!(body.velocity_y, -20.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut body = KinematicBody::new(Vec2::ZERO, Vec2::ONE);
        assert!(body.try_jump(12.0));
        assert!(body.airborne);
        assert_eq!(body.velocity_y, 12.0);

        body.velocity_y = 3.0;
        assert!(!body.try_jump(12.0));
        assert_eq!(body.velocity_y, 3.0);
    }

    #[test]
    fn test_block_y_landing_vs_ceiling() {
        let mut body = KinematicBody::new(Vec2::ZERO, Vec2::ONE);
        body.airborne = true;
        body.velocity_y = -10.0;
        body.block_y();
        assert_eq!(body.velocity_y, 0.0);
        assert!(!body.airborne);

        // Ceiling: velocity stops but the body stays airborne
        body.airborne = true;
        body.velocity_y = 8.0;
        body.block_y();
        assert_eq!(body.velocity_y, 0.0);
        assert!(body.airborne);
    }

    #[test]
    fn test_propose_x_directions() {
        let mut body = KinematicBody::new(Vec2::new(2.0, 0.0), Vec2::ONE);
        body.propose_x(false, true, 7.0, 0.1);
        assert!((body.candidate().x - 2.7).abs() < 1e-5);
        assert!(body.intent_dx() > 0.0);

        body.propose_x(true, false, 7.0, 0.1);
        assert!((body.candidate().x - 1.3).abs() < 1e-5);
        assert!(body.intent_dx() < 0.0);

        body.propose_x(true, true, 7.0, 0.1);
        assert_eq!(body.candidate().x, 2.0);
        assert_eq!(body.intent_dx(), 0.0);
    }

    #[test]
    fn test_commits_are_per_axis() {
        let mut body = KinematicBody::new(Vec2::new(1.0, 1.0), Vec2::ONE);
        body.propose_x(false, true, 10.0, 0.1);
        body.integrate(&physics(), 0.1);
        body.commit_x();
        assert!((body.pos().x - 2.0).abs() < 1e-5);
        assert_eq!(body.pos().y, 1.0);
        body.commit_y();
        assert_eq!(body.pos().y, body.candidate().y);
    }

    #[test]
    fn test_set_position_resets_candidate() {
        let mut body = KinematicBody::new(Vec2::ZERO, Vec2::new(1.0, 2.0));
        body.propose_x(false, true, 7.0, 0.1);
        body.set_position(Vec2::new(4.0, 4.0));
        assert_eq!(body.candidate(), Vec2::new(4.0, 4.0));
        assert_eq!(body.center(), Vec2::new(4.5, 5.0));
        assert_eq!(body.bounds(), Rect::new(4.0, 4.0, 1.0, 2.0));
    }
}
