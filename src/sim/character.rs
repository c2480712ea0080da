//! Per-character kinematic state

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::area::{Area, Rect};
use crate::consts::{CHARACTER_HEIGHT, CHARACTER_WIDTH};
use crate::is_zero;

/// Facing used by the renderer to pick a pose, derived from the movement
/// direction's sign pattern. Left-facing variants are the mirrored render
/// of the right-facing ones, so only `x >= 0` shapes appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    /// Moving up the track (negative y)
    Forward,
    /// Moving back down the track
    Backward,
    /// Moving sideways only
    Right,
    ForwardRight,
    BackwardRight,
}

/// Total classification of a direction vector into a facing.
///
/// The zero vector maps to `Forward`; callers that want "keep facing the
/// way you last moved" pass the last nonzero direction instead.
pub fn classify_facing(direction: Vec2) -> Facing {
    match (direction.x == 0.0, direction.y == 0.0) {
        (true, true) => Facing::Forward,
        (true, false) if direction.y < 0.0 => Facing::Forward,
        (true, false) => Facing::Backward,
        (false, true) => Facing::Right,
        (false, false) if direction.y < 0.0 => Facing::ForwardRight,
        (false, false) => Facing::BackwardRight,
    }
}

/// A moving entity on the track: the player or an autonomous runner.
///
/// `velocity` is this frame's displacement (already dt-scaled); it is
/// recomputed from intent and terrain every frame and committed into the
/// position exactly once, after collision resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Stable identity; pairwise collision skips self by id
    pub id: u32,

    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,

    pub velocity: Vec2,

    /// This frame's movement direction (zero when resting or frozen)
    pub direction: Vec2,
    /// Last nonzero movement direction, for facing
    latest_direction: Vec2,

    /// Set while falling; cleared on respawn
    pub fall_start_time: Option<f32>,
}

impl Character {
    pub fn new(id: u32, position: Vec2) -> Self {
        Self {
            id,
            x: position.x,
            y: position.y,
            width: CHARACTER_WIDTH,
            height: CHARACTER_HEIGHT,
            velocity: Vec2::ZERO,
            direction: Vec2::ZERO,
            latest_direction: Vec2::new(0.0, -1.0),
            fall_start_time: None,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Record this frame's movement direction, remembering it for facing
    /// when nonzero.
    pub fn set_direction(&mut self, direction: Vec2) {
        self.direction = direction;
        if !is_zero(direction) {
            self.latest_direction = direction;
        }
    }

    /// Commit the accumulated velocity into the position. Called once per
    /// frame, after all collision resolution.
    pub fn advance(&mut self) {
        self.x += self.velocity.x;
        self.y += self.velocity.y;
    }

    /// Drop the character back onto the track at `position`: used on
    /// respawn. Resets direction, facing, velocity and fall state.
    pub fn drop_to(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
        self.direction = Vec2::ZERO;
        self.latest_direction = Vec2::new(0.0, -1.0);
        self.velocity = Vec2::ZERO;
        self.fall_start_time = None;
    }

    #[inline]
    pub fn is_falling(&self) -> bool {
        self.fall_start_time.is_some()
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        !is_zero(self.direction)
    }

    /// Which way the renderer should face this character; falls back to the
    /// last nonzero direction while resting.
    pub fn facing(&self) -> Facing {
        classify_facing(self.latest_direction)
    }

    /// Should the renderer mirror the pose horizontally?
    pub fn mirrored(&self) -> bool {
        self.latest_direction.x < 0.0
    }
}

impl Area for Character {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_facing_truth_table() {
        assert_eq!(classify_facing(Vec2::ZERO), Facing::Forward);
        assert_eq!(classify_facing(Vec2::new(0.0, -1.0)), Facing::Forward);
        assert_eq!(classify_facing(Vec2::new(0.0, 1.0)), Facing::Backward);
        assert_eq!(classify_facing(Vec2::new(1.0, 0.0)), Facing::Right);
        assert_eq!(classify_facing(Vec2::new(-1.0, 0.0)), Facing::Right);
        assert_eq!(classify_facing(Vec2::new(1.0, -1.0)), Facing::ForwardRight);
        assert_eq!(classify_facing(Vec2::new(-1.0, -1.0)), Facing::ForwardRight);
        assert_eq!(classify_facing(Vec2::new(1.0, 1.0)), Facing::BackwardRight);
        assert_eq!(classify_facing(Vec2::new(-1.0, 1.0)), Facing::BackwardRight);
    }

    #[test]
    fn test_facing_falls_back_to_latest_direction() {
        let mut c = Character::new(0, Vec2::new(0.0, 390.0));
        assert_eq!(c.facing(), Facing::Forward);

        c.set_direction(Vec2::new(1.0, 0.0));
        assert_eq!(c.facing(), Facing::Right);

        // Resting keeps the previous facing
        c.set_direction(Vec2::ZERO);
        assert!(!c.is_moving());
        assert_eq!(c.facing(), Facing::Right);
    }

    #[test]
    fn test_mirrored_left_movement() {
        let mut c = Character::new(0, Vec2::ZERO);
        c.set_direction(Vec2::new(-1.0, -1.0));
        assert!(c.mirrored());
        assert_eq!(c.facing(), Facing::ForwardRight);
    }

    #[test]
    fn test_advance_applies_velocity_once() {
        let mut c = Character::new(0, Vec2::new(1.0, 2.0));
        c.velocity = Vec2::new(0.5, -0.25);
        c.advance();
        assert_eq!(c.position(), Vec2::new(1.5, 1.75));
    }

    #[test]
    fn test_drop_to_resets_state() {
        let mut c = Character::new(3, Vec2::new(5.0, 300.0));
        c.set_direction(Vec2::new(1.0, 0.0));
        c.velocity = Vec2::new(0.2, 0.0);
        c.fall_start_time = Some(12.5);

        c.drop_to(Vec2::new(0.0, 390.0));

        assert_eq!(c.position(), Vec2::new(0.0, 390.0));
        assert_eq!(c.velocity, Vec2::ZERO);
        assert!(!c.is_moving());
        assert!(!c.is_falling());
        assert_eq!(c.facing(), Facing::Forward);
        assert_eq!(c.id, 3);
    }
}
