//! Movement and narrow-phase collision resolution
//!
//! Collision here is deliberately simple: axis-aligned rectangle overlap
//! with minimum-translation push-out. Positions are corrected directly and
//! velocities are left alone - velocity is recomputed from intent and
//! terrain at the start of every frame, so there is no impulse bookkeeping
//! to keep consistent.

use glam::Vec2;

use super::area::{Area, Rect};
use super::character::Character;
use super::track::Track;
use crate::tuning::Tuning;

/// Per-frame displacement for a character from its directional intent.
///
/// Pure function of (intent, dt, terrain): the same inputs over the same
/// track band always produce the same displacement. `intent` is expected to
/// be unit length or zero. Terrain contributes a forward (negative-y) push
/// proportional to the steepest slope factor under the character, so slopes
/// carry even a resting character along.
pub fn movement_velocity(
    character: &Character,
    intent: Vec2,
    dt: f32,
    track: &Track,
    tuning: &Tuning,
) -> Vec2 {
    let range = track.get_between(character.y, character.y + character.height);

    let slope = range
        .indices()
        .map(|i| track.get(i).slope)
        .fold(0.0, f32::max);

    let mut velocity = intent * tuning.base_speed * dt;
    velocity.y -= slope * tuning.slope_boost * dt;
    velocity
}

/// Resolve overlap between two distinct characters by pushing both out of
/// penetration along the minimum-separating axis, half each - equal and
/// opposite. Returns whether a resolution occurred (the caller's cue to
/// play a bounce sound).
///
/// After one resolution the pair no longer overlaps, so calling this again
/// within the same frame reports no collision: repeated calls cannot
/// accumulate drift.
pub fn collide_characters(a: &mut Character, b: &mut Character) -> bool {
    debug_assert_ne!(a.id, b.id, "character collided with itself");

    let Some(push) = a.bounds().penetration(&b.bounds()) else {
        return false;
    };

    let half = push / 2.0;
    a.x += half.x;
    a.y += half.y;
    b.x -= half.x;
    b.y -= half.y;

    true
}

/// Resolve overlap between a character and a static obstacle by displacing
/// only the character, by the full minimum-translation vector.
///
/// Obstacles are the final authority on placement: this runs after all
/// character pairs in a frame and may undo part of a character-character
/// push that drove someone into an obstacle.
pub fn collide_obstacle(character: &mut Character, obstacle: &Rect) -> bool {
    let Some(push) = character.bounds().penetration(obstacle) else {
        return false;
    };

    character.x += push.x;
    character.y += push.y;

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TRACK_START_Y;
    use crate::sim::element::TrackTemplate;
    use crate::sim::area::overlap;

    fn flat_track() -> Track {
        Track::new(&[TrackTemplate::FullWidth; 4], TRACK_START_Y)
    }

    fn sloped_track() -> Track {
        Track::new(
            &[TrackTemplate::FullWidth, TrackTemplate::BasicSteepSlope],
            TRACK_START_Y,
        )
    }

    #[test]
    fn test_movement_velocity_scales_with_dt() {
        let track = flat_track();
        let tuning = Tuning::default();
        let c = Character::new(0, Vec2::new(0.0, 390.0));
        let intent = Vec2::new(0.0, -1.0);

        let v1 = movement_velocity(&c, intent, 1.0 / 60.0, &track, &tuning);
        let v2 = movement_velocity(&c, intent, 2.0 / 60.0, &track, &tuning);

        assert!((v2.y - 2.0 * v1.y).abs() < 1e-6);
        assert_eq!(v1.x, 0.0);
    }

    #[test]
    fn test_movement_velocity_is_pure() {
        let track = flat_track();
        let tuning = Tuning::default();
        let c = Character::new(0, Vec2::new(2.0, 385.0));
        let intent = Vec2::new(1.0, 0.0).normalize();

        let a = movement_velocity(&c, intent, 0.016, &track, &tuning);
        let b = movement_velocity(&c, intent, 0.016, &track, &tuning);
        assert_eq!(a, b);
    }

    #[test]
    fn test_slope_pushes_forward() {
        let track = sloped_track();
        let tuning = Tuning::default();
        let dt = 0.016;

        // On the flat first element: no terrain push
        let flat = Character::new(0, Vec2::new(0.0, 390.0));
        let v = movement_velocity(&flat, Vec2::ZERO, dt, &track, &tuning);
        assert_eq!(v, Vec2::ZERO);

        // On the steep second element (band [360, 380)): pushed up-track
        let sloped = Character::new(1, Vec2::new(0.0, 370.0));
        let v = movement_velocity(&sloped, Vec2::ZERO, dt, &track, &tuning);
        assert!(v.y < 0.0);
        assert!((v.y + tuning.slope_boost * dt).abs() < 1e-6);
    }

    #[test]
    fn test_character_collision_equal_and_opposite() {
        let mut a = Character::new(0, Vec2::new(0.0, 100.0));
        let mut b = Character::new(1, Vec2::new(0.5, 100.25));
        let (pa, pb) = (a.position(), b.position());

        assert!(collide_characters(&mut a, &mut b));

        let da = a.position() - pa;
        let db = b.position() - pb;
        assert_eq!(da, -db);
        assert!(da.length() > 0.0);
        assert!(!overlap(&a, &b));
    }

    #[test]
    fn test_character_collision_symmetric_detection() {
        let a0 = Character::new(0, Vec2::new(0.0, 100.0));
        let b0 = Character::new(1, Vec2::new(0.5, 100.25));

        let (mut a, mut b) = (a0.clone(), b0.clone());
        assert!(collide_characters(&mut a, &mut b));

        let (mut b, mut a) = (b0.clone(), a0.clone());
        assert!(collide_characters(&mut b, &mut a));
    }

    #[test]
    fn test_character_collision_idempotent_within_frame() {
        let mut a = Character::new(0, Vec2::new(0.0, 100.0));
        let mut b = Character::new(1, Vec2::new(0.4, 100.0));

        assert!(collide_characters(&mut a, &mut b));
        // Fully separated: the second call must not report or move anything
        let (pa, pb) = (a.position(), b.position());
        assert!(!collide_characters(&mut a, &mut b));
        assert_eq!(a.position(), pa);
        assert_eq!(b.position(), pb);
    }

    #[test]
    fn test_characters_apart_do_not_collide() {
        let mut a = Character::new(0, Vec2::new(0.0, 100.0));
        let mut b = Character::new(1, Vec2::new(5.0, 100.0));
        assert!(!collide_characters(&mut a, &mut b));
    }

    #[test]
    fn test_obstacle_collision_moves_only_character() {
        let obstacle = Rect::new(0.0, 100.0, 4.0, 4.0);
        let mut c = Character::new(0, Vec2::new(-0.5, 101.0));

        assert!(collide_obstacle(&mut c, &obstacle));
        assert!(!c.bounds().overlaps(&obstacle));

        // Resolved: repeated calls report nothing
        assert!(!collide_obstacle(&mut c, &obstacle));
    }
}
