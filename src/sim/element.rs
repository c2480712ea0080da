//! Track elements and the template expansion table
//!
//! A track is assembled from template tokens. Each token expands into one
//! `TrackElement`: a fixed-height horizontal slice of the course with its
//! own walkable surfaces, obstacles and terrain slope factor. Elements are
//! built once at track construction and never mutated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::area::{Area, Rect};
use crate::consts::{ELEMENT_HEIGHT, ELEMENT_WIDTH};

/// What role an element plays in the course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Plain,
    /// Respawn reference point
    Checkpoint,
    /// Last element of the course
    Finish,
}

/// A static obstacle characters bounce off.
///
/// Identity is the explicit `id`, assigned at track construction; collision
/// bookkeeping compares ids, never addresses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub rect: Rect,
}

impl Area for Obstacle {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Template tokens a track layout is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackTemplate {
    /// Surface across the whole element width
    FullWidth,
    /// Slightly narrowed surface
    Basic,
    /// Narrow strip at the center
    VeryNarrow,
    /// Full width, marks a respawn point
    Checkpoint,
    /// Full width, ends the course
    Finish,
    /// Narrowed surface on a gentle downhill
    BasicSlope,
    /// Narrowed surface on a steep downhill
    BasicSteepSlope,
    /// Downhill surfaces left and right, gap in the middle
    SlopeEmptySlope,
    /// Downhill with an obstacle blocking the center
    SlopeObstacleSlope,
    /// Full width with two staggered obstacles
    FullWidthWithObstacles,
    /// Full width with one obstacle at the center
    FullWidthWithObstacleAtCenter,
    /// Single floating platform over a chasm
    Raft,
    /// Two floating platforms over a chasm
    TwoRafts,
    /// Nothing to stand on at all
    Chasm,
    /// Two passages split by a center gap
    DualPassage,
}

/// One fixed-height horizontal slice of the track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackElement {
    /// Top of the element's Y-band
    pub y: f32,
    pub height: f32,
    /// Horizontal extent
    pub min_x: f32,
    pub max_x: f32,
    pub kind: ElementKind,
    /// Terrain speed modifier: 0 = flat, 1 = steepest downhill
    pub slope: f32,
    /// Rectangles a character can stand on
    pub surfaces: Vec<Rect>,
    /// Rectangles that block and bounce characters
    pub obstacles: Vec<Obstacle>,
}

impl Area for TrackElement {
    fn bounds(&self) -> Rect {
        Rect::new(self.min_x, self.y, self.max_x - self.min_x, self.height)
    }
}

impl TrackElement {
    /// Where a character of the given size respawns on this element
    pub fn spawn_point(&self, width: f32, height: f32) -> Vec2 {
        let center = self.bounds().center();
        Vec2::new(center.x - width / 2.0, center.y - height / 2.0)
    }
}

impl TrackTemplate {
    /// Expand this token into the element occupying the band starting at
    /// `y`. Obstacle ids are drawn from `next_obstacle_id`.
    pub fn expand(self, y: f32, next_obstacle_id: &mut u32) -> TrackElement {
        let half = ELEMENT_WIDTH / 2.0;

        // Full-height surface strip between two x coordinates
        let strip = |x0: f32, x1: f32| Rect::new(x0, y, x1 - x0, ELEMENT_HEIGHT);

        let mut obstacle = |x: f32, dy: f32, w: f32, h: f32| {
            let id = *next_obstacle_id;
            *next_obstacle_id += 1;
            Obstacle { id, rect: Rect::new(x, y + dy, w, h) }
        };

        let mut kind = ElementKind::Plain;
        let mut slope = 0.0;
        let mut obstacles = Vec::new();

        let surfaces = match self {
            TrackTemplate::FullWidth => vec![strip(-half, half)],
            TrackTemplate::Basic => vec![strip(-15.0, 15.0)],
            TrackTemplate::VeryNarrow => vec![strip(-4.0, 4.0)],
            TrackTemplate::Checkpoint => {
                kind = ElementKind::Checkpoint;
                vec![strip(-half, half)]
            }
            TrackTemplate::Finish => {
                kind = ElementKind::Finish;
                vec![strip(-half, half)]
            }
            TrackTemplate::BasicSlope => {
                slope = 0.5;
                vec![strip(-15.0, 15.0)]
            }
            TrackTemplate::BasicSteepSlope => {
                slope = 1.0;
                vec![strip(-15.0, 15.0)]
            }
            TrackTemplate::SlopeEmptySlope => {
                slope = 0.5;
                vec![strip(-half, -5.0), strip(5.0, half)]
            }
            TrackTemplate::SlopeObstacleSlope => {
                slope = 0.5;
                obstacles.push(obstacle(-2.0, 8.0, 4.0, 4.0));
                vec![strip(-half, half)]
            }
            TrackTemplate::FullWidthWithObstacles => {
                obstacles.push(obstacle(-12.0, 4.0, 4.0, 4.0));
                obstacles.push(obstacle(6.0, 12.0, 5.0, 4.0));
                vec![strip(-half, half)]
            }
            TrackTemplate::FullWidthWithObstacleAtCenter => {
                obstacles.push(obstacle(-2.5, 8.0, 5.0, 4.0));
                vec![strip(-half, half)]
            }
            TrackTemplate::Raft => vec![strip(-6.0, 6.0)],
            TrackTemplate::TwoRafts => vec![strip(-15.0, -5.0), strip(5.0, 15.0)],
            TrackTemplate::Chasm => vec![],
            TrackTemplate::DualPassage => vec![strip(-half, -3.0), strip(3.0, half)],
        };

        TrackElement {
            y,
            height: ELEMENT_HEIGHT,
            min_x: -half,
            max_x: half,
            kind,
            slope,
            surfaces,
            obstacles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TEMPLATES: [TrackTemplate; 15] = [
        TrackTemplate::FullWidth,
        TrackTemplate::Basic,
        TrackTemplate::VeryNarrow,
        TrackTemplate::Checkpoint,
        TrackTemplate::Finish,
        TrackTemplate::BasicSlope,
        TrackTemplate::BasicSteepSlope,
        TrackTemplate::SlopeEmptySlope,
        TrackTemplate::SlopeObstacleSlope,
        TrackTemplate::FullWidthWithObstacles,
        TrackTemplate::FullWidthWithObstacleAtCenter,
        TrackTemplate::Raft,
        TrackTemplate::TwoRafts,
        TrackTemplate::Chasm,
        TrackTemplate::DualPassage,
    ];

    #[test]
    fn test_expansion_stays_within_extent() {
        let mut next_id = 0;
        for template in ALL_TEMPLATES {
            let e = template.expand(100.0, &mut next_id);
            assert_eq!(e.height, ELEMENT_HEIGHT);
            for s in &e.surfaces {
                assert!(e.min_x <= s.x && s.right() <= e.max_x, "{template:?}");
                assert!(e.y <= s.y && s.bottom() <= e.y + e.height, "{template:?}");
                assert!(s.width > 0.0 && s.height > 0.0, "{template:?}");
            }
            for o in &e.obstacles {
                assert!(e.min_x <= o.rect.x && o.rect.right() <= e.max_x, "{template:?}");
                assert!(e.y <= o.rect.y && o.rect.bottom() <= e.y + e.height, "{template:?}");
            }
        }
    }

    #[test]
    fn test_obstacle_ids_are_unique() {
        let mut next_id = 0;
        let mut seen = Vec::new();
        for template in ALL_TEMPLATES {
            for o in template.expand(0.0, &mut next_id).obstacles {
                assert!(!seen.contains(&o.id));
                seen.push(o.id);
            }
        }
        assert!(!seen.is_empty());
    }

    #[test]
    fn test_only_chasm_has_no_surfaces() {
        let mut next_id = 0;
        for template in ALL_TEMPLATES {
            let e = template.expand(0.0, &mut next_id);
            if template == TrackTemplate::Chasm {
                assert!(e.surfaces.is_empty());
            } else {
                assert!(!e.surfaces.is_empty());
            }
        }
    }

    #[test]
    fn test_spawn_point_centers_character() {
        let mut next_id = 0;
        let e = TrackTemplate::Checkpoint.expand(200.0, &mut next_id);
        let p = e.spawn_point(1.0, 1.0);
        assert_eq!(p, Vec2::new(-0.5, 200.0 + ELEMENT_HEIGHT / 2.0 - 0.5));
    }
}
