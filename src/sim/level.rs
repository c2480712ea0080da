//! Per-frame level update
//!
//! One `update(t, dt, input)` call per rendered frame drives everything:
//! four phases, each completing across all characters before the next
//! begins.
//!
//! 1. Intent & fall-state resolution (band query, fall timer, velocity)
//! 2. Character-vs-character collision (all ordered pairs)
//! 3. Character-vs-obstacle collision (final authority on placement)
//! 4. Integration (each character commits its velocity exactly once)
//!
//! Detection happens before anyone moves, resolution happens in two
//! authority tiers (soft body-body, then hard body-obstacle), and the
//! position commit at the end is the single source of truth for "where is
//! everyone now". If this ever runs on multiple threads, the phase
//! boundaries are the only safe synchronization points.

use glam::Vec2;

use super::area::{Area, Rect};
use super::character::Character;
use super::element::{Obstacle, TrackTemplate};
use super::physics::{collide_characters, collide_obstacle, movement_velocity};
use super::track::Track;
use crate::consts::{BANK_HEIGHT, BANK_WIDTH, START_POSITION, TRACK_START_Y};
use crate::tuning::{RespawnPolicy, Tuning};

/// Index of the player-controlled character
const PLAYER: usize = 0;

/// Fixed forward intent for autonomous characters
const AI_FORWARD: Vec2 = Vec2::new(0.0, -1.0);

/// Spawn positions for the autonomous characters
const AI_SPAWNS: [Vec2; 3] = [
    Vec2::new(-10.0, TRACK_START_Y - 10.0),
    Vec2::new(10.0, TRACK_START_Y - 10.0),
    Vec2::new(0.0, TRACK_START_Y - 15.0),
];

/// Outer level state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelState {
    Running,
    GameOver,
    Finished,
}

/// Fire-and-forget signals emitted by a frame update.
///
/// `Bounce` is the audio-cue channel: the embedding shell plays a bounce
/// sound per occurrence and nothing in the simulation depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Bounce,
    FallStarted { id: u32 },
    Respawned { id: u32 },
    Finished,
}

/// Per-frame input for the player-controlled character
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelInput {
    /// Raw directional intent; normalized to unit-or-zero before use
    pub direction: Vec2,
}

/// An entry in the back-to-front draw queue
#[derive(Debug, Clone, Copy)]
pub enum DrawItem<'a> {
    Obstacle(&'a Obstacle),
    Character(&'a Character),
}

impl Area for DrawItem<'_> {
    fn bounds(&self) -> Rect {
        match self {
            DrawItem::Obstacle(o) => o.bounds(),
            DrawItem::Character(c) => c.bounds(),
        }
    }
}

/// A running level: the track plus all characters on it
#[derive(Debug, Clone)]
pub struct Level {
    track: Track,
    characters: Vec<Character>,
    tuning: Tuning,
    start_position: Vec2,
    bounds: Rect,

    pub state: LevelState,
}

impl Level {
    pub fn new(templates: &[TrackTemplate]) -> Self {
        Self::with_tuning(templates, Tuning::default())
    }

    pub fn with_tuning(templates: &[TrackTemplate], tuning: Tuning) -> Self {
        let track = Track::new(templates, TRACK_START_Y);

        // Track bounds padded by the empty banks, for the camera
        let bounds = Rect::new(
            0.0 - track.width / 2.0 - BANK_WIDTH,
            TRACK_START_Y - track.height - BANK_HEIGHT,
            track.width + 2.0 * BANK_WIDTH,
            track.height + 2.0 * BANK_HEIGHT,
        );

        let mut characters = vec![Character::new(0, START_POSITION)];
        characters.extend(
            AI_SPAWNS
                .iter()
                .enumerate()
                .map(|(i, &spawn)| Character::new(i as u32 + 1, spawn)),
        );

        Self {
            track,
            characters,
            tuning,
            start_position: START_POSITION,
            bounds,
            state: LevelState::Running,
        }
    }

    #[inline]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[inline]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    #[inline]
    pub fn player(&self) -> &Character {
        &self.characters[PLAYER]
    }

    /// Terminal failure entry point for the embedding shell (out of time,
    /// out of lives - conditions this core does not define).
    pub fn fail(&mut self) {
        if self.state == LevelState::Running {
            self.state = LevelState::GameOver;
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// `t` is a monotonic timestamp (seconds), used for fall-duration
    /// comparison; `dt` is the time since the previous frame. Returns the
    /// events of this frame for the audio/UI collaborators.
    pub fn update(&mut self, t: f32, dt: f32, input: &LevelInput) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.state != LevelState::Running {
            return events;
        }

        self.resolve_intents(t, dt, input, &mut events);
        self.resolve_character_collisions(&mut events);
        self.resolve_obstacle_collisions(&mut events);

        // Finally, move the characters according to their velocities.
        for c in &mut self.characters {
            c.advance();
        }

        if self.characters[PLAYER].y < self.track.finish_y {
            log::info!("player reached the finish");
            self.state = LevelState::Finished;
            events.push(GameEvent::Finished);
        }

        events
    }

    /// Phase 1: fall-state bookkeeping and movement velocity per character.
    fn resolve_intents(&mut self, t: f32, dt: f32, input: &LevelInput, events: &mut Vec<GameEvent>) {
        for i in 0..self.characters.len() {
            let (y, height, fall_start) = {
                let c = &self.characters[i];
                (c.y, c.height, c.fall_start_time)
            };
            let range = self.track.get_between(y, y + height);

            if fall_start.is_some_and(|start| t - start > self.tuning.fall_time) {
                let position = self.respawn_position(y);
                let c = &mut self.characters[i];
                c.drop_to(position);
                log::debug!("character {} respawned at {position}", c.id);
                events.push(GameEvent::Respawned { id: c.id });
            } else if fall_start.is_none()
                && !self.track.is_on_platform(range, &self.characters[i])
            {
                // Nothing underfoot: start falling, frozen for this frame
                let c = &mut self.characters[i];
                c.fall_start_time = Some(t);
                c.set_direction(Vec2::ZERO);
                c.velocity = Vec2::ZERO;
                log::debug!("character {} started falling at t={t}", c.id);
                events.push(GameEvent::FallStarted { id: c.id });
            } else {
                let intent = if i == PLAYER {
                    input.direction.normalize_or_zero()
                } else {
                    AI_FORWARD
                };

                let velocity =
                    movement_velocity(&self.characters[i], intent, dt, &self.track, &self.tuning);
                let c = &mut self.characters[i];
                c.set_direction(intent);
                c.velocity = velocity;
            }
        }
    }

    /// Phase 2: all ordered pairs of distinct characters. Every pair is
    /// checked both ways: with more than two overlapping bodies a single
    /// pass per unordered pair can leave asymmetric leftovers.
    fn resolve_character_collisions(&mut self, events: &mut Vec<GameEvent>) {
        for ci in 0..self.characters.len() {
            for oi in 0..self.characters.len() {
                if self.characters[ci].id == self.characters[oi].id {
                    continue;
                }

                let (c, other) = pair_mut(&mut self.characters, ci, oi);
                if collide_characters(c, other) {
                    events.push(GameEvent::Bounce);
                }
            }
        }
    }

    /// Phase 3: obstacles get the final word on placement, so this reruns
    /// the band query at the post-phase-2 position and may undo part of a
    /// character-character push.
    fn resolve_obstacle_collisions(&mut self, events: &mut Vec<GameEvent>) {
        for ci in 0..self.characters.len() {
            let range = {
                let c = &self.characters[ci];
                self.track.get_between(c.y, c.y + c.height)
            };

            for ei in range.indices() {
                let element = self.track.get(ei);
                for obstacle in &element.obstacles {
                    if collide_obstacle(&mut self.characters[ci], &obstacle.rect) {
                        events.push(GameEvent::Bounce);
                    }
                }
            }
        }
    }

    fn respawn_position(&self, y: f32) -> Vec2 {
        match self.tuning.respawn {
            RespawnPolicy::TrackStart => self.start_position,
            RespawnPolicy::LatestCheckpoint => {
                let checkpoint = self.track.find_latest_checkpoint(y);
                let element = self.track.get_checkpoint(checkpoint);
                let c = &self.characters[PLAYER];
                element.spawn_point(c.width, c.height)
            }
        }
    }

    /// Walkable ground inside the view, back-to-front, for the renderer's
    /// ground pass.
    pub fn visible_surfaces(&self, view_area: Rect) -> Vec<&Rect> {
        let range = self.track.get_between(view_area.y, view_area.bottom());

        let mut surfaces = Vec::new();
        for e in range.indices_rev() {
            surfaces.extend(self.track.get(e).surfaces.iter());
        }
        surfaces
    }

    /// Per-frame transient draw queue: visible obstacles plus all
    /// characters, stably sorted back-to-front by vertical footprint
    /// center so objects in front are drawn after objects behind them.
    pub fn render_queue(&self, view_area: Rect) -> Vec<DrawItem<'_>> {
        let range = self.track.get_between(view_area.y, view_area.bottom());

        let mut items: Vec<DrawItem<'_>> = Vec::new();
        for e in range.indices_rev() {
            items.extend(self.track.get(e).obstacles.iter().map(DrawItem::Obstacle));
        }
        items.extend(self.characters.iter().map(DrawItem::Character));

        items.sort_by(|a, b| {
            let ka = a.bounds().y + a.bounds().height / 2.0;
            let kb = b.bounds().y + b.bounds().height / 2.0;
            ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
        });

        items
    }
}

impl Area for Level {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Mutable references to two distinct slice elements.
fn pair_mut(characters: &mut [Character], i: usize, j: usize) -> (&mut Character, &mut Character) {
    assert_ne!(i, j);
    if i < j {
        let (left, right) = characters.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = characters.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
