//! Downhill Dash - a top-down scrolling obstacle-course game
//!
//! Core modules:
//! - `sim`: Headless simulation (track spatial index, physics, frame update)
//! - `tracks`: Built-in track layouts
//! - `tuning`: Data-driven gameplay balance
//!
//! Rendering, camera, input polling and audio playback are collaborators
//! outside this crate: the simulation exposes positions, facing and events,
//! and consumes a per-frame directional intent vector.

pub mod sim;
pub mod tracks;
pub mod tuning;

pub use sim::{
    Area, Character, Facing, GameEvent, IndexRange, Level, LevelInput, LevelState, Obstacle, Rect,
    Track, TrackElement, TrackTemplate,
};
pub use tuning::{RespawnPolicy, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Height of one track element band (world units)
    pub const ELEMENT_HEIGHT: f32 = 20.0;
    /// Full horizontal extent of a track element
    pub const ELEMENT_WIDTH: f32 = 40.0;

    /// World Y where the track starts; elements stack downward from here
    /// (smaller Y = further along the track)
    pub const TRACK_START_Y: f32 = 400.0;

    /// Width of the empty bank on the left and right side of the track
    pub const BANK_WIDTH: f32 = 10.0;
    /// Length of the empty bank before the start and after the finish
    pub const BANK_HEIGHT: f32 = 40.0;

    /// Character footprint
    pub const CHARACTER_WIDTH: f32 = 1.0;
    pub const CHARACTER_HEIGHT: f32 = 1.0;

    /// Base movement speed (units/s) at full intent on flat terrain
    pub const BASE_SPEED: f32 = 10.0;
    /// Extra forward speed (units/s) contributed by terrain at slope factor 1.0
    pub const SLOPE_BOOST: f32 = 6.0;

    /// How long a character falls before respawning (seconds)
    pub const FALL_TIME: f32 = 0.5;

    /// Player spawn position at level start
    pub const START_POSITION: Vec2 = Vec2::new(0.0, TRACK_START_Y - 10.0);
}

/// True for the canonical resting/no-intent vector
#[inline]
pub fn is_zero(v: Vec2) -> bool {
    v.x == 0.0 && v.y == 0.0
}
