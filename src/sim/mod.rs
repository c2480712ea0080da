//! Headless simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - The track is immutable after construction
//! - Characters are read and written only from `Level::update`
//! - Side effects leave as `GameEvent`s, never as calls into collaborators

pub mod area;
pub mod character;
pub mod element;
pub mod level;
pub mod physics;
pub mod track;

pub use area::{Area, Rect, overlap};
pub use character::{Character, Facing, classify_facing};
pub use element::{ElementKind, Obstacle, TrackElement, TrackTemplate};
pub use level::{DrawItem, GameEvent, Level, LevelInput, LevelState};
pub use physics::{collide_characters, collide_obstacle, movement_velocity};
pub use track::{IndexRange, Track};
