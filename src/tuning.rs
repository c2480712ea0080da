//! Data-driven gameplay balance
//!
//! Defaults mirror the `consts` module; the demo binary (or an embedding
//! game shell) can override them from JSON without recompiling.

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_SPEED, FALL_TIME, SLOPE_BOOST};

/// Where a character goes after falling off the track.
///
/// `TrackStart` is the harsh arcade rule: every fall sends the
/// character all the way back to the level start. `LatestCheckpoint` uses
/// the track's checkpoint lookup instead, which is almost certainly what
/// checkpoints exist for - both are kept so the embedding game decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RespawnPolicy {
    #[default]
    TrackStart,
    LatestCheckpoint,
}

/// Gameplay tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Movement speed at full intent on flat terrain (units/s)
    pub base_speed: f32,
    /// Forward speed added by terrain at slope factor 1.0 (units/s)
    pub slope_boost: f32,
    /// How long a character falls before respawning (seconds)
    pub fall_time: f32,
    pub respawn: RespawnPolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            slope_boost: SLOPE_BOOST,
            fall_time: FALL_TIME,
            respawn: RespawnPolicy::default(),
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
