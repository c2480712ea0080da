//! Built-in track layouts
//!
//! Template sequences only: the geometry of each token lives in the
//! expansion table in `sim::element`.

use crate::sim::TrackTemplate as T;

/// Short introduction course
pub const SIMPLE_TRACK: &[T] = &[
    T::FullWidth,
    T::FullWidth,
    T::Checkpoint,
    T::FullWidth,
    T::SlopeEmptySlope,
    T::FullWidth,
    T::FullWidth,
    T::SlopeObstacleSlope,
    T::FullWidth,
    T::Checkpoint,
    T::FullWidth,
    T::VeryNarrow,
    T::Basic,
    T::Checkpoint,
    T::BasicSlope,
    T::FullWidthWithObstacles,
    T::SlopeObstacleSlope,
    T::FullWidthWithObstacleAtCenter,
    T::FullWidthWithObstacles,
    T::Finish,
];

/// Mid-length course introducing rafts and chasms
pub const SECOND_TRACK: &[T] = &[
    T::FullWidth,
    T::FullWidth,
    T::BasicSlope,
    T::FullWidthWithObstacles,
    T::Basic,
    T::Basic,
    T::Checkpoint,
    T::FullWidth,
    T::BasicSlope,
    T::FullWidthWithObstacleAtCenter,
    T::FullWidthWithObstacles,
    T::Basic,
    T::Basic,
    T::Raft,
    T::Chasm,
    T::VeryNarrow,
    T::Checkpoint,
    T::BasicSteepSlope,
    T::FullWidthWithObstacles,
    T::Basic,
    T::Basic,
    T::FullWidth,
    T::TwoRafts,
    T::Chasm,
    T::FullWidthWithObstacleAtCenter,
    T::Checkpoint,
    T::FullWidth,
    T::Raft,
    T::Chasm,
    T::FullWidth,
    T::Checkpoint,
    T::BasicSteepSlope,
    T::BasicSteepSlope,
    T::BasicSteepSlope,
    T::FullWidthWithObstacles,
    T::FullWidthWithObstacles,
    T::Basic,
    T::FullWidthWithObstacleAtCenter,
    T::FullWidthWithObstacles,
    T::FullWidthWithObstacleAtCenter,
    T::Finish,
];

/// Long course with every template in play
pub const THIRD_TRACK: &[T] = &[
    T::FullWidth,
    T::FullWidth,
    T::BasicSteepSlope,
    T::BasicSteepSlope,
    T::BasicSlope,
    T::FullWidthWithObstacles,
    T::FullWidthWithObstacleAtCenter,
    T::Checkpoint,
    T::FullWidth,
    T::FullWidth,
    T::TwoRafts,
    T::Chasm,
    T::FullWidth,
    T::TwoRafts,
    T::Chasm,
    T::FullWidth,
    T::FullWidthWithObstacleAtCenter,
    T::Checkpoint,
    T::FullWidth,
    T::Raft,
    T::Chasm,
    T::Checkpoint,
    T::BasicSlope,
    T::FullWidthWithObstacles,
    T::FullWidth,
    T::Basic,
    T::FullWidthWithObstacleAtCenter,
    T::FullWidthWithObstacleAtCenter,
    T::Checkpoint,
    T::FullWidth,
    T::Raft,
    T::Chasm,
    T::FullWidthWithObstacles,
    T::FullWidthWithObstacleAtCenter,
    T::BasicSlope,
    T::FullWidthWithObstacles,
    T::Basic,
    T::Basic,
    T::VeryNarrow,
    T::FullWidthWithObstacles,
    T::DualPassage,
    T::FullWidthWithObstacleAtCenter,
    T::Checkpoint,
    T::FullWidth,
    T::VeryNarrow,
    T::FullWidthWithObstacles,
    T::FullWidth,
    T::BasicSteepSlope,
    T::BasicSteepSlope,
    T::FullWidthWithObstacles,
    T::FullWidthWithObstacleAtCenter,
    T::Basic,
    T::Checkpoint,
    T::FullWidth,
    T::Raft,
    T::Chasm,
    T::VeryNarrow,
    T::FullWidthWithObstacles,
    T::BasicSteepSlope,
    T::BasicSteepSlope,
    T::FullWidthWithObstacleAtCenter,
    T::FullWidth,
    T::Finish,
];
