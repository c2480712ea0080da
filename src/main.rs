//! Headless demo entry point
//!
//! Runs the built-in simple track at a fixed 60 Hz with constant forward
//! intent and logs the frame events - useful for watching the simulation
//! without a rendering shell. Tuning overrides are taken as JSON from the
//! `DASH_TUNING` environment variable.

use glam::Vec2;

use downhill_dash::tracks::SIMPLE_TRACK;
use downhill_dash::{GameEvent, Level, LevelInput, LevelState, Tuning};

fn main() {
    env_logger::init();

    let tuning = match std::env::var("DASH_TUNING") {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::error!("invalid DASH_TUNING: {err}");
                std::process::exit(1);
            }
        },
        Err(_) => Tuning::default(),
    };
    log::info!("tuning: {tuning:?}");

    let mut level = Level::with_tuning(SIMPLE_TRACK, tuning);
    let input = LevelInput { direction: Vec2::new(0.0, -1.0) };

    let dt = 1.0 / 60.0;
    let mut bounces = 0u32;
    let mut falls = 0u32;

    // Ten simulated minutes, or until the level ends
    for frame in 0..(60 * 600) {
        let t = frame as f32 * dt;

        for event in level.update(t, dt, &input) {
            match event {
                GameEvent::Bounce => bounces += 1,
                GameEvent::FallStarted { id } => {
                    falls += 1;
                    log::debug!("character {id} fell at t={t:.2}");
                }
                GameEvent::Respawned { id } => log::debug!("character {id} respawned"),
                GameEvent::Finished => log::info!("finished at t={t:.2}"),
            }
        }

        if level.state != LevelState::Running {
            break;
        }
    }

    let player = level.player();
    log::info!(
        "done: state={:?} player=({:.1}, {:.1}) bounces={bounces} falls={falls}",
        level.state,
        player.x,
        player.y,
    );
}
