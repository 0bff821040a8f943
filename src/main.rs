//! Rope Runner headless runner
//!
//! Drives the simulation without a renderer: load a built-in level (pass its
//! index) or a JSON level file (pass its path), then step a scripted input
//! pattern at the fixed rate, logging cues and the outcome. Useful for soak
//! runs and for checking custom level files.

use std::error::Error;

use glam::Vec2;

use rope_runner::consts::*;
use rope_runner::sim::{Outcome, SimState, StepClock, StepInput, step};
use rope_runner::{LevelGeometry, levels};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let arg = std::env::args().nth(1).unwrap_or_else(|| "1".to_string());

    match arg.parse::<u32>() {
        Ok(mut index) => loop {
            let geometry = levels::builtin(index)
                .ok_or_else(|| format!("no built-in level {index} (1-{LEVEL_COUNT})"))?;
            match run_level(index, geometry)? {
                Some(next) => index = next,
                None => return Ok(()),
            }
        },
        Err(_) => {
            let json = std::fs::read_to_string(&arg)?;
            let geometry: LevelGeometry = serde_json::from_str(&json)?;
            run_level(1, geometry)?;
            Ok(())
        }
    }
}

/// Step one level to a terminal outcome or a step cap
///
/// Returns the next level index when the level was completed.
fn run_level(index: u32, geometry: LevelGeometry) -> Result<Option<u32>, Box<dyn Error>> {
    const MAX_SIM_SECONDS: f32 = 120.0;

    let mut state = SimState::new(index, geometry)?;
    let mut clock = StepClock::new();
    let max_steps = (MAX_SIM_SECONDS / SIM_DT) as u64;

    while state.frame < max_steps {
        // Headless: pretend the host renders at exactly the sim rate
        for _ in 0..clock.advance(SIM_DT) {
            let input = scripted_input(state.frame, &state);
            let outcome = step(&mut state, &input);
            for event in state.events.as_slice() {
                log::debug!("frame {}: {:?}", state.frame, event);
            }
            match outcome {
                Outcome::Continue => {}
                Outcome::LevelComplete { score, next_level } => {
                    log::info!("level {index} complete, score {score}");
                    return Ok(next_level);
                }
                Outcome::GameOver { score } => {
                    log::info!("game over on level {index}, score {score}");
                    return Ok(None);
                }
            }
        }
    }

    log::info!(
        "level {index} timed out after {MAX_SIM_SECONDS}s: score {}/{}, hp {}",
        state.score,
        state.total_coins,
        state.player.hp
    );
    Ok(None)
}

/// Canned input pattern: run right, hop on a cadence, and periodically
/// throw the grapple at a point up and ahead of the player
fn scripted_input(frame: u64, state: &SimState) -> StepInput {
    let phase = frame % 240;
    StepInput {
        move_right: true,
        jump_pressed: phase == 30,
        grapple_held: (120..200).contains(&phase),
        cursor: state.player.pos + Vec2::new(150.0, -200.0),
        ..Default::default()
    }
}
