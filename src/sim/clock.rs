//! Fixed-timestep accumulator
//!
//! Decouples simulation steps from the host frame rate: the embedder reports
//! elapsed wall time and runs however many fixed steps fall out. Tuning
//! constants stay per-step deltas regardless of display refresh.

use crate::consts::*;

/// Accumulates elapsed time and hands out whole simulation steps
#[derive(Debug, Clone, Copy, Default)]
pub struct StepClock {
    accumulator: f32,
}

impl StepClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb `elapsed` seconds and return how many fixed steps to run
    ///
    /// A single frame yields at most [`MAX_STEPS_PER_FRAME`] steps, so a
    /// stalled host cannot trigger a catch-up spiral; excess time beyond
    /// [`MAX_FRAME_TIME`] is dropped.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        steps
    }

    /// Drop pending time, e.g. when leaving a level
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
