//! Fixed-timestep driver for [`Session::update`](crate::Session::update).
//!
//! Elapsed time is accumulated and spent in whole 60 Hz steps, so the walker
//! moves the same distance regardless of how irregular frame times are.

use tracing::warn;

/// Simulation step: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame time accepted in one call. Longer frames are clamped and
/// the simulation falls behind wall-clock time instead of running dozens of
/// catch-up steps.
pub const MAX_FRAME_TIME: f64 = 0.25;

#[derive(Debug, Default)]
pub struct GameLoop {
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `frame_time` seconds, calling `update_fn(FIXED_DT)` once per
    /// whole step. Returns the number of steps run.
    pub fn advance(&mut self, frame_time: f64, mut update_fn: impl FnMut(f32)) -> u32 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }
        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT as f32);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            steps += 1;
        }
        self.frame_count += 1;
        steps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}
