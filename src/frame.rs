//! Turns display-frame timestamps into a number of fixed simulation ticks
//!
//! The browser calls us at whatever rate the display refreshes. The sim wants
//! exactly `SIM_HZ` ticks per second, so the leftover time is carried between
//! frames in an accumulator.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the timestamp (milliseconds) of a new frame and get back how many
    /// ticks to run before drawing it. The first frame always runs one tick.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let dt = match self.last_time {
            Some(prev) => ((now_ms - prev) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(now_ms);

        // Backgrounded tabs resume with huge deltas; clock skew can go negative
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }
}
