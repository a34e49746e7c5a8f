//! Coin Dash - a tiny arcade game about chasing coins
//!
//! Core modules:
//! - `sim`: Simulation (player physics, coin spawning, collisions, particle bursts)
//! - `renderer`: WebGPU rendering of the simulation state
//! - `tuning`: Data-driven game balance
//! - `frame`: Fixed-timestep pacing between display frames and sim ticks

pub mod frame;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use frame::FrameClock;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Simulation rate. Every per-tick constant in `Tuning` is expressed against it.
    pub const SIM_HZ: f32 = 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / SIM_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta honoured (seconds); longer gaps are treated as this
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Play area used when no canvas is available (headless runs)
    pub const DEFAULT_AREA_WIDTH: f32 = 800.0;
    pub const DEFAULT_AREA_HEIGHT: f32 = 600.0;

    /// Largest particle count a single burst may spawn
    pub const MAX_PARTICLES: usize = 1000;

    /// Circle tessellation
    pub const CIRCLE_SEGMENTS: u32 = 48;
    pub const PARTICLE_SEGMENTS: u32 = 12;
}
