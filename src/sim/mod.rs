//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform code:
//! - One call to `tick` per fixed step
//! - Seeded RNG only
//! - State passed explicitly, no globals

pub mod autopilot;
pub mod body;
pub mod burst;
pub mod coin;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use body::PlayerBody;
pub use burst::{Particle, ParticlePool};
pub use coin::{Coin, spawn_position};
pub use collision::{CollisionResult, circle_circle, circles_overlap};
pub use input::{Direction, InputState, Key};
pub use state::{GameState, PlayArea};
pub use tick::{Collection, TickOutcome, collect_coin, tick};
