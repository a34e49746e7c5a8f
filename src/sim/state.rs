//! Game state and core simulation types
//!
//! Everything the game mutates lives in [`GameState`], owned by the host and
//! handed to `tick` by reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::PlayerBody;
use super::burst::ParticlePool;
use super::coin::Coin;
use crate::tuning::Tuning;

/// Size of the play field in pixels; the origin is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Area for a canvas of the given client size. A dimension that is not
    /// laid out yet (zero or negative) takes the default size.
    pub fn from_client_size(width: f32, height: f32) -> Self {
        let default = Self::default();
        Self::new(
            if width > 0.0 { width } else { default.width },
            if height > 0.0 { height } else { default.height },
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        use crate::consts::{DEFAULT_AREA_HEIGHT, DEFAULT_AREA_WIDTH};
        Self::new(DEFAULT_AREA_WIDTH, DEFAULT_AREA_HEIGHT)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub area: PlayArea,
    pub body: PlayerBody,
    pub coin: Coin,
    /// Coins collected this run
    pub score: u64,
    /// Gold sparks at the collected coin
    pub coin_burst: ParticlePool,
    /// Cyan sparks around the player
    pub player_burst: ParticlePool,
    /// Phase of the player's glow (radians, grows forever)
    pub pulse_phase: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game with the player at its start position and a coin
    /// already placed.
    pub fn new(seed: u64, area: PlayArea, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let coin = Coin::spawn(area, &tuning.coin, &mut rng);

        Self {
            seed,
            area,
            body: PlayerBody::new(&tuning.body),
            coin,
            score: 0,
            coin_burst: ParticlePool::new(tuning.coin_burst.clone()),
            player_burst: ParticlePool::new(tuning.player_burst.clone()),
            pulse_phase: 0.0,
            time_ticks: 0,
            rng,
            tuning,
        }
    }

    /// Glow strength of the player, oscillating in [0.5, 0.9]
    pub fn pulse_intensity(&self) -> f32 {
        self.pulse_phase.sin() * 0.2 + 0.7
    }

    /// Live particles across both bursts
    pub fn particle_count(&self) -> usize {
        self.coin_burst.len() + self.player_burst.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(12345, PlayArea::default(), Tuning::default());
        assert_eq!(state.score, 0);
        assert_eq!(state.body.pos, Vec2::new(100.0, 100.0));
        assert!(state.area.contains(state.coin.pos));
        assert!(!state.coin_burst.is_active());
        assert!(!state.player_burst.is_active());
        assert_eq!(state.particle_count(), 0);
    }

    #[test]
    fn test_unsized_canvas_falls_back_to_default_area() {
        assert_eq!(PlayArea::from_client_size(0.0, 0.0), PlayArea::default());
        assert_eq!(
            PlayArea::from_client_size(1024.0, 0.0),
            PlayArea::new(1024.0, 600.0)
        );
        assert_eq!(
            PlayArea::from_client_size(640.0, 480.0),
            PlayArea::new(640.0, 480.0)
        );
    }

    #[test]
    fn test_same_seed_same_coin() {
        let a = GameState::new(7, PlayArea::default(), Tuning::default());
        let b = GameState::new(7, PlayArea::default(), Tuning::default());
        assert_eq!(a.coin, b.coin);
    }

    #[test]
    fn test_pulse_intensity_bounds() {
        let mut state = GameState::new(1, PlayArea::default(), Tuning::default());
        for _ in 0..500 {
            state.pulse_phase += 0.05;
            let i = state.pulse_intensity();
            assert!((0.5 - 1e-6..=0.9 + 1e-6).contains(&i));
        }
    }
}
