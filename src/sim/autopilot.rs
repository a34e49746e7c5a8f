//! Idle/demo mode: synthesises key presses that chase the coin

use super::input::{InputState, Key};
use super::state::GameState;

/// How many ticks ahead the pilot extrapolates its own motion before deciding
/// to accelerate or brake.
const LOOKAHEAD_TICKS: f32 = 8.0;
/// Per-axis distance treated as "close enough"
const DEADZONE: f32 = 4.0;

/// Keys a player would hold this tick to head for the coin
pub fn steer(state: &GameState) -> InputState {
    let predicted = state.body.pos + state.body.vel * LOOKAHEAD_TICKS;
    let error = state.coin.pos - predicted;

    let mut input = InputState::new();
    if error.x > DEADZONE {
        input.press(Key::ArrowRight);
    } else if error.x < -DEADZONE {
        input.press(Key::ArrowLeft);
    }
    if error.y > DEADZONE {
        input.press(Key::ArrowDown);
    } else if error.y < -DEADZONE {
        input.press(Key::ArrowUp);
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Direction;
    use crate::sim::state::PlayArea;
    use crate::sim::tick;
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[test]
    fn test_steers_toward_coin() {
        let mut state = GameState::new(3, PlayArea::default(), Tuning::default());
        state.body.pos = Vec2::new(100.0, 100.0);
        state.coin.pos = Vec2::new(500.0, 50.0);
        let input = steer(&state);
        assert!(input.held(Direction::Right));
        assert!(input.held(Direction::Up));
        assert!(!input.held(Direction::Left));
        assert!(!input.held(Direction::Down));
    }

    #[test]
    fn test_brakes_when_overshooting() {
        let mut state = GameState::new(3, PlayArea::default(), Tuning::default());
        state.body.pos = Vec2::new(100.0, 100.0);
        state.body.vel = Vec2::new(10.0, 0.0);
        state.coin.pos = Vec2::new(150.0, 100.0);
        assert!(steer(&state).held(Direction::Left));
    }

    #[test]
    fn test_autopilot_collects_coins() {
        let mut state = GameState::new(2024, PlayArea::default(), Tuning::default());
        for _ in 0..3000 {
            let input = steer(&state);
            tick::tick(&mut state, &input);
        }
        assert!(state.score >= 3, "autopilot only scored {}", state.score);
    }
}
