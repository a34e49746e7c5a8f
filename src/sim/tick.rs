//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one step.

use glam::Vec2;

use super::collision::circles_overlap;
use super::input::InputState;
use super::state::GameState;

/// A coin pickup that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collection {
    /// Where the coin was when it was taken
    pub coin_pos: Vec2,
    /// Where the coin reappeared
    pub respawned_at: Vec2,
    /// Player position at the moment of pickup
    pub player_pos: Vec2,
    /// Score after the pickup
    pub score: u64,
}

/// What a tick produced, for the host to react to
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutcome {
    pub collected: Option<Collection>,
}

/// Advance the game state by one tick.
///
/// Order matters: physics, glow, both bursts, then the pickup check. A burst
/// triggered by this tick's pickup therefore starts moving on the next tick.
pub fn tick(state: &mut GameState, input: &InputState) -> TickOutcome {
    state.time_ticks += 1;

    state.body.advance(input, state.area, &state.tuning.body);
    state.pulse_phase += state.tuning.pulse_speed;

    state.player_burst.advance();
    state.coin_burst.advance();

    TickOutcome {
        collected: collect_coin(state),
    }
}

/// Fire the pickup if the player overlaps the coin: respawn the coin, score,
/// and launch both bursts.
///
/// A coin that respawns on top of the player is collected again next tick.
pub fn collect_coin(state: &mut GameState) -> Option<Collection> {
    if !circles_overlap(
        state.body.pos,
        state.body.radius,
        state.coin.pos,
        state.coin.radius,
    ) {
        return None;
    }

    let coin_pos = state
        .coin
        .respawn(state.area, &state.tuning.coin, &mut state.rng);
    state.score += 1;

    state.coin_burst.activate(coin_pos, &mut state.rng);
    state.player_burst.activate(state.body.pos, &mut state.rng);

    Some(Collection {
        coin_pos,
        respawned_at: state.coin.pos,
        player_pos: state.body.pos,
        score: state.score,
    })
}
