//! Builds the frame's triangle list from the game state
//!
//! Draw order, back to front: player, player burst, coin, coin burst.
//! The score is shown by the host's HUD, not drawn here.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{CIRCLE_SEGMENTS, PARTICLE_SEGMENTS};
use crate::sim::{GameState, ParticlePool};

/// Glow extents, in pixels beyond the rim
const PLAYER_GLOW: f32 = 12.0;
const COIN_GLOW: f32 = 8.0;

/// Every vertex for one frame
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        (CIRCLE_SEGMENTS * 3 * 12 + state.particle_count() as u32 * PARTICLE_SEGMENTS * 3) as usize,
    );

    vertices.extend(player(state.body.pos, state.body.radius, state.pulse_intensity()));
    vertices.extend(particles(&state.player_burst));
    vertices.extend(coin(state.coin.pos, state.coin.radius));
    vertices.extend(particles(&state.coin_burst));

    vertices
}

/// Pulsing cyan orb with a glow and a white highlight
pub fn player(pos: Vec2, radius: f32, pulse: f32) -> Vec<Vertex> {
    let core = colors::with_alpha(colors::PLAYER_CORE, pulse);
    let stops = [
        (0.0, core),
        (0.5, colors::with_alpha(colors::PLAYER_MID, pulse * 0.8)),
        (1.0, colors::with_alpha(colors::PLAYER_RIM, pulse * 0.5)),
    ];

    let mut vertices = shapes::glow(pos, radius, PLAYER_GLOW, core, CIRCLE_SEGMENTS);
    vertices.extend(shapes::gradient_disc(pos, radius, &stops, CIRCLE_SEGMENTS));
    vertices.extend(shapes::circle(pos, radius * 0.2, colors::WHITE, CIRCLE_SEGMENTS / 2));
    vertices
}

/// Gold coin with a warm halo and a sparkle
pub fn coin(pos: Vec2, radius: f32) -> Vec<Vertex> {
    let stops = [
        (0.0, colors::COIN_CORE),
        (0.5, colors::COIN_MID),
        (1.0, colors::COIN_RIM),
    ];

    let mut vertices = shapes::glow(pos, radius, COIN_GLOW, colors::COIN_GLOW, CIRCLE_SEGMENTS);
    vertices.extend(shapes::gradient_disc(pos, radius, &stops, CIRCLE_SEGMENTS));
    vertices.extend(shapes::circle(pos, radius * 0.3, colors::WHITE, CIRCLE_SEGMENTS / 2));
    vertices
}

/// One translucent disc per live particle
pub fn particles(pool: &ParticlePool) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(pool.len() * (PARTICLE_SEGMENTS * 3) as usize);
    for particle in pool.particles() {
        vertices.extend(shapes::circle(
            particle.pos,
            particle.size,
            pool.color_of(particle),
            PARTICLE_SEGMENTS,
        ));
    }
    vertices
}
