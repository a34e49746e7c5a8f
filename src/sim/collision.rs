//! Circle overlap tests

use glam::Vec2;

/// Result of a circle-circle check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the circles overlap
    pub hit: bool,
    /// Distance between centres
    pub distance: f32,
}

/// Check two circles. Touching exactly is not a hit.
pub fn circle_circle(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> CollisionResult {
    let distance = a.distance(b);
    CollisionResult {
        hit: distance < radius_a + radius_b,
        distance,
    }
}

#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    circle_circle(a, radius_a, b, radius_b).hit
}
