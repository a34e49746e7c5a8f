//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};

/// Point on the circle of `radius` around `center` at segment `i` of `segments`
fn rim_point(center: Vec2, radius: f32, i: u32, segments: u32) -> Vec2 {
    let theta = (i as f32 / segments as f32) * TAU;
    center + Vec2::from_angle(theta) * radius
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    radial_fill(center, radius, color, color, segments)
}

/// Filled circle whose color blends from `inner` at the centre to `outer` at
/// the rim. The GPU interpolates along each fan triangle.
pub fn radial_fill(
    center: Vec2,
    radius: f32,
    inner: [f32; 4],
    outer: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let p1 = rim_point(center, radius, i, segments);
        let p2 = rim_point(center, radius, i + 1, segments);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, inner));
        vertices.push(Vertex::new(p1.x, p1.y, outer));
        vertices.push(Vertex::new(p2.x, p2.y, outer));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle), blending from `inner_color`
/// on the inside edge to `outer_color` on the outside edge
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    inner_color: [f32; 4],
    outer_color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let inner1 = rim_point(center, inner_radius, i, segments);
        let outer1 = rim_point(center, outer_radius, i, segments);
        let inner2 = rim_point(center, inner_radius, i + 1, segments);
        let outer2 = rim_point(center, outer_radius, i + 1, segments);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, inner_color));
        vertices.push(Vertex::new(outer1.x, outer1.y, outer_color));
        vertices.push(Vertex::new(inner2.x, inner2.y, inner_color));

        vertices.push(Vertex::new(inner2.x, inner2.y, inner_color));
        vertices.push(Vertex::new(outer1.x, outer1.y, outer_color));
        vertices.push(Vertex::new(outer2.x, outer2.y, outer_color));
    }

    vertices
}

/// Disc with a multi-stop radial gradient. `stops` are `(fraction of radius,
/// color)` pairs in increasing order, the first at 0.0.
pub fn gradient_disc(
    center: Vec2,
    radius: f32,
    stops: &[(f32, [f32; 4])],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t0 <= 0.0 {
            vertices.extend(radial_fill(center, radius * t1, c0, c1, segments));
        } else {
            vertices.extend(ring(center, radius * t0, radius * t1, c0, c1, segments));
        }
    }
    vertices
}

/// Soft halo fading from `color` at `radius` to nothing at `radius + blur`
pub fn glow(center: Vec2, radius: f32, blur: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ring(center, radius, radius + blur, color, colors::transparent(color), segments)
}
