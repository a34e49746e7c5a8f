//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// Player gradient stops (alpha is replaced by the pulse)
    pub const PLAYER_CORE: [f32; 3] = [0.0, 1.0, 1.0];
    pub const PLAYER_MID: [f32; 3] = [0.0, 0.75, 1.0];
    pub const PLAYER_RIM: [f32; 3] = [0.0, 0.0, 1.0];

    pub const COIN_CORE: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
    pub const COIN_MID: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const COIN_RIM: [f32; 4] = [1.0, 0.647, 0.0, 1.0];
    pub const COIN_GLOW: [f32; 4] = [1.0, 0.875, 0.0, 0.8];

    pub const fn with_alpha(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
        [rgb[0], rgb[1], rgb[2], alpha]
    }

    pub const fn transparent(color: [f32; 4]) -> [f32; 4] {
        [color[0], color[1], color[2], 0.0]
    }
}
