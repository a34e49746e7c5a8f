//! WebGPU rendering module
//!
//! The scene is rebuilt every frame as one alpha-blended triangle list.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderInitError, RenderState};
pub use scene::build_scene;
pub use vertex::Vertex;
