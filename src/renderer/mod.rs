//! WebGPU rendering module
//!
//! Converts game state into vertex lists and draws them with a flat-color
//! pipeline. The simulation is never mutated here.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::{frame_vertices, rect};
pub use vertex::Vertex;
