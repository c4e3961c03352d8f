//! Rendering module
//!
//! `commands` turns game state into an ordered list of colored quads;
//! `pipeline` pushes those quads through wgpu and presents the frame.

pub mod commands;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use commands::{DrawCommand, build_frame};
pub use pipeline::RenderState;
pub use vertex::Vertex;
