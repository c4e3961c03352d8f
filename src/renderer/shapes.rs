//! Shape generation for 2D primitives

use glam::Vec2;

use super::commands::DrawCommand;
use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn quad(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let bottom_right = Vec2::new(max.x, min.y);
    let top_left = Vec2::new(min.x, max.y);
    [min, bottom_right, max, max, top_left, min].map(|corner| Vertex::at(corner, color))
}

/// Flatten draw commands into one triangle list, preserving draw order
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(commands.len() * 6);
    for command in commands {
        match *command {
            DrawCommand::Quad { min, max, color } => vertices.extend(quad(min, max, color)),
        }
    }
    vertices
}
