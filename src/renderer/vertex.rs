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

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }

    /// Flattened `[x, y, r, g, b, a, ...]` floats
    pub fn as_floats(vertices: &[Vertex]) -> &[f32] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    use crate::sim::TreeColor;

    pub const SKY_TOP: [f32; 4] = [0.733, 0.839, 0.569, 1.0]; // #BBD691
    pub const SKY_BOTTOM: [f32; 4] = [0.996, 0.945, 0.882, 1.0]; // #FEF1E1
    pub const HILL_NEAR: [f32; 4] = [0.584, 0.776, 0.161, 1.0]; // #95C629
    pub const HILL_FAR: [f32; 4] = [0.396, 0.624, 0.110, 1.0]; // #659F1C
    pub const TREE_TRUNK: [f32; 4] = [0.490, 0.514, 0.235, 1.0]; // #7D833C
    pub const PLATFORM: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PERFECT_ZONE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const STICK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const HERO: [f32; 4] = [0.937, 0.831, 0.0, 1.0]; // #EFD400

    pub fn tree(color: TreeColor) -> [f32; 4] {
        match color {
            TreeColor::Olive => [0.427, 0.533, 0.129, 1.0], // #6D8821
            TreeColor::Moss => [0.561, 0.675, 0.204, 1.0],  // #8FAC34
            TreeColor::Lime => [0.596, 0.702, 0.200, 1.0],  // #98B333
        }
    }
}
