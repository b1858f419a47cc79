//! Vertex types for 3D line rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Simple 3D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z],
            color,
        }
    }

    pub fn at(p: Vec3, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, p.z, color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const AXIS_X: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const AXIS_Y: [f32; 4] = [0.0, 0.8, 0.0, 1.0];
    pub const AXIS_Z: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const POINT: [f32; 4] = [1.0, 1.0, 0.0, 1.0]; // Yellow
    pub const SQUARE: [f32; 4] = [0.4, 0.7, 1.0, 1.0];
    pub const CUBE: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const BODY: [f32; 4] = [1.0, 0.6, 0.0, 1.0]; // Orange
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 28);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 12);
    }

    #[test]
    fn test_cast_to_floats() {
        let verts = [Vertex::at(Vec3::new(1.0, 2.0, 3.0), colors::POINT)];
        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 1.0, 1.0, 0.0, 1.0]);
    }
}
