//! Line batch: a `PresentationAdapter` that flattens a frame into one
//! line-list vertex buffer for upload by the host renderer.

use super::adapter::PresentationAdapter;
use super::shapes;
use super::vertex::Vertex;
use crate::consts::SPHERE_SEGMENTS;
use crate::scene::{BodyKind, DynamicBody, Point3};

/// Vertex buffer for one frame, rebuilt on every `begin_frame`
#[derive(Debug, Clone)]
pub struct LineBatch {
    vertices: Vec<Vertex>,
    sphere_segments: u32,
    frames: u64,
}

impl Default for LineBatch {
    fn default() -> Self {
        Self::new(SPHERE_SEGMENTS)
    }
}

impl LineBatch {
    pub fn new(sphere_segments: u32) -> Self {
        Self {
            vertices: Vec::new(),
            sphere_segments,
            frames: 0,
        }
    }

    /// Line-list vertices of the last frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes for a GPU buffer write
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Interleaved floats (xyz rgba per vertex) for a JS-side buffer
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of line segments in the last frame
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl PresentationAdapter for LineBatch {
    fn begin_frame(&mut self) {
        self.vertices.clear();
    }

    fn draw_point(&mut self, at: Point3, radius: f32, color: [f32; 4]) {
        self.vertices.extend(shapes::point_marker(at, radius, color));
    }

    fn draw_polyline(&mut self, vertices: &[Point3], color: [f32; 4]) {
        self.vertices.extend(shapes::polyline(vertices, color));
    }

    fn draw_body(&mut self, body: &DynamicBody, color: [f32; 4]) {
        let verts = match body.kind {
            BodyKind::Sphere => {
                shapes::wire_sphere(body.position, body.size, color, self.sphere_segments)
            }
            BodyKind::Box => shapes::wire_box(body.position, body.size, color),
        };
        self.vertices.extend(verts);
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::present;
    use crate::scene::{Outline, SceneModel};
    use crate::settings::Settings;
    use glam::Vec3;

    #[test]
    fn test_batch_counts() {
        let mut scene = SceneModel::new();
        scene.add_point(Vec3::ZERO).unwrap();
        scene.add_cube(Vec3::ZERO, 1.0).unwrap();

        let mut batch = LineBatch::default();
        let settings = Settings {
            outline: Outline::Closed,
            ..Settings::default()
        };
        present(&scene, &mut batch, &settings);

        // 3 axes + 3 marker strokes + 6 closed faces of 4 edges
        assert_eq!(batch.segment_count(), 3 + 3 + 24);
        assert_eq!(batch.as_floats().len(), batch.vertices().len() * 7);
        assert_eq!(batch.as_bytes().len(), batch.vertices().len() * 28);
        assert_eq!(batch.frames(), 1);
    }

    #[test]
    fn test_batch_cleared_each_frame() {
        let mut scene = SceneModel::new();
        scene.add_square(Vec3::ZERO, 1.0).unwrap();
        let settings = Settings::default();

        let mut batch = LineBatch::new(8);
        present(&scene, &mut batch, &settings);
        let first = batch.vertices().len();
        present(&scene, &mut batch, &settings);
        assert_eq!(batch.vertices().len(), first);
        assert_eq!(batch.frames(), 2);
    }

    #[test]
    fn test_body_outlines() {
        let sphere = DynamicBody {
            kind: BodyKind::Sphere,
            position: Vec3::ZERO,
            size: 1.0,
            mass: 1.0,
        };
        let mut batch = LineBatch::new(8);
        batch.begin_frame();
        batch.draw_body(&sphere, [1.0; 4]);
        assert_eq!(batch.segment_count(), 24);

        batch.draw_body(
            &DynamicBody {
                kind: BodyKind::Box,
                ..sphere
            },
            [1.0; 4],
        );
        assert_eq!(batch.segment_count(), 24 + 12);
    }
}
