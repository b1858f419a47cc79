//! Line-list generation for 3D primitives
//!
//! Every function returns vertex pairs (one pair per segment) suitable for a
//! `LineList` topology.

use glam::Vec3;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::scene::build_cube;

/// Segments joining consecutive vertices of a polyline
pub fn polyline(vertices: &[Vec3], color: [f32; 4]) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(vertices.len().saturating_sub(1) * 2);
    for pair in vertices.windows(2) {
        out.push(Vertex::at(pair[0], color));
        out.push(Vertex::at(pair[1], color));
    }
    out
}

/// Three axis-aligned strokes crossing at `center`
pub fn point_marker(center: Vec3, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(6);
    for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
        out.push(Vertex::at(center - axis * radius, color));
        out.push(Vertex::at(center + axis * radius, color));
    }
    out
}

/// Circle of `radius` around `center` in the plane spanned by `u` and `v`
fn circle(
    center: Vec3,
    radius: f32,
    u: Vec3,
    v: Vec3,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut out = Vec::with_capacity((segments * 2) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let p1 = center + (u * theta1.cos() + v * theta1.sin()) * radius;
        let p2 = center + (u * theta2.cos() + v * theta2.sin()) * radius;
        out.push(Vertex::at(p1, color));
        out.push(Vertex::at(p2, color));
    }

    out
}

/// Wire sphere: one great circle in each axis plane
pub fn wire_sphere(center: Vec3, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut out = Vec::with_capacity((segments * 6) as usize);
    out.extend(circle(center, radius, Vec3::X, Vec3::Y, color, segments));
    out.extend(circle(center, radius, Vec3::Y, Vec3::Z, color, segments));
    out.extend(circle(center, radius, Vec3::Z, Vec3::X, color, segments));
    out
}

/// Wire box centered on `center` with edge `size` (12 edges)
pub fn wire_box(center: Vec3, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let c = build_cube(center - Vec3::splat(size / 2.0), size).corners();
    #[rustfmt::skip]
    const EDGES: [(usize, usize); 12] = [
        (0, 1), (1, 2), (2, 3), (3, 0), // bottom
        (4, 5), (5, 6), (6, 7), (7, 4), // top
        (0, 4), (1, 5), (2, 6), (3, 7), // verticals
    ];

    let mut out = Vec::with_capacity(EDGES.len() * 2);
    for (a, b) in EDGES {
        out.push(Vertex::at(c[a], color));
        out.push(Vertex::at(c[b], color));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_polyline_segments() {
        let pts = [Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::ZERO];
        let verts = polyline(&pts, WHITE);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(verts[2].position, [1.0, 0.0, 0.0]);
        assert!(polyline(&[Vec3::ZERO], WHITE).is_empty());
        assert!(polyline(&[], WHITE).is_empty());
    }

    #[test]
    fn test_wire_sphere_on_radius() {
        let center = Vec3::new(10.0, 20.0, 30.0);
        let verts = wire_sphere(center, 3.0, WHITE, 16);
        assert_eq!(verts.len(), 16 * 2 * 3);
        for v in &verts {
            let d = Vec3::from_array(v.position).distance(center);
            assert!((d - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_wire_box_extents() {
        let verts = wire_box(Vec3::ZERO, 2.0, WHITE);
        assert_eq!(verts.len(), 24);
        for v in &verts {
            assert!(v.position.iter().all(|c| c.abs() == 1.0));
        }
    }
}
