//! Square and cube geometry
//!
//! Both primitives are axis-aligned and defined by an origin corner and a
//! uniform edge length. The length is not required to be positive: zero gives
//! a degenerate shape and a negative length mirrors the shape through the
//! origin corner.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A 3D coordinate (free point or vertex)
pub type Point3 = Vec3;

/// How a ring of corners is emitted for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outline {
    /// Corners only (4 points)
    Open,
    /// Corners followed by the first corner again (5 points)
    #[default]
    Closed,
}

/// Emit a 4-corner ring as an open or closed polyline
fn ring(corners: &[Point3; 4], outline: Outline) -> Vec<Point3> {
    let mut points = Vec::with_capacity(5);
    points.extend_from_slice(corners);
    if outline == Outline::Closed {
        points.push(corners[0]);
    }
    points
}

/// An axis-aligned square in the plane z = origin.z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub corners: [Point3; 4],
}

impl Square {
    /// Corners as a drawable polyline
    pub fn ring(&self, outline: Outline) -> Vec<Point3> {
        ring(&self.corners, outline)
    }
}

/// One planar quad face of a cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeFace {
    pub corners: [Point3; 4],
}

impl CubeFace {
    pub fn ring(&self, outline: Outline) -> Vec<Point3> {
        ring(&self.corners, outline)
    }
}

/// Number of faces on a cube
pub const CUBE_FACES: usize = 6;

/// An axis-aligned cube as six faces.
///
/// Face order: bottom (z), top (z+L), left (x), right (x+L), back (y+L),
/// front (y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    pub faces: [CubeFace; CUBE_FACES],
}

impl Cube {
    /// The 8 corners: bottom ring then top ring
    pub fn corners(&self) -> [Point3; 8] {
        let bottom = self.faces[0].corners;
        let top = self.faces[1].corners;
        [
            bottom[0], bottom[1], bottom[2], bottom[3], top[0], top[1], top[2], top[3],
        ]
    }
}

/// Build the square with corners (x,y), (x+L,y), (x+L,y+L), (x,y+L) at origin.z
pub fn build_square(origin: Point3, length: f32) -> Square {
    let (x, y, z) = (origin.x, origin.y, origin.z);
    Square {
        corners: [
            Vec3::new(x, y, z),
            Vec3::new(x + length, y, z),
            Vec3::new(x + length, y + length, z),
            Vec3::new(x, y + length, z),
        ],
    }
}

/// Corner indices for each face, consistent winding around the face
const FACE_INDICES: [[usize; 4]; CUBE_FACES] = [
    [0, 1, 2, 3], // bottom
    [4, 5, 6, 7], // top
    [0, 3, 7, 4], // left
    [1, 2, 6, 5], // right
    [2, 3, 7, 6], // back
    [0, 1, 5, 4], // front
];

/// Build the cube anchored at `origin` with edge `length`
pub fn build_cube(origin: Point3, length: f32) -> Cube {
    let bottom = build_square(origin, length).corners;
    let lift = Vec3::new(0.0, 0.0, length);
    let corners = [
        bottom[0],
        bottom[1],
        bottom[2],
        bottom[3],
        bottom[0] + lift,
        bottom[1] + lift,
        bottom[2] + lift,
        bottom[3] + lift,
    ];

    let faces = FACE_INDICES.map(|[a, b, c, d]| CubeFace {
        corners: [corners[a], corners[b], corners[c], corners[d]],
    });
    Cube { faces }
}
