//! Dynamic rigid bodies for the physics sandbox
//!
//! Bodies carry only what the physics engine needs at spawn time: shape,
//! position, size and mass. Simulation happens elsewhere.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::geometry::Point3;
use super::random::{IntRange, ParamRng};
use crate::consts::*;

/// Shape of a spawned body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Sphere,
    Box,
}

impl BodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Sphere => "sphere",
            BodyKind::Box => "box",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sphere" | "ball" => Some(BodyKind::Sphere),
            "box" | "cube" => Some(BodyKind::Box),
            _ => None,
        }
    }
}

/// Collider description handed to the physics engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    Ball { radius: f32 },
    Cuboid { half_extents: Vec3 },
}

/// A spawned rigid body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicBody {
    pub kind: BodyKind,
    /// Center of the body
    pub position: Point3,
    /// Sphere radius or box edge length
    pub size: f32,
    pub mass: f32,
}

impl DynamicBody {
    /// Draw a body of `kind` with every parameter taken from `ranges`
    pub fn random(kind: BodyKind, ranges: &SpawnRanges, rng: &mut ParamRng) -> Self {
        let position = Vec3::new(
            rng.sample(ranges.position) as f32,
            rng.sample(ranges.position) as f32,
            rng.sample(ranges.position) as f32,
        );
        Self {
            kind,
            position,
            size: rng.sample(ranges.size) as f32,
            mass: rng.sample(ranges.mass) as f32,
        }
    }

    pub fn collider(&self) -> Collider {
        match self.kind {
            BodyKind::Sphere => Collider::Ball { radius: self.size },
            BodyKind::Box => Collider::Cuboid {
                half_extents: Vec3::splat(self.size / 2.0),
            },
        }
    }
}

/// Inclusive ranges for spawned body parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRanges {
    /// Applied independently to x, y and z
    pub position: IntRange,
    pub size: IntRange,
    pub mass: IntRange,
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            position: IntRange::new(SPAWN_POSITION_MIN, SPAWN_POSITION_MAX),
            size: IntRange::new(SPAWN_SIZE_MIN, SPAWN_SIZE_MAX),
            mass: IntRange::new(SPAWN_MASS_MIN, SPAWN_MASS_MAX),
        }
    }
}
