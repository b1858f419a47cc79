//! Geo Playground - scene model for a browser 3D geometry sandbox
//!
//! Core modules:
//! - `scene`: Append-only scene model, geometry builders, parameter RNG
//! - `renderer`: Presentation contract and line-list vertex batching
//! - `forms`: Point/square/cube input forms feeding the scene
//! - `settings`: Data-driven configuration

pub mod error;
pub mod forms;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use error::{ConfigError, SceneError};
pub use scene::random::IntRange;
pub use settings::Settings;

use glam::Vec3;

/// Scene configuration constants
pub mod consts {
    /// Length of the x/y/z axis guides drawn at the origin
    pub const AXIS_LENGTH: f32 = 20.0;
    /// Radius of the sphere marker drawn for a free point
    pub const POINT_MARKER_SIZE: f32 = 0.5;
    /// Segments per great circle when outlining a sphere body
    pub const SPHERE_SEGMENTS: u32 = 24;

    /// Square form default edge length (restored after each submit)
    pub const SQUARE_DEFAULT_LENGTH: f32 = 1.0;
    /// Cube form initial edge length and axis values
    pub const CUBE_DEFAULT_LENGTH: f32 = 5.0;
    pub const CUBE_DEFAULT_AXIS: f32 = 5.0;
    /// Cube form refill ranges (inclusive)
    pub const CUBE_LENGTH_MIN: i32 = 5;
    pub const CUBE_LENGTH_MAX: i32 = 15;
    pub const CUBE_AXIS_MIN: i32 = 5;
    pub const CUBE_AXIS_MAX: i32 = 300;

    /// Dynamic body spawn ranges (inclusive)
    pub const SPAWN_POSITION_MIN: i32 = 5;
    pub const SPAWN_POSITION_MAX: i32 = 200;
    pub const SPAWN_SIZE_MIN: i32 = 1;
    pub const SPAWN_SIZE_MAX: i32 = 5;
    pub const SPAWN_MASS_MIN: i32 = 1;
    pub const SPAWN_MASS_MAX: i32 = 10;
}

/// Marker points placed at the origin and the tip of each axis guide
pub fn axis_markers(length: f32) -> [Vec3; 4] {
    [
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, length),
        Vec3::new(length, 0.0, 0.0),
        Vec3::new(0.0, length, 0.0),
    ]
}

