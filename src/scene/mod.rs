//! Scene model module
//!
//! Everything the playground knows about its contents lives here:
//! - Append-only collections (entries are never edited or removed)
//! - Pure geometry builders for squares and cubes
//! - Seeded RNG for form defaults and spawned bodies
//! - No rendering or platform dependencies

pub mod body;
pub mod geometry;
pub mod model;
pub mod random;

pub use body::{BodyKind, Collider, DynamicBody, SpawnRanges};
pub use geometry::{Cube, CubeFace, Outline, Point3, Square, build_cube, build_square};
pub use model::{SceneChange, SceneModel, SubscriptionId};
pub use random::{IntRange, ParamRng};
