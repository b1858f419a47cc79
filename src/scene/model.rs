//! The scene model
//!
//! Four ordered collections that only ever grow. Appends are the sole
//! mutation; readers get slices. Subscribers are told about each append so a
//! renderer can redraw on its next frame.

use super::body::{BodyKind, DynamicBody, SpawnRanges};
use super::geometry::{Cube, Point3, Square, build_cube, build_square};
use super::random::ParamRng;
use crate::error::SceneError;

/// Which collection grew, and the index of the new entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneChange {
    PointAdded(usize),
    SquareAdded(usize),
    CubeAdded(usize),
    BodySpawned(usize),
}

/// Handle returned by `SceneModel::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Listener = Box<dyn FnMut(&SceneChange)>;

/// Append-only registry of everything added during a session
#[derive(Default)]
pub struct SceneModel {
    points: Vec<Point3>,
    squares: Vec<Square>,
    cubes: Vec<Cube>,
    dynamic_bodies: Vec<DynamicBody>,
    /// Subscribers (in subscription order)
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u32,
}

impl std::fmt::Debug for SceneModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneModel")
            .field("points", &self.points.len())
            .field("squares", &self.squares.len())
            .field("cubes", &self.cubes.len())
            .field("dynamic_bodies", &self.dynamic_bodies.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn check_point(field: &'static str, p: Point3) -> Result<(), SceneError> {
    match p.to_array().into_iter().find(|v| !v.is_finite()) {
        Some(value) => Err(SceneError::NonFinite { field, value }),
        None => Ok(()),
    }
}

fn check_length(length: f32) -> Result<(), SceneError> {
    if length.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFinite {
            field: "length",
            value: length,
        })
    }
}

impl SceneModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn dynamic_bodies(&self) -> &[DynamicBody] {
        &self.dynamic_bodies
    }

    /// Total number of entities across all collections
    pub fn len(&self) -> usize {
        self.points.len() + self.squares.len() + self.cubes.len() + self.dynamic_bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a free point. Returns its index.
    pub fn add_point(&mut self, p: Point3) -> Result<usize, SceneError> {
        check_point("point", p).inspect_err(|e| log::warn!("Rejected point: {e}"))?;

        self.points.push(p);
        let index = self.points.len() - 1;
        log::debug!("Point {index} added at {p}");
        self.notify(SceneChange::PointAdded(index));
        Ok(index)
    }

    /// Build a square at `origin` and append it. Returns its index.
    pub fn add_square(&mut self, origin: Point3, length: f32) -> Result<usize, SceneError> {
        check_point("origin", origin)
            .and_then(|_| check_length(length))
            .inspect_err(|e| log::warn!("Rejected square: {e}"))?;

        self.squares.push(build_square(origin, length));
        let index = self.squares.len() - 1;
        log::debug!("Square {index} added at {origin} (length {length})");
        self.notify(SceneChange::SquareAdded(index));
        Ok(index)
    }

    /// Build a cube at `origin` and append it. Returns its index.
    pub fn add_cube(&mut self, origin: Point3, length: f32) -> Result<usize, SceneError> {
        check_point("origin", origin)
            .and_then(|_| check_length(length))
            .inspect_err(|e| log::warn!("Rejected cube: {e}"))?;

        self.cubes.push(build_cube(origin, length));
        let index = self.cubes.len() - 1;
        log::debug!("Cube {index} added at {origin} (length {length})");
        self.notify(SceneChange::CubeAdded(index));
        Ok(index)
    }

    /// Spawn a body with parameters drawn from `ranges`, append and return it.
    ///
    /// # Panics
    ///
    /// Panics if any range has `min > max` (see `ParamRng::next_int`).
    pub fn spawn_dynamic_body(
        &mut self,
        kind: BodyKind,
        ranges: &SpawnRanges,
        rng: &mut ParamRng,
    ) -> &DynamicBody {
        let body = DynamicBody::random(kind, ranges, rng);
        self.dynamic_bodies.push(body);
        let index = self.dynamic_bodies.len() - 1;
        log::debug!(
            "Spawned {} {index} at {} (size {}, mass {})",
            kind.as_str(),
            body.position,
            body.size,
            body.mass
        );
        self.notify(SceneChange::BodySpawned(index));
        &self.dynamic_bodies[index]
    }

    /// Register a callback run after every append
    pub fn subscribe(&mut self, listener: impl FnMut(&SceneChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: SceneChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}
