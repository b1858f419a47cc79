//! Input forms for points, squares and cubes
//!
//! Each form holds the current field values, accepts text input per field and
//! on submit appends to the scene before refilling its defaults:
//! - Point form resets to the origin
//! - Square form resets its length to 1
//! - Cube form draws a new random length and origin

use glam::Vec3;

use crate::consts::*;
use crate::error::SceneError;
use crate::scene::{ParamRng, Point3, SceneModel};
use crate::settings::CubeFormRanges;

/// Parse form text as a number ("parseable as a number" is the only check)
pub fn parse_number(field: &'static str, input: &str) -> Result<f32, SceneError> {
    input.trim().parse::<f32>().map_err(|_| SceneError::Parse {
        field,
        input: input.to_string(),
    })
}

/// Coordinate field of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }
}

fn set_axis(p: &mut Point3, axis: Axis, value: f32) {
    match axis {
        Axis::X => p.x = value,
        Axis::Y => p.y = value,
        Axis::Z => p.z = value,
    }
}

/// "Add a New Point" form
#[derive(Debug, Clone, Default)]
pub struct PointForm {
    pub point: Point3,
}

impl PointForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one coordinate from text. On error the field keeps its value.
    pub fn set_field(&mut self, axis: Axis, input: &str) -> Result<(), SceneError> {
        let value = parse_number(axis.as_str(), input)?;
        set_axis(&mut self.point, axis, value);
        Ok(())
    }

    /// Append the point and reset the fields to the origin
    pub fn submit(&mut self, scene: &mut SceneModel) -> Result<usize, SceneError> {
        let index = scene.add_point(self.point)?;
        self.point = Vec3::ZERO;
        Ok(index)
    }
}

/// "Add a New Square" form
#[derive(Debug, Clone)]
pub struct SquareForm {
    pub origin: Point3,
    pub length: f32,
}

impl Default for SquareForm {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            length: SQUARE_DEFAULT_LENGTH,
        }
    }
}

impl SquareForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_length(&mut self, input: &str) -> Result<(), SceneError> {
        self.length = parse_number("length", input)?;
        Ok(())
    }

    pub fn set_origin(&mut self, axis: Axis, input: &str) -> Result<(), SceneError> {
        let value = parse_number(axis.as_str(), input)?;
        set_axis(&mut self.origin, axis, value);
        Ok(())
    }

    /// Append the square and restore the default length
    pub fn submit(&mut self, scene: &mut SceneModel) -> Result<usize, SceneError> {
        let index = scene.add_square(self.origin, self.length)?;
        self.length = SQUARE_DEFAULT_LENGTH;
        Ok(index)
    }
}

/// "Add a New Cube" form
#[derive(Debug, Clone)]
pub struct CubeForm {
    pub origin: Point3,
    pub length: f32,
    /// Where the next defaults are drawn from
    pub ranges: CubeFormRanges,
}

impl Default for CubeForm {
    fn default() -> Self {
        Self::new(CubeFormRanges::default())
    }
}

impl CubeForm {
    pub fn new(ranges: CubeFormRanges) -> Self {
        Self {
            origin: Vec3::splat(CUBE_DEFAULT_AXIS),
            length: CUBE_DEFAULT_LENGTH,
            ranges,
        }
    }

    pub fn set_length(&mut self, input: &str) -> Result<(), SceneError> {
        self.length = parse_number("length", input)?;
        Ok(())
    }

    pub fn set_origin(&mut self, axis: Axis, input: &str) -> Result<(), SceneError> {
        let value = parse_number(axis.as_str(), input)?;
        set_axis(&mut self.origin, axis, value);
        Ok(())
    }

    /// Append the cube, then prefill a random length and origin for the next one.
    /// A rejected submit leaves the fields as they were.
    pub fn submit(
        &mut self,
        scene: &mut SceneModel,
        rng: &mut ParamRng,
    ) -> Result<usize, SceneError> {
        let index = scene.add_cube(self.origin, self.length)?;
        self.length = rng.sample(self.ranges.length) as f32;
        self.origin = Vec3::new(
            rng.sample(self.ranges.axis) as f32,
            rng.sample(self.ranges.axis) as f32,
            rng.sample(self.ranges.axis) as f32,
        );
        Ok(index)
    }
}
