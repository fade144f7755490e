//! Numeric range and vector primitives shared by the target schema.

use serde::{Serialize, Serializer};

/// A `[min, max]` pair. Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A degenerate range where `min == max`.
    pub fn splat(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn zero() -> Self {
        Self::splat(0.0)
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Divide both bounds.
    pub fn divided_by(self, divisor: f64) -> Self {
        Self::new(self.min / divisor, self.max / divisor)
    }
}

impl Serialize for Range {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.min, self.max].serialize(serializer)
    }
}

/// A 3D vector. Serialized as a three-element array.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl Serialize for Vec3 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y, self.z].serialize(serializer)
    }
}
