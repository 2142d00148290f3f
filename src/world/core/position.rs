use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Integer grid coordinate of a block.
///
/// A block at `(x, y, z)` is centered on that point and spans half a block
/// in every direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell containing a world-space point (round to nearest)
    pub fn from_world(point: Point3<f32>) -> Self {
        Self {
            x: point.x.round() as i32,
            y: point.y.round() as i32,
            z: point.z.round() as i32,
        }
    }

    /// Center of this cell in world space
    pub fn center(self) -> Point3<f32> {
        Point3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    pub fn offset(self, delta: Vector3<i32>) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            z: self.z + delta.z,
        }
    }
}

impl Add<Vector3<i32>> for VoxelPos {
    type Output = VoxelPos;

    fn add(self, rhs: Vector3<i32>) -> VoxelPos {
        self.offset(rhs)
    }
}

impl From<(i32, i32, i32)> for VoxelPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for VoxelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
