use super::{BlockKind, VoxelPos};
use cgmath::{InnerSpace, Point3, Vector3};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn point_at(&self, distance: f32) -> Point3<f32> {
        self.origin + self.direction * distance
    }
}

/// One of the six axis-aligned faces of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFace {
    Right,  // +X
    Left,   // -X
    Top,    // +Y
    Bottom, // -Y
    Front,  // +Z
    Back,   // -Z
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Right,
        BlockFace::Left,
        BlockFace::Top,
        BlockFace::Bottom,
        BlockFace::Front,
        BlockFace::Back,
    ];

    /// Outward unit normal
    pub fn normal(&self) -> Vector3<f32> {
        let offset = self.offset();
        Vector3::new(offset.x as f32, offset.y as f32, offset.z as f32)
    }

    /// Grid step from a block to its neighbour across this face
    pub fn offset(&self) -> Vector3<i32> {
        match self {
            BlockFace::Right => Vector3::new(1, 0, 0),
            BlockFace::Left => Vector3::new(-1, 0, 0),
            BlockFace::Top => Vector3::new(0, 1, 0),
            BlockFace::Bottom => Vector3::new(0, -1, 0),
            BlockFace::Front => Vector3::new(0, 0, 1),
            BlockFace::Back => Vector3::new(0, 0, -1),
        }
    }

    /// Face crossed when a ray enters a cell by stepping `step` along `axis`.
    /// A ray moving +X enters through the -X face, and so on.
    pub fn entered_from(axis: usize, step: i32) -> BlockFace {
        match (axis, step > 0) {
            (0, true) => BlockFace::Left,
            (0, false) => BlockFace::Right,
            (1, true) => BlockFace::Bottom,
            (1, false) => BlockFace::Top,
            (_, true) => BlockFace::Back,
            (_, false) => BlockFace::Front,
        }
    }
}

/// Nearest block surface under a targeting ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub position: VoxelPos,
    pub face: BlockFace,
    pub distance: f32,
    pub block: BlockKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normals_are_unit_axes() {
        for face in BlockFace::ALL {
            assert!((face.normal().magnitude() - 1.0).abs() < 1e-6);
        }
        assert_eq!(BlockFace::Top.offset(), Vector3::new(0, 1, 0));
    }

    #[test]
    fn test_entered_from_opposes_step() {
        for axis in 0..3 {
            for step in [-1, 1] {
                let face = BlockFace::entered_from(axis, step);
                let offset = face.offset();
                let component = [offset.x, offset.y, offset.z][axis];
                assert_eq!(component, -step);
            }
        }
    }

    #[test]
    fn test_ray_direction_is_normalized() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 3.0, 4.0));
        assert!((ray.direction.magnitude() - 1.0).abs() < 1e-6);
        let p = ray.point_at(5.0);
        assert!((p.y - 3.0).abs() < 1e-5 && (p.z - 4.0).abs() < 1e-5);
    }
}
