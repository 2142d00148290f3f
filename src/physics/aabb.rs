/// Data-Oriented Axis-Aligned Bounding Box System
///
/// Pure functions for collision detection - no methods, just data transformations.
/// Both blocks and the player body are boxes; the player's capsule is
/// approximated by its bounding box.
use crate::constants::world::BLOCK_HALF_SIZE;
use crate::world::core::VoxelPos;
use cgmath::{Point3, Vector3};

/// Axis-Aligned Bounding Box - pure data structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

/// Create AABB from center point and half extents
pub fn aabb_from_center_half_extents(center: Point3<f32>, half_extents: Vector3<f32>) -> AABB {
    AABB {
        min: Point3::new(
            center.x - half_extents.x,
            center.y - half_extents.y,
            center.z - half_extents.z,
        ),
        max: Point3::new(
            center.x + half_extents.x,
            center.y + half_extents.y,
            center.z + half_extents.z,
        ),
    }
}

/// Box occupied by the block at a grid coordinate
pub fn block_aabb(pos: VoxelPos) -> AABB {
    aabb_from_center_half_extents(
        pos.center(),
        Vector3::new(BLOCK_HALF_SIZE, BLOCK_HALF_SIZE, BLOCK_HALF_SIZE),
    )
}

/// Box occupied by the player body centered on `position`
pub fn player_aabb(position: Point3<f32>, radius: f32, height: f32) -> AABB {
    aabb_from_center_half_extents(position, Vector3::new(radius, height / 2.0, radius))
}

/// Test if two AABBs overlap.
///
/// Strict on every axis: boxes that only share a face do not intersect.
pub fn aabb_intersects(aabb1: &AABB, aabb2: &AABB) -> bool {
    aabb1.max.x > aabb2.min.x && aabb1.min.x < aabb2.max.x &&
    aabb1.max.y > aabb2.min.y && aabb1.min.y < aabb2.max.y &&
    aabb1.max.z > aabb2.min.z && aabb1.min.z < aabb2.max.z
}

/// Inclusive range of grid coordinates whose block box strictly overlaps
/// `aabb`, as (min corner, max corner). Empty on an axis when min > max.
pub fn aabb_cell_range(aabb: &AABB) -> (VoxelPos, VoxelPos) {
    // Block c spans (c - h, c + h); overlap needs c > min - h and c < max + h
    // The float casts saturate, so the offsets must too
    let low = |v: f32| ((v - BLOCK_HALF_SIZE).floor() as i32).saturating_add(1);
    let high = |v: f32| ((v + BLOCK_HALF_SIZE).ceil() as i32).saturating_sub(1);
    (
        VoxelPos::new(low(aabb.min.x), low(aabb.min.y), low(aabb.min.z)),
        VoxelPos::new(high(aabb.max.x), high(aabb.max.y), high(aabb.max.z)),
    )
}
