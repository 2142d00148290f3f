//! Collision Operations - Pure DOP Functions
//!
//! Player-vs-world collision. The player is a box of `radius` x `height`
//! centered on its position; every block is a unit box centered on its
//! grid coordinate. Candidate blocks come from the grid cells the player
//! box covers, which finds exactly the blocks a full scan would.

use super::aabb::{aabb_cell_range, aabb_intersects, block_aabb, player_aabb};
use crate::constants::world::BLOCK_HALF_SIZE;
use crate::world::core::VoxelPos;
use crate::world::data_types::VoxelWorld;
use crate::world::world_operations::contains_block;
use cgmath::Point3;

/// Size of the player's collision box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBody {
    pub radius: f32,
    pub height: f32,
}

impl PlayerBody {
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }
}

/// Outcome of vertical resolution for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalContact {
    pub position: Point3<f32>,
    pub velocity_y: f32,
    /// True only if a landing happened this frame
    pub grounded: bool,
    /// Block the player came to rest on or bumped into
    pub contact: Option<VoxelPos>,
}

// ============================================================================
// DETECTION
// ============================================================================

/// Every block whose box strictly overlaps the player box at `position`
pub fn find_collisions(world: &VoxelWorld, position: Point3<f32>, body: &PlayerBody) -> Vec<VoxelPos> {
    let player = player_aabb(position, body.radius, body.height);
    let (lo, hi) = aabb_cell_range(&player);

    let mut collided = Vec::new();
    for x in lo.x..=hi.x {
        for y in lo.y..=hi.y {
            for z in lo.z..=hi.z {
                let pos = VoxelPos::new(x, y, z);
                if contains_block(world, pos) && aabb_intersects(&player, &block_aabb(pos)) {
                    collided.push(pos);
                }
            }
        }
    }
    collided
}

/// Same result as `find_collisions`, by testing every block in the world
pub fn find_collisions_linear(world: &VoxelWorld, position: Point3<f32>, body: &PlayerBody) -> Vec<VoxelPos> {
    let player = player_aabb(position, body.radius, body.height);
    world
        .blocks
        .keys()
        .filter(|pos| aabb_intersects(&player, &block_aabb(**pos)))
        .copied()
        .collect()
}

pub fn collides(world: &VoxelWorld, position: Point3<f32>, body: &PlayerBody) -> bool {
    !find_collisions(world, position, body).is_empty()
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Roll back a horizontal move that walks into a block.
///
/// If `from` was free and `to` collides, the player keeps `from`'s x/z and
/// `to`'s y. There is no sliding: a move blocked on any axis is dropped
/// whole. Starting inside a block never blocks the move, so a stuck player
/// can walk out.
pub fn resolve_horizontal(
    world: &VoxelWorld,
    from: Point3<f32>,
    to: Point3<f32>,
    body: &PlayerBody,
) -> Point3<f32> {
    if collides(world, to, body) && !collides(world, from, body) {
        log::trace!(
            "[Physics] Horizontal move ({:.3}, {:.3}) -> ({:.3}, {:.3}) blocked",
            from.x,
            from.z,
            to.x,
            to.z
        );
        Point3::new(from.x, to.y, from.z)
    } else {
        to
    }
}

/// Settle the player against blocks overlapping it after a vertical move.
///
/// Falling into a block whose top face lies inside the body snaps the
/// body onto that face (plus `epsilon`), zeroes vertical velocity and
/// grounds the player. Rising into a block whose bottom face lies inside
/// the body snaps the head under it and zeroes vertical velocity.
/// Grounded is false unless a landing happens here.
pub fn resolve_vertical(
    world: &VoxelWorld,
    position: Point3<f32>,
    velocity_y: f32,
    body: &PlayerBody,
    epsilon: f32,
) -> VerticalContact {
    let mut result = VerticalContact {
        position,
        velocity_y,
        grounded: false,
        contact: None,
    };

    let mut collided = find_collisions(world, position, body);
    // Falling meets the highest top first, rising the lowest bottom
    if velocity_y < 0.0 {
        collided.sort_by(|a, b| b.y.cmp(&a.y));
    } else {
        collided.sort_by(|a, b| a.y.cmp(&b.y));
    }

    let half_height = body.half_height();
    for block in collided {
        let block_top = block.y as f32 + BLOCK_HALF_SIZE;
        let block_bottom = block.y as f32 - BLOCK_HALF_SIZE;
        let player_bottom = result.position.y - half_height;
        let player_top = result.position.y + half_height;

        if result.velocity_y < 0.0 && player_bottom < block_top && player_top > block_top {
            result.position.y = block_top + half_height + epsilon;
            result.velocity_y = 0.0;
            result.grounded = true;
            result.contact = Some(block);
        } else if result.velocity_y > 0.0 && player_top > block_bottom && player_bottom < block_bottom {
            result.position.y = block_bottom - half_height - epsilon;
            result.velocity_y = 0.0;
            result.contact = Some(block);
        }
    }

    result
}
