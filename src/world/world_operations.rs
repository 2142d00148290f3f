//! World Operations - Pure DOP Functions
//!
//! This is the PUBLIC API for reading and mutating the voxel map.
//! Raw setters do no bounds checking; validated edits go through
//! `game::editor_operations`.

use super::core::{BlockFace, BlockKind, Ray, RaycastHit, VoxelPos};
use super::data_types::VoxelWorld;
use crate::constants::world::BLOCK_HALF_SIZE;
use cgmath::InnerSpace;

// ============================================================================
// BLOCK OPERATIONS
// ============================================================================

/// Get block at position, O(1)
pub fn get_block(world: &VoxelWorld, pos: VoxelPos) -> Option<BlockKind> {
    world.blocks.get(&pos).copied()
}

/// Check whether a cell is occupied
pub fn contains_block(world: &VoxelWorld, pos: VoxelPos) -> bool {
    world.blocks.contains_key(&pos)
}

/// Insert or overwrite a block. No bounds checking.
///
/// # Returns
/// The block previously stored at `pos`, if any
pub fn set_block(world: &mut VoxelWorld, pos: VoxelPos, block: BlockKind) -> Option<BlockKind> {
    let old_block = world.blocks.insert(pos, block);
    world.revision += 1;
    old_block
}

/// Delete the block at `pos`; no-op when the cell is empty
pub fn remove_block(world: &mut VoxelWorld, pos: VoxelPos) -> Option<BlockKind> {
    let old_block = world.blocks.remove(&pos);
    if old_block.is_some() {
        world.revision += 1;
    }
    old_block
}

/// Snapshot of every block, in no particular order.
///
/// The returned vector is detached from the map, so later mutations are
/// never observed by whoever walks it.
pub fn iterate_blocks(world: &VoxelWorld) -> Vec<(VoxelPos, BlockKind)> {
    world.blocks.iter().map(|(pos, block)| (*pos, *block)).collect()
}

pub fn block_count(world: &VoxelWorld) -> usize {
    world.blocks.len()
}

/// Whether `pos` lies inside `[0, width) x [0, height) x [0, depth)`
pub fn is_in_bounds(world: &VoxelWorld, pos: VoxelPos) -> bool {
    let dims = world.dimensions;
    pos.x >= 0
        && pos.y >= 0
        && pos.z >= 0
        && (pos.x as u32) < dims.width
        && (pos.y as u32) < dims.height
        && (pos.z as u32) < dims.depth
}

/// World modification record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldModification {
    pub position: VoxelPos,
    pub old_block: Option<BlockKind>,
    pub new_block: Option<BlockKind>,
    pub revision: u64,
}

// ============================================================================
// RAYCASTING
// ============================================================================

/// March a ray through the grid and return the first occupied cell.
///
/// Cells are visited in the order the ray enters them (Amanatides & Woo),
/// so the first hit is the nearest surface. The cell holding the ray origin
/// is skipped: a camera buried in a block looks out through it. The march
/// stops once the ray leaves the world extents and cannot come back.
///
/// # Arguments
/// * `world` - World data to raycast through
/// * `ray` - Ray to cast (origin + normalized direction)
/// * `max_distance` - Hits farther than this are ignored
///
/// # Returns
/// Some(RaycastHit) if hit, None if no hit
pub fn raycast(world: &VoxelWorld, ray: Ray, max_distance: f32) -> Option<RaycastHit> {
    let direction = ray.direction;
    if !(direction.magnitude2() > 0.0) {
        return None;
    }

    // Shift by half a block so cell n spans [n, n + 1)
    let origin = [
        ray.origin.x + BLOCK_HALF_SIZE,
        ray.origin.y + BLOCK_HALF_SIZE,
        ray.origin.z + BLOCK_HALF_SIZE,
    ];
    let dir = [direction.x, direction.y, direction.z];
    let dims = world.dimensions;
    let extent = [
        i64::from(dims.width),
        i64::from(dims.height),
        i64::from(dims.depth),
    ];

    let mut cell = [
        origin[0].floor() as i32,
        origin[1].floor() as i32,
        origin[2].floor() as i32,
    ];
    let mut step = [0i32; 3];
    let mut t_max = [f32::INFINITY; 3];
    let mut t_delta = [f32::INFINITY; 3];

    for axis in 0..3 {
        if dir[axis] > 0.0 {
            step[axis] = 1;
            t_max[axis] = (cell[axis] as f32 + 1.0 - origin[axis]) / dir[axis];
            t_delta[axis] = 1.0 / dir[axis];
        } else if dir[axis] < 0.0 {
            step[axis] = -1;
            t_max[axis] = (cell[axis] as f32 - origin[axis]) / dir[axis];
            t_delta[axis] = -1.0 / dir[axis];
        }
    }

    loop {
        let axis = if t_max[0] <= t_max[1] && t_max[0] <= t_max[2] {
            0
        } else if t_max[1] <= t_max[2] {
            1
        } else {
            2
        };

        let distance = t_max[axis];
        if !(distance <= max_distance) {
            return None;
        }

        cell[axis] = cell[axis].saturating_add(step[axis]);
        t_max[axis] += t_delta[axis];

        let escaped = (0..3).any(|a| {
            let c = i64::from(cell[a]);
            (c < 0 && step[a] <= 0) || (c >= extent[a] && step[a] >= 0)
        });
        if escaped {
            return None;
        }

        let position = VoxelPos::new(cell[0], cell[1], cell[2]);
        if let Some(block) = get_block(world, position) {
            return Some(RaycastHit {
                position,
                face: BlockFace::entered_from(axis, step[axis]),
                distance,
                block,
            });
        }
    }
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Log world statistics
pub fn log_world_stats(world: &VoxelWorld) {
    let dims = world.dimensions;
    log::info!("[World] Statistics:");
    log::info!("  World size: {}x{}x{} cells", dims.width, dims.height, dims.depth);
    log::info!("  Blocks: {} / {}", world.blocks.len(), dims.cell_count());
    log::info!("  Revision: {}", world.revision);
}

/// Check that every stored block lies inside the world bounds
pub fn validate_world_data(world: &VoxelWorld) -> Result<(), String> {
    match world.blocks.keys().find(|pos| !is_in_bounds(world, **pos)) {
        Some(pos) => Err(format!(
            "Block at {} lies outside {}x{}x{}",
            pos, world.dimensions.width, world.dimensions.height, world.dimensions.depth
        )),
        None => Ok(()),
    }
}
