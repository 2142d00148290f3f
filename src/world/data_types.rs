//! World Data Types - Pure DOP Structures
//!
//! These are the data structures that world_operations functions operate on.
//! NO behaviour beyond construction - just data.

use super::core::{BlockKind, VoxelPos};
use crate::constants::world::{MAX_WORLD_CELLS, WORLD_DEPTH, WORLD_HEIGHT, WORLD_WIDTH};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Bounded extent of the grid: valid coordinates are
/// `[0, width) x [0, height) x [0, depth)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldDimensions {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Default for WorldDimensions {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            depth: WORLD_DEPTH,
        }
    }
}

impl WorldDimensions {
    /// Number of cells in the grid, saturating at `u64::MAX`
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width)
            .saturating_mul(u64::from(self.height))
            .saturating_mul(u64::from(self.depth))
    }
}

/// Sparse voxel world.
///
/// The map key is the coordinate, so a cell holds at most one block.
/// `revision` increases on every mutation; renderers compare it between
/// frames to decide whether to rebuild.
#[derive(Debug, Clone, Default)]
pub struct VoxelWorld {
    pub blocks: HashMap<VoxelPos, BlockKind>,
    pub dimensions: WorldDimensions,
    pub revision: u64,
}

impl VoxelWorld {
    /// Create an empty world
    pub fn new(dimensions: WorldDimensions) -> Self {
        // Terrain fills about two layers of columns
        let capacity = u64::from(dimensions.width)
            .saturating_mul(u64::from(dimensions.depth))
            .saturating_mul(2)
            .min(MAX_WORLD_CELLS);
        Self {
            blocks: HashMap::with_capacity(capacity as usize),
            dimensions,
            revision: 0,
        }
    }
}

/// World shared between the simulation (single writer) and any number of
/// readers such as a renderer thread.
pub type SharedWorld = Arc<RwLock<VoxelWorld>>;

pub fn create_shared_world(world: VoxelWorld) -> SharedWorld {
    Arc::new(RwLock::new(world))
}
