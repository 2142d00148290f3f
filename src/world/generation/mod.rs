//! Initial world population
//!
//! One-shot terrain pass run when a session starts. Shape is fixed
//! (dirt floor, grass cap one or two blocks up, sparse stone and wood);
//! content depends only on the random source handed in, so a seeded
//! generator reproduces the same world.

use super::core::{BlockKind, VoxelPos};
use super::data_types::{VoxelWorld, WorldDimensions};
use super::world_operations::{block_count, is_in_bounds, set_block};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chance a column gets a stone block at its cap height
pub const STONE_CHANCE: f64 = 0.05;
/// Chance a column gets a wood block above its grass
pub const WOOD_CHANCE: f64 = 0.02;

/// Populate a fresh world from an explicit random source
///
/// For every (x, z) column: Dirt at y=0, Grass at h+1 with h drawn from
/// {0, 1}, then Stone at h with 5% chance and Wood at h+2 with 2% chance.
/// Later writes win, so a stone roll at h=0 replaces the dirt floor.
/// Writes that would land outside the world are dropped.
pub fn generate_initial_world<R: Rng>(dimensions: WorldDimensions, rng: &mut R) -> VoxelWorld {
    let mut world = VoxelWorld::new(dimensions);

    for x in 0..dimensions.width as i32 {
        for z in 0..dimensions.depth as i32 {
            place(&mut world, VoxelPos::new(x, 0, z), BlockKind::Dirt);

            let height: i32 = rng.gen_range(0..2);
            place(&mut world, VoxelPos::new(x, height + 1, z), BlockKind::Grass);

            if rng.gen_bool(STONE_CHANCE) {
                place(&mut world, VoxelPos::new(x, height, z), BlockKind::Stone);
            }
            if rng.gen_bool(WOOD_CHANCE) {
                place(&mut world, VoxelPos::new(x, height + 2, z), BlockKind::Wood);
            }
        }
    }

    // Generation is not an edit; start the session at revision zero
    world.revision = 0;

    log::info!(
        "[World] Generated {} blocks over {}x{} columns",
        block_count(&world),
        dimensions.width,
        dimensions.depth
    );
    world
}

/// Populate a world from a seed; same seed, same world
pub fn generate_seeded_world(dimensions: WorldDimensions, seed: u64) -> VoxelWorld {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_initial_world(dimensions, &mut rng)
}

fn place(world: &mut VoxelWorld, pos: VoxelPos, block: BlockKind) {
    if is_in_bounds(world, pos) {
        set_block(world, pos, block);
    } else {
        log::trace!("[World] Dropping generated {} at {} (out of bounds)", block, pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::world_operations::{get_block, iterate_blocks};

    #[test]
    fn test_same_seed_same_world() {
        let dims = WorldDimensions::default();
        let a = generate_seeded_world(dims, 42);
        let b = generate_seeded_world(dims, 42);
        assert_eq!(a.blocks, b.blocks);
        assert_eq!(a.revision, 0);
    }

    #[test]
    fn test_column_shape() {
        let dims = WorldDimensions::default();
        let world = generate_seeded_world(dims, 7);

        for x in 0..dims.width as i32 {
            for z in 0..dims.depth as i32 {
                let floor = get_block(&world, VoxelPos::new(x, 0, z));
                assert!(matches!(floor, Some(BlockKind::Dirt) | Some(BlockKind::Stone)));

                let grass_low = get_block(&world, VoxelPos::new(x, 1, z)) == Some(BlockKind::Grass);
                let grass_high = get_block(&world, VoxelPos::new(x, 2, z)) == Some(BlockKind::Grass);
                assert!(grass_low || grass_high, "column ({}, {}) has no grass", x, z);
            }
        }

        // Nothing above the tallest possible wood block
        assert!(iterate_blocks(&world).iter().all(|(pos, _)| pos.y <= 3));
    }

    #[test]
    fn test_sprinkles_are_sparse() {
        let dims = WorldDimensions::default();
        let world = generate_seeded_world(dims, 1234);
        let columns = (dims.width * dims.depth) as usize;

        let stone = iterate_blocks(&world)
            .iter()
            .filter(|(_, b)| *b == BlockKind::Stone)
            .count();
        let wood = iterate_blocks(&world)
            .iter()
            .filter(|(_, b)| *b == BlockKind::Wood)
            .count();

        // 5% and 2% of 1024 columns, with generous slack
        assert!(stone < columns / 8);
        assert!(wood < columns / 16);
    }

    #[test]
    fn test_short_world_drops_out_of_bounds_writes() {
        let dims = WorldDimensions {
            width: 8,
            height: 2,
            depth: 8,
        };
        let world = generate_seeded_world(dims, 99);
        assert!(iterate_blocks(&world).iter().all(|(pos, _)| pos.y < 2));
    }
}
