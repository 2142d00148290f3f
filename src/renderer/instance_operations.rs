//! Render instance operations - Pure DOP functions

use super::instance_data::{BlockInstance, InstanceCache};
use crate::world::core::{BlockKind, VoxelPos};
use crate::world::data_types::VoxelWorld;
use crate::world::world_operations::iterate_blocks;

pub fn block_instance(pos: VoxelPos, block: BlockKind) -> BlockInstance {
    let render = block.render_data();
    let center = pos.center();
    BlockInstance {
        position: [center.x, center.y, center.z],
        color: [render.color[0], render.color[1], render.color[2], render.opacity],
    }
}

/// One instance per block. Opaque blocks come first so translucent water
/// can be drawn last from the same buffer.
pub fn block_instances(world: &VoxelWorld) -> Vec<BlockInstance> {
    let mut blocks = iterate_blocks(world);
    blocks.sort_by_key(|(pos, block)| (block.is_translucent(), pos.x, pos.y, pos.z));
    blocks
        .into_iter()
        .map(|(pos, block)| block_instance(pos, block))
        .collect()
}

/// Rebuild cached instances if the world changed since the last build.
///
/// # Returns
/// true if the cache was rebuilt
pub fn refresh_instances(cache: &mut InstanceCache, world: &VoxelWorld) -> bool {
    if cache.revision == Some(world.revision) {
        return false;
    }

    cache.instances = block_instances(world);
    cache.revision = Some(world.revision);
    log::debug!(
        "[Renderer] Rebuilt {} instances at revision {}",
        cache.instances.len(),
        world.revision
    );
    true
}

/// Raw bytes of the cached instances, ready for a buffer upload
pub fn instance_bytes(cache: &InstanceCache) -> &[u8] {
    bytemuck::cast_slice(&cache.instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::data_types::WorldDimensions;
    use crate::world::world_operations::{remove_block, set_block};

    #[test]
    fn test_water_sorted_last_with_alpha() {
        let mut world = VoxelWorld::new(WorldDimensions::default());
        set_block(&mut world, VoxelPos::new(0, 0, 0), BlockKind::Water);
        set_block(&mut world, VoxelPos::new(3, 0, 0), BlockKind::Stone);
        set_block(&mut world, VoxelPos::new(1, 0, 0), BlockKind::Grass);

        let instances = block_instances(&world);
        assert_eq!(instances.len(), 3);
        assert_eq!(instances[0].position, [1.0, 0.0, 0.0]);
        assert_eq!(instances[1].position, [3.0, 0.0, 0.0]);
        assert_eq!(instances[2].color[3], 0.7);
    }

    #[test]
    fn test_cache_rebuilds_only_on_change() {
        let mut world = VoxelWorld::new(WorldDimensions::default());
        set_block(&mut world, VoxelPos::new(2, 0, 2), BlockKind::Dirt);

        let mut cache = InstanceCache::default();
        assert!(refresh_instances(&mut cache, &world));
        assert!(!refresh_instances(&mut cache, &world));

        remove_block(&mut world, VoxelPos::new(2, 0, 2));
        assert!(refresh_instances(&mut cache, &world));
        assert!(cache.instances.is_empty());

        // Removing nothing leaves the revision alone
        remove_block(&mut world, VoxelPos::new(2, 0, 2));
        assert!(!refresh_instances(&mut cache, &world));
    }

    #[test]
    fn test_instance_bytes_len() {
        let mut world = VoxelWorld::new(WorldDimensions::default());
        set_block(&mut world, VoxelPos::new(0, 0, 0), BlockKind::Sand);
        let mut cache = InstanceCache::default();
        refresh_instances(&mut cache, &world);

        assert_eq!(instance_bytes(&cache).len(), std::mem::size_of::<BlockInstance>());
        assert_eq!(std::mem::size_of::<BlockInstance>(), 28);
    }
}
