//! World editor - validated block edits
//!
//! Edits are checked against bounds, occupancy and the player's body before
//! the world is touched. A rejected edit leaves the world exactly as it was.

use crate::camera::{screen_ray, CameraData};
use crate::physics::aabb::{aabb_intersects, block_aabb, AABB};
use crate::world::core::{BlockKind, RaycastHit, VoxelPos};
use crate::world::data_types::VoxelWorld;
use crate::world::error::EditRejection;
use crate::world::world_operations::{self, contains_block, is_in_bounds, raycast, WorldModification};

// ============================================================================
// TARGETING
// ============================================================================

/// Block and face under a screen position, if one is within `reach`
pub fn target_block(
    world: &VoxelWorld,
    camera: &CameraData,
    ndc: [f32; 2],
    reach: f32,
) -> Option<RaycastHit> {
    raycast(world, screen_ray(camera, ndc), reach)
}

/// Cell on the outside of the hit face
pub fn placement_target(hit: &RaycastHit) -> VoxelPos {
    hit.position + hit.face.offset()
}

pub fn removal_target(hit: &RaycastHit) -> VoxelPos {
    hit.position
}

// ============================================================================
// EDITS
// ============================================================================

/// Place `block` at `pos`.
///
/// Rejected when `pos` is outside the world, already holds a block, or the
/// new block's box would overlap `player_box`.
pub fn add_block(
    world: &mut VoxelWorld,
    pos: VoxelPos,
    block: BlockKind,
    player_box: &AABB,
) -> Result<WorldModification, EditRejection> {
    if !is_in_bounds(world, pos) {
        return Err(EditRejection::OutOfBounds(pos));
    }
    if contains_block(world, pos) {
        return Err(EditRejection::Occupied(pos));
    }
    if aabb_intersects(player_box, &block_aabb(pos)) {
        return Err(EditRejection::OverlapsPlayer(pos));
    }

    world_operations::set_block(world, pos, block);
    log::debug!("[Editor] Placed {} at {}", block, pos);

    Ok(WorldModification {
        position: pos,
        old_block: None,
        new_block: Some(block),
        revision: world.revision,
    })
}

/// Remove whatever block occupies `pos`; rejected if the cell is empty
pub fn remove_block(world: &mut VoxelWorld, pos: VoxelPos) -> Result<WorldModification, EditRejection> {
    let removed = world_operations::remove_block(world, pos).ok_or(EditRejection::Empty(pos))?;
    log::debug!("[Editor] Removed {} at {}", removed, pos);

    Ok(WorldModification {
        position: pos,
        old_block: Some(removed),
        new_block: None,
        revision: world.revision,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::aabb::player_aabb;
    use crate::world::core::BlockFace;
    use crate::world::data_types::WorldDimensions;
    use crate::world::world_operations::{block_count, get_block, set_block};
    use cgmath::Point3;

    fn far_player() -> AABB {
        player_aabb(Point3::new(-50.0, -50.0, -50.0), 0.3, 1.8)
    }

    fn world_with(blocks: &[(i32, i32, i32)]) -> VoxelWorld {
        let mut world = VoxelWorld::new(WorldDimensions::default());
        for &(x, y, z) in blocks {
            set_block(&mut world, VoxelPos::new(x, y, z), BlockKind::Dirt);
        }
        world
    }

    fn snapshot(world: &VoxelWorld) -> Vec<(VoxelPos, BlockKind)> {
        let mut blocks = world_operations::iterate_blocks(world);
        blocks.sort_by_key(|(p, _)| (p.x, p.y, p.z));
        blocks
    }

    #[test]
    fn test_out_of_bounds_add_is_rejected() {
        let mut world = world_with(&[(0, 0, 0)]);
        let before = snapshot(&world);

        for pos in [
            VoxelPos::new(40, 0, 0),
            VoxelPos::new(-1, 0, 0),
            VoxelPos::new(0, 16, 0),
            VoxelPos::new(0, 0, 32),
        ] {
            let result = add_block(&mut world, pos, BlockKind::Stone, &far_player());
            assert_eq!(result, Err(EditRejection::OutOfBounds(pos)));
        }
        assert_eq!(snapshot(&world), before);
        assert_eq!(block_count(&world), 1);
    }

    #[test]
    fn test_occupied_add_and_empty_remove_are_rejected() {
        let mut world = world_with(&[(3, 0, 3)]);
        let revision = world.revision;

        let occupied = VoxelPos::new(3, 0, 3);
        assert_eq!(
            add_block(&mut world, occupied, BlockKind::Sand, &far_player()),
            Err(EditRejection::Occupied(occupied))
        );
        assert_eq!(get_block(&world, occupied), Some(BlockKind::Dirt));

        let empty = VoxelPos::new(4, 0, 3);
        assert_eq!(remove_block(&mut world, empty), Err(EditRejection::Empty(empty)));
        assert_eq!(world.revision, revision);
    }

    #[test]
    fn test_add_then_remove_restores_world() {
        let mut world = world_with(&[(1, 0, 1), (2, 0, 1)]);
        let before = snapshot(&world);
        let pos = VoxelPos::new(1, 1, 1);

        for kind in BlockKind::ALL {
            let added = add_block(&mut world, pos, kind, &far_player()).unwrap();
            assert_eq!(added.new_block, Some(kind));
            let removed = remove_block(&mut world, pos).unwrap();
            assert_eq!(removed.old_block, Some(kind));
            assert_eq!(snapshot(&world), before);
        }
    }

    #[test]
    fn test_remove_twice_same_as_once() {
        let mut world = world_with(&[(1, 0, 1), (2, 0, 1)]);
        let pos = VoxelPos::new(1, 0, 1);

        assert!(remove_block(&mut world, pos).is_ok());
        let after_once = snapshot(&world);
        assert!(remove_block(&mut world, pos).is_err());
        assert_eq!(snapshot(&world), after_once);
    }

    #[test]
    fn test_cannot_place_inside_player() {
        let mut world = world_with(&[(5, 0, 5)]);
        let player = player_aabb(Point3::new(5.0, 1.401, 5.0), 0.3, 1.8);

        for pos in [VoxelPos::new(5, 1, 5), VoxelPos::new(5, 2, 5)] {
            assert_eq!(
                add_block(&mut world, pos, BlockKind::Stone, &player),
                Err(EditRejection::OverlapsPlayer(pos))
            );
        }
        // Next column over is clear of a 0.3 radius
        assert!(add_block(&mut world, VoxelPos::new(6, 1, 5), BlockKind::Stone, &player).is_ok());
    }

    #[test]
    fn test_top_face_placement_target() {
        let hit = RaycastHit {
            position: VoxelPos::new(4, 2, 7),
            face: BlockFace::Top,
            distance: 1.0,
            block: BlockKind::Grass,
        };
        assert_eq!(placement_target(&hit), VoxelPos::new(4, 3, 7));
        assert_eq!(removal_target(&hit), VoxelPos::new(4, 2, 7));
    }

    #[test]
    fn test_targeting_from_camera() {
        let mut world = world_with(&[(5, 0, 5)]);
        let camera = crate::camera::init_camera(
            Point3::new(5.0, 2.0, 5.0),
            0.0,
            -std::f32::consts::FRAC_PI_2,
        );

        let hit = target_block(&world, &camera, [0.0, 0.0], 5.0).unwrap();
        assert_eq!(hit.position, VoxelPos::new(5, 0, 5));
        assert_eq!(hit.face, BlockFace::Top);

        let target = placement_target(&hit);
        let far = far_player();
        add_block(&mut world, target, BlockKind::Wood, &far).unwrap();
        assert_eq!(get_block(&world, VoxelPos::new(5, 1, 5)), Some(BlockKind::Wood));

        remove_block(&mut world, removal_target(&hit)).unwrap();
        assert_eq!(get_block(&world, VoxelPos::new(5, 0, 5)), None);
    }

    #[test]
    fn test_targeting_out_of_reach() {
        let world = world_with(&[(5, 0, 5)]);
        let camera = crate::camera::init_camera(
            Point3::new(5.0, 9.0, 5.0),
            0.0,
            -std::f32::consts::FRAC_PI_2,
        );
        assert!(target_block(&world, &camera, [0.0, 0.0], 5.0).is_none());
    }
}
