//! Player operations - Pure DOP functions
//!
//! One call to `step_player` advances the player by one frame: gravity,
//! walking, jumping, then collision against the world.

use super::player_data::PlayerData;
use crate::camera::camera_operations::{calculate_right_vector, horizontal_forward_vector};
use crate::config::SandboxConfig;
use crate::input::{contains, Action, InputState};
use crate::physics::aabb::{player_aabb, AABB};
use crate::physics::collision_operations::{resolve_horizontal, resolve_vertical};
use crate::world::core::BlockKind;
use crate::world::data_types::VoxelWorld;
use cgmath::{InnerSpace, Point3, Vector3, Zero};

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Spawn the player at the configured position, at rest
pub fn init_player(config: &SandboxConfig) -> PlayerData {
    let position = config.spawn_position();
    PlayerData {
        position,
        velocity: Vector3::zero(),
        grounded: false,
        active_block: config.player.initial_block,
        previous_position: position,
    }
}

// ============================================================================
// QUERIES
// ============================================================================

/// Collision box at the player's current position
pub fn player_bounds(player: &PlayerData, config: &SandboxConfig) -> AABB {
    player_aabb(player.position, config.player.radius, config.player.height)
}

/// Unit walking direction for the held movement keys, relative to `yaw`.
///
/// Opposing keys cancel; `None` when nothing net is held.
pub fn movement_direction(input: &InputState, yaw: f32) -> Option<Vector3<f32>> {
    let axis = |positive: Action, negative: Action| -> f32 {
        let mut value = 0.0;
        if contains(input, positive) {
            value += 1.0;
        }
        if contains(input, negative) {
            value -= 1.0;
        }
        value
    };

    let forward = axis(Action::MoveForward, Action::MoveBackward);
    let strafe = axis(Action::MoveRight, Action::MoveLeft);
    if forward == 0.0 && strafe == 0.0 {
        return None;
    }

    let direction = horizontal_forward_vector(yaw) * forward + calculate_right_vector(yaw) * strafe;
    Some(direction.normalize())
}

/// Clamp a frame delta into `[0, max_delta]`
pub fn clamp_frame_delta(dt: f32, max_delta: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    if dt > max_delta {
        log::warn!(
            "[Player] Frame delta {:.3}s exceeds {:.3}s, clamping",
            dt,
            max_delta
        );
        return max_delta;
    }
    dt
}

// ============================================================================
// UPDATES
// ============================================================================

pub fn set_active_block(player: &mut PlayerData, block: BlockKind) -> bool {
    if player.active_block == block {
        return false;
    }
    player.active_block = block;
    true
}

/// Advance the player by one frame.
///
/// Order: gravity, horizontal walk (rolled back if it runs into a block),
/// jump, vertical integration, vertical resolution. `previous_position`
/// ends up holding the resolved position for the next frame's rollback.
pub fn step_player(
    player: &mut PlayerData,
    world: &VoxelWorld,
    input: &InputState,
    yaw: f32,
    dt: f32,
    config: &SandboxConfig,
) {
    let physics = &config.physics;
    let settings = &config.player;
    let body = config.player_body();
    let dt = clamp_frame_delta(dt, physics.max_frame_delta);

    // Gravity, floored at terminal velocity
    player.velocity.y = (player.velocity.y + physics.gravity * dt).max(physics.terminal_velocity);

    if let Some(direction) = movement_direction(input, yaw) {
        let step = direction * settings.speed * dt;
        let from = player.previous_position;
        let to = Point3::new(player.position.x + step.x, player.position.y, player.position.z + step.z);
        player.position = resolve_horizontal(world, Point3::new(from.x, to.y, from.z), to, &body);
    }

    if contains(input, Action::Jump) && player.grounded {
        player.velocity.y = settings.jump_velocity;
        player.grounded = false;
        log::trace!("[Player] Jump at y={:.3}", player.position.y);
    }

    player.position.y += player.velocity.y * dt;

    let contact = resolve_vertical(
        world,
        player.position,
        player.velocity.y,
        &body,
        physics.contact_epsilon,
    );
    if contact.grounded && !player.grounded {
        log::trace!(
            "[Player] Landed at y={:.3} on {:?}",
            contact.position.y,
            contact.contact
        );
    }
    player.position = contact.position;
    player.velocity.y = contact.velocity_y;
    player.grounded = contact.grounded;

    player.previous_position = player.position;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::press_key;
    use crate::world::core::VoxelPos;
    use crate::world::data_types::WorldDimensions;
    use crate::world::world_operations::set_block;

    const DT: f32 = 1.0 / 60.0;
    const RESTING_Y: f32 = 0.5 + 0.9 + 0.001;

    fn world_with(blocks: &[(i32, i32, i32)]) -> VoxelWorld {
        let mut world = VoxelWorld::new(WorldDimensions::default());
        for &(x, y, z) in blocks {
            set_block(&mut world, VoxelPos::new(x, y, z), BlockKind::Dirt);
        }
        world
    }

    fn player_at(x: f32, y: f32, z: f32) -> PlayerData {
        let mut player = init_player(&SandboxConfig::default());
        player.position = Point3::new(x, y, z);
        player.previous_position = player.position;
        player
    }

    fn held(keys: &[&str]) -> InputState {
        let mut input = InputState {
            pointer_locked: true,
            ..Default::default()
        };
        for key in keys {
            press_key(&mut input, key);
        }
        input
    }

    #[test]
    fn test_resting_player_stays_grounded() {
        let config = SandboxConfig::default();
        let world = world_with(&[(5, 0, 5)]);
        let mut player = player_at(5.0, RESTING_Y, 5.0);

        step_player(&mut player, &world, &held(&[]), 0.0, DT, &config);

        assert!(player.grounded);
        assert_eq!(player.velocity.y, 0.0);
        assert!((player.position.y - RESTING_Y).abs() < 1e-4);
    }

    #[test]
    fn test_falling_settles_on_single_block() {
        let config = SandboxConfig::default();
        let world = world_with(&[(5, 0, 5)]);
        let mut player = player_at(5.0, 2.0, 5.0);

        for _ in 0..120 {
            step_player(&mut player, &world, &held(&[]), 0.0, DT, &config);
        }

        assert!(player.grounded);
        assert_eq!(player.velocity.y, 0.0);
        assert!((player.position.y - RESTING_Y).abs() < 1e-4);
        assert_eq!((player.position.x, player.position.z), (5.0, 5.0));
    }

    #[test]
    fn test_falls_freely_over_empty_space() {
        let config = SandboxConfig::default();
        let world = world_with(&[]);
        let mut player = player_at(5.0, 10.0, 5.0);

        for _ in 0..600 {
            step_player(&mut player, &world, &held(&[]), 0.0, DT, &config);
        }

        assert!(!player.grounded);
        assert_eq!(player.velocity.y, config.physics.terminal_velocity);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let config = SandboxConfig::default();
        let world = world_with(&[(5, 0, 5)]);
        let mut player = player_at(5.0, RESTING_Y, 5.0);
        player.grounded = true;

        step_player(&mut player, &world, &held(&["Space"]), 0.0, DT, &config);
        assert!(!player.grounded);
        assert_eq!(player.velocity.y, config.player.jump_velocity);
        assert!(player.position.y > RESTING_Y);

        // Holding jump in mid-air does nothing extra
        step_player(&mut player, &world, &held(&["Space"]), 0.0, DT, &config);
        assert!(player.velocity.y < config.player.jump_velocity);
    }

    #[test]
    fn test_forward_follows_facing() {
        let config = SandboxConfig::default();
        let world = world_with(&[(5, 0, 5), (5, 0, 6)]);
        let mut player = player_at(5.0, RESTING_Y, 5.0);

        // Facing +Z
        step_player(
            &mut player,
            &world,
            &held(&["KeyW"]),
            std::f32::consts::FRAC_PI_2,
            DT,
            &config,
        );

        assert!(player.position.z > 5.0);
        assert!((player.position.x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_diagonal_speed_is_normalized() {
        let input = held(&["KeyW", "KeyD"]);
        let direction = movement_direction(&input, 0.0).unwrap();
        assert!((direction.magnitude() - 1.0).abs() < 1e-5);

        assert!(movement_direction(&held(&["KeyW", "KeyS"]), 0.0).is_none());
    }

    #[test]
    fn test_wall_stops_walking() {
        let config = SandboxConfig::default();
        let world = world_with(&[(5, 0, 5), (6, 1, 5), (6, 2, 5)]);
        let mut player = player_at(5.1, RESTING_Y, 5.0);
        player.grounded = true;

        for _ in 0..60 {
            step_player(&mut player, &world, &held(&["KeyW"]), 0.0, DT, &config);
        }

        assert!(player.position.x + 0.3 < 5.5);
        assert!(player.position.x > 5.1);
        assert!(player.grounded);
    }

    #[test]
    fn test_ceiling_stops_jump() {
        let config = SandboxConfig::default();
        let world = world_with(&[(5, 0, 5), (5, 3, 5)]);
        let mut player = player_at(5.0, RESTING_Y, 5.0);
        player.grounded = true;

        step_player(&mut player, &world, &held(&["Space"]), 0.0, DT, &config);
        let mut highest = player.position.y;
        for _ in 0..60 {
            step_player(&mut player, &world, &held(&[]), 0.0, DT, &config);
            highest = highest.max(player.position.y);
        }

        assert!(highest + 0.9 < 2.5);
        assert!(player.grounded);
    }

    #[test]
    fn test_large_delta_is_clamped() {
        assert_eq!(clamp_frame_delta(5.0, 0.1), 0.1);
        assert_eq!(clamp_frame_delta(-1.0, 0.1), 0.0);
        assert_eq!(clamp_frame_delta(0.016, 0.1), 0.016);
    }

    #[test]
    fn test_set_active_block_reports_change() {
        let mut player = init_player(&SandboxConfig::default());
        assert_eq!(player.active_block, BlockKind::Dirt);
        assert!(!set_active_block(&mut player, BlockKind::Dirt));
        assert!(set_active_block(&mut player, BlockKind::Sand));
        assert_eq!(player.active_block, BlockKind::Sand);
    }
}
