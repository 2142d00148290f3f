//! Sandbox constants
//!
//! Single source of truth for world dimensions, player body size and physics
//! tuning. `SandboxConfig::default()` is built from these values.

/// World grid dimensions
pub mod world {
    /// Number of columns along X
    pub const WORLD_WIDTH: u32 = 32;
    /// Number of layers along Y
    pub const WORLD_HEIGHT: u32 = 16;
    /// Number of rows along Z
    pub const WORLD_DEPTH: u32 = 32;
    /// Edge length of one block, in world units
    pub const BLOCK_SIZE: f32 = 1.0;
    /// Half edge length; blocks span `coord ± BLOCK_HALF_SIZE`
    pub const BLOCK_HALF_SIZE: f32 = BLOCK_SIZE / 2.0;
    /// Largest grid a config may ask for
    pub const MAX_WORLD_CELLS: u64 = 1 << 20;
    /// How far outside the grid a spawn point may lie, in blocks
    pub const SPAWN_MARGIN: f32 = 64.0;
}

/// Player body and movement
pub mod player {
    use crate::world::core::BlockKind;

    pub const PLAYER_HEIGHT: f32 = 1.8;
    pub const PLAYER_RADIUS: f32 = 0.3;
    /// Horizontal speed (units per second)
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const JUMP_VELOCITY: f32 = 8.0;

    /// Spawn above the middle of the world so the player falls onto terrain
    pub const INITIAL_PLAYER_POSITION: [f32; 3] = [
        super::world::WORLD_WIDTH as f32 / 2.0,
        super::world::WORLD_HEIGHT as f32 + PLAYER_HEIGHT / 2.0,
        super::world::WORLD_DEPTH as f32 / 2.0,
    ];

    pub const INITIAL_ACTIVE_BLOCK: BlockKind = BlockKind::Dirt;
}

/// Gravity and collision tuning
pub mod physics {
    /// Vertical acceleration (units per second squared)
    pub const GRAVITY: f32 = -20.0;
    /// Fastest allowed fall speed; vertical velocity is floored here
    pub const TERMINAL_VELOCITY: f32 = -50.0;
    /// Gap left between the player and a surface after a snap
    pub const CONTACT_EPSILON: f32 = 0.001;
    /// Frame deltas above this are clamped before integration
    pub const MAX_FRAME_DELTA: f32 = 0.1;
}

/// Block targeting and camera
pub mod interaction {
    /// Max distance for block interaction
    pub const RAYCAST_DISTANCE: f32 = 5.0;
    /// Ceiling on configured reach
    pub const MAX_REACH: f32 = 64.0;
    pub const FOV_DEGREES: f32 = 75.0;
    pub const NEAR_PLANE: f32 = 0.1;
    pub const FAR_PLANE: f32 = 1000.0;
    /// Radians of rotation per pixel of pointer movement
    pub const LOOK_SENSITIVITY: f32 = 0.002;
}

/// Event queue sizing
pub mod events {
    pub const MAX_PENDING_EVENTS: usize = 1024;
}
