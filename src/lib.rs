// Hearth Sandbox - Data-Oriented Programming (DOP) Architecture
//
// A small first-person voxel sandbox core: a bounded block world, a
// gravity-driven player with box collision, and ray-targeted block edits.
//
// For new code, prefer:
// - world_operations for reading and mutating the block map
// - game::SandboxSession for the frame loop a host drives
// - Pure functions over methods

// Constants module
pub mod constants;

// Core modules
pub mod config;
pub mod error;

// Essential systems
pub mod camera;
pub mod game;
pub mod input;
pub mod physics;
pub mod player;
pub mod renderer;
pub mod world;

pub use camera::{CameraData, CameraUniform};
pub use config::SandboxConfig;
pub use error::{SandboxError, SandboxResult};
pub use game::{HudState, SandboxEvent, SandboxSession};
pub use input::{Action, InputState, MouseButton};
pub use physics::{PlayerBody, AABB};
pub use player::PlayerData;
pub use renderer::{BlockInstance, InstanceCache};

// === Core World Types ===
pub use world::core::{BlockFace, BlockKind, Ray, RaycastHit, RenderData, VoxelPos};
pub use world::{
    create_shared_world, generate_initial_world, generate_seeded_world, EditRejection, SharedWorld,
    VoxelWorld, WorldDimensions, WorldModification,
};
