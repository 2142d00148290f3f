//! World Module
//!
//! The sparse voxel map and everything that reads it directly.
//!
//! # Architecture Overview
//!
//! - **Core**: Fundamental data types (Block, Position, Ray)
//! - **Data types**: `VoxelWorld` and its shared handle
//! - **Operations**: get/set/remove/iterate and ray marching
//! - **Generation**: seeded one-shot terrain pass

pub mod core;
pub mod data_types;
pub mod error;
pub mod generation;
pub mod world_operations;

// Re-export core types for convenience
pub use self::core::{BlockFace, BlockKind, Ray, RaycastHit, RenderData, VoxelPos};
pub use data_types::{create_shared_world, SharedWorld, VoxelWorld, WorldDimensions};
pub use error::EditRejection;
pub use generation::{generate_initial_world, generate_seeded_world};
pub use world_operations::WorldModification;
