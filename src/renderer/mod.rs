//! Renderer Module - renderer-facing projection of the world
//!
//! No GPU code lives here. Hosts turn `BlockInstance` lists into draw calls
//! with whatever backend they use.

pub mod instance_data;
pub mod instance_operations;

pub use instance_data::{BlockInstance, InstanceCache};
pub use instance_operations::{block_instance, block_instances, instance_bytes, refresh_instances};
