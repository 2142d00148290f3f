//! Core world data types and fundamental structures
//!
//! Blocks, grid coordinates and rays. Everything else in the world module
//! is built on these.

mod block;
mod position;
mod ray;

pub use block::{BlockKind, RenderData};
pub use position::VoxelPos;
pub use ray::{BlockFace, Ray, RaycastHit};
