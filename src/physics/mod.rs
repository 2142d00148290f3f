//! Physics Module - player-vs-voxel collision
//!
//! Boxes only: the player body is an AABB and so is every block.

pub mod aabb;
pub mod collision_operations;

pub use aabb::AABB;
pub use collision_operations::{
    collides, find_collisions, find_collisions_linear, resolve_horizontal, resolve_vertical,
    PlayerBody, VerticalContact,
};
