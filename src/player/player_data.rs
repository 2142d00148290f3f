//! Player data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in player_operations.rs

use crate::world::core::BlockKind;
use cgmath::{Point3, Vector3};

/// Everything the controller tracks about the player between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerData {
    /// Center of the collision box
    pub position: Point3<f32>,

    /// Only `y` is integrated; horizontal motion comes straight from input
    pub velocity: Vector3<f32>,

    /// Landed on a block during the most recent vertical resolution
    pub grounded: bool,

    /// Block placed by the next secondary click
    pub active_block: BlockKind,

    /// Resolved position at the end of the previous frame
    pub previous_position: Point3<f32>,
}
