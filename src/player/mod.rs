/// Player Module - Data-Oriented Programming (DOP) style
///
/// - player_data.rs: PlayerData, no methods
/// - player_operations.rs: the per-frame controller

pub mod player_data;
pub mod player_operations;

pub use player_data::PlayerData;
pub use player_operations::{
    clamp_frame_delta, init_player, movement_direction, player_bounds, set_active_block,
    step_player,
};
