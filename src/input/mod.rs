/// Input Module - Data-Oriented Programming (DOP) style
///
/// - input_data.rs: actions, buttons and the per-frame input snapshot
/// - input_operations.rs: key mapping and queries

pub mod input_data;
pub mod input_operations;

pub use input_data::{Action, InputState, MouseButton};
pub use input_operations::{
    accumulate_look, action_for_key_code, contains, press_key, release_key, selected_digit,
    take_look_delta, targeting_ndc,
};
