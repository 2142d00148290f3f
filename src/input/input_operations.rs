//! Input operations - Pure DOP functions

use super::input_data::{Action, InputState};

/// Map a physical key code (`KeyboardEvent.code` naming) to an action
pub fn action_for_key_code(code: &str) -> Option<Action> {
    match code {
        "KeyW" => Some(Action::MoveForward),
        "KeyS" => Some(Action::MoveBackward),
        "KeyA" => Some(Action::MoveLeft),
        "KeyD" => Some(Action::MoveRight),
        "Space" => Some(Action::Jump),
        _ => code
            .strip_prefix("Digit")
            .and_then(|digit| digit.parse::<u8>().ok())
            .filter(|digit| (1..=9).contains(digit))
            .map(Action::SelectBlock),
    }
}

/// Record a key press; unknown keys are ignored
pub fn press_key(input: &mut InputState, code: &str) {
    if let Some(action) = action_for_key_code(code) {
        input.held.insert(action);
    }
}

pub fn release_key(input: &mut InputState, code: &str) {
    if let Some(action) = action_for_key_code(code) {
        input.held.remove(&action);
    }
}

pub fn contains(input: &InputState, action: Action) -> bool {
    input.held.contains(&action)
}

/// Lowest number key currently held, if any
pub fn selected_digit(input: &InputState) -> Option<u8> {
    input
        .held
        .iter()
        .filter_map(|action| match action {
            Action::SelectBlock(digit) => Some(*digit),
            _ => None,
        })
        .min()
}

/// Add raw pointer movement to the pending look delta
pub fn accumulate_look(input: &mut InputState, dx: f64, dy: f64) {
    input.look_delta.0 += dx;
    input.look_delta.1 += dy;
}

/// Take the pending look delta, leaving zero behind
pub fn take_look_delta(input: &mut InputState) -> (f64, f64) {
    std::mem::take(&mut input.look_delta)
}

/// Pointer position used for targeting: center while locked
pub fn targeting_ndc(input: &InputState) -> [f32; 2] {
    if input.pointer_locked {
        [0.0, 0.0]
    } else {
        input.pointer_ndc.unwrap_or([0.0, 0.0])
    }
}
