//! Input data structures - Pure DOP
//!
//! The host fills these from whatever windowing layer it uses; the sandbox
//! only ever asks which actions are held.

use std::collections::HashSet;

/// Abstract action the player can hold down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    Jump,
    /// Number key 1..=9, mapped onto the block palette
    SelectBlock(u8),
}

/// Mouse button that triggered a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button: remove the targeted block
    Primary,
    /// Right button: place the active block
    Secondary,
    Other(u16),
}

/// Snapshot of input for one frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Currently held actions
    pub held: HashSet<Action>,

    /// Whether the host has captured the pointer
    pub pointer_locked: bool,

    /// Pointer movement since the last frame, in pixels (x, y)
    pub look_delta: (f64, f64),

    /// Pointer position in normalized device coordinates; `None` means
    /// screen center, which is always the case while locked
    pub pointer_ndc: Option<[f32; 2]>,
}
