//! HUD projection
//!
//! Read-only view of player state for an overlay: the selected block and a
//! fixed controls legend.

use crate::world::core::{BlockKind, RenderData};

pub const CONTROLS_LEGEND: [&str; 6] = [
    "W, A, S, D - Move",
    "Space - Jump",
    "Left Click - Destroy Block",
    "Right Click - Place Block",
    "1-6 - Select Block",
    "Click to Lock/Unlock Pointer",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudState {
    pub active_block: BlockKind,
    /// Swatch color and texture for the selection indicator
    pub active_render: RenderData,
    pub legend: &'static [&'static str],
    pub pointer_locked: bool,
}

pub fn build_hud(active_block: BlockKind, pointer_locked: bool) -> HudState {
    HudState {
        active_block,
        active_render: active_block.render_data(),
        legend: &CONTROLS_LEGEND,
        pointer_locked,
    }
}
