use serde::{Deserialize, Serialize};
use std::fmt;

/// Material of a single block. Position is implicit in the world map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Grass,
    Dirt,
    Stone,
    Wood,
    Sand,
    /// Drawn translucent; no swimming physics
    Water,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Grass => write!(f, "Grass"),
            BlockKind::Dirt => write!(f, "Dirt"),
            BlockKind::Stone => write!(f, "Stone"),
            BlockKind::Wood => write!(f, "Wood"),
            BlockKind::Sand => write!(f, "Sand"),
            BlockKind::Water => write!(f, "Water"),
        }
    }
}

impl BlockKind {
    /// Every variant in declaration order. Number keys select from this list.
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Grass,
        BlockKind::Dirt,
        BlockKind::Stone,
        BlockKind::Wood,
        BlockKind::Sand,
        BlockKind::Water,
    ];

    pub const fn count() -> usize {
        Self::ALL.len()
    }

    /// Position of this variant in `ALL`
    pub fn index(self) -> usize {
        match self {
            BlockKind::Grass => 0,
            BlockKind::Dirt => 1,
            BlockKind::Stone => 2,
            BlockKind::Wood => 3,
            BlockKind::Sand => 4,
            BlockKind::Water => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<BlockKind> {
        Self::ALL.get(index).copied()
    }

    /// Map a 1-based selection digit to the Nth declared variant
    pub fn from_selection_digit(digit: u8) -> Option<BlockKind> {
        if digit == 0 {
            return None;
        }
        Self::from_index(digit as usize - 1)
    }

    pub fn is_translucent(self) -> bool {
        matches!(self, BlockKind::Water)
    }

    /// Visual description consumed by the renderer
    pub fn render_data(self) -> RenderData {
        let (color, texture_key) = match self {
            BlockKind::Grass => (hex_color(0x558B2F), "grass"),
            BlockKind::Dirt => (hex_color(0x8B4513), "dirt"),
            BlockKind::Stone => (hex_color(0x808080), "stone"),
            BlockKind::Wood => (hex_color(0x8B4513), "wood"),
            BlockKind::Sand => (hex_color(0xF4A460), "sand"),
            BlockKind::Water => (hex_color(0x4682B4), "water"),
        };

        RenderData {
            color,
            texture_key,
            opacity: if self.is_translucent() { 0.7 } else { 1.0 },
        }
    }
}

/// Data needed to render a block. `color` is the flat fallback used when
/// the texture named by `texture_key` is unavailable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderData {
    pub color: [f32; 3],
    pub texture_key: &'static str,
    pub opacity: f32,
}

fn hex_color(rgb: u32) -> [f32; 3] {
    [
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
    ]
}
