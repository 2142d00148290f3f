/// World Error Handling
///
/// Reasons a world edit was turned away. Callers in the session treat every
/// one of these as a silent no-op; they exist so tests and logs can tell
/// the cases apart.
use super::core::VoxelPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditRejection {
    #[error("Position {0} is outside the world")]
    OutOfBounds(VoxelPos),

    #[error("Position {0} is already occupied")]
    Occupied(VoxelPos),

    #[error("No block at {0}")]
    Empty(VoxelPos),

    #[error("Block at {0} would overlap the player")]
    OverlapsPlayer(VoxelPos),
}

impl EditRejection {
    pub fn position(&self) -> VoxelPos {
        match *self {
            EditRejection::OutOfBounds(pos)
            | EditRejection::Occupied(pos)
            | EditRejection::Empty(pos)
            | EditRejection::OverlapsPlayer(pos) => pos,
        }
    }
}
