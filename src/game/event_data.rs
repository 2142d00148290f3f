//! Game Event Data - outbound notification queue
//!
//! The session pushes an event for everything a host might react to
//! (re-mesh, play a sound, redraw the HUD). Hosts drain the queue once per
//! frame.
//!
//! Pure DOP: No methods, just data structures.

use crate::constants::events::MAX_PENDING_EVENTS;
use crate::world::core::{BlockKind, VoxelPos};
use std::collections::VecDeque;

/// Something that happened in the sandbox this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SandboxEvent {
    /// A block was added by the player
    BlockPlaced { position: VoxelPos, block: BlockKind },

    /// A block was removed by the player
    BlockRemoved { position: VoxelPos, block: BlockKind },

    /// Number key changed the block that will be placed next
    ActiveBlockChanged(BlockKind),

    /// Control lock entered; movement and look are live
    PointerLocked,

    /// Control lock released by the host
    PointerUnlocked,
}

/// Bounded FIFO of pending events
#[derive(Debug, Clone)]
pub struct EventQueue {
    pub pending: VecDeque<SandboxEvent>,
    pub capacity: usize,
    /// Events discarded because the host stopped draining
    pub dropped: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            pending: VecDeque::with_capacity(64),
            capacity: MAX_PENDING_EVENTS,
            dropped: 0,
        }
    }
}
