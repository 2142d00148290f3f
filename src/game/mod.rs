//! Game Module - Pure DOP Interface
//!
//! Everything between raw input and the world: targeting and validated
//! edits, the per-frame session loop, outbound events and the HUD view.

pub mod editor_operations;
pub mod event_data;
pub mod event_operations;
pub mod hud_data;
pub mod session;

pub use editor_operations::{add_block, placement_target, remove_block, removal_target, target_block};
pub use event_data::{EventQueue, SandboxEvent};
pub use event_operations::{drain_events, pending_count, push_event};
pub use hud_data::{build_hud, HudState, CONTROLS_LEGEND};
pub use session::SandboxSession;
