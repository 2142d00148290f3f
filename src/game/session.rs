//! Sandbox session - the per-frame loop
//!
//! Owns the world, the player and the camera for one play session. The host
//! calls `frame` once per rendered frame and `click` on mouse presses, then
//! drains events to learn what changed.
//!
//! The world sits behind a `parking_lot::RwLock` so a renderer thread can
//! read it; the session is the only writer and takes the write lock only
//! for the single edit a click produces.

use super::editor_operations::{add_block, placement_target, remove_block, removal_target, target_block};
use super::event_data::{EventQueue, SandboxEvent};
use super::event_operations::{drain_events, push_event};
use super::hud_data::{build_hud, HudState};
use crate::camera::{
    apply_look_delta, follow, init_camera_from_settings, log_camera_context, update_aspect_ratio, CameraData,
};
use crate::config::SandboxConfig;
use crate::error::SandboxResult;
use crate::input::{selected_digit, take_look_delta, targeting_ndc, InputState, MouseButton};
use crate::player::{init_player, player_bounds, set_active_block, step_player, PlayerData};
use crate::world::core::BlockKind;
use crate::world::data_types::{create_shared_world, SharedWorld, VoxelWorld};
use crate::world::generation::{generate_initial_world, generate_seeded_world};
use crate::world::world_operations::{log_world_stats, WorldModification};

pub struct SandboxSession {
    config: SandboxConfig,
    world: SharedWorld,
    player: PlayerData,
    camera: CameraData,
    events: EventQueue,
    pointer_locked: bool,
}

impl SandboxSession {
    /// Start a session on freshly generated terrain
    pub fn new(config: SandboxConfig) -> SandboxResult<Self> {
        config.validate()?;

        let dimensions = config.dimensions();
        let world = match config.world.seed {
            Some(seed) => generate_seeded_world(dimensions, seed),
            None => generate_initial_world(dimensions, &mut rand::thread_rng()),
        };
        Self::with_world(config, world)
    }

    /// Start a session on an existing world
    pub fn with_world(config: SandboxConfig, world: VoxelWorld) -> SandboxResult<Self> {
        config.validate()?;

        let player = init_player(&config);
        let camera = init_camera_from_settings(&config.camera, player.position);

        log_world_stats(&world);
        log::info!(
            "[Session] Started with player at ({:.2}, {:.2}, {:.2})",
            player.position.x,
            player.position.y,
            player.position.z
        );

        Ok(Self {
            config,
            world: create_shared_world(world),
            player,
            camera,
            events: EventQueue::default(),
            pointer_locked: false,
        })
    }

    // ========================================================================
    // FRAME LOOP
    // ========================================================================

    /// Advance one frame.
    ///
    /// Block selection applies whether or not control is locked. While
    /// unlocked, pointer movement is discarded and nothing else happens.
    /// Otherwise: look, player physics, camera follow.
    pub fn frame(&mut self, input: &mut InputState, dt: f32) {
        input.pointer_locked = self.pointer_locked;
        let look = take_look_delta(input);

        if let Some(block) = selected_digit(input).and_then(BlockKind::from_selection_digit) {
            if set_active_block(&mut self.player, block) {
                log::debug!("[Session] Active block is now {}", block);
                push_event(&mut self.events, SandboxEvent::ActiveBlockChanged(block));
            }
        }

        if !self.pointer_locked {
            return;
        }

        if look != (0.0, 0.0) {
            self.camera = apply_look_delta(&self.camera, look.0, look.1);
            log_camera_context(&self.camera);
        }

        {
            let world = self.world.read();
            step_player(
                &mut self.player,
                &world,
                input,
                self.camera.yaw_radians,
                dt,
                &self.config,
            );
        }

        self.camera = follow(&self.camera, self.player.position);
    }

    /// Handle a mouse press.
    ///
    /// The first press while unlocked only takes the lock. After that the
    /// primary button removes the targeted block and the secondary button
    /// places the active block against the targeted face. Rejected edits
    /// and misses change nothing.
    pub fn click(&mut self, button: MouseButton, input: &mut InputState) -> Option<WorldModification> {
        if !self.pointer_locked {
            self.pointer_locked = true;
            input.pointer_locked = true;
            log::info!("[Session] Pointer locked");
            push_event(&mut self.events, SandboxEvent::PointerLocked);
            return None;
        }
        input.pointer_locked = true;

        let removing = match button {
            MouseButton::Primary => true,
            MouseButton::Secondary => false,
            MouseButton::Other(_) => return None,
        };

        let ndc = targeting_ndc(input);
        let reach = self.config.interaction.reach;
        let player_box = player_bounds(&self.player, &self.config);

        let mut world = self.world.write();
        let hit = target_block(&world, &self.camera, ndc, reach)?;

        let result = if removing {
            remove_block(&mut world, removal_target(&hit))
        } else {
            add_block(
                &mut world,
                placement_target(&hit),
                self.player.active_block,
                &player_box,
            )
        };
        drop(world);

        match result {
            Ok(modification) => {
                let event = match (modification.new_block, modification.old_block) {
                    (Some(block), _) => SandboxEvent::BlockPlaced {
                        position: modification.position,
                        block,
                    },
                    (None, Some(block)) => SandboxEvent::BlockRemoved {
                        position: modification.position,
                        block,
                    },
                    (None, None) => return Some(modification),
                };
                push_event(&mut self.events, event);
                Some(modification)
            }
            Err(rejection) => {
                log::debug!("[Editor] Rejected edit: {}", rejection);
                None
            }
        }
    }

    /// Release control lock, e.g. when the host loses pointer capture
    pub fn unlock(&mut self) {
        if self.pointer_locked {
            self.pointer_locked = false;
            log::info!("[Session] Pointer unlocked");
            push_event(&mut self.events, SandboxEvent::PointerUnlocked);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera = update_aspect_ratio(&self.camera, width, height);
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn drain_events(&mut self) -> Vec<SandboxEvent> {
        drain_events(&mut self.events)
    }

    pub fn hud(&self) -> HudState {
        build_hud(self.player.active_block, self.pointer_locked)
    }

    pub fn player(&self) -> &PlayerData {
        &self.player
    }

    pub fn camera(&self) -> &CameraData {
        &self.camera
    }

    /// Handle to the shared world for readers such as a renderer
    pub fn world(&self) -> SharedWorld {
        SharedWorld::clone(&self.world)
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn is_pointer_locked(&self) -> bool {
        self.pointer_locked
    }
}
