//! Sandbox configuration
//!
//! Every tunable lives in one `SandboxConfig`, split into TOML sections.
//! Missing sections and fields fall back to the values in `constants`.
//!
//! ```toml
//! [world]
//! width = 32
//! seed = 7
//!
//! [physics]
//! gravity = -20.0
//! ```

use crate::constants::{interaction, physics, player, world};
use crate::error::{SandboxError, SandboxResult};
use crate::physics::PlayerBody;
use crate::world::core::BlockKind;
use crate::world::data_types::WorldDimensions;
use cgmath::Point3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid extent and terrain seed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    /// Fixed seed for terrain; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: world::WORLD_WIDTH,
            height: world::WORLD_HEIGHT,
            depth: world::WORLD_DEPTH,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub height: f32,
    pub radius: f32,
    pub speed: f32,
    pub jump_velocity: f32,
    pub spawn: [f32; 3],
    pub initial_block: BlockKind,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            height: player::PLAYER_HEIGHT,
            radius: player::PLAYER_RADIUS,
            speed: player::PLAYER_SPEED,
            jump_velocity: player::JUMP_VELOCITY,
            spawn: player::INITIAL_PLAYER_POSITION,
            initial_block: player::INITIAL_ACTIVE_BLOCK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub contact_epsilon: f32,
    pub max_frame_delta: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: physics::GRAVITY,
            terminal_velocity: physics::TERMINAL_VELOCITY,
            contact_epsilon: physics::CONTACT_EPSILON,
            max_frame_delta: physics::MAX_FRAME_DELTA,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Max distance for block targeting
    pub reach: f32,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            reach: interaction::RAYCAST_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    pub look_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: interaction::FOV_DEGREES,
            near_plane: interaction::NEAR_PLANE,
            far_plane: interaction::FAR_PLANE,
            look_sensitivity: interaction::LOOK_SENSITIVITY,
        }
    }
}

/// Full sandbox configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub world: WorldSettings,
    pub player: PlayerSettings,
    pub physics: PhysicsSettings,
    pub interaction: InteractionSettings,
    pub camera: CameraSettings,
}

impl SandboxConfig {
    /// Parse TOML without validating
    pub fn from_toml_str(source: &str) -> SandboxResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read, parse and validate a config file
    pub fn load(path: impl AsRef<Path>) -> SandboxResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let source = std::fs::read_to_string(path).map_err(|e| SandboxError::ConfigIo {
            path: display.clone(),
            error: e.to_string(),
        })?;
        let config: SandboxConfig = toml::from_str(&source).map_err(|e| SandboxError::ConfigParse {
            path: display.clone(),
            error: e.to_string(),
        })?;
        config.validate()?;

        log::info!("[Config] Loaded {}", display);
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> SandboxResult<()> {
        let world_settings = &self.world;
        for (field, value) in [
            ("world.width", world_settings.width),
            ("world.height", world_settings.height),
            ("world.depth", world_settings.depth),
        ] {
            if value == 0 {
                return Err(SandboxError::invalid_config(field, value, "cannot be 0"));
            }
        }
        let cells = self.dimensions().cell_count();
        if cells > world::MAX_WORLD_CELLS {
            return Err(SandboxError::invalid_config(
                "world",
                format!(
                    "{}x{}x{}",
                    world_settings.width, world_settings.height, world_settings.depth
                ),
                format!("{} cells exceeds the limit of {}", cells, world::MAX_WORLD_CELLS),
            ));
        }

        let player = &self.player;
        positive("player.height", player.height)?;
        positive("player.radius", player.radius)?;
        // Radius 0.5 or more could never fit through a one-block gap
        if player.radius >= 0.5 {
            return Err(SandboxError::invalid_config(
                "player.radius",
                player.radius,
                "must be below half a block",
            ));
        }
        non_negative("player.speed", player.speed)?;
        non_negative("player.jump_velocity", player.jump_velocity)?;
        if player.spawn.iter().any(|v| !v.is_finite()) {
            return Err(SandboxError::invalid_config(
                "player.spawn",
                format!("{:?}", player.spawn),
                "must be finite",
            ));
        }
        let extents = [world_settings.width, world_settings.height, world_settings.depth];
        let outside = player
            .spawn
            .iter()
            .zip(extents)
            .any(|(v, extent)| *v < -world::SPAWN_MARGIN || *v > extent as f32 + world::SPAWN_MARGIN);
        if outside {
            return Err(SandboxError::invalid_config(
                "player.spawn",
                format!("{:?}", player.spawn),
                format!("must lie within {} blocks of the world", world::SPAWN_MARGIN),
            ));
        }

        let physics = &self.physics;
        if !physics.gravity.is_finite() || physics.gravity >= 0.0 {
            return Err(SandboxError::invalid_config(
                "physics.gravity",
                physics.gravity,
                "must be negative",
            ));
        }
        if !physics.terminal_velocity.is_finite() || physics.terminal_velocity >= 0.0 {
            return Err(SandboxError::invalid_config(
                "physics.terminal_velocity",
                physics.terminal_velocity,
                "must be negative",
            ));
        }
        non_negative("physics.contact_epsilon", physics.contact_epsilon)?;
        positive("physics.max_frame_delta", physics.max_frame_delta)?;

        positive("interaction.reach", self.interaction.reach)?;
        if self.interaction.reach > interaction::MAX_REACH {
            return Err(SandboxError::invalid_config(
                "interaction.reach",
                self.interaction.reach,
                format!("cannot exceed {}", interaction::MAX_REACH),
            ));
        }

        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(SandboxError::invalid_config(
                "camera.fov_degrees",
                camera.fov_degrees,
                "must be in (0, 180)",
            ));
        }
        positive("camera.near_plane", camera.near_plane)?;
        if !(camera.far_plane > camera.near_plane) {
            return Err(SandboxError::invalid_config(
                "camera.far_plane",
                camera.far_plane,
                "must exceed near_plane",
            ));
        }
        positive("camera.look_sensitivity", camera.look_sensitivity)?;

        log::debug!("[Config] Configuration validated successfully");
        Ok(())
    }

    pub fn dimensions(&self) -> WorldDimensions {
        WorldDimensions {
            width: self.world.width,
            height: self.world.height,
            depth: self.world.depth,
        }
    }

    pub fn player_body(&self) -> PlayerBody {
        PlayerBody {
            radius: self.player.radius,
            height: self.player.height,
        }
    }

    pub fn spawn_position(&self) -> Point3<f32> {
        let [x, y, z] = self.player.spawn;
        Point3::new(x, y, z)
    }
}

fn positive(field: &str, value: f32) -> SandboxResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SandboxError::invalid_config(field, value, "must be positive"))
    }
}

fn non_negative(field: &str, value: f32) -> SandboxResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SandboxError::invalid_config(field, value, "cannot be negative"))
    }
}
