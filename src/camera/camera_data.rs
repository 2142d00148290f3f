//! Camera data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in camera_operations.rs

use crate::constants::interaction::{FAR_PLANE, FOV_DEGREES, LOOK_SENSITIVITY, NEAR_PLANE};
use cgmath::{Matrix4, Point3};

/// First-person camera - pure data, no methods
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraData {
    /// Eye position in world space; mirrors the player position
    pub position: Point3<f32>,

    /// Heading in radians about +Y; zero looks down +X
    pub yaw_radians: f32,

    /// Radians above the horizon, clamped short of vertical
    pub pitch_radians: f32,

    /// Vertical field of view in radians
    pub fov_radians: f32,

    pub aspect_ratio: f32,
    pub near_plane: f32,
    pub far_plane: f32,

    /// Rotation sensitivity (radians per pixel)
    pub look_sensitivity: f32,
}

/// Per-frame camera block for a renderer's uniform buffer.
/// Every field is 16-byte aligned so the struct maps onto std140 as is.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_matrix: [[f32; 4]; 4],
    pub projection_matrix: [[f32; 4]; 4],

    /// `projection * view`, column-major like the others
    pub view_projection_matrix: [[f32; 4]; 4],

    /// xyz eye position, w = 1
    pub camera_position: [f32; 4],

    /// xyz view direction, w = 0
    pub camera_forward: [f32; 4],

    /// x = near plane, y = far plane
    pub planes: [f32; 4],
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 0.0),
            // Face +Z on spawn
            yaw_radians: std::f32::consts::FRAC_PI_2,
            pitch_radians: 0.0,
            fov_radians: FOV_DEGREES.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            near_plane: NEAR_PLANE,
            far_plane: FAR_PLANE,
            look_sensitivity: LOOK_SENSITIVITY,
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_matrix: Matrix4::from_scale(1.0).into(),
            projection_matrix: Matrix4::from_scale(1.0).into(),
            view_projection_matrix: Matrix4::from_scale(1.0).into(),
            camera_position: [0.0, 0.0, 0.0, 1.0],
            camera_forward: [0.0, 0.0, 1.0, 0.0],
            planes: [NEAR_PLANE, FAR_PLANE, 0.0, 0.0],
        }
    }
}
