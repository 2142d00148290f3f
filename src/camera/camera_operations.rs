//! Camera operations - Pure DOP functions
//!
//! All functions are pure: they take data, return new data, no side effects.
//! No methods, no self, just transformations.

use super::camera_data::{CameraData, CameraUniform};
use crate::config::CameraSettings;
use crate::world::core::Ray;
use cgmath::{InnerSpace, Matrix4, Point3, Rad, Vector3};

/// Pitch stays just short of straight up/down to keep the view basis valid
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize camera with default settings
pub fn init_camera(position: Point3<f32>, yaw: f32, pitch: f32) -> CameraData {
    CameraData {
        position,
        yaw_radians: yaw,
        pitch_radians: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        ..Default::default()
    }
}

/// Initialize camera from config, placed at `position`
pub fn init_camera_from_settings(settings: &CameraSettings, position: Point3<f32>) -> CameraData {
    CameraData {
        position,
        fov_radians: settings.fov_degrees.to_radians(),
        near_plane: settings.near_plane,
        far_plane: settings.far_plane,
        look_sensitivity: settings.look_sensitivity,
        ..Default::default()
    }
}

// ============================================================================
// VIEW/PROJECTION MATRICES
// ============================================================================

/// Build view matrix from camera data
pub fn build_view_matrix(camera: &CameraData) -> Matrix4<f32> {
    let forward = calculate_forward_vector(camera.yaw_radians, camera.pitch_radians);
    let target = camera.position + forward;
    let up = Vector3::new(0.0, 1.0, 0.0);

    Matrix4::look_at_rh(camera.position, target, up)
}

/// Build projection matrix from camera data
pub fn build_projection_matrix(camera: &CameraData) -> Matrix4<f32> {
    cgmath::perspective(
        Rad(camera.fov_radians),
        camera.aspect_ratio,
        camera.near_plane,
        camera.far_plane,
    )
}

/// Build camera uniform for GPU
pub fn build_camera_uniform(camera: &CameraData) -> CameraUniform {
    let view_matrix = build_view_matrix(camera);
    let projection_matrix = build_projection_matrix(camera);
    let view_projection = projection_matrix * view_matrix;
    let forward = calculate_forward_vector(camera.yaw_radians, camera.pitch_radians);

    CameraUniform {
        view_matrix: view_matrix.into(),
        projection_matrix: projection_matrix.into(),
        view_projection_matrix: view_projection.into(),
        camera_position: [camera.position.x, camera.position.y, camera.position.z, 1.0],
        camera_forward: [forward.x, forward.y, forward.z, 0.0],
        planes: [camera.near_plane, camera.far_plane, 0.0, 0.0],
    }
}

// ============================================================================
// UPDATES
// ============================================================================

/// Update aspect ratio (e.g., on window resize)
pub fn update_aspect_ratio(camera: &CameraData, width: u32, height: u32) -> CameraData {
    let mut new_camera = *camera;
    if height > 0 {
        new_camera.aspect_ratio = width as f32 / height as f32;
    }
    new_camera
}

/// Place the eye at the player's resolved position. No smoothing.
pub fn follow(camera: &CameraData, position: Point3<f32>) -> CameraData {
    let mut new_camera = *camera;
    new_camera.position = position;
    new_camera
}

/// Rotate camera by yaw/pitch deltas (radians)
pub fn rotate(camera: &CameraData, yaw_delta: f32, pitch_delta: f32) -> CameraData {
    let mut new_camera = *camera;
    new_camera.yaw_radians =
        (new_camera.yaw_radians + yaw_delta).rem_euclid(std::f32::consts::TAU);
    new_camera.pitch_radians =
        (new_camera.pitch_radians + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    new_camera
}

/// Turn by a pointer movement in pixels: right turns right, down looks down
pub fn apply_look_delta(camera: &CameraData, dx: f64, dy: f64) -> CameraData {
    let sensitivity = camera.look_sensitivity;
    rotate(camera, dx as f32 * sensitivity, -(dy as f32) * sensitivity)
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Calculate forward vector from yaw and pitch
pub fn calculate_forward_vector(yaw: f32, pitch: f32) -> Vector3<f32> {
    Vector3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}

/// Calculate right vector from yaw (always horizontal)
pub fn calculate_right_vector(yaw: f32) -> Vector3<f32> {
    Vector3::new(-yaw.sin(), 0.0, yaw.cos())
}

/// Calculate up vector from yaw and pitch
pub fn calculate_up_vector(yaw: f32, pitch: f32) -> Vector3<f32> {
    let forward = calculate_forward_vector(yaw, pitch);
    let right = calculate_right_vector(yaw);
    right.cross(forward).normalize()
}

/// Facing projected onto the ground plane; walking ignores pitch
pub fn horizontal_forward_vector(yaw: f32) -> Vector3<f32> {
    Vector3::new(yaw.cos(), 0.0, yaw.sin())
}

/// Ray from the eye through a normalized screen position.
///
/// `ndc` is in [-1, 1] on both axes with +y up; `[0, 0]` is the
/// crosshair.
pub fn screen_ray(camera: &CameraData, ndc: [f32; 2]) -> Ray {
    let forward = calculate_forward_vector(camera.yaw_radians, camera.pitch_radians);
    let right = calculate_right_vector(camera.yaw_radians);
    let up = calculate_up_vector(camera.yaw_radians, camera.pitch_radians);

    let half_height = (camera.fov_radians / 2.0).tan();
    let half_width = half_height * camera.aspect_ratio;
    let direction = forward + right * (ndc[0] * half_width) + up * (ndc[1] * half_height);

    Ray::new(camera.position, direction)
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Log camera context for debugging
pub fn log_camera_context(camera: &CameraData) {
    log::debug!(
        "[Camera] Position: ({:.2}, {:.2}, {:.2}) | Yaw: {:.1}° | Pitch: {:.1}° | FOV: {:.1}°",
        camera.position.x,
        camera.position.y,
        camera.position.z,
        camera.yaw_radians.to_degrees(),
        camera.pitch_radians.to_degrees(),
        camera.fov_radians.to_degrees()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn test_default_faces_positive_z() {
        let camera = CameraData::default();
        let forward = calculate_forward_vector(camera.yaw_radians, camera.pitch_radians);
        assert!(approx(forward, Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_basis_is_right_handed() {
        let yaw = 0.7;
        let pitch = 0.3;
        let forward = calculate_forward_vector(yaw, pitch);
        let right = calculate_right_vector(yaw);
        let up = calculate_up_vector(yaw, pitch);

        assert!(forward.dot(right).abs() < 1e-5);
        assert!(up.y > 0.0);
        // Facing +X, right is +Z
        assert!(approx(calculate_right_vector(0.0), Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_pitch_is_clamped() {
        let camera = rotate(&CameraData::default(), 0.0, 10.0);
        assert_eq!(camera.pitch_radians, PITCH_LIMIT);
        let camera = rotate(&camera, 0.0, -20.0);
        assert_eq!(camera.pitch_radians, -PITCH_LIMIT);
    }

    #[test]
    fn test_look_delta_turns_right_and_down() {
        let camera = CameraData::default();
        let turned = apply_look_delta(&camera, 100.0, 50.0);
        assert!(turned.yaw_radians > camera.yaw_radians);
        assert!(turned.pitch_radians < 0.0);
    }

    #[test]
    fn test_center_ray_is_forward() {
        let camera = init_camera(Point3::new(1.0, 2.0, 3.0), 0.0, -FRAC_PI_2 / 2.0);
        let ray = screen_ray(&camera, [0.0, 0.0]);
        let forward = calculate_forward_vector(camera.yaw_radians, camera.pitch_radians);

        assert_eq!(ray.origin, camera.position);
        assert!(approx(ray.direction, forward));
    }

    #[test]
    fn test_offset_ray_leans_right() {
        let camera = init_camera(Point3::new(0.0, 0.0, 0.0), 0.0, 0.0);
        let ray = screen_ray(&camera, [1.0, 0.0]);
        assert!(ray.direction.z > 0.0);
        assert!(ray.direction.x > 0.0);
    }

    #[test]
    fn test_uniform_is_pod() {
        let uniform = build_camera_uniform(&CameraData::default());
        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), std::mem::size_of::<CameraUniform>());
    }
}
