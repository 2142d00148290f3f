/// Camera Module - Data-Oriented Programming (DOP) style
///
/// This module follows pure DOP principles:
/// - camera_data.rs: Pure data structures with NO methods
/// - camera_operations.rs: Pure functions that operate on data

pub mod camera_data;
pub mod camera_operations;

// Re-export data structures
pub use camera_data::{CameraData, CameraUniform};

// Re-export all operations
pub use camera_operations::{
    // Initialization
    init_camera,
    init_camera_from_settings,

    // View/projection
    build_view_matrix,
    build_projection_matrix,
    build_camera_uniform,

    // Updates
    update_aspect_ratio,
    follow,
    rotate,
    apply_look_delta,

    // Utilities
    calculate_forward_vector,
    calculate_right_vector,
    calculate_up_vector,
    horizontal_forward_vector,
    screen_ray,

    // Diagnostics
    log_camera_context,
};
