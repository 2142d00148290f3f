//! Render instance data - Pure DOP
//!
//! What a renderer needs to draw the world as instanced unit cubes.

/// One cube to draw. Laid out for direct upload as a vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlockInstance {
    /// Cube center in world space
    pub position: [f32; 3],
    /// RGB plus opacity in alpha
    pub color: [f32; 4],
}

/// Instances built for one world revision
#[derive(Debug, Clone, Default)]
pub struct InstanceCache {
    /// Revision the instances were built from; `None` before the first build
    pub revision: Option<u64>,
    pub instances: Vec<BlockInstance>,
}
