/// CameraUniform: camera matrices laid out for a GPU uniform buffer.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Column-major camera block (std140/std430 compatible, 208 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_projection: [[f32; 4]; 4],
    /// World-space eye position, w = 1
    pub position: [f32; 4],
}

impl CameraUniform {
    pub fn new(view: &Mat4, projection: &Mat4, position: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_projection: (*projection * *view).to_cols_array_2d(),
            position: position.extend(1.0).to_array(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
